use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::animation::model::{Animation, LoopMode};
use crate::foundation::error::{RadarError, RadarResult};

/// Where and how [`write_gif`] encodes.
#[derive(Clone, Debug)]
pub struct GifConfig {
    /// Destination file; parent directories are created.
    pub out_path: PathBuf,
    /// NeuQuant sampling speed, 1 (best palette) to 30 (fastest).
    pub speed: i32,
}

impl GifConfig {
    /// Favours palette quality over encode time.
    pub const DEFAULT_SPEED: i32 = 5;

    /// Config with [`GifConfig::DEFAULT_SPEED`].
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            speed: Self::DEFAULT_SPEED,
        }
    }

    /// Reject speeds outside `1..=30`.
    pub fn validate(&self) -> RadarResult<()> {
        if !(1..=30).contains(&self.speed) {
            return Err(RadarError::validation(format!(
                "gif speed must be within 1..=30, got {}",
                self.speed
            )));
        }
        Ok(())
    }
}

/// Create `path`'s parent directory if it has one.
pub fn ensure_parent_dir(path: &Path) -> RadarResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Encode every frame of `anim` into one animated GIF at `cfg.out_path`.
#[tracing::instrument(skip(anim), fields(frames = anim.len()))]
pub fn write_gif(anim: &Animation, cfg: &GifConfig) -> RadarResult<()> {
    cfg.validate()?;
    if anim.is_empty() {
        return Err(RadarError::encode("cannot encode an animation with no frames"));
    }
    ensure_parent_dir(&cfg.out_path)?;

    let file = File::create(&cfg.out_path)
        .with_context(|| format!("create gif '{}'", cfg.out_path.display()))?;
    let mut writer = BufWriter::new(file);
    {
        // The encoder writes the trailer on drop; it must be gone before the flush below.
        let mut encoder = GifEncoder::new_with_speed(&mut writer, cfg.speed);
        let repeat = match anim.loop_mode {
            LoopMode::Infinite => Repeat::Infinite,
            LoopMode::Repeat(n) => Repeat::Finite(n),
        };
        encoder
            .set_repeat(repeat)
            .map_err(|e| RadarError::encode(format!("set gif repeat: {e}")))?;

        let delay = image::Delay::from_numer_denom_ms(anim.delay_ms, 1);
        for frame in anim.frames() {
            encoder
                .encode_frame(image::Frame::from_parts(frame.image.clone(), 0, 0, delay))
                .map_err(|e| {
                    RadarError::encode(format!("encode gif frame {}: {e}", frame.index.0))
                })?;
        }
    }
    writer
        .flush()
        .with_context(|| format!("flush gif '{}'", cfg.out_path.display()))?;

    tracing::info!(path = %cfg.out_path.display(), "wrote gif");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
