use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::animation::angles::{frame_angles, rotation_angle_deg, step_deg, validate_frame_count};
use crate::animation::model::{Animation, Frame, LoopMode};
use crate::assets::decode::{SourceImage, load_source_image};
use crate::effects::composite::{flatten_image, has_transparency};
use crate::encode::frames::{CleanupChoice, remove_frame_files, write_frame_file};
use crate::encode::gif::{GifConfig, ensure_parent_dir, write_gif};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{RadarError, RadarResult};
use crate::transform::rotate::{RotateMethod, rotate_image};

/// Angles written by [`write_test_rotations`].
pub const TEST_ANGLES: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

/// Inputs of the bitmap spin.
#[derive(Clone, Debug)]
pub struct RotateConfig {
    /// Source raster image.
    pub input: PathBuf,
    /// GIF destination.
    pub output: PathBuf,
    /// Number of evenly spaced rotation steps in one turn.
    pub frame_count: u32,
    /// How each frame is rotated.
    pub method: RotateMethod,
    /// Directory receiving the numbered frame PNGs.
    pub frame_dir: PathBuf,
    /// Overrides the method's default frame file prefix.
    pub frame_prefix: Option<String>,
    /// Display time of every frame.
    pub delay_ms: u32,
    /// Repeat behaviour written to the GIF.
    pub loop_mode: LoopMode,
    /// Quantizer speed, see [`GifConfig::speed`].
    pub gif_speed: i32,
}

impl RotateConfig {
    /// Frame count used when none is given.
    pub const DEFAULT_FRAME_COUNT: u32 = 20;

    /// Resample rotation with default timing, frames in the working directory.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            frame_count: Self::DEFAULT_FRAME_COUNT,
            method: RotateMethod::default(),
            frame_dir: PathBuf::from("."),
            frame_prefix: None,
            delay_ms: Animation::DEFAULT_DELAY_MS,
            loop_mode: LoopMode::Infinite,
            gif_speed: GifConfig::DEFAULT_SPEED,
        }
    }

    /// File name prefix for the numbered frames.
    pub fn prefix(&self) -> &str {
        self.frame_prefix
            .as_deref()
            .unwrap_or_else(|| self.method.frame_prefix())
    }
}

/// What [`render_rotation`] wrote, plus the numbers shown in the summary.
#[derive(Clone, Debug)]
pub struct RotationReport {
    /// GIF path.
    pub output: PathBuf,
    /// Numbered frame PNGs in index order.
    pub frame_paths: Vec<PathBuf>,
    /// Frames encoded.
    pub frame_count: u32,
    /// Rotation between consecutive frames.
    pub step_deg: f64,
    /// Playback rate.
    pub fps: f64,
    /// Playback time of one turn.
    pub loop_duration: Duration,
}

impl RotationReport {
    /// Apply the answer to the cleanup prompt; returns how many frame files were removed.
    pub fn cleanup(&self, choice: CleanupChoice) -> RadarResult<usize> {
        match choice {
            CleanupChoice::Delete => remove_frame_files(&self.frame_paths),
            CleanupChoice::Keep => Ok(0),
        }
    }
}

/// Exposed-border fill for a rotation of `src`.
///
/// The resample path fills transparent for images with alpha and white otherwise; the warp
/// path always uses a constant white border.
pub fn border_fill(src: &SourceImage, method: RotateMethod) -> Rgba8 {
    match method {
        RotateMethod::Resample if src.has_alpha => Rgba8::TRANSPARENT,
        RotateMethod::Resample | RotateMethod::AffineWarp => Rgba8::WHITE,
    }
}

/// Rotate `src` by `deg` and flatten any transparency onto white.
pub fn rotated_frame(
    src: &SourceImage,
    deg: f64,
    method: RotateMethod,
) -> RadarResult<image::RgbaImage> {
    let rotated = rotate_image(&src.rgba, deg, border_fill(src, method), method)?;
    if has_transparency(&rotated) {
        flatten_image(&rotated, Rgba8::WHITE)
    } else {
        Ok(rotated)
    }
}

/// Spin the input bitmap through `frame_count` evenly spaced angles, write every frame as a
/// numbered PNG, and encode the sequence into a looping GIF.
///
/// The input is decoded before anything is written, so an unreadable input leaves no files
/// behind.
#[tracing::instrument(skip(cfg), fields(input = %cfg.input.display(), frames = cfg.frame_count))]
pub fn render_rotation(cfg: &RotateConfig) -> RadarResult<RotationReport> {
    validate_frame_count(cfg.frame_count)?;
    let gif_cfg = GifConfig {
        speed: cfg.gif_speed,
        ..GifConfig::new(&cfg.output)
    };
    gif_cfg.validate()?;
    let mut anim = Animation::new(cfg.delay_ms, cfg.loop_mode)?;

    let src = load_source_image(&cfg.input)?;

    let mut frame_paths = Vec::with_capacity(cfg.frame_count as usize);
    for (index, angle_deg) in frame_angles(cfg.frame_count, rotation_angle_deg) {
        let frame = Frame {
            index,
            angle_deg,
            image: rotated_frame(&src, angle_deg, cfg.method)?,
        };
        frame_paths.push(write_frame_file(&cfg.frame_dir, cfg.prefix(), &frame)?);
        tracing::info!(
            "created rotated frame {}/{} (angle: {:.1}°)",
            index.0 + 1,
            cfg.frame_count,
            angle_deg
        );
        anim.push(frame)?;
    }

    write_gif(&anim, &gif_cfg)?;

    Ok(RotationReport {
        output: cfg.output.clone(),
        frame_paths,
        frame_count: cfg.frame_count,
        step_deg: step_deg(cfg.frame_count),
        fps: anim.fps(),
        loop_duration: anim.loop_duration(),
    })
}

/// Write `test_rotation_<angle>deg.png` for each of [`TEST_ANGLES`] using the warp path.
#[tracing::instrument]
pub fn write_test_rotations(input: &Path, out_dir: &Path) -> RadarResult<Vec<PathBuf>> {
    let src = load_source_image(input)?;
    let mut written = Vec::with_capacity(TEST_ANGLES.len());
    for deg in TEST_ANGLES {
        let img = rotated_frame(&src, deg, RotateMethod::AffineWarp)?;
        let path = out_dir.join(format!("test_rotation_{deg}deg.png"));
        ensure_parent_dir(&path)?;
        image::DynamicImage::ImageRgba8(img)
            .into_rgb8()
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| RadarError::encode(format!("write '{}': {e}", path.display())))?;
        tracing::info!(path = %path.display(), "saved test rotation");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/rotate.rs"]
mod tests;
