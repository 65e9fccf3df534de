use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;

use crate::animation::angles::{frame_angles, sweep_angle_deg, validate_frame_count};
use crate::animation::model::{Animation, Frame, LoopMode};
use crate::encode::gif::{GifConfig, ensure_parent_dir, write_gif};
use crate::foundation::error::RadarResult;
use crate::render::cpu::render_ops;
use crate::render::radar::{RadarStyle, radar_ops};
use crate::render::svg::{DEFAULT_SPIN_PERIOD, animated_svg, static_svg};

/// Inputs of the procedural sweep GIF.
#[derive(Clone, Debug)]
pub struct RadarConfig {
    /// Glyph geometry and colours.
    pub style: RadarStyle,
    /// Number of sweep positions in one turn.
    pub frame_count: u32,
    /// GIF destination.
    pub output: PathBuf,
    /// Display time of every frame.
    pub delay_ms: u32,
    /// Repeat behaviour written to the GIF.
    pub loop_mode: LoopMode,
    /// Quantizer speed, see [`GifConfig::speed`].
    pub gif_speed: i32,
}

impl RadarConfig {
    /// One frame per 10 degrees.
    pub const DEFAULT_FRAME_COUNT: u32 = 36;

    /// Default style and timing writing to `output`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            style: RadarStyle::default(),
            frame_count: Self::DEFAULT_FRAME_COUNT,
            output: output.into(),
            delay_ms: Animation::DEFAULT_DELAY_MS,
            loop_mode: LoopMode::Infinite,
            gif_speed: GifConfig::DEFAULT_SPEED,
        }
    }
}

/// What [`render_radar_gif`] wrote.
#[derive(Clone, Debug)]
pub struct RadarReport {
    /// GIF path.
    pub output: PathBuf,
    /// Frames encoded.
    pub frame_count: u32,
    /// Playback time of one turn.
    pub loop_duration: Duration,
}

/// Draw the radar glyph at `frame_count` evenly spaced pointer angles.
pub fn render_radar_frames(
    style: &RadarStyle,
    frame_count: u32,
    delay_ms: u32,
    loop_mode: LoopMode,
) -> RadarResult<Animation> {
    style.validate()?;
    validate_frame_count(frame_count)?;

    let mut anim = Animation::new(delay_ms, loop_mode)?;
    for (index, angle_deg) in frame_angles(frame_count, sweep_angle_deg) {
        let image = render_ops(style.canvas(), &radar_ops(style, angle_deg))?;
        tracing::debug!(frame = index.0, angle_deg, "drew radar frame");
        anim.push(Frame {
            index,
            angle_deg,
            image,
        })?;
    }
    Ok(anim)
}

/// Draw every sweep frame and encode them into a looping GIF.
#[tracing::instrument(skip(cfg), fields(out = %cfg.output.display(), frames = cfg.frame_count))]
pub fn render_radar_gif(cfg: &RadarConfig) -> RadarResult<RadarReport> {
    let gif_cfg = GifConfig {
        speed: cfg.gif_speed,
        ..GifConfig::new(&cfg.output)
    };
    gif_cfg.validate()?;

    let anim = render_radar_frames(&cfg.style, cfg.frame_count, cfg.delay_ms, cfg.loop_mode)?;
    write_gif(&anim, &gif_cfg)?;

    Ok(RadarReport {
        output: cfg.output.clone(),
        frame_count: cfg.frame_count,
        loop_duration: anim.loop_duration(),
    })
}

/// Which vector document to emit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SvgKind {
    /// One frame with the sweep fixed at the given angle.
    Static {
        /// Pointer angle in degrees.
        angle_deg: f64,
    },
    /// Continuous CSS rotation, one turn per period.
    Animated {
        /// Time for one full turn.
        period: Duration,
    },
}

impl Default for SvgKind {
    fn default() -> Self {
        Self::Animated {
            period: DEFAULT_SPIN_PERIOD,
        }
    }
}

/// Validate `style` and build the requested SVG document.
pub fn svg_markup(style: &RadarStyle, kind: SvgKind) -> RadarResult<String> {
    style.validate()?;
    Ok(match kind {
        SvgKind::Static { angle_deg } => static_svg(style, angle_deg),
        SvgKind::Animated { period } => animated_svg(style, period),
    })
}

/// Write the requested SVG document to `out`, creating parent directories.
#[tracing::instrument(skip(style))]
pub fn write_svg(style: &RadarStyle, kind: SvgKind, out: &std::path::Path) -> RadarResult<()> {
    let markup = svg_markup(style, kind)?;
    ensure_parent_dir(out)?;
    std::fs::write(out, markup).with_context(|| format!("write svg '{}'", out.display()))?;
    tracing::info!(path = %out.display(), "wrote svg");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/radar.rs"]
mod tests;
