use std::time::Duration;

use image::RgbaImage;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{RadarError, RadarResult};

/// One animation step: an opaque RGBA8 bitmap and the angle it was rendered at.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Position in the sequence.
    pub index: FrameIndex,
    /// Rotation the frame was rendered at, in degrees.
    pub angle_deg: f64,
    /// Pixels, straight alpha.
    pub image: RgbaImage,
}

/// How many times a player should repeat the sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Loop forever.
    #[default]
    Infinite,
    /// Play the sequence this many extra times after the first pass.
    Repeat(u16),
}

/// Ordered frames plus playback timing.
#[derive(Clone, Debug)]
pub struct Animation {
    frames: Vec<Frame>,
    /// Display time of every frame.
    pub delay_ms: u32,
    /// Repeat behaviour written to the GIF.
    pub loop_mode: LoopMode,
}

impl Animation {
    /// 100 ms per frame, i.e. 10 fps.
    pub const DEFAULT_DELAY_MS: u32 = 100;

    /// Empty animation; `delay_ms` must be non-zero.
    pub fn new(delay_ms: u32, loop_mode: LoopMode) -> RadarResult<Self> {
        if delay_ms == 0 {
            return Err(RadarError::validation("frame delay must be non-zero"));
        }
        Ok(Self {
            frames: Vec::new(),
            delay_ms,
            loop_mode,
        })
    }

    /// Append a frame; every frame must match the size of the first.
    pub fn push(&mut self, frame: Frame) -> RadarResult<()> {
        if let Some(first) = self.frames.first()
            && first.image.dimensions() != frame.image.dimensions()
        {
            let (w, h) = first.image.dimensions();
            let (fw, fh) = frame.image.dimensions();
            return Err(RadarError::validation(format!(
                "frame size mismatch: got {fw}x{fh}, expected {w}x{h}"
            )));
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Frames in playback order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Size shared by every frame, `None` while empty.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.frames.first().map(|f| f.image.dimensions())
    }

    /// Frames per second implied by the delay.
    pub fn fps(&self) -> f64 {
        1000.0 / f64::from(self.delay_ms)
    }

    /// Playback time of a single pass through all frames.
    pub fn loop_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.delay_ms) * self.frames.len() as u64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/model.rs"]
mod tests;
