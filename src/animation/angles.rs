//! Frame index to angle mapping for the two pipelines.
//!
//! Both mappings give `angle(0) == 0` and evenly spaced, strictly increasing angles in
//! `[0, 360)`. They are written the way each pipeline states them; for integral inputs they
//! agree up to floating point rounding.

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{RadarError, RadarResult};

/// Rotation angle (degrees) for the bitmap pipeline: `i * 360 / n`.
pub fn rotation_angle_deg(index: FrameIndex, frame_count: u32) -> f64 {
    (f64::from(index.0) * 360.0) / f64::from(frame_count)
}

/// Sweep angle (degrees) for the procedural pipeline: `i / n * 360`.
pub fn sweep_angle_deg(index: FrameIndex, frame_count: u32) -> f64 {
    f64::from(index.0) / f64::from(frame_count) * 360.0
}

/// Degrees between consecutive frames.
pub fn step_deg(frame_count: u32) -> f64 {
    360.0 / f64::from(frame_count)
}

/// Reject a frame count of zero.
pub fn validate_frame_count(frame_count: u32) -> RadarResult<()> {
    if frame_count == 0 {
        return Err(RadarError::validation("frame count must be at least 1"));
    }
    Ok(())
}

/// Iterate `(index, angle)` pairs using `angle_fn` for every frame in `0..frame_count`.
pub fn frame_angles(
    frame_count: u32,
    angle_fn: fn(FrameIndex, u32) -> f64,
) -> impl Iterator<Item = (FrameIndex, f64)> {
    (0..frame_count).map(move |i| {
        let idx = FrameIndex(i);
        (idx, angle_fn(idx, frame_count))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/angles.rs"]
mod tests;
