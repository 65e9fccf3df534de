//! radar-anim renders short looping animations of a rotating radar icon.
//!
//! Two independent pipelines share this crate:
//!
//! 1. **Bitmap spin** ([`render_rotation`]): decode a raster image, rotate it through N evenly
//!    spaced angles, flatten transparency onto white, write numbered frame PNGs and encode a
//!    looping GIF.
//! 2. **Procedural sweep** ([`render_radar_gif`], [`write_svg`]): draw a radar glyph (rings,
//!    90° sweep sector, pointer, blip) at N angles with vello_cpu and encode a looping GIF, or
//!    emit the same glyph as static / CSS-animated SVG.
//!
//! Everything runs single-threaded and synchronously; each call is one straight pass that
//! builds a frame list and then encodes it.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod effects;
mod encode;
mod foundation;
mod pipeline;
mod render;

/// Shared transform helpers (rotation matrices about a pivot).
pub mod transform;

pub use animation::angles::{
    frame_angles, rotation_angle_deg, step_deg, sweep_angle_deg, validate_frame_count,
};
pub use animation::model::{Animation, Frame, LoopMode};
pub use assets::decode::{SourceImage, decode_source_image, load_source_image};
pub use assets::svg_raster::{parse_svg, rasterize_svg};
pub use effects::composite::{flatten_image, flatten_to_opaque_rgba8, has_transparency};
pub use encode::frames::{
    CLEANUP_PROMPT, CleanupChoice, frame_file_name, prompt_cleanup, remove_frame_files,
    write_frame_file,
};
pub use encode::gif::{GifConfig, ensure_parent_dir, write_gif};
pub use foundation::core::{Affine, BezPath, Canvas, FrameIndex, Point, Rgba8, Vec2};
pub use foundation::error::{RadarError, RadarResult};
pub use foundation::math::normalize_degrees;
pub use pipeline::radar::{
    RadarConfig, RadarReport, SvgKind, render_radar_frames, render_radar_gif, svg_markup,
    write_svg,
};
pub use pipeline::rotate::{
    RotateConfig, RotationReport, TEST_ANGLES, border_fill, render_rotation, rotated_frame,
    write_test_rotations,
};
pub use render::cpu::{render_ops, sector_path};
pub use render::radar::{RadarOp, RadarStyle, SWEEP_SPAN_DEG, polar, radar_ops, sweep_span};
pub use render::svg::{DEFAULT_SPIN_PERIOD, animated_svg, static_svg};
pub use transform::rotate::{RotateMethod, rotate_image};
