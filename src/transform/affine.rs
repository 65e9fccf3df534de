//! Affine helpers for image-space rotation.
//!
//! Image space has y pointing down, so a visually counter-clockwise rotation by `deg` is a
//! kurbo rotation by `-deg`.

use crate::foundation::core::{Affine, Point};

/// 2x3 matrix that rotates image content counter-clockwise by `deg` about `center`,
/// mapping source coordinates to destination coordinates.
pub fn rotation_about(center: Point, deg: f64) -> Affine {
    Affine::rotate_about(-deg.to_radians(), center)
}

/// Destination-to-source mapping for inverse warping.
pub fn inverse_rotation_about(center: Point, deg: f64) -> Affine {
    rotation_about(center, deg).inverse()
}
