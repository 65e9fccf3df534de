/// Rotation matrices about a pivot.
pub mod affine;
pub(crate) mod rotate;
