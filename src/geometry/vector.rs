use crate::error::{NavError, Result};
use nalgebra::Vector2;

/// Plain 2D vector used for displacements, directions and steering.
pub type Vector2D = Vector2<f32>;

const MIN_NORM: f32 = 1e-9;

/// Normalizes `v`, failing loudly on a zero-length input.
///
/// Callers special-case the legitimate zero cases (already centred, no
/// target) before calling this; reaching the error means a sequencing bug.
pub fn unit_vector(v: &Vector2D) -> Result<Vector2D> {
    v.try_normalize(MIN_NORM).ok_or(NavError::ZeroLengthVector)
}

/// Converts an image-space vector (y down) into the robot frame (y forward).
#[inline]
pub fn image_to_robot(v: &Vector2D) -> Vector2D {
    Vector2D::new(v.x, -v.y)
}
