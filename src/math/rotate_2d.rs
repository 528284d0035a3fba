use super::{Matrix2, Vector2};

/// Rotates a vector counter-clockwise about the origin by `angle` radians.
#[must_use]
pub fn rotate_2d(v: &Vector2, angle: f64) -> Vector2 {
    rotation_matrix(angle) * v
}

/// Builds the 2x2 counter-clockwise rotation matrix for `angle` radians.
#[must_use]
pub fn rotation_matrix(angle: f64) -> Matrix2 {
    let c = angle.cos();
    let s = angle.sin();
    Matrix2::new(c, -s, s, c)
}
