//! Vector algebra for pointing geometry
//!
//! Pure `DVec3` math with no Earth model attached. Angles are radians.

use glam::DVec3;

/// Scale `v` to unit length. The zero vector is returned unchanged.
pub fn unit_vector(v: DVec3) -> DVec3 {
    let n = v.length();
    if n != 0.0 { v / n } else { v }
}

/// Angle between `v1` and `v2` in `[0, π]`.
///
/// A zero input gives a dot product of 0 and therefore `π/2`.
pub fn vector_angle(v1: DVec3, v2: DVec3) -> f64 {
    // Clamp: unit vectors can still dot to 1.0000000000000002
    unit_vector(v1)
        .dot(unit_vector(v2))
        .clamp(-1.0, 1.0)
        .acos()
}

/// Signed angle from `v1` to `v2` in the plane with normal `n`.
///
/// Positive is a clockwise rotation from `v1` to `v2` looking along `+n`,
/// negative counterclockwise. An exactly zero sign resolves to positive.
pub fn vector_angle_signed(v1: DVec3, v2: DVec3, n: DVec3) -> f64 {
    let s = v1.cross(v2).dot(n);
    let sign = if s < 0.0 { -1.0 } else { 1.0 };
    sign * vector_angle(v1, v2)
}

/// Component of `v` lying in the plane with normal `plane_normal`.
///
/// `plane_normal` must be non-zero.
pub fn project_vector_onto_plane(v: DVec3, plane_normal: DVec3) -> DVec3 {
    let d = v.dot(plane_normal) / plane_normal.dot(plane_normal);
    v - d * plane_normal
}

/// Rotate `v` about `axis` by `angle` radians (right-hand rule, Rodrigues).
pub fn rotate(v: DVec3, axis: DVec3, angle: f64) -> DVec3 {
    let k = unit_vector(axis);
    let (s, c) = angle.sin_cos();
    v * c + k.cross(v) * s + k * k.dot(v) * (1.0 - c)
}
