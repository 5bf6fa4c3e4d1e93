//! Scalar and vector helpers used by the projection and rotation code.
//!
//! None of these validate their input: degenerate ranges produce NaN or
//! infinity and those values flow straight through to the draw calls.

use glam::DVec3;
use rand::Rng;

/// Uniform sample in `[min, max)`. Returns `min` when the range is empty.
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}

/// Affine remap of `n` from `[src_min, src_max]` onto `[dst_min, dst_max]`.
///
/// Unclamped: values outside the source range extrapolate linearly.
/// `src_min == src_max` is the caller's problem.
#[inline]
pub fn remap(n: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    let src_range = src_max - src_min;
    let dst_range = dst_max - dst_min;
    dst_min + (n - src_min) / src_range * dst_range
}

/// Two-sided clamp that tolerates inverted bounds (upper bound wins).
#[inline]
pub fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

/// Rotation in the (x, z) plane; y is unchanged.
#[inline]
pub fn rotate_x(p: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(p.x * cos - p.z * sin, p.y, p.x * sin + p.z * cos)
}

/// Rotation in the (y, z) plane; x is unchanged.
#[inline]
pub fn rotate_y(p: DVec3, angle: f64) -> DVec3 {
    let (sin, cos) = angle.sin_cos();
    DVec3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// X rotation first, then Y. Not commutative.
#[inline]
pub fn rotate(p: DVec3, angle_x: f64, angle_y: f64) -> DVec3 {
    rotate_y(rotate_x(p, angle_x), angle_y)
}

#[inline]
pub fn squared_distance(a: DVec3, b: DVec3) -> f64 {
    (a - b).length_squared()
}

#[inline]
pub fn distance(a: DVec3, b: DVec3) -> f64 {
    squared_distance(a, b).sqrt()
}
