//! Numeric tolerance helpers shared by every intersection routine.

/// Values closer to zero than this are treated as zero.
pub const EPSILON: f64 = 1e-10;

/// Returns true if `x` is numerically zero.
#[inline]
pub fn is_zero(x: f64) -> bool {
    x.abs() < EPSILON
}

/// Snaps numerically-zero values to exactly `0.0`.
#[inline]
pub fn align_zero(x: f64) -> f64 {
    if is_zero(x) {
        0.0
    } else {
        x
    }
}
