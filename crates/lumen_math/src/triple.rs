//! Three-channel values: colors and material coefficients.
//!
//! Both are plain `DVec3`s. Colors are on the 0-255 scale used by scene
//! descriptions and are never clamped here; clamping happens at image output.

use crate::util::is_zero;
use glam::DVec3;

/// RGB color, one non-negative real per channel.
pub type Color = DVec3;

/// Per-channel material coefficients (kA, kD, kS, kR, kT).
pub type Coeffs = DVec3;

/// Threshold comparisons used by the shader's attenuation cutoffs.
pub trait TripleExt {
    /// True if every channel is strictly below `k`.
    fn lower_than(&self, k: f64) -> bool;

    /// True if every channel is strictly above `k`.
    fn greater_than(&self, k: f64) -> bool;

    /// Channel-wise equality within [`crate::util::EPSILON`].
    fn approx_eq(&self, other: &Self) -> bool;
}

impl TripleExt for DVec3 {
    fn lower_than(&self, k: f64) -> bool {
        self.x < k && self.y < k && self.z < k
    }

    fn greater_than(&self, k: f64) -> bool {
        self.x > k && self.y > k && self.z > k
    }

    fn approx_eq(&self, other: &Self) -> bool {
        is_zero(self.x - other.x) && is_zero(self.y - other.y) && is_zero(self.z - other.z)
    }
}
