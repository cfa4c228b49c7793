//! Shader tuning knobs.

use serde::{Deserialize, Serialize};

/// Recursion and sampling limits for [`crate::SimpleRayTracer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerSettings {
    /// Maximum recursion depth for reflection and refraction (level 1 = local only)
    pub max_level: u32,
    /// Attenuation below which a contribution is dropped
    pub min_k: f64,
    /// Shadow-ray origin shift, also the tolerance for blocked soft-shadow samples
    pub delta: f64,
    /// Soft-shadow grid resolution per side
    pub soft_shadow_samples: u32,
}

impl Default for TracerSettings {
    fn default() -> Self {
        Self {
            max_level: 10,
            min_k: 0.001,
            delta: lumen_math::DELTA,
            soft_shadow_samples: 5,
        }
    }
}
