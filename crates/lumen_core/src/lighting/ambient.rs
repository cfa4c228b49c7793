use lumen_math::{Coeffs, Color};

/// Constant light reaching every surface, with no position or direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    intensity: Color,
}

impl AmbientLight {
    /// No ambient light at all.
    pub const NONE: AmbientLight = AmbientLight {
        intensity: Color::ZERO,
    };

    pub fn new(intensity: Color) -> Self {
        Self { intensity }
    }

    /// Ambient light scaled by an attenuation factor.
    pub fn with_factor(intensity: Color, ka: Coeffs) -> Self {
        Self::new(intensity * ka)
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self::NONE
    }
}
