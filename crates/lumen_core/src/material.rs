//! Phong material coefficients.

use lumen_math::Coeffs;

/// Per-surface lighting coefficients.
///
/// Defaults are neutral: full ambient response, no diffuse, specular,
/// reflection or transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient response (kA)
    pub ka: Coeffs,
    /// Diffuse response (kD)
    pub kd: Coeffs,
    /// Specular response (kS)
    pub ks: Coeffs,
    /// Reflection coefficient (kR)
    pub kr: Coeffs,
    /// Transmission / transparency coefficient (kT)
    pub kt: Coeffs,
    /// Phong shininess exponent
    pub shininess: i32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ka: Coeffs::ONE,
            kd: Coeffs::ZERO,
            ks: Coeffs::ZERO,
            kr: Coeffs::ZERO,
            kt: Coeffs::ZERO,
            shininess: 0,
        }
    }
}

impl Material {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ka(mut self, ka: Coeffs) -> Self {
        self.ka = ka;
        self
    }

    pub fn with_kd(mut self, kd: Coeffs) -> Self {
        self.kd = kd;
        self
    }

    pub fn with_ks(mut self, ks: Coeffs) -> Self {
        self.ks = ks;
        self
    }

    pub fn with_kr(mut self, kr: Coeffs) -> Self {
        self.kr = kr;
        self
    }

    pub fn with_kt(mut self, kt: Coeffs) -> Self {
        self.kt = kt;
        self
    }

    /// Set the same ambient coefficient on every channel.
    pub fn with_ka_scalar(self, ka: f64) -> Self {
        self.with_ka(Coeffs::splat(ka))
    }

    pub fn with_kd_scalar(self, kd: f64) -> Self {
        self.with_kd(Coeffs::splat(kd))
    }

    pub fn with_ks_scalar(self, ks: f64) -> Self {
        self.with_ks(Coeffs::splat(ks))
    }

    pub fn with_kr_scalar(self, kr: f64) -> Self {
        self.with_kr(Coeffs::splat(kr))
    }

    pub fn with_kt_scalar(self, kt: f64) -> Self {
        self.with_kt(Coeffs::splat(kt))
    }

    pub fn with_shininess(mut self, shininess: i32) -> Self {
        self.shininess = shininess;
        self
    }
}
