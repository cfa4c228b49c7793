use lumen_math::{Color, MathResult, Point, Vector};

/// An omnidirectional light with inverse-polynomial distance falloff.
///
/// The intensity at distance `d` is `I / (kC + kL*d + kQ*d^2)`. A positive
/// radius turns the light into a disk that is sampled for soft shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    intensity: Color,
    position: Point,
    kc: f64,
    kl: f64,
    kq: f64,
    radius: f64,
}

impl PointLight {
    /// Create a light with no falloff (`kC = 1`, `kL = kQ = 0`) and zero radius.
    pub fn new(intensity: Color, position: Point) -> Self {
        Self {
            intensity,
            position,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
            radius: 0.0,
        }
    }

    pub fn with_kc(mut self, kc: f64) -> Self {
        self.kc = kc;
        self
    }

    pub fn with_kl(mut self, kl: f64) -> Self {
        self.kl = kl;
        self
    }

    pub fn with_kq(mut self, kq: f64) -> Self {
        self.kq = kq;
        self
    }

    /// Sampling radius for soft shadows. Zero keeps a true point light.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius.max(0.0);
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn intensity_at(&self, point: &Point) -> Color {
        let d = self.position.distance(point);
        self.intensity / (self.kc + self.kl * d + self.kq * d * d)
    }

    pub fn direction_at(&self, point: &Point) -> MathResult<Vector> {
        Ok(point.subtract(&self.position)?.normalize())
    }

    pub fn distance_to(&self, point: &Point) -> f64 {
        self.position.distance(point)
    }
}
