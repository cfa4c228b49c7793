use super::PointLight;
use lumen_math::{util::align_zero, Color, MathResult, Point, Vector};

/// A point light that only shines into the half-space its direction faces.
///
/// The point-light intensity is scaled by the cosine between the spot
/// direction and the direction toward the shading point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    light: PointLight,
    direction: Vector,
}

impl SpotLight {
    pub fn new(intensity: Color, position: Point, direction: Vector) -> Self {
        Self {
            light: PointLight::new(intensity, position),
            direction: direction.normalize(),
        }
    }

    pub fn with_kc(mut self, kc: f64) -> Self {
        self.light = self.light.with_kc(kc);
        self
    }

    pub fn with_kl(mut self, kl: f64) -> Self {
        self.light = self.light.with_kl(kl);
        self
    }

    pub fn with_kq(mut self, kq: f64) -> Self {
        self.light = self.light.with_kq(kq);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.light = self.light.with_radius(radius);
        self
    }

    pub fn point_light(&self) -> &PointLight {
        &self.light
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }

    pub fn intensity_at(&self, point: &Point) -> Color {
        let Ok(l) = self.light.direction_at(point) else {
            return Color::ZERO;
        };
        let cos = align_zero(self.direction.dot(&l));
        if cos <= 0.0 {
            return Color::ZERO;
        }
        self.light.intensity_at(point) * cos
    }

    pub fn direction_at(&self, point: &Point) -> MathResult<Vector> {
        self.light.direction_at(point)
    }

    pub fn distance_to(&self, point: &Point) -> f64 {
        self.light.distance_to(point)
    }
}
