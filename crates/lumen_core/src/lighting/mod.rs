//! Light sources.
//!
//! Every positioned light answers three questions about a shading point: how
//! much light arrives there, from which direction it travels, and how far
//! away the source is. Directions point from the light toward the point;
//! the shader negates them to march back toward the light.

mod ambient;
mod directional;
mod point;
mod spot;

pub use ambient::AmbientLight;
pub use directional::DirectionalLight;
pub use point::PointLight;
pub use spot::SpotLight;

use lumen_math::{Color, MathResult, Point, Vector};

/// A light that contributes diffuse and specular terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightSource {
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
}

impl LightSource {
    /// Intensity arriving at `point`.
    pub fn intensity_at(&self, point: &Point) -> Color {
        match self {
            LightSource::Directional(l) => l.intensity(),
            LightSource::Point(l) => l.intensity_at(point),
            LightSource::Spot(l) => l.intensity_at(point),
        }
    }

    /// Unit direction the light travels to reach `point`.
    ///
    /// Fails when a positioned light sits exactly on `point`.
    pub fn direction_at(&self, point: &Point) -> MathResult<Vector> {
        match self {
            LightSource::Directional(l) => Ok(l.direction()),
            LightSource::Point(l) => l.direction_at(point),
            LightSource::Spot(l) => l.direction_at(point),
        }
    }

    /// Distance from `point` to the light. Directional lights are infinitely far.
    pub fn distance_to(&self, point: &Point) -> f64 {
        match self {
            LightSource::Directional(_) => f64::INFINITY,
            LightSource::Point(l) => l.distance_to(point),
            LightSource::Spot(l) => l.distance_to(point),
        }
    }

    /// Position and radius of a light that should be sampled as a disk.
    pub fn area(&self) -> Option<(Point, f64)> {
        let point = match self {
            LightSource::Directional(_) => return None,
            LightSource::Point(l) => l,
            LightSource::Spot(l) => l.point_light(),
        };
        (point.radius() > 0.0).then(|| (point.position(), point.radius()))
    }
}

impl From<DirectionalLight> for LightSource {
    fn from(light: DirectionalLight) -> Self {
        LightSource::Directional(light)
    }
}

impl From<PointLight> for LightSource {
    fn from(light: PointLight) -> Self {
        LightSource::Point(light)
    }
}

impl From<SpotLight> for LightSource {
    fn from(light: SpotLight) -> Self {
        LightSource::Spot(light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_is_infinitely_far() {
        let light: LightSource = DirectionalLight::new(Color::splat(100.0), -Vector::AXIS_Y).into();
        assert_eq!(light.distance_to(&Point::ZERO), f64::INFINITY);
        assert_eq!(light.direction_at(&Point::ZERO).unwrap(), -Vector::AXIS_Y);
        assert_eq!(light.intensity_at(&Point::new(5.0, 5.0, 5.0)), Color::splat(100.0));
        assert!(light.area().is_none());
    }

    #[test]
    fn test_area_only_for_sized_lights() {
        let position = Point::new(0.0, 10.0, 0.0);
        let hard: LightSource = PointLight::new(Color::ONE, position).into();
        assert!(hard.area().is_none());

        let soft: LightSource = PointLight::new(Color::ONE, position).with_radius(2.0).into();
        assert_eq!(soft.area(), Some((position, 2.0)));

        let spot: LightSource = SpotLight::new(Color::ONE, position, -Vector::AXIS_Y)
            .with_radius(1.5)
            .into();
        assert_eq!(spot.area(), Some((position, 1.5)));
    }
}
