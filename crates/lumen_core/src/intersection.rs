//! Intersection records produced by scene queries.

use crate::{Geometry, Material};
use lumen_math::Point;

/// A point where a ray meets a specific geometry.
///
/// Two intersections are equal when they refer to the same geometry
/// instance (identity, not structural equality) at the same point.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    pub geometry: &'a Geometry,
    pub point: Point,
}

impl<'a> Intersection<'a> {
    pub fn new(geometry: &'a Geometry, point: Point) -> Self {
        Self { geometry, point }
    }

    /// Material of the intersected geometry.
    pub fn material(&self) -> &'a Material {
        self.geometry.material()
    }

    /// True if this intersection lies on `geometry`.
    pub fn is_on(&self, geometry: &Geometry) -> bool {
        std::ptr::eq(self.geometry, geometry)
    }
}

impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.geometry, other.geometry) && self.point == other.point
    }
}

/// The intersection nearest to `origin`, if any.
///
/// Ties keep the first candidate in list order.
pub fn closest_intersection<'a>(
    origin: &Point,
    intersections: &[Intersection<'a>],
) -> Option<Intersection<'a>> {
    let mut closest: Option<(f64, Intersection<'a>)> = None;
    for candidate in intersections {
        let d = origin.distance_squared(&candidate.point);
        match closest {
            Some((best, _)) if best <= d => {}
            _ => closest = Some((d, *candidate)),
        }
    }
    closest.map(|(_, i)| i)
}
