use crate::{
    util::{align_zero, is_zero},
    Point, Vector,
};

/// Distance a ray origin is pushed off a surface to avoid self-intersection.
pub const DELTA: f64 = 0.1;

/// A half-line with an origin point and a unit direction.
///
/// Rays are immutable; the direction is normalized on construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

impl Ray {
    /// Create a new ray. `direction` is normalized.
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a ray whose origin is shifted off a surface along `normal`.
    ///
    /// The origin moves by [`DELTA`] toward the side of the surface the ray
    /// heads into. A direction tangent to the surface leaves the origin as is.
    pub fn with_offset(point: Point, direction: Vector, normal: &Vector) -> Self {
        Self::with_offset_by(point, direction, normal, DELTA)
    }

    /// Same as [`Ray::with_offset`] with an explicit shift distance.
    pub fn with_offset_by(point: Point, direction: Vector, normal: &Vector, delta: f64) -> Self {
        let nv = align_zero(normal.dot(&direction));
        let origin = if nv == 0.0 {
            point
        } else {
            let shift = if nv > 0.0 { delta } else { -delta };
            Point::from(point.xyz() + normal.xyz() * shift)
        };
        Self::new(origin, direction)
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Get the ray's unit direction.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// Point along the ray at distance `t` from the origin.
    pub fn point_at(&self, t: f64) -> Point {
        if is_zero(t) {
            return self.origin;
        }
        Point::from(self.origin.xyz() + self.direction.xyz() * t)
    }
}
