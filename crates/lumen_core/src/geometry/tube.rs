//! Infinite tube primitive.

use super::{GeometryError, GeometryResult, Surface};
use lumen_math::{util::align_zero, util::is_zero, Aabb, Point, Ray, Vector};

/// An infinite cylinder of fixed radius around an axis ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    radius: f64,
    axis: Ray,
}

impl Tube {
    /// Create a new tube. The radius must be positive.
    pub fn new(radius: f64, axis: Ray) -> GeometryResult<Self> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { radius, axis })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn axis(&self) -> &Ray {
        &self.axis
    }

    /// Signed position of `point` along the axis, measured from its origin.
    pub(crate) fn axial_offset(&self, point: &Point) -> f64 {
        let d = point.xyz() - self.axis.origin().xyz();
        align_zero(self.axis.direction().xyz().dot(d))
    }

    /// Distances along `ray` to the lateral surface, nearest first.
    ///
    /// Rays parallel to the axis and tangent rays never hit.
    pub(crate) fn hit_distances(&self, ray: &Ray) -> Vec<f64> {
        let v = self.axis.direction().xyz();
        let d = ray.direction().xyz();
        let dp = ray.origin().xyz() - self.axis.origin().xyz();

        // Project out the axial components
        let d_perp = d - v * d.dot(v);
        let dp_perp = dp - v * dp.dot(v);

        let a = align_zero(d_perp.length_squared());
        if a == 0.0 {
            return Vec::new();
        }
        let b = 2.0 * d_perp.dot(dp_perp);
        let c = dp_perp.length_squared() - self.radius * self.radius;

        let discriminant = align_zero(b * b - 4.0 * a * c);
        if discriminant <= 0.0 {
            return Vec::new();
        }

        let root = discriminant.sqrt();
        let t1 = align_zero((-b - root) / (2.0 * a));
        let t2 = align_zero((-b + root) / (2.0 * a));
        [t1, t2].into_iter().filter(|&t| t > 0.0).collect()
    }
}

impl Surface for Tube {
    fn find_intersections(&self, ray: &Ray) -> Vec<Point> {
        self.hit_distances(ray)
            .into_iter()
            .map(|t| ray.point_at(t))
            .collect()
    }

    /// Normal is the direction from the nearest axis point to `point`.
    fn normal_at(&self, point: &Point) -> GeometryResult<Vector> {
        let t = self.axial_offset(point);
        let on_axis = self.axis.point_at(t);
        let outward = point.xyz() - on_axis.xyz();
        if is_zero(outward.length()) {
            return Err(GeometryError::PointOnAxis);
        }
        Ok(Vector::try_from(outward)?.normalize())
    }

    fn bounding_box(&self) -> Option<Aabb> {
        None
    }
}
