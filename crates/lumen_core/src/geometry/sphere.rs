//! Sphere primitive for ray tracing.

use super::{GeometryError, GeometryResult, Surface};
use lumen_math::{util::align_zero, Aabb, Point, Ray, Vector};

/// A sphere defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Point, radius: f64) -> GeometryResult<Self> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Surface for Sphere {
    fn find_intersections(&self, ray: &Ray) -> Vec<Point> {
        let origin = ray.origin();
        if origin == self.center {
            return vec![ray.point_at(self.radius)];
        }

        let u = self.center.xyz() - origin.xyz();
        let tm = align_zero(ray.direction().xyz().dot(u));
        let d_squared = align_zero(u.length_squared() - tm * tm);
        let r_squared = self.radius * self.radius;

        // Tangent or outside
        if align_zero(d_squared - r_squared) >= 0.0 {
            return Vec::new();
        }

        let th = (r_squared - d_squared).sqrt();
        let t1 = align_zero(tm - th);
        let t2 = align_zero(tm + th);

        [t1, t2]
            .into_iter()
            .filter(|&t| t > 0.0)
            .map(|t| ray.point_at(t))
            .collect()
    }

    fn normal_at(&self, point: &Point) -> GeometryResult<Vector> {
        let outward = point
            .subtract(&self.center)
            .map_err(|_| GeometryError::PointAtCenter)?;
        Ok(outward.normalize())
    }

    fn bounding_box(&self) -> Option<Aabb> {
        let r = self.radius;
        Some(Aabb::new(
            self.center.x() - r,
            self.center.x() + r,
            self.center.y() - r,
            self.center.y() + r,
            self.center.z() - r,
            self.center.z() + r,
        ))
    }
}
