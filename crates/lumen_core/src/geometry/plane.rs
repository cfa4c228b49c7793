//! Infinite plane primitive.

use super::{GeometryError, GeometryResult, Surface};
use lumen_math::{util::align_zero, Aabb, Point, Ray, Vector};

/// An infinite plane through a reference point with a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    q: Point,
    normal: Vector,
}

impl Plane {
    /// Create a plane from a point on it and a normal. The normal is normalized.
    pub fn new(q: Point, normal: Vector) -> Self {
        Self {
            q,
            normal: normal.normalize(),
        }
    }

    /// Create the plane through three points.
    ///
    /// The normal is `(p2 - p1) x (p3 - p1)`; coincident or collinear points
    /// are rejected.
    pub fn from_points(p1: Point, p2: Point, p3: Point) -> GeometryResult<Self> {
        let v1 = p2.subtract(&p1)?;
        let v2 = p3.subtract(&p1)?;
        let normal = v1.cross(&v2).map_err(|_| GeometryError::Collinear)?;
        Ok(Self::new(p1, normal))
    }

    pub fn point(&self) -> Point {
        self.q
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Distance along `ray` to the plane, if it is hit in front of the origin.
    pub(crate) fn hit_distance(&self, ray: &Ray) -> Option<f64> {
        let origin = ray.origin();
        if origin == self.q {
            return None;
        }

        let denominator = align_zero(self.normal.dot(&ray.direction()));
        if denominator == 0.0 {
            return None;
        }

        let numerator = align_zero(self.normal.xyz().dot(self.q.xyz() - origin.xyz()));
        let t = align_zero(numerator / denominator);
        (t > 0.0).then_some(t)
    }
}

impl Surface for Plane {
    fn find_intersections(&self, ray: &Ray) -> Vec<Point> {
        match self.hit_distance(ray) {
            Some(t) => vec![ray.point_at(t)],
            None => Vec::new(),
        }
    }

    fn normal_at(&self, _point: &Point) -> GeometryResult<Vector> {
        Ok(self.normal)
    }

    fn bounding_box(&self) -> Option<Aabb> {
        None
    }
}
