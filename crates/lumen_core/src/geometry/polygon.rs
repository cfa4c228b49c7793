//! Convex planar polygon primitive.

use super::{triangle::pad_flat, GeometryError, GeometryResult, Plane, Surface};
use lumen_math::{util::align_zero, util::is_zero, Aabb, DVec3, Point, Ray, Vector};

/// A convex polygon with ordered, coplanar vertices.
///
/// Vertices may be given in either winding; the normal follows the first
/// three of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    plane: Plane,
}

/// Signed turn of `edge` toward `to_point` around `normal`.
#[inline]
fn turn(edge: DVec3, to_point: DVec3, normal: DVec3) -> f64 {
    align_zero(edge.cross(to_point).dot(normal))
}

impl Polygon {
    /// Build a polygon, validating vertex count, coplanarity and convexity.
    pub fn new(vertices: Vec<Point>) -> GeometryResult<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }

        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        if vertices.len() > 3 {
            Self::validate(&vertices, plane.normal())?;
        }

        Ok(Self { vertices, plane })
    }

    fn validate(vertices: &[Point], normal: Vector) -> GeometryResult<()> {
        let n = normal.xyz();
        let first = vertices[0].xyz();

        if vertices
            .iter()
            .any(|v| !is_zero((v.xyz() - first).dot(n)))
        {
            return Err(GeometryError::NonPlanar);
        }

        // Every pair of consecutive edges must turn the same way, and never
        // fold back or run straight.
        let count = vertices.len();
        let mut positive = None;
        for i in 0..count {
            let a = vertices[i].xyz();
            let b = vertices[(i + 1) % count].xyz();
            let c = vertices[(i + 2) % count].xyz();
            let sign = turn(b - a, c - b, n);
            if sign == 0.0 {
                return Err(GeometryError::NonConvex);
            }
            match positive {
                None => positive = Some(sign > 0.0),
                Some(p) if p != (sign > 0.0) => return Err(GeometryError::NonConvex),
                Some(_) => {}
            }
        }
        Ok(())
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }
}

impl Surface for Polygon {
    /// Hits the plane, then keeps the point only if it lies strictly on the
    /// inner side of every edge.
    fn find_intersections(&self, ray: &Ray) -> Vec<Point> {
        let Some(t) = self.plane.hit_distance(ray) else {
            return Vec::new();
        };
        let point = ray.point_at(t);
        let p = point.xyz();
        let n = self.plane.normal().xyz();

        let count = self.vertices.len();
        let mut positive = None;
        for i in 0..count {
            let a = self.vertices[i].xyz();
            let b = self.vertices[(i + 1) % count].xyz();
            let sign = turn(b - a, p - a, n);
            if sign == 0.0 {
                return Vec::new();
            }
            match positive {
                None => positive = Some(sign > 0.0),
                Some(side) if side != (sign > 0.0) => return Vec::new(),
                Some(_) => {}
            }
        }

        vec![point]
    }

    fn normal_at(&self, _point: &Point) -> GeometryResult<Vector> {
        Ok(self.plane.normal())
    }

    fn bounding_box(&self) -> Option<Aabb> {
        Aabb::around_points(&self.vertices).map(pad_flat)
    }
}
