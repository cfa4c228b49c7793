//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use super::{GeometryError, GeometryResult, Surface};
use lumen_math::{util::align_zero, Aabb, DVec3, Point, Ray, Vector};

/// Padding applied to flat bounding boxes.
const BBOX_PAD: f64 = 0.0001;

/// A triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices
    v0: Point,
    v1: Point,
    v2: Point,
    /// Pre-computed face normal (unit length)
    normal: Vector,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The normal follows the vertex order: `(v1 - v0) x (v2 - v0)`.
    pub fn new(v0: Point, v1: Point, v2: Point) -> GeometryResult<Self> {
        let edge1 = v1.subtract(&v0)?;
        let edge2 = v2.subtract(&v0)?;
        let normal = edge1
            .cross(&edge2)
            .map_err(|_| GeometryError::Collinear)?
            .normalize();

        Ok(Self { v0, v1, v2, normal })
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.v0, self.v1, self.v2]
    }
}

impl Surface for Triangle {
    /// Only strictly interior points count; edges and vertices are misses.
    fn find_intersections(&self, ray: &Ray) -> Vec<Point> {
        let edge1 = self.v1.xyz() - self.v0.xyz();
        let edge2 = self.v2.xyz() - self.v0.xyz();
        let direction = ray.direction().xyz();

        let h = direction.cross(edge2);
        let a = align_zero(edge1.dot(h));

        // Ray is parallel to triangle
        if a == 0.0 {
            return Vec::new();
        }

        let f = 1.0 / a;
        let s: DVec3 = ray.origin().xyz() - self.v0.xyz();
        let u = align_zero(f * s.dot(h));
        if u <= 0.0 || align_zero(u - 1.0) >= 0.0 {
            return Vec::new();
        }

        let q = s.cross(edge1);
        let v = align_zero(f * direction.dot(q));
        if v <= 0.0 || align_zero(u + v - 1.0) >= 0.0 {
            return Vec::new();
        }

        let t = align_zero(f * edge2.dot(q));
        if t <= 0.0 {
            return Vec::new();
        }

        vec![ray.point_at(t)]
    }

    fn normal_at(&self, _point: &Point) -> GeometryResult<Vector> {
        Ok(self.normal)
    }

    fn bounding_box(&self) -> Option<Aabb> {
        let bbox = Aabb::around_points(&self.vertices())?;
        Some(pad_flat(bbox))
    }
}

/// Pad thin dimensions to avoid degenerate AABBs.
pub(super) fn pad_flat(bbox: Aabb) -> Aabb {
    let pad = |lo: f64, hi: f64| {
        if hi - lo < BBOX_PAD {
            (lo - BBOX_PAD, hi + BBOX_PAD)
        } else {
            (lo, hi)
        }
    };
    let (min_x, max_x) = pad(bbox.x.min, bbox.x.max);
    let (min_y, max_y) = pad(bbox.y.min, bbox.y.max);
    let (min_z, max_z) = pad(bbox.z.min, bbox.z.max);
    Aabb::new(min_x, max_x, min_y, max_y, min_z, max_z)
}
