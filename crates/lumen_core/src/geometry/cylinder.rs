//! Finite capped cylinder primitive.

use super::{GeometryError, GeometryResult, Plane, Surface, Tube};
use lumen_math::{util::align_zero, Aabb, DVec3, Point, Ray, Vector};

/// A tube cut to `height` along its axis and closed by two disk caps.
///
/// The bottom cap is centered on the axis origin, the top cap `height` units
/// further along the axis direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    tube: Tube,
    height: f64,
}

impl Cylinder {
    /// Create a new cylinder. Radius and height must be positive.
    pub fn new(radius: f64, axis: Ray, height: f64) -> GeometryResult<Self> {
        let tube = Tube::new(radius, axis)?;
        if height.is_nan() || height <= 0.0 {
            return Err(GeometryError::NonPositiveHeight(height));
        }
        Ok(Self { tube, height })
    }

    pub fn radius(&self) -> f64 {
        self.tube.radius()
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn axis(&self) -> &Ray {
        self.tube.axis()
    }

    fn bottom_center(&self) -> Point {
        self.tube.axis().origin()
    }

    fn top_center(&self) -> Point {
        self.tube.axis().point_at(self.height)
    }

    /// True if `point` is strictly inside the cap disk radius.
    fn within_cap(&self, center: &Point, point: &Point) -> bool {
        let r = self.radius();
        align_zero(center.distance_squared(point) - r * r) < 0.0
    }
}

impl Surface for Cylinder {
    fn find_intersections(&self, ray: &Ray) -> Vec<Point> {
        let mut hits: Vec<f64> = self
            .tube
            .hit_distances(ray)
            .into_iter()
            .filter(|&t| {
                let s = self.tube.axial_offset(&ray.point_at(t));
                s > 0.0 && align_zero(s - self.height) < 0.0
            })
            .collect();

        let direction = self.axis().direction();
        let caps = [
            (self.bottom_center(), -direction),
            (self.top_center(), direction),
        ];
        for (center, normal) in caps {
            if let Some(t) = Plane::new(center, normal).hit_distance(ray) {
                if self.within_cap(&center, &ray.point_at(t)) {
                    hits.push(t);
                }
            }
        }

        hits.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        hits.into_iter().map(|t| ray.point_at(t)).collect()
    }

    /// Cap interiors get the axis direction (outward per cap); the side and
    /// the cap rims get the tube normal.
    fn normal_at(&self, point: &Point) -> GeometryResult<Vector> {
        let direction = self.axis().direction();
        let s = self.tube.axial_offset(point);
        if s == 0.0 && self.within_cap(&self.bottom_center(), point) {
            return Ok(-direction);
        }
        if align_zero(s - self.height) == 0.0 && self.within_cap(&self.top_center(), point) {
            return Ok(direction);
        }
        self.tube.normal_at(point)
    }

    fn bounding_box(&self) -> Option<Aabb> {
        let v = self.axis().direction().xyz();
        let r = self.radius();
        // Disk extent per axis: r * sqrt(1 - v_i^2)
        let disk = |c: f64| r * (1.0 - c * c).max(0.0).sqrt();
        let extent = DVec3::new(disk(v.x), disk(v.y), disk(v.z));

        let a = self.bottom_center().xyz();
        let b = self.top_center().xyz();
        let min = a.min(b) - extent;
        let max = a.max(b) + extent;
        Some(Aabb::new(min.x, max.x, min.y, max.y, min.z, max.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z_cylinder() -> Cylinder {
        Cylinder::new(1.0, Ray::new(Point::ZERO, Vector::AXIS_Z), 2.0).unwrap()
    }

    #[test]
    fn test_cylinder_rejects_bad_dimensions() {
        let axis = Ray::new(Point::ZERO, Vector::AXIS_Z);
        assert_eq!(
            Cylinder::new(1.0, axis, 0.0),
            Err(GeometryError::NonPositiveHeight(0.0))
        );
        assert_eq!(
            Cylinder::new(-1.0, axis, 1.0),
            Err(GeometryError::NonPositiveRadius(-1.0))
        );
    }

    #[test]
    fn test_cylinder_normals() {
        let cylinder = z_cylinder();
        // Side
        assert_eq!(
            cylinder.normal_at(&Point::new(1.0, 0.0, 1.0)).unwrap(),
            Vector::AXIS_X
        );
        // Bottom cap, including its center
        assert_eq!(
            cylinder.normal_at(&Point::new(0.5, 0.0, 0.0)).unwrap(),
            -Vector::AXIS_Z
        );
        assert_eq!(cylinder.normal_at(&Point::ZERO).unwrap(), -Vector::AXIS_Z);
        // Top cap
        assert_eq!(
            cylinder.normal_at(&Point::new(0.0, 0.5, 2.0)).unwrap(),
            Vector::AXIS_Z
        );
        // Rim of the bottom cap belongs to the side
        assert_eq!(
            cylinder.normal_at(&Point::new(1.0, 0.0, 0.0)).unwrap(),
            Vector::AXIS_X
        );
    }

    #[test]
    fn test_cylinder_side_hits() {
        let ray = Ray::new(Point::new(-3.0, 0.0, 1.0), Vector::AXIS_X);
        assert_eq!(
            z_cylinder().find_intersections(&ray),
            vec![Point::new(-1.0, 0.0, 1.0), Point::new(1.0, 0.0, 1.0)]
        );
    }

    #[test]
    fn test_cylinder_cap_hits() {
        let ray = Ray::new(Point::new(0.5, 0.0, -3.0), Vector::AXIS_Z);
        assert_eq!(
            z_cylinder().find_intersections(&ray),
            vec![Point::new(0.5, 0.0, 0.0), Point::new(0.5, 0.0, 2.0)]
        );
    }

    #[test]
    fn test_cylinder_side_and_cap() {
        let ray = Ray::new(Point::new(-2.0, 0.0, 0.0), Vector::new(1.0, 0.0, 1.0).unwrap());
        assert_eq!(
            z_cylinder().find_intersections(&ray),
            vec![Point::new(-1.0, 0.0, 1.0), Point::new(0.0, 0.0, 2.0)]
        );
    }

    #[test]
    fn test_cylinder_misses_beyond_height() {
        let ray = Ray::new(Point::new(-3.0, 0.0, 5.0), Vector::AXIS_X);
        assert!(z_cylinder().find_intersections(&ray).is_empty());
        let ray = Ray::new(Point::new(3.0, 0.0, -1.0), Vector::AXIS_Z);
        assert!(z_cylinder().find_intersections(&ray).is_empty());
    }

    #[test]
    fn test_cylinder_bounding_box() {
        assert_eq!(
            z_cylinder().bounding_box().unwrap(),
            Aabb::new(-1.0, 1.0, -1.0, 1.0, 0.0, 2.0)
        );
    }
}
