use crate::{Interval, Point, Ray};

/// Axis-Aligned Bounding Box for spatial acceleration structures (BVH).
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
/// [`Aabb::EMPTY`] (all bounds infinite, min > max) bounds nothing and is
/// ignored by [`Aabb::union`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create an AABB from per-axis bounds.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64, min_z: f64, max_z: f64) -> Self {
        Self {
            x: Interval::new(min_x, max_x),
            y: Interval::new(min_y, max_y),
            z: Interval::new(min_z, max_z),
        }
    }

    /// Create an AABB from two corner points.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(
            a.x().min(b.x()),
            a.x().max(b.x()),
            a.y().min(b.y()),
            a.y().max(b.y()),
            a.z().min(b.z()),
            a.z().max(b.z()),
        )
    }

    /// Smallest AABB containing every point. `None` for an empty slice.
    pub fn around_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (min, max) = points
            .iter()
            .fold((first.xyz(), first.xyz()), |(min, max), p| (min.min(p.xyz()), max.max(p.xyz())));
        Some(Self::new(min.x, max.x, min.y, max.y, min.z, max.z))
    }

    /// Unite boxes into one that contains all of them.
    ///
    /// Returns `None` when no boxes are given. Empty or non-finite boxes are
    /// skipped; if every box is skipped the result is [`Aabb::EMPTY`].
    pub fn union<'a, I>(boxes: I) -> Option<Aabb>
    where
        I: IntoIterator<Item = &'a Aabb>,
    {
        let mut boxes = boxes.into_iter().peekable();
        boxes.peek()?;

        Some(
            boxes
                .filter(|b| b.is_bounded())
                .fold(Aabb::EMPTY, |acc, b| Aabb::surrounding(&acc, b)),
        )
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// True if the box contains nothing on some axis.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty() || self.z.is_empty()
    }

    /// True if the box is non-empty with finite bounds on every axis.
    pub fn is_bounded(&self) -> bool {
        !self.is_empty() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Test if a ray intersects this AABB.
    ///
    /// Slab method: the largest per-axis entry distance is `tmin`, the smallest
    /// per-axis exit distance is `tmax`; the box is hit when `tmax >= tmin` and
    /// the exit lies in front of the origin.
    pub fn intersects(&self, ray: &Ray) -> bool {
        if self.is_empty() {
            return false;
        }

        let origin = ray.origin().xyz();
        let inv_dir = ray.direction().xyz().recip();

        let lo = (glam::DVec3::new(self.x.min, self.y.min, self.z.min) - origin) * inv_dir;
        let hi = (glam::DVec3::new(self.x.max, self.y.max, self.z.max) - origin) * inv_dir;

        let tmin = lo.min(hi).max_element();
        let tmax = lo.max(hi).min_element();

        tmax >= tmin && tmax >= 0.0
    }

    /// Returns the index (0=X, 1=Y, 2=Z) of the axis with the longest extent.
    ///
    /// Ties go to the earlier axis.
    pub fn longest_axis(&self) -> usize {
        let x_size = self.x.size();
        let y_size = self.y.size();
        let z_size = self.z.size();

        if x_size >= y_size && x_size >= z_size {
            0
        } else if y_size >= z_size {
            1
        } else {
            2
        }
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> Point {
        Point::new(self.x.center(), self.y.center(), self.z.center())
    }

    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    pub const UNIVERSE: Aabb = Aabb {
        x: Interval::UNIVERSE,
        y: Interval::UNIVERSE,
        z: Interval::UNIVERSE,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;

    fn unit_box() -> Aabb {
        Aabb::from_points(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(Point::new(10.0, 0.0, 10.0), Point::new(0.0, 10.0, 0.0));

        assert_eq!(aabb.x.min, 0.0);
        assert_eq!(aabb.x.max, 10.0);
        assert_eq!(aabb.y.min, 0.0);
        assert_eq!(aabb.y.max, 10.0);
        assert_eq!(aabb.z.min, 0.0);
        assert_eq!(aabb.z.max, 10.0);
    }

    #[test]
    fn test_around_points() {
        let aabb = Aabb::around_points(&[
            Point::new(0.0, 1.0, 2.0),
            Point::new(-1.0, 5.0, 0.0),
            Point::new(3.0, 2.0, 1.0),
        ])
        .unwrap();
        assert_eq!(aabb, Aabb::new(-1.0, 3.0, 1.0, 5.0, 0.0, 2.0));
        assert!(Aabb::around_points(&[]).is_none());
    }

    #[test]
    fn test_union_skips_empty_and_infinite_boxes() {
        let box1 = Aabb::from_points(Point::ZERO, Point::new(5.0, 5.0, 5.0));
        let box2 = Aabb::from_points(Point::new(3.0, 3.0, 3.0), Point::new(10.0, 10.0, 10.0));

        let with_junk = Aabb::union(&[box1, Aabb::EMPTY, box2, Aabb::UNIVERSE]).unwrap();
        let clean = Aabb::union(&[box1, box2]).unwrap();

        assert_eq!(with_junk, clean);
        assert_eq!(clean, Aabb::new(0.0, 10.0, 0.0, 10.0, 0.0, 10.0));
    }

    #[test]
    fn test_union_of_nothing() {
        let nothing: [Aabb; 0] = [];
        assert!(Aabb::union(&nothing).is_none());
        assert_eq!(Aabb::union(&[Aabb::EMPTY]), Some(Aabb::EMPTY));
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = unit_box();

        // Ray pointing at center
        let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::AXIS_Z);
        assert!(aabb.intersects(&ray));

        // Ray pointing away
        let ray = Ray::new(Point::new(0.0, 0.0, -5.0), -Vector::AXIS_Z);
        assert!(!aabb.intersects(&ray));

        // Ray missing the box
        let ray = Ray::new(Point::new(10.0, 0.0, 0.0), Vector::AXIS_Z);
        assert!(!aabb.intersects(&ray));

        // Ray starting inside
        let ray = Ray::new(Point::ZERO, Vector::new(1.0, 2.0, 3.0).unwrap());
        assert!(aabb.intersects(&ray));
    }

    #[test]
    fn test_flat_box_hit() {
        // Zero thickness along Z, like an axis-aligned triangle
        let aabb = Aabb::new(-1.0, 1.0, -1.0, 1.0, 0.0, 0.0);
        let ray = Ray::new(Point::new(0.2, 0.2, -3.0), Vector::AXIS_Z);
        assert!(aabb.intersects(&ray));
    }

    #[test]
    fn test_empty_box_never_hit() {
        let ray = Ray::new(Point::ZERO, Vector::AXIS_X);
        assert!(!Aabb::EMPTY.intersects(&ray));
    }

    #[test]
    fn test_aabb_centroid() {
        let aabb = Aabb::from_points(Point::ZERO, Point::new(10.0, 10.0, 10.0));
        assert_eq!(aabb.centroid(), Point::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn test_aabb_longest_axis() {
        let aabb_x = Aabb::from_points(Point::ZERO, Point::new(10.0, 1.0, 1.0));
        assert_eq!(aabb_x.longest_axis(), 0);

        let aabb_y = Aabb::from_points(Point::ZERO, Point::new(1.0, 10.0, 1.0));
        assert_eq!(aabb_y.longest_axis(), 1);

        let aabb_z = Aabb::from_points(Point::ZERO, Point::new(1.0, 1.0, 10.0));
        assert_eq!(aabb_z.longest_axis(), 2);

        // Ties resolve in axis order
        let cube = Aabb::from_points(Point::ZERO, Point::new(2.0, 2.0, 2.0));
        assert_eq!(cube.longest_axis(), 0);
        let yz = Aabb::from_points(Point::ZERO, Point::new(1.0, 2.0, 2.0));
        assert_eq!(yz.longest_axis(), 1);
    }
}
