use crate::{util::is_zero, MathResult, Vector};
use glam::DVec3;
use std::fmt;

/// A location in 3D space.
///
/// Equality is epsilon-aware: two points compare equal when every coordinate
/// differs by less than [`crate::util::EPSILON`].
#[derive(Debug, Copy, Clone, Default)]
pub struct Point(pub(crate) DVec3);

impl Point {
    pub const ZERO: Point = Point(DVec3::ZERO);

    /// Create a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Raw coordinates.
    #[inline]
    pub fn xyz(&self) -> DVec3 {
        self.0
    }

    /// Move the point along `vector`.
    #[inline]
    pub fn add(&self, vector: &Vector) -> Point {
        Point(self.0 + vector.xyz())
    }

    /// Vector from `other` to `self`.
    ///
    /// Fails with [`crate::MathError::ZeroVector`] when the points coincide.
    pub fn subtract(&self, other: &Point) -> MathResult<Vector> {
        Vector::try_from(self.0 - other.0)
    }

    pub fn distance_squared(&self, other: &Point) -> f64 {
        self.0.distance_squared(other.0)
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.0.distance(other.0)
    }
}

impl From<DVec3> for Point {
    fn from(xyz: DVec3) -> Self {
        Self(xyz)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        is_zero(self.0.x - other.0.x) && is_zero(self.0.y - other.0.y) && is_zero(self.0.z - other.0.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
