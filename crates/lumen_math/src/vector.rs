use crate::{util::is_zero, MathError, MathResult};
use glam::DVec3;
use std::fmt;
use std::ops::Neg;

/// A non-zero direction in 3D space.
///
/// The zero vector cannot be constructed; every operation that could produce
/// it returns a [`MathResult`].
#[derive(Debug, Copy, Clone)]
pub struct Vector(DVec3);

impl Vector {
    pub const AXIS_X: Vector = Vector(DVec3::X);
    pub const AXIS_Y: Vector = Vector(DVec3::Y);
    pub const AXIS_Z: Vector = Vector(DVec3::Z);

    /// Create a new vector, rejecting `(0, 0, 0)`.
    pub fn new(x: f64, y: f64, z: f64) -> MathResult<Self> {
        Self::try_from(DVec3::new(x, y, z))
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

    /// Raw components.
    #[inline]
    pub fn xyz(&self) -> DVec3 {
        self.0
    }

    pub fn add(&self, other: &Vector) -> MathResult<Vector> {
        Self::try_from(self.0 + other.0)
    }

    pub fn subtract(&self, other: &Vector) -> MathResult<Vector> {
        Self::try_from(self.0 - other.0)
    }

    pub fn scale(&self, t: f64) -> MathResult<Vector> {
        Self::try_from(self.0 * t)
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.0.dot(other.0)
    }

    /// Cross product. Parallel inputs yield [`MathError::ZeroVector`].
    pub fn cross(&self, other: &Vector) -> MathResult<Vector> {
        Self::try_from(self.0.cross(other.0))
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.0.length_squared()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.0.length()
    }

    /// Unit vector in the same direction.
    pub fn normalize(&self) -> Vector {
        Vector(self.0 / self.0.length())
    }
}

impl TryFrom<DVec3> for Vector {
    type Error = MathError;

    fn try_from(xyz: DVec3) -> MathResult<Self> {
        if xyz == DVec3::ZERO {
            return Err(MathError::ZeroVector);
        }
        Ok(Vector(xyz))
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        is_zero(self.0.x - other.0.x) && is_zero(self.0.y - other.0.y) && is_zero(self.0.z - other.0.z)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_vector_rejected() {
        assert_eq!(Vector::new(0.0, 0.0, 0.0), Err(MathError::ZeroVector));
        assert!(Vector::try_from(DVec3::ZERO).is_err());
    }

    #[test]
    fn test_add_and_subtract() {
        let v1 = Vector::new(1.0, 2.0, 3.0).unwrap();
        let v2 = Vector::new(-2.0, -4.0, -6.0).unwrap();
        assert_eq!(v1.add(&v2).unwrap(), Vector::new(-1.0, -2.0, -3.0).unwrap());
        assert_eq!(v1.subtract(&v2).unwrap(), Vector::new(3.0, 6.0, 9.0).unwrap());
        assert!(v1.subtract(&v1).is_err());
    }

    #[test]
    fn test_scale() {
        let v = Vector::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(v.scale(2.0).unwrap(), Vector::new(2.0, 4.0, 6.0).unwrap());
        assert!(v.scale(0.0).is_err());
    }

    #[test]
    fn test_dot() {
        let v1 = Vector::new(1.0, 2.0, 3.0).unwrap();
        let v2 = Vector::new(0.0, 3.0, -2.0).unwrap();
        assert!(v1.dot(&v2).abs() < 1e-12);
        assert!((v1.dot(&v1) - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross() {
        let v1 = Vector::new(1.0, 2.0, 3.0).unwrap();
        let v2 = Vector::new(0.0, 3.0, -2.0).unwrap();
        let cross = v1.cross(&v2).unwrap();
        assert!((cross.length() - v1.length() * v2.length()).abs() < 1e-10);
        assert!(cross.dot(&v1).abs() < 1e-10);
        assert!(cross.dot(&v2).abs() < 1e-10);

        // Parallel vectors
        let v3 = Vector::new(-2.0, -4.0, -6.0).unwrap();
        assert!(v1.cross(&v3).is_err());
    }

    #[test]
    fn test_normalize() {
        let v = Vector::new(1.0, 2.0, 3.0).unwrap();
        let u = v.normalize();
        assert!((u.length() - 1.0).abs() < 1e-12);
        assert!(v.dot(&u) > 0.0);
    }

    #[test]
    fn test_neg() {
        let v = -Vector::AXIS_Z;
        assert_eq!(v, Vector::new(0.0, 0.0, -1.0).unwrap());
    }
}
