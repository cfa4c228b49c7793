//! Lumen math types.
//!
//! Double precision points, non-zero vectors, rays and bounding boxes used by
//! the intersection engine and the shader. Storage is `glam::DVec3`.

// Re-export glam for convenience
pub use glam::DVec3;

mod aabb;
mod interval;
mod point;
mod ray;
mod triple;
pub mod util;
mod vector;

pub use aabb::Aabb;
pub use interval::Interval;
pub use point::Point;
pub use ray::{Ray, DELTA};
pub use triple::{Coeffs, Color, TripleExt};
pub use vector::Vector;

use thiserror::Error;

/// Errors raised while constructing math values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("zero vector is illegal")]
    ZeroVector,
}

/// Result type for math operations.
pub type MathResult<T> = Result<T, MathError>;
