//! Geometric primitives and the [`Geometry`] leaf that wraps them.

mod cylinder;
mod plane;
mod polygon;
mod sphere;
mod triangle;
mod tube;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use polygon::Polygon;
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use tube::Tube;

use crate::Material;
use lumen_math::{Aabb, Color, MathError, Point, Ray, Vector};
use thiserror::Error;

/// Errors raised while building or querying geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("the first three vertices are collinear")]
    Collinear,

    #[error("all polygon vertices must lie in one plane")]
    NonPlanar,

    #[error("polygon vertices must be ordered and form a convex shape")]
    NonConvex,

    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("height must be positive, got {0}")]
    NonPositiveHeight(f64),

    #[error("no normal for a point on the tube axis")]
    PointOnAxis,

    #[error("no normal at the sphere center")]
    PointAtCenter,

    #[error(transparent)]
    Math(#[from] MathError),
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Shape-level ray queries.
///
/// Implementors return intersection points in front of the ray origin and
/// never include points at distance zero.
pub trait Surface {
    /// All points where `ray` crosses the surface, ordered by distance.
    fn find_intersections(&self, ray: &Ray) -> Vec<Point>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: &Point) -> GeometryResult<Vector>;

    /// Finite bounds, or `None` for shapes extending to infinity.
    fn bounding_box(&self) -> Option<Aabb>;
}

/// Closed set of primitive shapes.
#[derive(Debug, Clone)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
    Polygon(Polygon),
    Tube(Tube),
    Cylinder(Cylinder),
}

impl Surface for Shape {
    fn find_intersections(&self, ray: &Ray) -> Vec<Point> {
        match self {
            Shape::Plane(s) => s.find_intersections(ray),
            Shape::Sphere(s) => s.find_intersections(ray),
            Shape::Triangle(s) => s.find_intersections(ray),
            Shape::Polygon(s) => s.find_intersections(ray),
            Shape::Tube(s) => s.find_intersections(ray),
            Shape::Cylinder(s) => s.find_intersections(ray),
        }
    }

    fn normal_at(&self, point: &Point) -> GeometryResult<Vector> {
        match self {
            Shape::Plane(s) => s.normal_at(point),
            Shape::Sphere(s) => s.normal_at(point),
            Shape::Triangle(s) => s.normal_at(point),
            Shape::Polygon(s) => s.normal_at(point),
            Shape::Tube(s) => s.normal_at(point),
            Shape::Cylinder(s) => s.normal_at(point),
        }
    }

    fn bounding_box(&self) -> Option<Aabb> {
        match self {
            Shape::Plane(s) => s.bounding_box(),
            Shape::Sphere(s) => s.bounding_box(),
            Shape::Triangle(s) => s.bounding_box(),
            Shape::Polygon(s) => s.bounding_box(),
            Shape::Tube(s) => s.bounding_box(),
            Shape::Cylinder(s) => s.bounding_box(),
        }
    }
}

macro_rules! impl_into_shape {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Shape {
                fn from(shape: $ty) -> Self {
                    Shape::$ty(shape)
                }
            }
        )*
    };
}

impl_into_shape!(Plane, Sphere, Triangle, Polygon, Tube, Cylinder);

/// A renderable leaf: a shape plus its emission color and material.
#[derive(Debug, Clone)]
pub struct Geometry {
    shape: Shape,
    emission: Color,
    material: Material,
    bbox: Option<Aabb>,
}

impl Geometry {
    /// Wrap a shape with black emission and the default material.
    pub fn new(shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        let bbox = shape.bounding_box();
        Self {
            shape,
            emission: Color::ZERO,
            material: Material::default(),
            bbox,
        }
    }

    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn emission(&self) -> Color {
        self.emission
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn find_intersections(&self, ray: &Ray) -> Vec<Point> {
        self.shape.find_intersections(ray)
    }

    pub fn normal_at(&self, point: &Point) -> GeometryResult<Vector> {
        self.shape.normal_at(point)
    }

    /// Cached shape bounds, `None` when unbounded.
    pub fn bounding_box(&self) -> Option<Aabb> {
        self.bbox
    }
}
