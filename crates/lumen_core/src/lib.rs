//! Lumen Core - scene graph and ray intersection engine.
//!
//! This crate provides:
//!
//! - **Primitives**: `Plane`, `Sphere`, `Triangle`, `Polygon`, `Tube`, `Cylinder`
//!   with closed-form ray intersection
//! - **Composites**: `Geometries` trees with bounding-box pruning and BVH construction
//! - **Lighting**: ambient, directional, point and spot lights
//! - **Scene**: the read-only input handed to the renderer
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{Geometry, Geometries, Scene, Sphere};
//! use lumen_math::Point;
//!
//! let mut geometries = Geometries::new();
//! geometries.add(Geometry::new(Sphere::new(Point::new(0.0, 0.0, -50.0), 20.0)?));
//! let scene = Scene::new("spheres").with_geometries(geometries).build_bvh();
//! ```

mod bvh;
pub mod geometry;
mod geometries;
mod intersection;
pub mod lighting;
mod material;
mod scene;

// Re-export commonly used types
pub use geometries::{Geometries, Intersectable, Node};
pub use geometry::{
    Cylinder, Geometry, GeometryError, GeometryResult, Plane, Polygon, Shape, Sphere, Surface,
    Triangle, Tube,
};
pub use intersection::{closest_intersection, Intersection};
pub use lighting::{AmbientLight, DirectionalLight, LightSource, PointLight, SpotLight};
pub use material::Material;
pub use scene::Scene;
