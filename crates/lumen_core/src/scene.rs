//! Scene description handed to the renderer.

use crate::{AmbientLight, Geometries, LightSource, Node};
use lumen_math::Color;

/// Everything needed to shade a ray: geometry, lights and background.
///
/// Scenes are assembled once by configuration code and only read while
/// rendering.
#[derive(Debug, Clone)]
pub struct Scene {
    pub name: String,
    pub background: Color,
    pub ambient_light: AmbientLight,
    pub geometries: Geometries,
    pub lights: Vec<LightSource>,
}

impl Scene {
    /// Create an empty scene with a black background and no lighting.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: Color::ZERO,
            ambient_light: AmbientLight::NONE,
            geometries: Geometries::new(),
            lights: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_ambient_light(mut self, ambient_light: AmbientLight) -> Self {
        self.ambient_light = ambient_light;
        self
    }

    pub fn with_geometries(mut self, geometries: Geometries) -> Self {
        self.geometries = geometries;
        self
    }

    pub fn with_lights(mut self, lights: Vec<LightSource>) -> Self {
        self.lights = lights;
        self
    }

    /// Add a geometry or composite to the root.
    pub fn add_geometry(&mut self, node: impl Into<Node>) {
        self.geometries.add(node);
    }

    pub fn add_light(&mut self, light: impl Into<LightSource>) {
        self.lights.push(light.into());
    }

    /// Replace the geometry tree with its BVH.
    pub fn build_bvh(mut self) -> Self {
        let geometries = std::mem::take(&mut self.geometries);
        self.geometries = geometries.build_bvh();
        self
    }
}
