use lumen_math::{Color, Vector};

/// A light infinitely far away, shining uniformly along one direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    intensity: Color,
    /// Unit direction the light travels.
    direction: Vector,
}

impl DirectionalLight {
    /// Create a new directional light. The direction is normalized.
    pub fn new(intensity: Color, direction: Vector) -> Self {
        Self {
            intensity,
            direction: direction.normalize(),
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }
}
