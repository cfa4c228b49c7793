//! Sampling grid over a disk-shaped light, used for soft shadows.

use lumen_math::{util::is_zero, MathResult, Point, Ray, Vector, DELTA};

/// A square grid centered on a light and facing a shading point.
///
/// Only cells whose center falls inside the inscribed circle produce rays,
/// so the grid approximates a disk of diameter `size`.
#[derive(Debug, Clone, Copy)]
pub struct TargetArea {
    resolution: u32,
    size: f64,
    center: Point,
    v_up: Vector,
    v_right: Vector,
    delta: f64,
}

impl TargetArea {
    /// Create a grid of `resolution x resolution` cells spanning `size`.
    ///
    /// `v_to` is the direction from the shading point toward the light;
    /// `v_up` must not be parallel to it.
    pub fn new(
        resolution: u32,
        size: f64,
        v_to: Vector,
        v_up: Vector,
        center: Point,
    ) -> MathResult<Self> {
        let v_to = v_to.normalize();
        let v_up = v_up.normalize();
        let v_right = v_to.cross(&v_up)?.normalize();
        Ok(Self {
            resolution,
            size,
            center,
            v_up,
            v_right,
            delta: DELTA,
        })
    }

    /// Set how far sample rays are pushed off their origin.
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Position of grid cell `(j, i)` on the light plane.
    pub fn sample_point(&self, j: u32, i: u32) -> Point {
        let cell = self.size / self.resolution as f64;
        let half = (self.resolution as f64 - 1.0) / 2.0;
        let xj = (j as f64 - half) * cell;
        let yi = (i as f64 - half) * cell;

        let mut p = self.center.xyz();
        if !is_zero(xj) {
            p += self.v_right.xyz() * xj;
        }
        if !is_zero(yi) {
            p += self.v_up.xyz() * yi;
        }
        Point::from(p)
    }

    /// Ray from `from` toward grid cell `(j, i)`.
    ///
    /// `None` if the cell lies outside the disk or coincides with `from`.
    pub fn construct_ray(&self, j: u32, i: u32, from: &Point) -> Option<Ray> {
        let target = self.sample_point(j, i);
        if self.center.distance(&target) > self.size / 2.0 {
            return None;
        }
        let direction = target.subtract(from).ok()?.normalize();
        Some(Ray::with_offset_by(*from, direction, &-direction, self.delta))
    }
}
