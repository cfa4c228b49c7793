//! Pinhole camera for ray generation.

use lumen_math::{util::align_zero, util::is_zero, MathError, Point, Ray, Vector};
use rand::{Rng, RngCore};
use thiserror::Error;

/// Errors raised while building a [`Camera`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("camera location was not set")]
    MissingLocation,

    #[error("camera direction was not set")]
    MissingDirection,

    #[error("view direction and up vector must be orthogonal")]
    NotOrthogonal,

    #[error("up vector is parallel to the view direction")]
    ParallelUp,

    #[error("view plane distance must be positive, got {0}")]
    InvalidDistance(f64),

    #[error("view plane size must be positive, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    #[error("resolution must be at least 1x1, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error(transparent)]
    Math(#[from] MathError),
}

/// How the builder was told to orient the camera.
#[derive(Debug, Clone, Copy)]
enum Orientation {
    Direction { v_to: Vector, v_up: Vector },
    LookAt { target: Point, up: Vector },
}

/// Camera for generating rays into the scene.
///
/// The view plane sits `vp_distance` in front of the camera location and is
/// divided into `width x height` pixels; pixel `(0, 0)` is the top-left one.
#[derive(Debug, Clone)]
pub struct Camera {
    location: Point,
    v_to: Vector,
    v_up: Vector,
    v_right: Vector,
    vp_distance: f64,
    vp_width: f64,
    vp_height: f64,
    width: u32,
    height: u32,
}

impl Camera {
    pub fn builder() -> CameraBuilder {
        CameraBuilder::default()
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn v_to(&self) -> Vector {
        self.v_to
    }

    pub fn v_up(&self) -> Vector {
        self.v_up
    }

    pub fn v_right(&self) -> Vector {
        self.v_right
    }

    /// Image resolution in pixels, `(width, height)`.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Ray through view-plane position `(x, y)`, in pixel units from the
    /// top-left corner.
    fn ray_through(&self, x: f64, y: f64) -> Ray {
        let rx = self.vp_width / self.width as f64;
        let ry = self.vp_height / self.height as f64;
        let xj = align_zero((x - self.width as f64 / 2.0) * rx);
        let yi = align_zero(-(y - self.height as f64 / 2.0) * ry);

        let mut target = self.location.xyz() + self.v_to.xyz() * self.vp_distance;
        if !is_zero(xj) {
            target += self.v_right.xyz() * xj;
        }
        if !is_zero(yi) {
            target += self.v_up.xyz() * yi;
        }

        // The view plane is in front of the camera, so this is never zero
        let direction = Vector::try_from(target - self.location.xyz()).unwrap_or(self.v_to);
        Ray::new(self.location, direction)
    }

    /// Ray through the center of pixel `(j, i)` (column, row).
    pub fn construct_ray(&self, j: u32, i: u32) -> Ray {
        self.ray_through(j as f64 + 0.5, i as f64 + 0.5)
    }

    /// Jittered rays for anti-aliasing pixel `(j, i)`.
    ///
    /// The pixel is split into an `n x n` grid with `n = ceil(sqrt(samples))`
    /// and one ray is cast through a random spot in every cell.
    pub fn construct_rays(&self, j: u32, i: u32, samples: u32, rng: &mut dyn RngCore) -> Vec<Ray> {
        let grid = (samples as f64).sqrt().ceil().max(1.0) as u32;
        let cell = 1.0 / grid as f64;
        let mut rays = Vec::with_capacity((grid * grid) as usize);
        for sy in 0..grid {
            for sx in 0..grid {
                let x = j as f64 + (sx as f64 + rng.gen::<f64>()) * cell;
                let y = i as f64 + (sy as f64 + rng.gen::<f64>()) * cell;
                rays.push(self.ray_through(x, y));
            }
        }
        rays
    }

    /// Rays for pixel `(j, i)`: the center ray alone for one sample, jittered
    /// rays otherwise.
    pub fn pixel_rays(&self, j: u32, i: u32, samples: u32, rng: &mut dyn RngCore) -> Vec<Ray> {
        if samples <= 1 {
            vec![self.construct_ray(j, i)]
        } else {
            self.construct_rays(j, i, samples, rng)
        }
    }
}

/// Builder for [`Camera`]. Validation happens in [`CameraBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct CameraBuilder {
    location: Option<Point>,
    orientation: Option<Orientation>,
    vp_distance: f64,
    vp_width: f64,
    vp_height: f64,
    width: u32,
    height: u32,
}

impl CameraBuilder {
    pub fn location(mut self, location: Point) -> Self {
        self.location = Some(location);
        self
    }

    /// Orient the camera with explicit, orthogonal view and up vectors.
    pub fn direction(mut self, v_to: Vector, v_up: Vector) -> Self {
        self.orientation = Some(Orientation::Direction { v_to, v_up });
        self
    }

    /// Aim the camera at `target`. `up` only needs to be roughly upward.
    pub fn look_at(mut self, target: Point, up: Vector) -> Self {
        self.orientation = Some(Orientation::LookAt { target, up });
        self
    }

    pub fn vp_distance(mut self, distance: f64) -> Self {
        self.vp_distance = distance;
        self
    }

    pub fn vp_size(mut self, width: f64, height: f64) -> Self {
        self.vp_width = width;
        self.vp_height = height;
        self
    }

    pub fn resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn build(self) -> Result<Camera, CameraError> {
        let location = self.location.ok_or(CameraError::MissingLocation)?;

        let (v_to, v_up) = match self.orientation.ok_or(CameraError::MissingDirection)? {
            Orientation::Direction { v_to, v_up } => {
                if !is_zero(v_to.dot(&v_up)) {
                    return Err(CameraError::NotOrthogonal);
                }
                (v_to.normalize(), v_up.normalize())
            }
            Orientation::LookAt { target, up } => {
                let v_to = target.subtract(&location)?.normalize();
                let v_right = v_to.cross(&up).map_err(|_| CameraError::ParallelUp)?;
                let v_up = v_right.cross(&v_to)?.normalize();
                (v_to, v_up)
            }
        };
        let v_right = v_to.cross(&v_up)?.normalize();

        if align_zero(self.vp_distance) <= 0.0 {
            return Err(CameraError::InvalidDistance(self.vp_distance));
        }
        if align_zero(self.vp_width) <= 0.0 || align_zero(self.vp_height) <= 0.0 {
            return Err(CameraError::InvalidSize {
                width: self.vp_width,
                height: self.vp_height,
            });
        }
        if self.width == 0 || self.height == 0 {
            return Err(CameraError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }

        Ok(Camera {
            location,
            v_to,
            v_up,
            v_right,
            vp_distance: self.vp_distance,
            vp_width: self.vp_width,
            vp_height: self.vp_height,
            width: self.width,
            height: self.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Plane, Sphere, Surface, Triangle};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn builder() -> CameraBuilder {
        Camera::builder()
            .vp_distance(1.0)
            .direction(-Vector::AXIS_Z, -Vector::AXIS_Y)
            .vp_size(3.0, 3.0)
            .resolution(3, 3)
    }

    fn count_hits(camera: &Camera, surface: &dyn Surface) -> usize {
        let (width, height) = camera.resolution();
        let mut total = 0;
        for i in 0..height {
            for j in 0..width {
                total += surface.find_intersections(&camera.construct_ray(j, i)).len();
            }
        }
        total
    }

    #[test]
    fn test_camera_requires_fields() {
        assert_eq!(
            Camera::builder().build().unwrap_err(),
            CameraError::MissingLocation
        );
        assert_eq!(
            Camera::builder().location(Point::ZERO).build().unwrap_err(),
            CameraError::MissingDirection
        );
        assert_eq!(
            builder().location(Point::ZERO).vp_distance(0.0).build().unwrap_err(),
            CameraError::InvalidDistance(0.0)
        );
        assert!(matches!(
            builder().location(Point::ZERO).vp_size(0.0, 2.0).build(),
            Err(CameraError::InvalidSize { .. })
        ));
        assert!(matches!(
            builder().location(Point::ZERO).resolution(0, 10).build(),
            Err(CameraError::InvalidResolution { .. })
        ));
    }

    #[test]
    fn test_camera_rejects_non_orthogonal_direction() {
        let result = builder()
            .location(Point::ZERO)
            .direction(-Vector::AXIS_Z, Vector::new(0.0, 1.0, 1.0).unwrap())
            .build();
        assert_eq!(result.unwrap_err(), CameraError::NotOrthogonal);
    }

    #[test]
    fn test_camera_center_and_corner_rays() {
        let camera = Camera::builder()
            .location(Point::ZERO)
            .direction(-Vector::AXIS_Z, Vector::AXIS_Y)
            .vp_distance(10.0)
            .vp_size(8.0, 8.0)
            .resolution(4, 4)
            .build()
            .unwrap();
        assert_eq!(camera.v_right(), Vector::AXIS_X);

        // Top-left pixel center sits at (-3, 3, -10)
        let ray = camera.construct_ray(0, 0);
        let expected = Vector::new(-3.0, 3.0, -10.0).unwrap().normalize();
        assert_eq!(ray.direction(), expected);
        assert_eq!(ray.origin(), Point::ZERO);
    }

    #[test]
    fn test_look_at_builds_orthonormal_frame() {
        let camera = builder()
            .location(Point::new(0.0, 0.0, 10.0))
            .look_at(Point::ZERO, Vector::new(0.0, 1.0, 0.5).unwrap())
            .build()
            .unwrap();
        assert_eq!(camera.v_to(), -Vector::AXIS_Z);
        assert_eq!(camera.v_up(), Vector::AXIS_Y);
        assert_eq!(camera.v_right(), Vector::AXIS_X);

        let parallel = builder()
            .location(Point::ZERO)
            .look_at(Point::new(0.0, 5.0, 0.0), Vector::AXIS_Y)
            .build();
        assert_eq!(parallel.unwrap_err(), CameraError::ParallelUp);
    }

    #[test]
    fn test_jittered_rays_stay_in_pixel() {
        let camera = builder().location(Point::ZERO).build().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let rays = camera.construct_rays(1, 1, 4, &mut rng);
        assert_eq!(rays.len(), 4);
        for ray in rays {
            // Center pixel covers [-0.5, 0.5] on both view-plane axes at z = -1
            let d = ray.direction();
            let x = d.x() / -d.z();
            let y = d.y() / -d.z();
            assert!(x.abs() <= 0.5 && y.abs() <= 0.5);
        }
        assert_eq!(camera.pixel_rays(1, 1, 1, &mut rng).len(), 1);
        // Non-square counts round up to the next square grid
        assert_eq!(camera.construct_rays(0, 0, 5, &mut rng).len(), 9);
    }

    #[test]
    fn test_sphere_integration() {
        let camera1 = builder().location(Point::ZERO).build().unwrap();
        let camera2 = builder().location(Point::new(0.0, 0.0, 0.5)).build().unwrap();

        let sphere = |z: f64, r: f64| Sphere::new(Point::new(0.0, 0.0, z), r).unwrap();
        assert_eq!(count_hits(&camera1, &sphere(-3.0, 1.0)), 2);
        assert_eq!(count_hits(&camera2, &sphere(-2.5, 2.5)), 18);
        assert_eq!(count_hits(&camera2, &sphere(-2.0, 2.0)), 10);
        assert_eq!(count_hits(&camera2, &sphere(-1.0, 4.0)), 9);
        assert_eq!(count_hits(&camera2, &sphere(1.0, 0.5)), 0);
    }

    #[test]
    fn test_plane_integration() {
        let camera = builder().location(Point::new(0.0, 0.0, 0.5)).build().unwrap();
        let plane = |n: Vector| Plane::new(Point::new(0.0, 0.0, -5.0), n);
        assert_eq!(count_hits(&camera, &plane(Vector::AXIS_Z)), 9);
        assert_eq!(count_hits(&camera, &plane(Vector::new(0.0, 1.0, 2.0).unwrap())), 9);
        assert_eq!(count_hits(&camera, &plane(Vector::new(0.0, 1.0, 1.0).unwrap())), 6);
    }

    #[test]
    fn test_triangle_integration() {
        let camera = builder().location(Point::new(0.0, 0.0, 0.5)).build().unwrap();
        let small = Triangle::new(
            Point::new(0.0, 1.0, -2.0),
            Point::new(1.0, -1.0, -2.0),
            Point::new(-1.0, -1.0, -2.0),
        )
        .unwrap();
        let tall = Triangle::new(
            Point::new(0.0, 20.0, -2.0),
            Point::new(1.0, -1.0, -2.0),
            Point::new(-1.0, -1.0, -2.0),
        )
        .unwrap();
        assert_eq!(count_hits(&camera, &small), 1);
        assert_eq!(count_hits(&camera, &tall), 2);
    }
}
