//! Parallel bucket renderer.
//!
//! Buckets are traced on a rayon pool, center first, and stitched into an
//! [`ImageBuffer`]. Colors stay on the 0-255 scale the shader works in and
//! are only clamped when converted to bytes.

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, RayTracer, TracerSettings};
use lumen_math::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use thiserror::Error;

/// Errors raised while rendering or writing an image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid render config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("bucket size must be positive")]
    ZeroBucketSize,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Worker threads, 0 lets rayon decide
    pub threads: usize,
    /// Rays per pixel, rounded up to a square grid when above one
    pub samples_per_pixel: u32,
    /// Bucket edge length in pixels
    pub bucket_size: u32,
    /// Base seed for per-pixel jitter
    pub seed: u64,
    pub tracer: TracerSettings,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            samples_per_pixel: 1,
            bucket_size: DEFAULT_BUCKET_SIZE,
            seed: 0,
            tracer: TracerSettings::default(),
        }
    }
}

impl RenderConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Render a single pixel, averaging over its anti-aliasing rays.
///
/// The jitter generator is seeded from the pixel coordinates, so a pixel
/// renders the same regardless of which thread or bucket picks it up.
pub fn render_pixel(
    camera: &Camera,
    tracer: &dyn RayTracer,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let mut rng = StdRng::seed_from_u64(config.seed ^ (u64::from(y) << 32 | u64::from(x)));
    let rays = camera.pixel_rays(x, y, config.samples_per_pixel, &mut rng);
    let sum: Color = rays.iter().map(|ray| tracer.trace_ray(ray)).sum();
    sum / rays.len() as f64
}

/// Render output in linear 0-255 color.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = result.bucket;
        for (k, color) in result.pixels.iter().enumerate() {
            let dx = k as u32 % bucket.width;
            let dy = k as u32 / bucket.width;
            self.set(bucket.x + dx, bucket.y + dy, *color);
        }
    }

    /// Paint every `interval`-th row and column with `color`.
    pub fn print_grid(&mut self, interval: u32, color: Color) {
        if interval == 0 {
            return;
        }
        for y in 0..self.height {
            for x in 0..self.width {
                if x % interval == 0 || y % interval == 0 {
                    self.set(x, y, color);
                }
            }
        }
    }

    /// Convert to packed RGB bytes, clamping each channel to 0-255.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| {
                let c = c.clamp(Color::ZERO, Color::splat(255.0));
                [c.x as u8, c.y as u8, c.z as u8]
            })
            .collect()
    }

    /// Write the image. The format follows the file extension (png, ppm, ...).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        log::info!("Image saved as {}", path.display());
        Ok(())
    }
}

/// Render the full image on a rayon pool.
pub fn render(
    camera: &Camera,
    tracer: &dyn RayTracer,
    config: &RenderConfig,
) -> Result<ImageBuffer, RenderError> {
    if config.bucket_size == 0 {
        return Err(RenderError::ZeroBucketSize);
    }

    let (width, height) = camera.resolution();
    let buckets = generate_buckets(width, height, config.bucket_size);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    log::info!(
        "Rendering {}x{} in {} buckets on {} threads ({} spp)",
        width,
        height,
        buckets.len(),
        pool.current_num_threads(),
        config.samples_per_pixel.max(1)
    );

    let start = Instant::now();
    let done = AtomicUsize::new(0);
    let total = buckets.len();

    let results: Vec<BucketResult> = pool.install(|| {
        buckets
            .par_iter()
            .map(|bucket| {
                let pixels = render_bucket(bucket, camera, tracer, config);
                let n = done.fetch_add(1, Ordering::Relaxed) + 1;
                log::debug!("bucket {} done ({}/{})", bucket.index, n, total);
                BucketResult::new(*bucket, pixels)
            })
            .collect()
    });

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Render completed in {:.2?}", start.elapsed());
    Ok(image)
}
