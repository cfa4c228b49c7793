//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel using rayon.

use crate::renderer::render_pixel;
use crate::{Camera, RayTracer, RenderConfig};
use lumen_math::Color;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Squared distance from the bucket center to `(cx, cy)`.
    fn distance_squared_to(&self, cx: f64, cy: f64) -> f64 {
        let bx = self.x as f64 + self.width as f64 / 2.0;
        let by = self.y as f64 + self.height as f64 / 2.0;
        (bx - cx).powi(2) + (by - cy).powi(2)
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Tile a `width x height` image and order the tiles from the center out.
///
/// Edge buckets are clipped to the image. `bucket_size` must be positive.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let step = bucket_size.max(1) as usize;
    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(step)
        .flat_map(|y| {
            (0..width).step_by(step).map(move |x| {
                let bw = bucket_size.min(width - x);
                let bh = bucket_size.min(height - y);
                Bucket::new(x, y, bw, bh, 0)
            })
        })
        .collect();

    // Center first; stable sort keeps row-major order among ties
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
    buckets.sort_by(|a, b| {
        a.distance_squared_to(cx, cy)
            .partial_cmp(&b.distance_squared_to(cx, cy))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }
    buckets
}

/// Render a single bucket. Pixels come back in row-major order.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    tracer: &dyn RayTracer,
    config: &RenderConfig,
) -> Vec<Color> {
    (bucket.y..bucket.y + bucket.height)
        .flat_map(|y| (bucket.x..bucket.x + bucket.width).map(move |x| (x, y)))
        .map(|(x, y)| render_pixel(camera, tracer, x, y, config))
        .collect()
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}
