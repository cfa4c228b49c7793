//! Lumen Renderer - recursive Phong ray tracing.
//!
//! Shades rays against a [`lumen_core::Scene`] with:
//! - Local diffuse and specular lighting per light source
//! - Hard shadows through transparent occluders
//! - Soft shadows by sampling disk-shaped lights
//! - Recursive reflection and refraction bounded by depth and attenuation
//!
//! Images are rendered in parallel buckets and written as PNG or PPM.

mod bucket;
mod camera;
mod renderer;
mod settings;
mod target_area;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, CameraBuilder, CameraError};
pub use renderer::{render, render_pixel, ImageBuffer, RenderConfig, RenderError};
pub use settings::TracerSettings;
pub use target_area::TargetArea;
pub use tracer::{RayTracer, SimpleRayTracer};
