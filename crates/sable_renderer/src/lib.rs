//! Sable Renderer - CPU recursive ray tracing.
//!
//! A Whitted-style ray tracer for sphere scenes:
//! - Ray-sphere intersection with brute-force nearest-hit search
//! - Ambient, diffuse and specular lighting with hard shadows
//! - Recursive mirror reflections with a depth bound
//! - Sequential and bucketed parallel frame rendering to RGBA8

mod bucket;
mod error;
mod framebuffer;
mod hittable;
mod renderer;
mod shading;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use error::{RenderError, RenderResult};
pub use framebuffer::{canvas_to_viewport, pixel_to_canvas, PixelBuffer};
pub use hittable::{closest_hit, intersect, occluded, Hit, Hittable};
pub use renderer::{render, render_into, render_pixel, RenderConfig};
pub use shading::compute_lighting;
pub use tracer::trace_ray;

/// Re-export scene and math types used in the public API
pub use sable_core::{Light, Scene, Sphere};
pub use sable_math::{Color, Interval, Ray, DVec3};
