//! Frame rendering.
//!
//! Every pixel is traced independently from the camera at the origin.
//! One kernel covers all feature combinations; `RenderConfig` switches
//! shadows, reflections, colour lighting and light falloff per render.

use std::time::Instant;

use sable_core::Scene;
use sable_math::{color_to_rgba, Color, Interval, Ray, DVec3, WHITE};

use crate::error::{RenderError, RenderResult};
use crate::framebuffer::{canvas_to_viewport, pixel_to_canvas, PixelBuffer};
use crate::tracer::trace_ray;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum number of reflection bounces
    pub max_depth: u32,
    /// Color when a ray doesn't hit anything (0-255)
    pub background: Color,
    /// Minimum ray parameter for camera rays
    pub near_clip: f64,
    /// Minimum ray parameter for shadow and reflection rays
    pub epsilon: f64,
    /// Test lights for occlusion
    pub shadows: bool,
    /// Trace mirror reflections
    pub reflections: bool,
    /// Keep coloured light intensities (otherwise average to grey)
    pub per_channel_intensity: bool,
    /// Dim point lights by the square of their distance
    pub inverse_square_falloff: bool,
    /// Tile size for the parallel renderer
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            background: WHITE,
            near_clip: 1.0,
            epsilon: 0.001,
            shadows: true,
            reflections: true,
            per_channel_intensity: true,
            inverse_square_falloff: true,
            bucket_size: crate::bucket::DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_near_clip(mut self, near_clip: f64) -> Self {
        self.near_clip = near_clip;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_shadows(mut self, shadows: bool) -> Self {
        self.shadows = shadows;
        self
    }

    pub fn with_reflections(mut self, reflections: bool) -> Self {
        self.reflections = reflections;
        self
    }

    pub fn with_per_channel_intensity(mut self, per_channel: bool) -> Self {
        self.per_channel_intensity = per_channel;
        self
    }

    pub fn with_inverse_square_falloff(mut self, falloff: bool) -> Self {
        self.inverse_square_falloff = falloff;
        self
    }

    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Check that the configuration can drive a render.
    pub fn validate(&self) -> RenderResult<()> {
        if !(self.near_clip.is_finite() && self.near_clip >= 0.0) {
            return Err(RenderError::InvalidParameter(format!(
                "near clip must be finite and non-negative, got {}",
                self.near_clip
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(RenderError::InvalidParameter(format!(
                "epsilon must be finite and positive, got {}",
                self.epsilon
            )));
        }
        let bg = self.background;
        if !bg.is_finite() || bg.min_element() < 0.0 || bg.max_element() > 255.0 {
            return Err(RenderError::InvalidParameter(format!(
                "background channels must be in [0, 255], got {bg}"
            )));
        }
        if self.bucket_size == 0 {
            return Err(RenderError::InvalidParameter(
                "bucket size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Check image dimensions and configuration before a render starts.
pub(crate) fn check_frame(width: u32, height: u32, config: &RenderConfig) -> RenderResult<()> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidParameter(format!(
            "image size must be positive, got {width}x{height}"
        )));
    }
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(RenderError::InvalidParameter(format!(
            "image size {width}x{height} is too large"
        )));
    }
    config.validate()
}

/// Trace the camera ray through pixel (px, py).
pub fn render_pixel(
    scene: &Scene,
    px: u32,
    py: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Color {
    let (x, y) = pixel_to_canvas(px, py, width, height);
    let direction = canvas_to_viewport(x, y, width, height);
    let ray = Ray::new(DVec3::ZERO, direction);
    trace_ray(
        &ray,
        Interval::from_min(config.near_clip),
        config.max_depth,
        scene,
        config,
    )
}

/// Render the scene into a caller-supplied buffer, one pixel at a time.
pub fn render_into(
    scene: &Scene,
    image: &mut PixelBuffer,
    config: &RenderConfig,
) -> RenderResult<()> {
    let (width, height) = (image.width(), image.height());
    check_frame(width, height, config)?;

    log::info!(
        "Rendering '{}' at {}x{} ({} spheres, {} lights, depth {})",
        scene.name(),
        width,
        height,
        scene.sphere_count(),
        scene.light_count(),
        config.max_depth
    );
    let start = Instant::now();

    for (py, row) in image.rows_mut().enumerate() {
        for (px, pixel) in row.iter_mut().enumerate() {
            let color = render_pixel(scene, px as u32, py as u32, width, height, config);
            *pixel = color_to_rgba(color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(())
}

/// Render the entire scene to a new pixel buffer.
///
/// This is the single-threaded reference path; see
/// [`render_parallel`](crate::render_parallel) for the bucketed version.
pub fn render(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> RenderResult<PixelBuffer> {
    check_frame(width, height, config)?;
    let mut image = PixelBuffer::new(width, height);
    render_into(scene, &mut image, config)?;
    Ok(image)
}
