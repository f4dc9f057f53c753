//! Local illumination: ambient, diffuse and specular terms with shadows.

use sable_core::{Light, Scene};
use sable_math::{reflect, Interval, Ray, DVec3};

use crate::hittable::occluded;
use crate::RenderConfig;

/// Sum the light reaching `point` from every light in the scene.
///
/// `normal` must be unit length. `view` points from the surface back
/// towards the viewer and may have any length. `specular` is the
/// surface's shininess exponent, `None` for matte surfaces.
///
/// The result is a per-channel intensity multiplier and is deliberately
/// left unclamped: several bright lights may push it above 1.
pub fn compute_lighting(
    point: DVec3,
    normal: DVec3,
    view: DVec3,
    specular: Option<f64>,
    scene: &Scene,
    config: &RenderConfig,
) -> DVec3 {
    let mut total = DVec3::ZERO;

    for light in scene.lights() {
        let intensity = light_intensity(light, config);

        let (to_light, shadow_range) = match *light {
            Light::Ambient { .. } => {
                total += intensity;
                continue;
            }
            Light::Point { position, .. } => (position - point, Interval::new(config.epsilon, 1.0)),
            Light::Directional { direction, .. } => {
                (direction, Interval::from_min(config.epsilon))
            }
        };

        // A point light sitting exactly on the surface has no direction.
        let distance_squared = to_light.length_squared();
        if distance_squared == 0.0 {
            continue;
        }

        if config.shadows && occluded(&Ray::new(point, to_light), shadow_range, scene) {
            continue;
        }

        let intensity = match light {
            Light::Point { .. } if config.inverse_square_falloff => intensity / distance_squared,
            _ => intensity,
        };

        total += diffuse(normal, to_light, intensity);
        if let Some(exponent) = specular {
            total += highlight(normal, to_light, view, exponent, intensity);
        }
    }

    total
}

/// Intensity of `light`, collapsed to grey when colour lighting is off.
fn light_intensity(light: &Light, config: &RenderConfig) -> DVec3 {
    let intensity = light.intensity();
    if config.per_channel_intensity {
        intensity
    } else {
        DVec3::splat(intensity.element_sum() / 3.0)
    }
}

/// Lambertian term. Surfaces facing away from the light receive nothing.
fn diffuse(normal: DVec3, to_light: DVec3, intensity: DVec3) -> DVec3 {
    let n_dot_l = normal.dot(to_light);
    if n_dot_l > 0.0 {
        intensity * n_dot_l / to_light.length()
    } else {
        DVec3::ZERO
    }
}

/// Phong highlight.
fn highlight(normal: DVec3, to_light: DVec3, view: DVec3, exponent: f64, intensity: DVec3) -> DVec3 {
    let reflected = reflect(to_light, normal);
    let r_dot_v = reflected.dot(view);
    if r_dot_v <= 0.0 {
        return DVec3::ZERO;
    }

    let cos = r_dot_v / (reflected.length() * view.length());
    intensity * cos.powf(exponent)
}
