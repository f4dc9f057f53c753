//! Recursive ray tracing with mirror reflections.

use sable_core::Scene;
use sable_math::{blend, reflect, tint, Color, Interval, Ray};

use crate::hittable::closest_hit;
use crate::shading::compute_lighting;
use crate::RenderConfig;

/// Compute the colour seen along `ray`.
///
/// Rays that escape return `config.background`. On a hit the surface is
/// shaded locally, and if it is reflective and `depth` allows another
/// bounce, the mirror ray is traced and mixed in by the surface's
/// reflectivity. `depth` counts remaining bounces, so `0` means local
/// shading only.
pub fn trace_ray(
    ray: &Ray,
    ray_t: Interval,
    depth: u32,
    scene: &Scene,
    config: &RenderConfig,
) -> Color {
    let Some(hit) = closest_hit(ray, ray_t, scene) else {
        return config.background;
    };

    let sphere = hit.sphere;
    let point = ray.at(hit.t);
    // Radius is always positive, so this is never the zero fallback.
    let normal = (point - sphere.center()).normalize_or_zero();
    let view = -ray.direction();

    let lighting = compute_lighting(point, normal, view, sphere.specular(), scene, config);
    let local = tint(sphere.color(), lighting);

    if depth == 0 || !sphere.is_reflective() || !config.reflections {
        return local;
    }

    let bounce = Ray::new(point, reflect(view, normal));
    let reflected = trace_ray(
        &bounce,
        Interval::from_min(config.epsilon),
        depth - 1,
        scene,
        config,
    );

    blend(local, reflected, sphere.reflectivity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sable_core::{Light, Sphere};
    use sable_math::{DVec3, WHITE};

    fn mirror_pair(reflectivity: f64) -> Scene {
        // Camera ray hits the near sphere; its mirror ray heads back past
        // the camera into a blue sphere behind it.
        Scene::new("mirrors")
            .with_sphere(
                Sphere::new(
                    DVec3::new(0.0, 0.0, 5.0),
                    1.0,
                    DVec3::new(255.0, 0.0, 0.0),
                    None,
                    reflectivity,
                )
                .unwrap(),
            )
            .with_sphere(Sphere::matte(DVec3::new(0.0, 0.0, -5.0), 1.0, DVec3::new(0.0, 0.0, 255.0)).unwrap())
            .with_light(Light::ambient(1.0))
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = mirror_pair(0.5);
        let config = RenderConfig::default();
        for direction in [DVec3::X, DVec3::Y, DVec3::new(1.0, 1.0, 1.0)] {
            let color = trace_ray(&Ray::new(DVec3::ZERO, direction), Interval::from_min(1.0), 3, &scene, &config);
            assert_eq!(color, WHITE);
        }

        let black = config.with_background(DVec3::ZERO);
        let color = trace_ray(&Ray::new(DVec3::ZERO, DVec3::X), Interval::from_min(1.0), 3, &scene, &black);
        assert_eq!(color, DVec3::ZERO);
    }

    #[test]
    fn test_near_clip_skips_geometry() {
        let scene = mirror_pair(0.0);
        let config = RenderConfig::default();
        // Both roots of the near sphere lie before t = 10.
        let color = trace_ray(&Ray::new(DVec3::ZERO, DVec3::Z), Interval::from_min(10.0), 3, &scene, &config);
        assert_eq!(color, WHITE);
    }

    #[test]
    fn test_local_color_at_depth_zero() {
        let scene = mirror_pair(0.5);
        let config = RenderConfig::default();
        let color = trace_ray(&Ray::new(DVec3::ZERO, DVec3::Z), Interval::from_min(1.0), 0, &scene, &config);
        assert_eq!(color, DVec3::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn test_reflection_blends() {
        let scene = mirror_pair(0.5);
        let config = RenderConfig::default();
        let color = trace_ray(&Ray::new(DVec3::ZERO, DVec3::Z), Interval::from_min(1.0), 1, &scene, &config);
        assert!((color - DVec3::new(127.5, 0.0, 127.5)).abs().max_element() < 1e-3);

        let off = config.with_reflections(false);
        let color = trace_ray(&Ray::new(DVec3::ZERO, DVec3::Z), Interval::from_min(1.0), 1, &scene, &off);
        assert_eq!(color, DVec3::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn test_depth_does_not_matter_when_matte() {
        let scene = mirror_pair(0.0);
        let config = RenderConfig::default();
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.1, -0.05, 1.0));
        let shallow = trace_ray(&ray, Interval::from_min(1.0), 0, &scene, &config);
        for depth in 1..6 {
            assert_eq!(trace_ray(&ray, Interval::from_min(1.0), depth, &scene, &config), shallow);
        }
    }
}
