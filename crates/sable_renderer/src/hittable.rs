//! Ray-sphere intersection and nearest-hit search.

use sable_core::{Scene, Sphere};
use sable_math::{Interval, Ray};

/// The nearest surface a ray reaches.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Sphere that was hit
    pub sphere: &'a Sphere,
    /// Ray parameter of the intersection
    pub t: f64,
}

/// Trait for things rays can hit.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection with `t` inside `ray_t` (inclusive).
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>>;
}

/// Solve `|o + t*d - c|^2 = r^2` for `t`.
///
/// Returns both roots `((-b + sqrt(disc)) / 2a, (-b - sqrt(disc)) / 2a)`,
/// which may coincide for a tangent ray and may lie behind the origin.
/// A miss reports `(+inf, +inf)`.
pub fn intersect(ray: &Ray, sphere: &Sphere) -> (f64, f64) {
    let oc = ray.origin() - sphere.center();
    let d = ray.direction();
    let r = sphere.radius();

    let a = d.dot(d);
    let b = 2.0 * oc.dot(d);
    let c = oc.dot(oc) - r * r;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return (f64::INFINITY, f64::INFINITY);
    }

    let sqrtd = discriminant.sqrt();
    ((-b + sqrtd) / (2.0 * a), (-b - sqrtd) / (2.0 * a))
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let (t1, t2) = intersect(ray, self);
        [t2, t1]
            .into_iter()
            .filter(|t| t.is_finite() && ray_t.contains(*t))
            .reduce(f64::min)
            .map(|t| Hit { sphere: self, t })
    }
}

impl Hittable for Scene {
    /// Brute-force scan over every sphere.
    ///
    /// Exact ties between spheres go to the one listed last.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let mut closest = None;
        let mut closest_so_far = ray_t.max;

        for sphere in self.spheres() {
            if let Some(hit) = sphere.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = hit.t;
                closest = Some(hit);
            }
        }

        closest
    }
}

/// Nearest sphere hit by `ray` within `ray_t`, if any.
pub fn closest_hit<'a>(ray: &Ray, ray_t: Interval, scene: &'a Scene) -> Option<Hit<'a>> {
    scene.hit(ray, ray_t)
}

/// True if anything blocks `ray` within `ray_t`.
pub fn occluded(ray: &Ray, ray_t: Interval, scene: &Scene) -> bool {
    closest_hit(ray, ray_t, scene).is_some()
}
