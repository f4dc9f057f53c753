//! Sable math - vectors, colours, rays and parametric intervals.
//!
//! Vector arithmetic comes from `glam`; this crate adds the handful of
//! ray tracing helpers built on top of it.

// Re-export glam for convenience
pub use glam::*;

mod color;
mod interval;
mod ray;
mod vector;

pub use color::{blend, clamp_color, color_to_rgba, tint, Color, BLACK, WHITE};
pub use interval::Interval;
pub use ray::Ray;
pub use vector::{reflect, unit_vector, MathError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, DVec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, DVec3::splat(3.0));
        assert_eq!(a * b, DVec3::new(4.0, 10.0, 18.0));
        assert_eq!(-a, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
    }
}
