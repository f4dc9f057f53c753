//! Vector helpers that glam does not provide in the shape we need.

use glam::DVec3;
use thiserror::Error;

/// Errors from vector operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize degenerate vector ({x}, {y}, {z})")]
    DegenerateVector { x: f64, y: f64, z: f64 },
}

/// Normalize `v`, failing on zero-length or non-finite input.
pub fn unit_vector(v: DVec3) -> Result<DVec3, MathError> {
    v.try_normalize().ok_or(MathError::DegenerateVector {
        x: v.x,
        y: v.y,
        z: v.z,
    })
}

/// Mirror `v` about the normal `n`: `2 * n * dot(n, v) - v`.
///
/// Unlike `glam`'s incident-ray convention, `v` points *away* from the
/// surface (towards a light or the viewer) and so does the result.
/// `n` must be unit length.
#[inline]
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    2.0 * n * n.dot(v) - v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_vector() {
        let v = unit_vector(DVec3::new(3.0, 0.0, 4.0)).unwrap();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v - DVec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_unit_vector_zero_is_degenerate() {
        let err = unit_vector(DVec3::ZERO).unwrap_err();
        assert!(matches!(err, MathError::DegenerateVector { .. }));
    }

    #[test]
    fn test_unit_vector_nan_is_degenerate() {
        assert!(unit_vector(DVec3::new(f64::NAN, 1.0, 0.0)).is_err());
    }

    #[test]
    fn test_reflect_about_normal() {
        // Light coming in at 45 degrees leaves at 45 degrees on the other side
        let n = DVec3::Y;
        let l = DVec3::new(1.0, 1.0, 0.0);
        assert_eq!(reflect(l, n), DVec3::new(-1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_along_normal_is_identity() {
        let n = DVec3::Z;
        assert_eq!(reflect(DVec3::new(0.0, 0.0, 2.0), n), DVec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_reflect_preserves_length() {
        let n = unit_vector(DVec3::new(1.0, 2.0, -1.0)).unwrap();
        let v = DVec3::new(0.3, -4.0, 2.5);
        assert!((reflect(v, n).length() - v.length()).abs() < 1e-4);
    }
}
