//! 8-bit-range colour helpers.
//!
//! Colours are `DVec3`s with channels nominally in `[0, 255]`. Light
//! intensities are also `DVec3`s but are unbounded; clamping happens only
//! when an intensity tints a colour, when two colours blend, and when a
//! colour is written out as bytes.

use crate::Interval;
use glam::DVec3;

/// Color type alias (RGB values 0-255)
pub type Color = DVec3;

/// Pure white, the background for rays that escape the scene.
pub const WHITE: Color = DVec3::splat(255.0);

/// Pure black.
pub const BLACK: Color = DVec3::ZERO;

const CHANNEL: Interval = Interval {
    min: 0.0,
    max: 255.0,
};

/// Clamp every channel to `[0, 255]`.
#[inline]
pub fn clamp_color(color: Color) -> Color {
    DVec3::new(
        CHANNEL.clamp(color.x),
        CHANNEL.clamp(color.y),
        CHANNEL.clamp(color.z),
    )
}

/// Tint a surface colour by a (possibly over-bright) light intensity.
#[inline]
pub fn tint(color: Color, intensity: DVec3) -> Color {
    clamp_color(color * intensity)
}

/// Mix `a` and `b`, taking fraction `t` from `b`.
#[inline]
pub fn blend(a: Color, b: Color, t: f64) -> Color {
    clamp_color(clamp_color(a * (1.0 - t)) + clamp_color(b * t))
}

/// Convert a colour to 8-bit RGBA with full alpha.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = clamp_color(color);
    [
        c.x.round() as u8,
        c.y.round() as u8,
        c.z.round() as u8,
        255,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_color() {
        let c = clamp_color(DVec3::new(-10.0, 128.0, 400.0));
        assert_eq!(c, DVec3::new(0.0, 128.0, 255.0));
    }

    #[test]
    fn test_clamp_color_is_idempotent() {
        let samples = [
            DVec3::new(-1.0, 0.0, 1.0),
            DVec3::new(254.9, 255.0, 255.1),
            DVec3::new(1e9, -1e9, 42.0),
            DVec3::new(0.5, 100.25, 200.75),
        ];
        for c in samples {
            let once = clamp_color(c);
            assert_eq!(clamp_color(once), once);
        }
    }

    #[test]
    fn test_tint_clamps_over_bright_light() {
        let red = DVec3::new(255.0, 0.0, 0.0);
        assert_eq!(tint(red, DVec3::splat(2.0)), red);
        assert_eq!(tint(red, DVec3::splat(0.2)), DVec3::new(51.0, 0.0, 0.0));
    }

    #[test]
    fn test_tint_per_channel() {
        let white = WHITE;
        let c = tint(white, DVec3::new(1.0, 0.5, 0.0));
        assert_eq!(c, DVec3::new(255.0, 127.5, 0.0));
    }

    #[test]
    fn test_blend_endpoints() {
        let a = DVec3::new(200.0, 0.0, 0.0);
        let b = DVec3::new(0.0, 0.0, 100.0);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), DVec3::new(100.0, 0.0, 50.0));
    }

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(WHITE), [255, 255, 255, 255]);
        assert_eq!(color_to_rgba(BLACK), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(DVec3::new(51.2, 127.6, 300.0)), [51, 128, 255, 255]);
        assert_eq!(color_to_rgba(DVec3::new(-3.0, 0.4, 0.6)), [0, 0, 1, 255]);
    }
}
