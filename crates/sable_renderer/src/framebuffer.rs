//! Pixel buffer and the mapping from pixels to viewport rays.
//!
//! The camera sits at the origin looking down +z at a viewport one unit
//! away. Canvas coordinates are centred on the image middle, with +x to
//! the right and +y down the image.

use sable_math::DVec3;

use crate::error::{RenderError, RenderResult};

/// Convert a pixel position to centred canvas coordinates.
///
/// Column `px` maps to `x = px - width / 2` (integer division), so `x`
/// spans `[-width/2, width - width/2)`. Rows work the same way.
#[inline]
pub fn pixel_to_canvas(px: u32, py: u32, width: u32, height: u32) -> (i32, i32) {
    (
        px as i32 - (width / 2) as i32,
        py as i32 - (height / 2) as i32,
    )
}

/// Direction from the camera through canvas point `(x, y)` on the
/// unit-depth viewport.
#[inline]
pub fn canvas_to_viewport(x: i32, y: i32, width: u32, height: u32) -> DVec3 {
    DVec3::new(x as f64 / width as f64, y as f64 / height as f64, 1.0)
}

/// RGBA8 image in row-major order, ready to hand to a presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl PixelBuffer {
    /// Create a buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 255]; width as usize * height as usize],
        }
    }

    /// Wrap caller-owned RGBA bytes, `width * height * 4` long.
    pub fn from_bytes(width: u32, height: u32, bytes: Vec<u8>) -> RenderResult<Self> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(RenderError::InvalidParameter(format!(
                "buffer for {width}x{height} needs {expected} bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: bytemuck::cast_slice(&bytes).to_vec(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let index = self.index(x, y);
        self.pixels[index] = rgba;
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Mutable pixel rows, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, [u8; 4]> {
        self.pixels.chunks_exact_mut(self.width.max(1) as usize)
    }

    /// Flat `R, G, B, A` bytes, `width * height * 4` long.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Mutable flat bytes, for presentation layers that write in place.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.pixels)
    }

    /// Consume the buffer, returning the flat bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_canvas_even() {
        assert_eq!(pixel_to_canvas(0, 0, 4, 2), (-2, -1));
        assert_eq!(pixel_to_canvas(3, 1, 4, 2), (1, 0));
        assert_eq!(pixel_to_canvas(2, 1, 4, 2), (0, 0));
    }

    #[test]
    fn test_pixel_to_canvas_odd() {
        assert_eq!(pixel_to_canvas(0, 0, 1, 1), (0, 0));
        assert_eq!(pixel_to_canvas(0, 2, 3, 3), (-1, 1));
    }

    #[test]
    fn test_canvas_to_viewport() {
        assert_eq!(canvas_to_viewport(0, 0, 640, 480), DVec3::Z);
        assert_eq!(
            canvas_to_viewport(-320, 120, 640, 480),
            DVec3::new(-0.5, 0.25, 1.0)
        );
    }

    #[test]
    fn test_pixel_buffer_layout() {
        let mut buffer = PixelBuffer::new(3, 2);
        assert_eq!(buffer.len(), 6);
        assert_eq!(buffer.as_bytes().len(), 3 * 2 * 4);
        assert!(buffer.pixels().iter().all(|p| *p == [0, 0, 0, 255]));

        buffer.set(2, 1, [10, 20, 30, 255]);
        assert_eq!(buffer.get(2, 1), [10, 20, 30, 255]);

        // Row-major: (2, 1) is the last pixel
        let bytes = buffer.into_bytes();
        assert_eq!(&bytes[20..24], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_from_bytes_checks_length() {
        let buffer = PixelBuffer::from_bytes(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(buffer.get(1, 0), [5, 6, 7, 8]);

        assert!(matches!(
            PixelBuffer::from_bytes(2, 2, vec![0; 8]),
            Err(RenderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_as_bytes_mut_writes_pixels() {
        let mut buffer = PixelBuffer::new(2, 1);
        buffer.as_bytes_mut()[4..8].copy_from_slice(&[9, 8, 7, 255]);
        assert_eq!(buffer.get(1, 0), [9, 8, 7, 255]);
    }

    #[test]
    fn test_rows_mut() {
        let mut buffer = PixelBuffer::new(2, 3);
        for (y, row) in buffer.rows_mut().enumerate() {
            for pixel in row.iter_mut() {
                pixel[0] = y as u8;
            }
        }
        assert_eq!(buffer.get(1, 2)[0], 2);
        assert_eq!(buffer.get(0, 0)[0], 0);
    }
}
