//! WASM-compatible wrapper types for pixel data.
//!
//! This module provides JavaScript-friendly types that wrap the core gradblend
//! types, handling the conversion between Rust and JavaScript data representations.

use gradblend_core::{BlendError, PixelBuffer};
use wasm_bindgen::prelude::*;

/// An RGBA pixel buffer wrapper for JavaScript.
///
/// Holds the same bytes as a canvas `ImageData`: 4 bytes per pixel,
/// row-major.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. `to_clamped_array()` returns a
/// `Uint8ClampedArray` ready for `new ImageData(array, width)`.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new JsPixelBuffer from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    ///
    /// The length is checked when the buffer is first used.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsPixelBuffer {
        JsPixelBuffer {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4 for RGBA)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA pixel data as a Uint8ClampedArray for `ImageData`.
    pub fn to_clamped_array(&self) -> js_sys::Uint8ClampedArray {
        js_sys::Uint8ClampedArray::from(self.pixels.as_slice())
    }
}

impl JsPixelBuffer {
    pub(crate) fn from_core(buffer: PixelBuffer) -> Self {
        let (width, height) = buffer.dimensions();
        Self {
            width,
            height,
            pixels: buffer.into_raw(),
        }
    }

    /// Validate and copy into a core buffer.
    pub(crate) fn to_core(&self) -> Result<PixelBuffer, BlendError> {
        PixelBuffer::new(self.width, self.height, self.pixels.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_pixel_buffer_creation() {
        let buf = JsPixelBuffer::new(100, 50, vec![0u8; 100 * 50 * 4]);
        assert_eq!(buf.width(), 100);
        assert_eq!(buf.height(), 50);
        assert_eq!(buf.byte_length(), 20000);
    }

    #[test]
    fn test_from_core() {
        let core = PixelBuffer::filled(3, 2, [1, 2, 3, 4]);
        let js = JsPixelBuffer::from_core(core);
        assert_eq!(js.width(), 3);
        assert_eq!(js.height(), 2);
        assert_eq!(&js.pixels()[..4], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_to_core_validates_length() {
        let good = JsPixelBuffer::new(2, 2, vec![0u8; 16]);
        assert!(good.to_core().is_ok());

        let bad = JsPixelBuffer::new(2, 2, vec![0u8; 12]);
        assert!(matches!(
            bad.to_core(),
            Err(BlendError::InvalidPixelData {
                expected: 16,
                actual: 12
            })
        ));
    }

    #[test]
    fn test_to_core_rejects_overflowing_dimensions() {
        let huge = JsPixelBuffer::new(u32::MAX, u32::MAX, vec![]);
        assert!(matches!(
            huge.to_core(),
            Err(BlendError::ImageTooLarge { .. })
        ));
    }
}
