//! RGBA pixel buffer used as both generator input and output.

use crate::error::BlendError;
use image::RgbaImage;

/// Number of bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Offset of the alpha channel within a pixel.
pub const ALPHA: usize = 3;

/// A `width × height` grid of RGBA8 pixels in row-major order.
///
/// Channel `c` of pixel `(x, y)` lives at `(x + y * width) * 4 + c`.
/// Dimensions are fixed once constructed; the mask generators only ever
/// write the alpha channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, validating the length against the dimensions.
    ///
    /// # Errors
    /// - [`BlendError::ImageTooLarge`] if `width * height * 4` overflows `usize`
    /// - [`BlendError::InvalidPixelData`] if `data` has the wrong length
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BlendError> {
        let expected =
            byte_len(width, height).ok_or(BlendError::ImageTooLarge { width, height })?;
        if data.len() != expected {
            return Err(BlendError::InvalidPixelData {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer where every pixel has the same RGBA value.
    ///
    /// # Panics
    /// Panics if `width * height * 4` overflows `usize`, like
    /// `RgbaImage::new`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let Some(len) = byte_len(width, height) else {
            panic!("{}", BlendError::ImageTooLarge { width, height });
        };
        let data = rgba.iter().copied().cycle().take(len).collect();
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` pair.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its raw RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get the RGBA value at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.index_of(x, y)?;
        let px = &self.data[idx..idx + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Get the alpha value at `(x, y)`, or `None` outside the buffer.
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        self.index_of(x, y).map(|idx| self.data[idx + ALPHA])
    }

    /// Fail with [`BlendError::DimensionMismatch`] unless `other` has the
    /// same width and height as `self`.
    pub fn ensure_same_dimensions(&self, other: &PixelBuffer) -> Result<(), BlendError> {
        other.ensure_dimensions(self.width, self.height)
    }

    /// Fail with [`BlendError::DimensionMismatch`] unless `self` is
    /// exactly `width × height`.
    pub fn ensure_dimensions(&self, width: u32, height: u32) -> Result<(), BlendError> {
        if self.dimensions() != (width, height) {
            return Err(BlendError::DimensionMismatch {
                expected_width: width,
                expected_height: height,
                actual_width: self.width,
                actual_height: self.height,
            });
        }
        Ok(())
    }

    /// Convert to an `image` crate buffer.
    pub fn into_rgba_image(self) -> RgbaImage {
        let (width, height) = self.dimensions();
        // Length is validated at construction, so from_raw cannot fail.
        RgbaImage::from_raw(width, height, self.data).unwrap_or_else(|| RgbaImage::new(width, height))
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((x as usize + y as usize * self.width as usize) * CHANNELS)
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_length() {
        let ok = PixelBuffer::new(2, 2, vec![0u8; 16]);
        assert!(ok.is_ok());

        let err = PixelBuffer::new(2, 2, vec![0u8; 15]).unwrap_err();
        assert_eq!(
            err,
            BlendError::InvalidPixelData {
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        // 65536 * 65536 * 4 wraps a 32-bit usize to 0
        let err = PixelBuffer::new(65536, 65536, vec![]).unwrap_err();
        if usize::BITS <= 32 {
            assert_eq!(
                err,
                BlendError::ImageTooLarge {
                    width: 65536,
                    height: 65536
                }
            );
        }

        let err = PixelBuffer::new(u32::MAX, u32::MAX, vec![]).unwrap_err();
        assert_eq!(
            err,
            BlendError::ImageTooLarge {
                width: u32::MAX,
                height: u32::MAX
            }
        );
    }

    #[test]
    #[should_panic(expected = "Image too large")]
    fn test_filled_panics_on_overflow() {
        let _ = PixelBuffer::filled(u32::MAX, u32::MAX, [0; 4]);
    }

    #[test]
    fn test_empty_buffer() {
        let buf = PixelBuffer::new(0, 0, vec![]).unwrap();
        assert_eq!(buf.dimensions(), (0, 0));
        assert!(buf.as_raw().is_empty());
        assert_eq!(buf.pixel(0, 0), None);
    }

    #[test]
    fn test_filled() {
        let buf = PixelBuffer::filled(3, 2, [10, 20, 30, 40]);
        assert_eq!(buf.as_raw().len(), 24);
        assert_eq!(buf.pixel(2, 1), Some([10, 20, 30, 40]));
        assert_eq!(buf.alpha(0, 0), Some(40));
    }

    #[test]
    fn test_pixel_indexing_is_row_major() {
        // 2x2 image, each pixel stores its own index in the red channel
        let data = vec![
            0, 0, 0, 255, //
            1, 0, 0, 255, //
            2, 0, 0, 255, //
            3, 0, 0, 255,
        ];
        let buf = PixelBuffer::new(2, 2, data).unwrap();
        assert_eq!(buf.pixel(1, 0).unwrap()[0], 1);
        assert_eq!(buf.pixel(0, 1).unwrap()[0], 2);
        assert_eq!(buf.pixel(1, 1).unwrap()[0], 3);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let buf = PixelBuffer::filled(4, 4, [0, 0, 0, 0]);
        assert_eq!(buf.pixel(4, 0), None);
        assert_eq!(buf.alpha(0, 4), None);
    }

    #[test]
    fn test_ensure_same_dimensions() {
        let a = PixelBuffer::filled(4, 3, [0; 4]);
        let b = PixelBuffer::filled(4, 3, [255; 4]);
        let c = PixelBuffer::filled(3, 4, [0; 4]);

        assert!(a.ensure_same_dimensions(&b).is_ok());
        assert_eq!(
            a.ensure_same_dimensions(&c).unwrap_err(),
            BlendError::DimensionMismatch {
                expected_width: 4,
                expected_height: 3,
                actual_width: 3,
                actual_height: 4,
            }
        );
    }

    #[test]
    fn test_ensure_dimensions_reports_self_as_actual() {
        let buf = PixelBuffer::filled(2, 5, [0; 4]);
        assert!(buf.ensure_dimensions(2, 5).is_ok());
        assert_eq!(
            buf.ensure_dimensions(8, 6).unwrap_err(),
            BlendError::DimensionMismatch {
                expected_width: 8,
                expected_height: 6,
                actual_width: 2,
                actual_height: 5,
            }
        );
    }

    #[test]
    fn test_rgba_image_roundtrip_keeps_layout() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgba([1, 2, 3, 4]));

        let buf = PixelBuffer::from(img);
        assert_eq!(buf.pixel(2, 1), Some([1, 2, 3, 4]));

        let back = buf.into_rgba_image();
        assert_eq!(back.get_pixel(2, 1).0, [1, 2, 3, 4]);
        assert_eq!(back.dimensions(), (3, 2));
    }
}
