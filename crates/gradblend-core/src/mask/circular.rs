//! Circular gradient mask implementation
//!
//! The boundary is a circle around the pivot. Alpha ramps across a band
//! `transition_width` wide centred on the circle edge.

use super::{ramp_alpha, to_alpha_byte};
use crate::buffer::{PixelBuffer, ALPHA, CHANNELS};
use crate::Point;

/// Circular gradient mask.
///
/// Without `invert` the inside of the circle is transparent and the outside
/// opaque; `invert` swaps the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularMask {
    /// Circle center (pixel space)
    pub center: Point,
    /// Circle radius in pixels
    pub radius: f64,
    /// Full width of the alpha ramp, in pixels
    pub transition_width: f64,
    /// Flip which side of the circle is opaque
    pub invert: bool,
}

impl CircularMask {
    /// Create a new circular gradient mask.
    ///
    /// # Arguments
    /// * `center` - Circle center in pixel space
    /// * `radius` - Distance from the center to the middle of the fade
    /// * `transition_width` - Width of the fade band in pixels
    /// * `invert` - Swap the inside and outside
    pub fn new(center: Point, radius: f64, transition_width: f64, invert: bool) -> Self {
        Self {
            center,
            radius,
            transition_width,
            invert,
        }
    }

    /// Signed distance from `(x, y)` to the circle edge: negative inside,
    /// positive outside.
    pub fn signed_distance(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        (dx * dx + dy * dy).sqrt() - self.radius
    }

    /// Unclamped alpha at `(x, y)`.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        ramp_alpha(self.signed_distance(x, y), self.transition_width, self.invert)
    }

    /// Overwrite the alpha channel of every pixel in `buffer`.
    pub fn draw(&self, buffer: &mut PixelBuffer) {
        let width = buffer.width() as usize;
        if width == 0 {
            return;
        }
        for (idx, px) in buffer.as_raw_mut().chunks_exact_mut(CHANNELS).enumerate() {
            let x = (idx % width) as f64;
            let y = (idx / width) as f64;
            px[ALPHA] = to_alpha_byte(self.evaluate(x, y));
        }
    }
}

/// Write a circular gradient into `buffer`'s alpha channel, in place.
///
/// RGB channels are left untouched. Returns the same buffer for chaining.
pub fn draw_circular(
    buffer: &mut PixelBuffer,
    radius: f64,
    center: Point,
    transition_width: f64,
    invert: bool,
) -> &mut PixelBuffer {
    CircularMask::new(center, radius, transition_width, invert).draw(buffer);
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(invert: bool) -> PixelBuffer {
        let mut buf = PixelBuffer::filled(10, 10, [200, 100, 50, 0]);
        draw_circular(&mut buf, 3.0, Point::new(5.0, 5.0), 4.0, invert);
        buf
    }

    #[test]
    fn test_center_is_transparent() {
        // dist - radius = -3 -> 128 - 192 -> clamped to 0
        let buf = scenario(false);
        assert_eq!(buf.alpha(5, 5), Some(0));
    }

    #[test]
    fn test_on_circle_is_half() {
        let buf = scenario(false);
        assert_eq!(buf.alpha(5, 2), Some(128));
        assert_eq!(buf.alpha(8, 5), Some(128));
        assert_eq!(buf.alpha(2, 5), Some(128));
    }

    #[test]
    fn test_outside_saturates() {
        // (5, 0) is 5 from the center: dist - radius = 2 -> 256 -> 255
        let buf = scenario(false);
        assert_eq!(buf.alpha(5, 0), Some(255));
        assert_eq!(buf.alpha(0, 0), Some(255));
    }

    #[test]
    fn test_inside_ramp() {
        // (5, 3) is 2 from the center: dist - radius = -1 -> 64
        let buf = scenario(false);
        assert_eq!(buf.alpha(5, 3), Some(64));
        // (5, 1) is 4 from the center: dist - radius = 1 -> 192
        assert_eq!(buf.alpha(5, 1), Some(192));
    }

    #[test]
    fn test_invert_scenario() {
        let buf = scenario(true);
        assert_eq!(buf.alpha(5, 5), Some(255));
        assert_eq!(buf.alpha(5, 2), Some(128));
        assert_eq!(buf.alpha(5, 0), Some(0));
        assert_eq!(buf.alpha(5, 3), Some(192));
        assert_eq!(buf.alpha(5, 1), Some(64));
    }

    #[test]
    fn test_rgb_untouched() {
        let buf = scenario(false);
        for px in buf.as_raw().chunks_exact(4) {
            assert_eq!(&px[..3], &[200, 100, 50]);
        }
    }

    #[test]
    fn test_radial_symmetry() {
        let buf = scenario(false);
        let a = buf.alpha(7, 5).unwrap();
        assert_eq!(buf.alpha(3, 5).unwrap(), a);
        assert_eq!(buf.alpha(5, 7).unwrap(), a);
        assert_eq!(buf.alpha(5, 3).unwrap(), a);
    }

    #[test]
    fn test_zero_radius() {
        let mask = CircularMask::new(Point::new(0.0, 0.0), 0.0, 10.0, false);
        assert_eq!(mask.evaluate(0.0, 0.0), 128.0);
        assert_eq!(mask.evaluate(5.0, 0.0), 256.0);
    }

    #[test]
    fn test_zero_transition_width_is_hard_step() {
        let mut buf = PixelBuffer::filled(10, 1, [0; 4]);
        draw_circular(&mut buf, 3.0, Point::new(5.0, 0.0), 0.0, false);

        let alphas: Vec<u8> = (0..10).map(|x| buf.alpha(x, 0).unwrap()).collect();
        // |x - 5| < 3 inside, == 3 on the edge (NaN), > 3 outside
        assert_eq!(alphas, vec![255, 255, 0, 0, 0, 0, 0, 0, 0, 255]);
    }

    #[test]
    fn test_center_outside_buffer() {
        let mut buf = PixelBuffer::filled(4, 4, [0; 4]);
        draw_circular(&mut buf, 1.0, Point::new(1000.0, 1000.0), 4.0, false);
        assert!(buf.as_raw().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf = PixelBuffer::new(0, 3, vec![]).unwrap();
        draw_circular(&mut buf, 3.0, Point::new(0.0, 0.0), 4.0, false);
        assert!(buf.as_raw().is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
