//! Linear gradient mask implementation
//!
//! The boundary is a line through the pivot. Pixels on one side fade in,
//! pixels on the other fade out, over a band `transition_width` wide
//! centred on the line.

use super::{ramp_alpha, to_alpha_byte};
use crate::buffer::{PixelBuffer, ALPHA, CHANNELS};
use crate::Point;

/// Linear gradient mask.
///
/// `slope` is `tan(angle)` for the gradient angle in degrees. At 90° and 270°
/// `tan` is huge but finite in `f64`; an explicitly infinite slope is treated
/// as a vertical line through the pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMask {
    /// Line slope
    pub slope: f64,
    /// Point the line passes through (pixel space)
    pub pivot: Point,
    /// Full width of the alpha ramp, in pixels
    pub transition_width: f64,
    /// Flip which side of the line is opaque
    pub invert: bool,
}

impl LinearMask {
    /// Create a new linear gradient mask.
    ///
    /// # Arguments
    /// * `slope` - Slope of the dividing line (`tan` of the gradient angle)
    /// * `pivot` - Point the line passes through, in pixel space
    /// * `transition_width` - Width of the fade band in pixels
    /// * `invert` - Swap the opaque and transparent sides
    pub fn new(slope: f64, pivot: Point, transition_width: f64, invert: bool) -> Self {
        Self {
            slope,
            pivot,
            transition_width,
            invert,
        }
    }

    /// Build a mask from a gradient angle in degrees.
    pub fn from_angle(angle_degrees: f64, pivot: Point, transition_width: f64, invert: bool) -> Self {
        Self::new(slope_from_degrees(angle_degrees), pivot, transition_width, invert)
    }

    /// Signed perpendicular distance from `(x, y)` to the line.
    ///
    /// Positive on the side above the line in image space (smaller `y` for a
    /// horizontal line). Computed as `(-slope*x - y + A) / sqrt(slope² + 1)`
    /// with `A = slope*pivot.x + pivot.y`.
    pub fn signed_distance(&self, x: f64, y: f64) -> f64 {
        if self.slope.is_infinite() {
            return (self.pivot.x - x) * self.slope.signum();
        }
        let a = self.slope * self.pivot.x + self.pivot.y;
        let denominator = (self.slope * self.slope + 1.0).sqrt();
        (-self.slope * x - y + a) / denominator
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

/// `tan(angle · π / 180)`.
pub fn slope_from_degrees(angle_degrees: f64) -> f64 {
    (angle_degrees * std::f64::consts::PI / 180.0).tan()
}

/// Write a linear gradient into `buffer`'s alpha channel, in place.
///
/// RGB channels are left untouched. Returns the same buffer for chaining.
/// The caller owns the copy-before-mutate step; see
/// [`MaskParameters::render`](super::MaskParameters::render) for the
/// non-destructive variant.
pub fn draw_linear(
    buffer: &mut PixelBuffer,
    slope: f64,
    pivot: Point,
    transition_width: f64,
    invert: bool,
) -> &mut PixelBuffer {
    LinearMask::new(slope, pivot, transition_width, invert).draw(buffer);
    buffer
}


// ============================================================================
// Property-Based Tests
// ============================================================================
