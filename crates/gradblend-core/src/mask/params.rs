//! Mask parameter value object.

use super::circular::CircularMask;
use super::linear::{slope_from_degrees, LinearMask};
use crate::buffer::PixelBuffer;
use crate::Point;
use serde::{Deserialize, Serialize};

/// Which gradient shape to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskMode {
    /// Gradient across a line through the pivot.
    #[default]
    Linear,
    /// Gradient across a circle around the pivot.
    Circular,
}

/// Everything a generator needs for one render.
///
/// Built fresh from the current settings for each render request and
/// discarded afterwards. `angle_degrees` is only read in [`MaskMode::Linear`]
/// and `radius` only in [`MaskMode::Circular`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskParameters {
    pub mode: MaskMode,
    /// Line pivot or circle center, in image pixels
    pub pivot: Point,
    /// Gradient angle in degrees (linear)
    pub angle_degrees: f64,
    /// Circle radius in pixels (circular), never negative
    pub radius: f64,
    /// Full width of the alpha ramp in pixels, never negative
    pub transition_width: f64,
    /// Flip which side of the boundary is opaque
    pub invert: bool,
}

impl MaskParameters {
    /// Linear mask parameters. A negative `transition_width` is clamped to 0.
    pub fn linear(pivot: Point, angle_degrees: f64, transition_width: f64, invert: bool) -> Self {
        Self {
            mode: MaskMode::Linear,
            pivot,
            angle_degrees,
            radius: 0.0,
            transition_width: transition_width.max(0.0),
            invert,
        }
    }

    /// Circular mask parameters. Negative `radius` and `transition_width`
    /// are clamped to 0.
    pub fn circular(pivot: Point, radius: f64, transition_width: f64, invert: bool) -> Self {
        Self {
            mode: MaskMode::Circular,
            pivot,
            angle_degrees: 0.0,
            radius: radius.max(0.0),
            transition_width: transition_width.max(0.0),
            invert,
        }
    }

    /// Slope of the linear boundary, `tan(angle_degrees · π / 180)`.
    pub fn slope(&self) -> f64 {
        slope_from_degrees(self.angle_degrees)
    }

    /// Render the mask onto a copy of `source`, leaving `source` untouched.
    pub fn render(&self, source: &PixelBuffer) -> PixelBuffer {
        let mut buffer = source.clone();
        self.apply(&mut buffer);
        buffer
    }

    /// Overwrite `buffer`'s alpha channel in place.
    ///
    /// The previous alpha values are lost; keep a pristine copy if the same
    /// overlay will be re-rendered with other parameters.
    pub fn apply(&self, buffer: &mut PixelBuffer) {
        tracing::debug!(
            mode = ?self.mode,
            width = buffer.width(),
            height = buffer.height(),
            "drawing mask"
        );
        match self.mode {
            MaskMode::Linear => LinearMask::new(
                self.slope(),
                self.pivot,
                self.transition_width,
                self.invert,
            )
            .draw(buffer),
            MaskMode::Circular => CircularMask::new(
                self.pivot,
                self.radius,
                self.transition_width,
                self.invert,
            )
            .draw(buffer),
        }
    }
}
