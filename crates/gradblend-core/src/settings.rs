//! Live mask settings, as edited by the user.
//!
//! [`BlendSettings`] holds the current state of every control. Each edit
//! produces a new value, and [`BlendSettings::to_parameters`] turns the
//! current state into the [`MaskParameters`] for one render.

use crate::mask::{MaskMode, MaskParameters};
use crate::Point;
use serde::{Deserialize, Serialize};

/// Current mask controls.
///
/// Missing fields deserialize to the defaults, so a front end may send only
/// the values it tracks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendSettings {
    pub mode: MaskMode,
    /// Full width of the alpha ramp in pixels
    pub transition_width: f64,
    /// Linear gradient angle in degrees
    pub angle_degrees: f64,
    /// Circle radius in pixels
    pub radius: f64,
    pub invert: bool,
    /// Pivot in image pixel space
    pub pivot: Point,
}

impl Default for BlendSettings {
    fn default() -> Self {
        Self {
            mode: MaskMode::Linear,
            transition_width: 100.0,
            angle_degrees: 0.0,
            radius: 50.0,
            invert: false,
            pivot: Point::new(50.0, 50.0),
        }
    }
}

impl BlendSettings {
    /// Step used by [`widen`](Self::widen) and [`narrow`](Self::narrow).
    pub const WIDTH_STEP: f64 = 50.0;
    /// Step used by the rotate operations, in degrees.
    pub const ANGLE_STEP: f64 = 10.0;
    /// Step used by [`grow`](Self::grow) and [`shrink`](Self::shrink).
    pub const RADIUS_STEP: f64 = 50.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(self, mode: MaskMode) -> Self {
        Self { mode, ..self }
    }

    /// Set the transition width; negative values become 0.
    pub fn with_transition_width(self, transition_width: f64) -> Self {
        Self {
            transition_width: transition_width.max(0.0),
            ..self
        }
    }

    pub fn widen(self) -> Self {
        self.with_transition_width(self.transition_width + Self::WIDTH_STEP)
    }

    pub fn narrow(self) -> Self {
        self.with_transition_width(self.transition_width - Self::WIDTH_STEP)
    }

    pub fn with_angle(self, angle_degrees: f64) -> Self {
        Self {
            angle_degrees,
            ..self
        }
    }

    pub fn rotate_clockwise(self) -> Self {
        self.with_angle(self.angle_degrees + Self::ANGLE_STEP)
    }

    pub fn rotate_counter_clockwise(self) -> Self {
        self.with_angle(self.angle_degrees - Self::ANGLE_STEP)
    }

    /// Set the radius; negative values become 0.
    pub fn with_radius(self, radius: f64) -> Self {
        Self {
            radius: radius.max(0.0),
            ..self
        }
    }

    pub fn grow(self) -> Self {
        self.with_radius(self.radius + Self::RADIUS_STEP)
    }

    pub fn shrink(self) -> Self {
        self.with_radius(self.radius - Self::RADIUS_STEP)
    }

    pub fn with_invert(self, invert: bool) -> Self {
        Self { invert, ..self }
    }

    pub fn with_pivot(self, pivot: Point) -> Self {
        Self { pivot, ..self }
    }

    /// Build the parameters for the selected mode.
    pub fn to_parameters(&self) -> MaskParameters {
        match self.mode {
            MaskMode::Linear => MaskParameters::linear(
                self.pivot,
                self.angle_degrees,
                self.transition_width,
                self.invert,
            ),
            MaskMode::Circular => MaskParameters::circular(
                self.pivot,
                self.radius,
                self.transition_width,
                self.invert,
            ),
        }
    }
}
