//! Gradblend Core - Gradient alpha masks for image blending
//!
//! This crate blends two same-sized images by giving the overlay a
//! per-pixel alpha derived from its distance to a line or circle, producing
//! a soft linear or radial transition that can be moved, widened, and
//! inverted.

pub mod buffer;
pub mod composite;
pub mod error;
pub mod mask;
pub mod session;
pub mod settings;

pub use buffer::PixelBuffer;
pub use composite::composite_over;
pub use error::BlendError;
pub use mask::{draw_circular, draw_linear, MaskMode, MaskParameters};
pub use session::BlendSession;
pub use settings::BlendSettings;

/// A point in image pixel space.
///
/// Coordinates are real-valued and may fall outside the image, since pivots
/// come from scaled pointer positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
