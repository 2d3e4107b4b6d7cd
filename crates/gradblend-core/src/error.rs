//! Error type shared by the buffer, compositing, and session layers.
//!
//! The mask generators themselves are infallible numeric functions; errors
//! only arise where caller-supplied buffers are validated.

use thiserror::Error;

/// Errors raised while validating pixel buffers or session inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlendError {
    /// Pixel data length doesn't match `width * height * 4`
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// `width * height * 4` does not fit in `usize`
    #[error("Image too large: {width}x{height} pixels exceeds addressable memory")]
    ImageTooLarge { width: u32, height: u32 },

    /// Overlay and base image sizes differ
    #[error(
        "Dimension mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// An overlay was supplied before any base image
    #[error("No base image loaded")]
    MissingBaseImage,
}
