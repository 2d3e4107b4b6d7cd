//! Gradient alpha masks for blending an overlay over a base image
//!
//! This module computes a per-pixel alpha channel for the overlay from the
//! pixel's signed distance to a reference boundary.
//!
//! ## Mask Types
//!
//! - **Linear**: the boundary is a line through a pivot at a given angle
//! - **Circular**: the boundary is a circle of a given radius around the pivot
//!
//! ## Algorithm
//!
//! Both masks map signed distance `d` to alpha with the same closed form:
//!
//! `alpha = 128 + (d / (transition_width / 2)) * 128 * (invert ? -1 : 1)`
//!
//! The result is not clamped by the formula. It is stored through
//! [`to_alpha_byte`], which saturates to `0..=255` the way an 8-bit clamped
//! pixel array does, so alpha plateaus once `|d|` exceeds roughly half the
//! transition width.

pub mod circular;
pub mod linear;
pub mod params;

pub use circular::{draw_circular, CircularMask};
pub use linear::{draw_linear, LinearMask};
pub use params::{MaskMode, MaskParameters};

/// Alpha value assigned to pixels lying exactly on the boundary.
pub const BOUNDARY_ALPHA: f64 = 128.0;

/// Map a signed distance from the boundary to an unclamped alpha value.
///
/// A `transition_width` of zero divides by zero: the result is `±inf`,
/// or `NaN` for a pixel exactly on the boundary. Both are resolved by
/// [`to_alpha_byte`], which turns them into a hard step edge.
#[inline]
pub fn ramp_alpha(signed_distance: f64, transition_width: f64, invert: bool) -> f64 {
    let half_transition_width = transition_width * 0.5;
    let coeff = if invert { -1.0 } else { 1.0 };
    BOUNDARY_ALPHA + (signed_distance / half_transition_width) * 128.0 * coeff
}

/// Store a real-valued alpha into an 8-bit channel.
///
/// NaN becomes 0, values are clamped to `0..=255`, and the rest round to
/// the nearest integer with ties going to even.
#[inline]
pub fn to_alpha_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round_ties_even() as u8
}
