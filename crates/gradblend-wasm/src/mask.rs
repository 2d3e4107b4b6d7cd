//! Mask WASM bindings.
//!
//! This module provides JavaScript bindings for the linear and circular
//! gradient masks. Every function works on a copy of the input pixels, so
//! the caller's overlay stays pristine for the next redraw.

use crate::to_js_error;
use crate::types::JsPixelBuffer;
use gradblend_core::mask::{self, MaskMode, MaskParameters};
use gradblend_core::{BlendError, PixelBuffer, Point};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible mask parameters.
///
/// Passed from TypeScript as a plain object via serde_wasm_bindgen. Missing
/// fields take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JsMaskParameters {
    /// "linear" or "circular"
    pub mode: MaskMode,
    pub pivot_x: f64,
    pub pivot_y: f64,
    /// Gradient angle in degrees (linear)
    pub angle: f64,
    /// Circle radius in pixels (circular)
    pub radius: f64,
    /// Transition width in pixels
    pub transition_width: f64,
    pub invert: bool,
}

impl From<JsMaskParameters> for MaskParameters {
    fn from(js: JsMaskParameters) -> Self {
        let pivot = Point::new(js.pivot_x, js.pivot_y);
        match js.mode {
            MaskMode::Linear => {
                MaskParameters::linear(pivot, js.angle, js.transition_width, js.invert)
            }
            MaskMode::Circular => {
                MaskParameters::circular(pivot, js.radius, js.transition_width, js.invert)
            }
        }
    }
}

/// Draw a linear gradient into a copy of `pixels`' alpha channel.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width`, `height` - Image dimensions in pixels
/// * `slope` - Line slope, `tan(angle)`
/// * `pivot_x`, `pivot_y` - Point the line passes through
/// * `transition_width` - Width of the alpha ramp in pixels
/// * `invert` - Flip which side is opaque
///
/// # Example (TypeScript)
/// ```typescript
/// const masked = draw_linear(overlay.data, w, h, Math.tan(angle * Math.PI / 180), x, y, 100, false);
/// ctx.putImageData(new ImageData(new Uint8ClampedArray(masked), w), 0, 0);
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn draw_linear(
    pixels: &[u8],
    width: u32,
    height: u32,
    slope: f64,
    pivot_x: f64,
    pivot_y: f64,
    transition_width: f64,
    invert: bool,
) -> Result<Vec<u8>, JsValue> {
    masked_linear(
        pixels,
        width,
        height,
        slope,
        Point::new(pivot_x, pivot_y),
        transition_width,
        invert,
    )
    .map_err(to_js_error)
}

/// Draw a circular gradient into a copy of `pixels`' alpha channel.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width`, `height` - Image dimensions in pixels
/// * `radius` - Circle radius in pixels
/// * `center_x`, `center_y` - Circle center
/// * `transition_width` - Width of the alpha ramp in pixels
/// * `invert` - Flip which side is opaque
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn draw_circular(
    pixels: &[u8],
    width: u32,
    height: u32,
    radius: f64,
    center_x: f64,
    center_y: f64,
    transition_width: f64,
    invert: bool,
) -> Result<Vec<u8>, JsValue> {
    masked_circular(
        pixels,
        width,
        height,
        radius,
        Point::new(center_x, center_y),
        transition_width,
        invert,
    )
    .map_err(to_js_error)
}

/// Render a mask described by a parameter object onto a copy of `image`.
///
/// # Example (TypeScript)
/// ```typescript
/// const out = render_mask(overlay, {
///   mode: "circular",
///   pivot_x: 120, pivot_y: 80,
///   radius: 50,
///   transition_width: 100,
///   invert: false,
/// });
/// ```
#[wasm_bindgen]
pub fn render_mask(image: &JsPixelBuffer, params: JsValue) -> Result<JsPixelBuffer, JsValue> {
    let params: JsMaskParameters = serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid mask parameters: {}", e)))?;
    render_with(image, params).map_err(to_js_error)
}

fn masked_linear(
    pixels: &[u8],
    width: u32,
    height: u32,
    slope: f64,
    pivot: Point,
    transition_width: f64,
    invert: bool,
) -> Result<Vec<u8>, BlendError> {
    let mut buffer = PixelBuffer::new(width, height, pixels.to_vec())?;
    mask::draw_linear(&mut buffer, slope, pivot, transition_width, invert);
    Ok(buffer.into_raw())
}

fn masked_circular(
    pixels: &[u8],
    width: u32,
    height: u32,
    radius: f64,
    center: Point,
    transition_width: f64,
    invert: bool,
) -> Result<Vec<u8>, BlendError> {
    let mut buffer = PixelBuffer::new(width, height, pixels.to_vec())?;
    mask::draw_circular(&mut buffer, radius, center, transition_width, invert);
    Ok(buffer.into_raw())
}

fn render_with(image: &JsPixelBuffer, params: JsMaskParameters) -> Result<JsPixelBuffer, BlendError> {
    // to_core already copies, so the mask can be applied in place
    let mut buffer = image.to_core()?;
    MaskParameters::from(params).apply(&mut buffer);
    Ok(JsPixelBuffer::from_core(buffer))
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_draw_linear_basic() {
        let pixels = vec![0u8; 4 * 4 * 4];
        let out = draw_linear(&pixels, 4, 4, 0.0, 0.0, 2.0, 4.0, false).unwrap();
        assert_eq!(out[(2 * 4) * 4 + 3], 128);
    }

    #[wasm_bindgen_test]
    fn test_draw_circular_invalid_length() {
        let pixels = vec![0u8; 7];
        assert!(draw_circular(&pixels, 4, 4, 1.0, 0.0, 0.0, 4.0, false).is_err());
    }

    #[wasm_bindgen_test]
    fn test_render_mask_from_object() {
        let image = JsPixelBuffer::new(10, 10, vec![0u8; 400]);
        let params = serde_wasm_bindgen::to_value(&JsMaskParameters {
            mode: MaskMode::Circular,
            pivot_x: 5.0,
            pivot_y: 5.0,
            radius: 3.0,
            transition_width: 4.0,
            invert: true,
            ..Default::default()
        })
        .unwrap();
        let out = render_mask(&image, params).unwrap();
        assert_eq!(out.pixels()[(5 + 5 * 10) * 4 + 3], 255);
    }

    #[wasm_bindgen_test]
    fn test_render_mask_rejects_garbage() {
        let image = JsPixelBuffer::new(1, 1, vec![0u8; 4]);
        assert!(render_mask(&image, JsValue::from_str("not an object")).is_err());
    }
}
