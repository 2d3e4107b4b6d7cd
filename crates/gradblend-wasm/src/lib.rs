//! Gradblend WASM - WebAssembly bindings for gradblend
//!
//! This crate exposes the gradblend-core masks to a browser front end that
//! decodes the two images, forwards control and pointer events, and draws
//! the returned pixels onto a canvas.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for RGBA pixel data
//! - `mask` - Linear and circular mask bindings
//! - `composite` - Source-over compositing of the masked overlay
//! - `session` - Stateful session with frame coalescing
//! - `viewport` - Page-to-image coordinate mapping
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsPixelBuffer, render_mask } from '@gradblend/wasm';
//!
//! await init();
//!
//! const overlay = new JsPixelBuffer(w, h, overlayImageData.data);
//! const masked = render_mask(overlay, { mode: "linear", pivot_x: 50, pivot_y: 50, transition_width: 100 });
//! ctx.putImageData(new ImageData(masked.to_clamped_array(), w), 0, 0);
//! ```

use wasm_bindgen::prelude::*;

mod composite;
mod mask;
mod session;
mod types;
mod viewport;

// Re-export public types
pub use composite::composite_over;
pub use mask::{draw_circular, draw_linear, render_mask, JsMaskParameters};
pub use session::JsBlendSession;
pub use types::JsPixelBuffer;
pub use viewport::{pointer_to_image, DisplayRect};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn to_js_error(err: gradblend_core::BlendError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Report a warning on the browser console.
pub(crate) fn log_warning(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
