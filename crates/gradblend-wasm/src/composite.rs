//! Compositing WASM bindings.

use crate::to_js_error;
use crate::types::JsPixelBuffer;
use gradblend_core::BlendError;
use wasm_bindgen::prelude::*;

/// Composite a masked overlay over the base image (`source-over`).
///
/// # Example (TypeScript)
/// ```typescript
/// const masked = render_mask(overlay, params);
/// const frame = composite_over(base, masked);
/// ctx.putImageData(new ImageData(frame.to_clamped_array(), frame.width), 0, 0);
/// ```
#[wasm_bindgen]
pub fn composite_over(base: &JsPixelBuffer, overlay: &JsPixelBuffer) -> Result<JsPixelBuffer, JsValue> {
    composite_buffers(base, overlay).map_err(to_js_error)
}

fn composite_buffers(base: &JsPixelBuffer, overlay: &JsPixelBuffer) -> Result<JsPixelBuffer, BlendError> {
    let base = base.to_core()?;
    let overlay = overlay.to_core()?;
    gradblend_core::composite_over(&base, &overlay).map(JsPixelBuffer::from_core)
}
