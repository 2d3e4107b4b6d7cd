//! Blend session WASM bindings.
//!
//! `JsBlendSession` keeps the pristine overlay and the live settings inside
//! WASM memory. The front end forwards control edits and pointer moves, then
//! calls `take_frame()` once per animation frame; edits made between two
//! frames produce a single render from the latest state.
//!
//! # Example (TypeScript)
//! ```typescript
//! const session = new JsBlendSession({ transition_width: 100 });
//! session.load_base(base.width, base.height);
//! session.load_overlay(new JsPixelBuffer(w, h, overlayData));
//!
//! canvas.onmousemove = ev => {
//!   const r = canvas.getBoundingClientRect();
//!   session.set_pivot_from_pointer(ev.pageX, ev.pageY,
//!     new DisplayRect(r.left, r.top, r.width, r.height, scrollX, scrollY));
//! };
//!
//! function tick() {
//!   const frame = session.take_frame();
//!   if (frame) draw(frame);
//!   requestAnimationFrame(tick);
//! }
//! ```

use crate::types::JsPixelBuffer;
use crate::viewport::{page_to_image, DisplayRect};
use crate::{log_warning, to_js_error};
use gradblend_core::{BlendSession, BlendSettings, MaskMode, Point};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct JsBlendSession {
    inner: BlendSession,
}

#[wasm_bindgen]
impl JsBlendSession {
    /// Create a session. `settings` may be `undefined` or a partial
    /// settings object; missing fields take the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<JsBlendSession, JsValue> {
        let settings = parse_settings(settings)?;
        Ok(Self::with_settings(settings))
    }

    /// Current settings as a plain object.
    pub fn settings(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.settings())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace all settings from a (possibly partial) settings object.
    pub fn update(&mut self, settings: JsValue) -> Result<(), JsValue> {
        let settings = parse_settings(settings)?;
        self.inner.update(settings);
        Ok(())
    }

    pub fn load_base(&mut self, width: u32, height: u32) {
        self.inner.load_base(width, height);
    }

    /// Load the overlay. Rejected overlays are reported to the console and
    /// returned as an error; the previous overlay stays loaded.
    pub fn load_overlay(&mut self, overlay: &JsPixelBuffer) -> Result<(), JsValue> {
        match overlay.to_core().and_then(|buf| self.inner.load_overlay(buf)) {
            Ok(()) => Ok(()),
            Err(e) => {
                log_warning(&format!("gradblend: {}", e));
                Err(to_js_error(e))
            }
        }
    }

    /// Render the pending frame, or `undefined` if nothing changed.
    pub fn take_frame(&mut self) -> Option<JsPixelBuffer> {
        self.inner.take_frame().map(JsPixelBuffer::from_core)
    }

    /// Render the current settings regardless of pending state.
    pub fn render(&self) -> Option<JsPixelBuffer> {
        self.inner.render().map(JsPixelBuffer::from_core)
    }

    #[wasm_bindgen(getter)]
    pub fn frame_pending(&self) -> bool {
        self.inner.is_frame_pending()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn set_linear(&mut self) {
        self.edit(|s| s.with_mode(MaskMode::Linear));
    }

    pub fn set_circular(&mut self) {
        self.edit(|s| s.with_mode(MaskMode::Circular));
    }

    pub fn set_transition_width(&mut self, value: f64) {
        self.edit(|s| s.with_transition_width(value));
    }

    pub fn widen(&mut self) {
        self.edit(BlendSettings::widen);
    }

    pub fn narrow(&mut self) {
        self.edit(BlendSettings::narrow);
    }

    pub fn set_angle(&mut self, degrees: f64) {
        self.edit(|s| s.with_angle(degrees));
    }

    pub fn rotate_clockwise(&mut self) {
        self.edit(BlendSettings::rotate_clockwise);
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.edit(BlendSettings::rotate_counter_clockwise);
    }

    pub fn set_radius(&mut self, value: f64) {
        self.edit(|s| s.with_radius(value));
    }

    pub fn grow(&mut self) {
        self.edit(BlendSettings::grow);
    }

    pub fn shrink(&mut self) {
        self.edit(BlendSettings::shrink);
    }

    pub fn set_invert(&mut self, invert: bool) {
        self.edit(|s| s.with_invert(invert));
    }

    /// Set the pivot in image pixel space.
    pub fn set_pivot(&mut self, x: f64, y: f64) {
        self.edit(|s| s.with_pivot(Point::new(x, y)));
    }

    /// Set the pivot from a page-space pointer or touch position.
    ///
    /// Ignored when no base image is loaded or the canvas has no area.
    pub fn set_pivot_from_pointer(&mut self, page_x: f64, page_y: f64, rect: &DisplayRect) {
        let Some((width, height)) = self.inner.base_dimensions() else {
            return;
        };
        if let Some(pivot) = page_to_image(page_x, page_y, rect, width, height) {
            self.edit(|s| s.with_pivot(pivot));
        }
    }
}

impl JsBlendSession {
    pub(crate) fn with_settings(settings: BlendSettings) -> Self {
        Self {
            inner: BlendSession::new(settings),
        }
    }

    fn edit(&mut self, f: impl FnOnce(BlendSettings) -> BlendSettings) {
        let next = f(*self.inner.settings());
        self.inner.update(next);
    }
}

fn parse_settings(value: JsValue) -> Result<BlendSettings, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(BlendSettings::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid settings: {}", e)))
}
