//! Render session tying the images and settings together.
//!
//! A [`BlendSession`] owns the pristine overlay and the current settings.
//! Every render works on a copy of the overlay, so the same source can be
//! redrawn with any number of parameter changes.
//!
//! Renders are coalesced: any number of [`update`](BlendSession::update) or
//! [`request_frame`](BlendSession::request_frame) calls between two
//! [`take_frame`](BlendSession::take_frame) calls produce a single frame
//! from the latest settings. Intermediate states are dropped, not queued.

use crate::buffer::PixelBuffer;
use crate::error::BlendError;
use crate::settings::BlendSettings;

#[derive(Debug, Clone, Default)]
pub struct BlendSession {
    settings: BlendSettings,
    base_dimensions: Option<(u32, u32)>,
    overlay: Option<PixelBuffer>,
    frame_pending: bool,
}

impl BlendSession {
    pub fn new(settings: BlendSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &BlendSettings {
        &self.settings
    }

    pub fn base_dimensions(&self) -> Option<(u32, u32)> {
        self.base_dimensions
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Register a new base image. Any previously loaded overlay is dropped.
    pub fn load_base(&mut self, width: u32, height: u32) {
        self.base_dimensions = Some((width, height));
        self.overlay = None;
        self.request_frame();
    }

    /// Load the overlay whose alpha will be masked.
    ///
    /// # Errors
    /// - [`BlendError::MissingBaseImage`] if no base is loaded
    /// - [`BlendError::DimensionMismatch`] if the overlay and base differ in size
    ///
    /// On error the session is left as it was.
    pub fn load_overlay(&mut self, overlay: PixelBuffer) -> Result<(), BlendError> {
        let Some((width, height)) = self.base_dimensions else {
            tracing::warn!("overlay rejected: no base image loaded");
            return Err(BlendError::MissingBaseImage);
        };
        if let Err(err) = overlay.ensure_dimensions(width, height) {
            tracing::warn!(
                base_width = width,
                base_height = height,
                overlay_width = overlay.width(),
                overlay_height = overlay.height(),
                "overlay rejected: size differs from base image"
            );
            return Err(err);
        }
        self.overlay = Some(overlay);
        self.request_frame();
        Ok(())
    }

    /// Replace the settings and schedule a frame.
    pub fn update(&mut self, settings: BlendSettings) {
        self.settings = settings;
        self.request_frame();
    }

    /// Schedule a frame. Repeated calls before [`take_frame`](Self::take_frame)
    /// collapse into one.
    pub fn request_frame(&mut self) {
        self.frame_pending = true;
    }

    /// Render the pending frame, if any.
    ///
    /// Returns `None` when no frame is pending or no overlay is loaded. The
    /// pending flag is cleared either way.
    pub fn take_frame(&mut self) -> Option<PixelBuffer> {
        if !std::mem::take(&mut self.frame_pending) {
            return None;
        }
        self.render()
    }

    /// Render the overlay with the current settings, ignoring the pending flag.
    pub fn render(&self) -> Option<PixelBuffer> {
        let overlay = self.overlay.as_ref()?;
        Some(self.settings.to_parameters().render(overlay))
    }

    /// Drop both images.
    pub fn clear(&mut self) {
        self.base_dimensions = None;
        self.overlay = None;
        self.frame_pending = false;
    }
}
