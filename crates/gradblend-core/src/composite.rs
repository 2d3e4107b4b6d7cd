//! Source-over compositing of the masked overlay onto the base image.

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::error::BlendError;
use image::{Pixel, Rgba};

/// Composite `overlay` over `base` with the `source-over` operator.
///
/// Both buffers hold straight (non-premultiplied) RGBA. Returns a new buffer;
/// neither input is modified. Blending goes through `image`'s
/// [`Pixel::blend`], so fully opaque and fully transparent overlay pixels
/// are copied or skipped exactly.
///
/// # Errors
/// [`BlendError::DimensionMismatch`] if the buffers differ in size.
pub fn composite_over(base: &PixelBuffer, overlay: &PixelBuffer) -> Result<PixelBuffer, BlendError> {
    base.ensure_same_dimensions(overlay)?;

    let mut canvas = base.clone().into_rgba_image();
    for (dst, src) in canvas
        .pixels_mut()
        .zip(overlay.as_raw().chunks_exact(CHANNELS))
    {
        dst.blend(Rgba::from_slice(src));
    }

    Ok(PixelBuffer::from(canvas))
}
