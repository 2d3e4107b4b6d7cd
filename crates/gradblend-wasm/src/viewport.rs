//! Pointer-to-image coordinate mapping.
//!
//! The canvas is usually displayed at a different size than the image it
//! holds. Pointer and touch positions arrive in page space and are scaled
//! into image pixel space before they become a pivot.

use gradblend_core::Point;
use wasm_bindgen::prelude::*;

/// Where the canvas sits on the page, from `getBoundingClientRect()` plus
/// the window scroll offsets.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

#[wasm_bindgen]
impl DisplayRect {
    #[wasm_bindgen(constructor)]
    pub fn new(left: f64, top: f64, width: f64, height: f64, scroll_x: f64, scroll_y: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            scroll_x,
            scroll_y,
        }
    }
}

/// Map a page-space position to image pixel space.
///
/// Returns `None` while the canvas has no displayed area.
pub fn page_to_image(
    page_x: f64,
    page_y: f64,
    rect: &DisplayRect,
    image_width: u32,
    image_height: u32,
) -> Option<Point> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x = (page_x - (rect.left + rect.scroll_x)) * (image_width as f64 / rect.width);
    let y = (page_y - (rect.top + rect.scroll_y)) * (image_height as f64 / rect.height);
    Some(Point::new(x, y))
}

/// Map a page-space position to image pixel space, as `[x, y]`.
///
/// Returns an empty array while the canvas has no displayed area.
#[wasm_bindgen]
pub fn pointer_to_image(
    page_x: f64,
    page_y: f64,
    rect: &DisplayRect,
    image_width: u32,
    image_height: u32,
) -> Vec<f64> {
    page_to_image(page_x, page_y, rect, image_width, image_height)
        .map(|p| vec![p.x, p.y])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_size_display_is_identity() {
        let rect = DisplayRect::new(0.0, 0.0, 200.0, 100.0, 0.0, 0.0);
        assert_eq!(
            page_to_image(30.0, 40.0, &rect, 200, 100),
            Some(Point::new(30.0, 40.0))
        );
    }

    #[test]
    fn test_scaled_display() {
        // 400x300 image shown at half size
        let rect = DisplayRect::new(0.0, 0.0, 200.0, 150.0, 0.0, 0.0);
        assert_eq!(
            page_to_image(100.0, 75.0, &rect, 400, 300),
            Some(Point::new(200.0, 150.0))
        );
    }

    #[test]
    fn test_offset_and_scroll() {
        let rect = DisplayRect::new(10.0, 20.0, 100.0, 100.0, 5.0, 50.0);
        // Canvas origin on the page is (15, 70)
        assert_eq!(
            page_to_image(15.0, 70.0, &rect, 100, 100),
            Some(Point::new(0.0, 0.0))
        );
        assert_eq!(
            page_to_image(65.0, 120.0, &rect, 100, 100),
            Some(Point::new(50.0, 50.0))
        );
    }

    #[test]
    fn test_outside_canvas_is_allowed() {
        let rect = DisplayRect::new(0.0, 0.0, 100.0, 100.0, 0.0, 0.0);
        assert_eq!(
            page_to_image(-10.0, 150.0, &rect, 100, 100),
            Some(Point::new(-10.0, 150.0))
        );
    }

    #[test]
    fn test_fractional_scale() {
        let rect = DisplayRect::new(0.0, 0.0, 300.0, 300.0, 0.0, 0.0);
        let p = page_to_image(1.0, 2.0, &rect, 100, 100).unwrap();
        assert!((p.x - 1.0 / 3.0).abs() < 1e-12);
        assert!((p.y - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_sized_rect() {
        let rect = DisplayRect::new(0.0, 0.0, 0.0, 100.0, 0.0, 0.0);
        assert_eq!(page_to_image(1.0, 1.0, &rect, 100, 100), None);
        assert!(pointer_to_image(1.0, 1.0, &rect, 100, 100).is_empty());
    }
}
