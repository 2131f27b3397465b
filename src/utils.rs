//! Rectangle helpers for region-of-interest handling.

use opencv::core::Rect;

/// Clamp a rectangle to an image of the given dimensions.
///
/// The intersection with `[0, max_width) × [0, max_height)` is returned; a
/// rectangle entirely outside the image collapses to zero width or height.
#[must_use]
pub fn clamp_rect(rect: Rect, max_width: i32, max_height: i32) -> Rect {
    let x = rect.x.clamp(0, max_width);
    let y = rect.y.clamp(0, max_height);
    let right = (rect.x + rect.width).clamp(x, max_width);
    let bottom = (rect.y + rect.height).clamp(y, max_height);

    Rect::new(x, y, right - x, bottom - y)
}

/// Translate a rectangle by an offset, e.g. from face-ROI coordinates back
/// into full-frame coordinates.
#[must_use]
pub fn offset_rect(rect: Rect, dx: i32, dy: i32) -> Rect {
    Rect::new(rect.x + dx, rect.y + dy, rect.width, rect.height)
}

/// Whether a rectangle encloses at least one pixel
#[must_use]
pub fn has_area(rect: Rect) -> bool {
    rect.width > 0 && rect.height > 0
}
