//! Crop rectangle mutations: corner resize and body drag.
//!
//! Both operations are pure functions from the current rect plus pointer
//! input to a new rect. Out-of-bounds requests are clamped, never rejected.
//! After every call:
//! - `width / height == aspect_ratio`
//! - the rect lies inside `[0, viewport.width] x [0, viewport.height]`

use super::{Corner, CropRect, Point, Viewport};

/// Default width floor for resizes, in viewport pixels.
pub const DEFAULT_MIN_CROP_WIDTH: f64 = 50.0;

/// Resize `rect` by dragging `corner` horizontally by `delta_x`.
///
/// Width is the driving dimension and height is always derived from it. The
/// opposite corner stays fixed. The width floor `min_width` applies whenever
/// the viewport leaves room for it; containment takes precedence otherwise.
pub fn resize_from_corner(
    rect: &CropRect,
    corner: Corner,
    delta_x: f64,
    aspect_ratio: f64,
    viewport: &Viewport,
    min_width: f64,
) -> CropRect {
    let anchor = corner.opposite().point_on(rect);

    let requested = if corner.moves_left_edge() {
        rect.width - delta_x
    } else {
        rect.width + delta_x
    };

    let width = requested
        .max(min_width)
        .min(max_width_from_anchor(anchor, corner, aspect_ratio, viewport));
    let height = width / aspect_ratio;

    let x = if corner.moves_left_edge() {
        anchor.x - width
    } else {
        anchor.x
    };
    let y = if corner.moves_top_edge() {
        anchor.y - height
    } else {
        anchor.y
    };

    CropRect {
        x,
        y,
        width,
        height,
    }
}

/// Largest width the rect can take growing from `anchor` toward `corner`
/// without crossing a viewport edge.
fn max_width_from_anchor(
    anchor: Point,
    corner: Corner,
    aspect_ratio: f64,
    viewport: &Viewport,
) -> f64 {
    let horizontal = if corner.moves_left_edge() {
        anchor.x
    } else {
        viewport.width - anchor.x
    };
    let vertical = if corner.moves_top_edge() {
        anchor.y
    } else {
        viewport.height - anchor.y
    };

    horizontal.min(vertical * aspect_ratio).max(0.0)
}

/// Move `rect` so its top-left sits at `pointer - grab_offset`, clamped per
/// axis so it stays inside the viewport. Size is unchanged.
pub fn drag_to(rect: &CropRect, pointer: Point, grab_offset: Point, viewport: &Viewport) -> CropRect {
    CropRect {
        x: (pointer.x - grab_offset.x)
            .min(viewport.width - rect.width)
            .max(0.0),
        y: (pointer.y - grab_offset.y)
            .min(viewport.height - rect.height)
            .max(0.0),
        ..*rect
    }
}

/// Bring an arbitrary rect into a valid state: height re-derived from width,
/// size capped to the viewport, position clamped inside it.
pub fn constrain(rect: &CropRect, aspect_ratio: f64, viewport: &Viewport) -> CropRect {
    let width = rect
        .width
        .max(0.0)
        .min(viewport.width)
        .min(viewport.height * aspect_ratio);
    let sized = CropRect {
        width,
        height: width / aspect_ratio,
        ..*rect
    };
    drag_to(&sized, Point::new(rect.x, rect.y), Point::default(), viewport)
}
