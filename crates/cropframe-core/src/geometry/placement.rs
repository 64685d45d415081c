//! Initial crop rectangle placement.

use super::{CropRect, DisplayTransform};

/// Fraction of the painted region the starting crop may cover on each axis.
pub const DEFAULT_INITIAL_FILL: f64 = 0.8;

/// Place the starting crop rectangle.
///
/// The rect is as large as the target aspect ratio allows while staying
/// within `fill` of the painted region on both axes, and is centered on the
/// painted region.
pub fn initial_crop_rect(transform: &DisplayTransform, aspect_ratio: f64, fill: f64) -> CropRect {
    let max_crop_width = transform.draw_width * fill;
    let max_crop_height = transform.draw_height * fill;

    let (width, height) = if max_crop_width / aspect_ratio <= max_crop_height {
        (max_crop_width, max_crop_width / aspect_ratio)
    } else {
        (max_crop_height * aspect_ratio, max_crop_height)
    };

    CropRect {
        x: transform.offset_x + (transform.draw_width - width) / 2.0,
        y: transform.offset_y + (transform.draw_height - height) / 2.0,
        width,
        height,
    }
}
