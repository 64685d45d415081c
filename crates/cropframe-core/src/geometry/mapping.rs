//! Mapping a viewport crop rectangle onto source image pixels.

use serde::{Deserialize, Serialize};

use super::{CropRect, DisplayTransform};
use crate::error::CropError;

/// A rectangle in source image pixel coordinates (fractional).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SourceRect {
    /// Snap to whole pixels: origin floored, size rounded, at least 1x1 and
    /// clamped to the image.
    pub fn to_pixel_bounds(&self, image_width: u32, image_height: u32) -> (u32, u32, u32, u32) {
        let x = (self.x.floor() as u32).min(image_width.saturating_sub(1));
        let y = (self.y.floor() as u32).min(image_height.saturating_sub(1));
        let width = (self.width.round() as u32).clamp(1, image_width - x);
        let height = (self.height.round() as u32).clamp(1, image_height - y);
        (x, y, width, height)
    }
}

/// Map `crop` from viewport coordinates to the pixel grid of a
/// `source_width x source_height` image painted with `transform`.
///
/// The origin is clamped at zero and the size at the far image edges. The
/// size is not reduced when the origin is clamped.
///
/// # Errors
///
/// Returns `CropError::DegenerateCrop` if the origin lands at or past the
/// far image edge, or either dimension is not positive.
pub fn map_to_source(
    crop: &CropRect,
    transform: &DisplayTransform,
    source_width: u32,
    source_height: u32,
) -> Result<SourceRect, CropError> {
    let (src_w, src_h) = (source_width as f64, source_height as f64);

    // Position relative to the painted region, not the viewport
    let relative_x = crop.x - transform.offset_x;
    let relative_y = crop.y - transform.offset_y;

    let scale_x = src_w / transform.draw_width;
    let scale_y = src_h / transform.draw_height;

    let x = (relative_x * scale_x).max(0.0);
    let y = (relative_y * scale_y).max(0.0);
    let rect = SourceRect {
        x,
        y,
        width: (src_w - x).min(crop.width * scale_x),
        height: (src_h - y).min(crop.height * scale_y),
    };

    if rect.x >= src_w || rect.y >= src_h || rect.width <= 0.0 || rect.height <= 0.0 {
        return Err(CropError::DegenerateCrop {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        });
    }

    Ok(rect)
}

/// Output raster size: `long_edge` on the longer side, the other side
/// derived from the aspect ratio (rounded, at least 1).
pub fn output_dimensions(aspect_ratio: f64, long_edge: u32) -> (u32, u32) {
    let long = long_edge.max(1);
    if aspect_ratio >= 1.0 {
        let height = (long as f64 / aspect_ratio).round().max(1.0) as u32;
        (long, height)
    } else {
        let width = (long as f64 * aspect_ratio).round().max(1.0) as u32;
        (width, long)
    }
}
