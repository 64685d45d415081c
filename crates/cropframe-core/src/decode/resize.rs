//! Pixel-space region extraction and resampling.
//!
//! Used by the commit path to cut the mapped source rectangle out of the
//! source bitmap and scale it to the fixed output size. All functions return
//! new `DecodedImage` instances without modifying the input.

use super::{DecodeError, DecodedImage, FilterType};
use crate::geometry::Rotation;

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if either target dimension is zero.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbImage".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}

/// Copy a pixel-aligned region out of an image.
///
/// The region is clamped to the image bounds; the result is at least 1x1.
pub fn crop_region(image: &DecodedImage, x: u32, y: u32, width: u32, height: u32) -> DecodedImage {
    let left = x.min(image.width.saturating_sub(1));
    let top = y.min(image.height.saturating_sub(1));
    let out_width = width.min(image.width - left).max(1);
    let out_height = height.min(image.height - top).max(1);

    let row_bytes = (out_width * 3) as usize;
    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    // Copy pixel data row by row
    for row in top..top + out_height {
        let start = ((row * image.width + left) * 3) as usize;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

/// Rotate an image clockwise by a quarter-turn multiple.
pub fn rotate(image: &DecodedImage, rotation: Rotation) -> Result<DecodedImage, DecodeError> {
    if rotation == Rotation::None {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbImage".to_string()))?;

    let rotated = match rotation {
        Rotation::Quarter => image::imageops::rotate90(&rgb_image),
        Rotation::Half => image::imageops::rotate180(&rgb_image),
        Rotation::ThreeQuarter => image::imageops::rotate270(&rgb_image),
        Rotation::None => rgb_image,
    };

    Ok(DecodedImage::from_rgb_image(rotated))
}
