//! WASM-compatible wrapper types for engine values.
//!
//! Bitmaps cross the boundary as a class with getters; small geometry
//! values cross as plain objects through serde-wasm-bindgen.

use cropframe_core::decode::DecodedImage;
use cropframe_core::{CropRect, PointerUpdate};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// A decoded RGB image for JavaScript (used for preview frames).
///
/// The pixel data lives in WASM memory; `pixels()` copies it out as a
/// `Uint8Array`.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns RGB pixel data (3 bytes per pixel, row-major) as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA pixel data, ready for `new ImageData(...)`.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect()
    }
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }
}

/// Plain `{x, y, width, height}` object handed to JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRectJs {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<CropRect> for CropRectJs {
    fn from(rect: CropRect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// `{rect, cursor}` object returned from pointer moves. `cursor` is the CSS
/// cursor value, ready to assign to `canvas.style.cursor`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointerUpdateJs {
    pub rect: CropRectJs,
    pub cursor: &'static str,
}

impl From<PointerUpdate> for PointerUpdateJs {
    fn from(update: PointerUpdate) -> Self {
        Self {
            rect: update.rect.into(),
            cursor: update.cursor.css(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropframe_core::CursorHint;

    #[test]
    fn test_decoded_image_wrapper() {
        let img = JsDecodedImage::from_decoded(DecodedImage::filled(4, 2, [1, 2, 3]));
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(img.pixels().len(), 24);
    }

    #[test]
    fn test_rgba_pixels() {
        let img = JsDecodedImage::from_decoded(DecodedImage::filled(2, 1, [10, 20, 30]));
        assert_eq!(img.rgba_pixels(), vec![10, 20, 30, 255, 10, 20, 30, 255]);
    }

    #[test]
    fn test_pointer_update_conversion() {
        let update = PointerUpdateJs::from(PointerUpdate {
            rect: CropRect::new(1.0, 2.0, 40.0, 30.0),
            cursor: CursorHint::ResizeNesw,
        });
        assert_eq!(update.cursor, "nesw-resize");
        assert_eq!(
            update.rect,
            CropRectJs {
                x: 1.0,
                y: 2.0,
                width: 40.0,
                height: 30.0
            }
        );
    }
}
