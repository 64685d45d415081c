//! Crop engine WASM bindings.
//!
//! `JsCropEngine` owns one crop session. The host canvas forwards pointer
//! events in canvas-local pixels and repaints from `crop_rect()` or
//! `render_preview()` after each event.

use cropframe_core::{render_preview, CropConfig, CropEngine, CropRect};
use wasm_bindgen::prelude::*;

use crate::types::{CropRectJs, JsDecodedImage, PointerUpdateJs};

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Interactive fixed-aspect-ratio crop session.
///
/// # Example (TypeScript)
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const engine = new JsCropEngine(bytes, 4 / 3);
/// canvas.width = engine.canvas_width;
/// canvas.height = engine.canvas_height;
///
/// canvas.onpointerdown = (e) => engine.on_pointer_down(e.offsetX, e.offsetY);
/// canvas.onpointermove = (e) => {
///   const { rect, cursor } = engine.on_pointer_move(e.offsetX, e.offsetY);
///   canvas.style.cursor = cursor;
///   draw(rect);
/// };
/// canvas.onpointerup = () => engine.on_pointer_up();
///
/// const jpeg = engine.commit();
/// ```
#[wasm_bindgen]
pub struct JsCropEngine {
    inner: CropEngine,
}

#[wasm_bindgen]
impl JsCropEngine {
    /// Decode `bytes` (JPEG or PNG) and start a session with default settings.
    ///
    /// `size_cap` bounds the canvas width; when omitted it is 500 for
    /// landscape ratios and 400 otherwise.
    #[wasm_bindgen(constructor)]
    pub fn new(
        bytes: &[u8],
        aspect_ratio: f64,
        size_cap: Option<f64>,
    ) -> Result<JsCropEngine, JsValue> {
        CropEngine::from_bytes(bytes, aspect_ratio, size_cap, CropConfig::default())
            .map(|inner| Self { inner })
            .map_err(to_js_error)
    }

    /// Start a session with a partial config object, e.g.
    /// `{ output_long_edge: 1200, rotation_mode: "Applied" }`.
    /// Missing fields take their defaults.
    pub fn with_config(
        bytes: &[u8],
        aspect_ratio: f64,
        size_cap: Option<f64>,
        config: JsValue,
    ) -> Result<JsCropEngine, JsValue> {
        let config: CropConfig = if config.is_undefined() || config.is_null() {
            CropConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };
        CropEngine::from_bytes(bytes, aspect_ratio, size_cap, config)
            .map(|inner| Self { inner })
            .map_err(to_js_error)
    }

    /// Canvas width in pixels.
    #[wasm_bindgen(getter)]
    pub fn canvas_width(&self) -> u32 {
        self.inner.viewport().pixel_size().0
    }

    /// Canvas height in pixels.
    #[wasm_bindgen(getter)]
    pub fn canvas_height(&self) -> u32 {
        self.inner.viewport().pixel_size().1
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.scale()
    }

    /// Current rotation in degrees (0, 90, 180 or 270).
    #[wasm_bindgen(getter)]
    pub fn rotation_degrees(&self) -> u16 {
        self.inner.rotation().degrees()
    }

    /// "idle", "dragging" or "resizing"
    #[wasm_bindgen(getter)]
    pub fn interaction_state(&self) -> String {
        self.inner.interaction_state().name().to_string()
    }

    /// Begin a drag or resize; returns the new interaction state name.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> String {
        self.inner.on_pointer_down(x, y).name().to_string()
    }

    /// Returns `{ rect: {x, y, width, height}, cursor }`.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        let update = PointerUpdateJs::from(self.inner.on_pointer_move(x, y));
        serde_wasm_bindgen::to_value(&update).map_err(to_js_error)
    }

    pub fn on_pointer_up(&mut self) {
        self.inner.on_pointer_up();
    }

    /// CSS cursor for a hover position, without changing any state.
    pub fn cursor_at(&self, x: f64, y: f64) -> String {
        self.inner.cursor_at(x, y).css().to_string()
    }

    /// Change zoom by `delta`, clamped to the configured range.
    pub fn set_zoom(&mut self, delta: f64) {
        self.inner.set_zoom(delta);
    }

    pub fn zoom_in(&mut self) {
        self.inner.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.inner.zoom_out();
    }

    /// Rotate the displayed image a quarter turn clockwise.
    pub fn rotate(&mut self) {
        self.inner.rotate();
    }

    /// Current crop rect as `{x, y, width, height}`.
    pub fn crop_rect(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&CropRectJs::from(self.inner.crop_rect())).map_err(to_js_error)
    }

    /// Replace the crop rect; it is fitted to the aspect ratio and canvas.
    /// Returns the rect actually applied.
    pub fn set_crop_rect(&mut self, rect: JsValue) -> Result<JsValue, JsValue> {
        let rect: CropRectJs = serde_wasm_bindgen::from_value(rect)
            .map_err(|e| JsValue::from_str(&format!("Invalid rect: {}", e)))?;
        let applied = self
            .inner
            .set_crop_rect(CropRect::new(rect.x, rect.y, rect.width, rect.height));
        serde_wasm_bindgen::to_value(&CropRectJs::from(applied)).map_err(to_js_error)
    }

    /// Re-center the default crop over the current image placement.
    pub fn reset_crop_rect(&mut self) -> Result<JsValue, JsValue> {
        let applied = self.inner.reset_crop_rect();
        serde_wasm_bindgen::to_value(&CropRectJs::from(applied)).map_err(to_js_error)
    }

    /// Paint the canvas as the user sees it (image, dimming, border, handles).
    pub fn render_preview(&self) -> JsDecodedImage {
        JsDecodedImage::from_decoded(render_preview(&self.inner))
    }

    /// Encode the crop as JPEG bytes for upload.
    ///
    /// On failure the session is unchanged and the user can keep adjusting.
    pub fn commit(&self) -> Result<Vec<u8>, JsValue> {
        match self.inner.commit() {
            Ok(cropped) => Ok(cropped.bytes),
            Err(e) => {
                let message = e.to_string();
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "crop commit failed: {}",
                    message
                )));
                Err(JsValue::from_str(&message))
            }
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Deserialize)]
    struct MoveResult {
        rect: CropRectJs,
        cursor: String,
    }

    #[derive(Serialize)]
    struct PartialConfig {
        output_long_edge: u32,
    }

    fn test_jpeg() -> Vec<u8> {
        let pixels = vec![128u8; 640 * 480 * 3];
        cropframe_core::encode::encode_jpeg(&pixels, 640, 480, 90).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_pointer_move_returns_rect_and_cursor() {
        let mut engine = JsCropEngine::new(&test_jpeg(), 4.0 / 3.0, None).unwrap();
        engine.on_pointer_down(250.0, 187.5);
        let value = engine.on_pointer_move(260.0, 187.5).unwrap();
        let update: MoveResult = serde_wasm_bindgen::from_value(value).unwrap();

        assert_eq!(update.cursor, "move");
        assert_eq!(update.rect.x, 60.0);
        assert_eq!(update.rect.width, 400.0);
    }

    #[wasm_bindgen_test]
    fn test_set_crop_rect_is_fitted() {
        let mut engine = JsCropEngine::new(&test_jpeg(), 4.0 / 3.0, None).unwrap();
        let requested = CropRectJs {
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 10.0,
        };
        let applied = engine
            .set_crop_rect(serde_wasm_bindgen::to_value(&requested).unwrap())
            .unwrap();
        let applied: CropRectJs = serde_wasm_bindgen::from_value(applied).unwrap();
        assert_eq!(applied.width, 200.0);
        assert_eq!(applied.height, 150.0);
    }

    #[wasm_bindgen_test]
    fn test_with_config_partial_object() {
        let config = serde_wasm_bindgen::to_value(&PartialConfig {
            output_long_edge: 400,
        })
        .unwrap();
        let engine = JsCropEngine::with_config(&test_jpeg(), 4.0 / 3.0, None, config).unwrap();
        assert!(engine.commit().is_ok());
    }

    #[derive(Serialize)]
    struct FillConfig {
        initial_fill: f64,
    }

    #[wasm_bindgen_test]
    fn test_with_config_rejects_out_of_range_fill() {
        let config = serde_wasm_bindgen::to_value(&FillConfig { initial_fill: 2.0 }).unwrap();
        assert!(JsCropEngine::with_config(&test_jpeg(), 4.0 / 3.0, None, config).is_err());
    }

    #[wasm_bindgen_test]
    fn test_invalid_bytes_rejected() {
        assert!(JsCropEngine::new(&[1, 2, 3], 1.0, None).is_err());
    }
}
