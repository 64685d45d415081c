//! Cropframe WASM - WebAssembly bindings for the cropframe crop engine
//!
//! This crate exposes `cropframe-core` to the upload form's canvas code.
//!
//! # Module Structure
//!
//! - `engine` - `JsCropEngine`, one interactive crop session
//! - `types` - WASM-compatible wrapper types for preview frames and geometry
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropEngine } from '@cropframe/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const engine = new JsCropEngine(bytes, 4 / 3);
//! console.log(`Canvas ${engine.canvas_width}x${engine.canvas_height}`);
//! ```

use wasm_bindgen::prelude::*;

mod engine;
mod types;

// Re-export public types
pub use engine::JsCropEngine;
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
