//! Cropframe Core - fixed-aspect-ratio crop engine
//!
//! This crate turns pan, zoom, rotate and corner-resize interactions over a
//! displayed image into a fixed-aspect-ratio crop of the full-resolution
//! source, and encodes the result for upload.
//!
//! # Module Structure
//!
//! - `geometry` - Pure display, placement, hit-test, resize/drag and mapping math
//! - `engine` - The interaction state machine over one source image
//! - `decode` - Source acquisition, region extraction and resampling
//! - `encode` - JPEG encoding of the committed crop
//! - `render` - Preview frame painting for hosts without a canvas
//! - `config` - Session tunables
//!
//! # Usage
//!
//! ```ignore
//! use cropframe_core::{CropConfig, CropEngine};
//!
//! let mut engine = CropEngine::from_bytes(&bytes, 4.0 / 3.0, None, CropConfig::default())?;
//! engine.on_pointer_down(450.0, 337.5);
//! engine.on_pointer_move(420.0, 320.0);
//! engine.on_pointer_up();
//! let cropped = engine.commit()?;
//! ```

pub mod config;
pub mod decode;
pub mod encode;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod render;

pub use config::{CropConfig, RotationMode};
pub use engine::{CropEngine, CroppedImage, InteractionState, PointerUpdate};
pub use error::CropError;
pub use geometry::{Corner, CropRect, CursorHint, DisplayTransform, HitZone, Rotation, Viewport};
pub use render::render_preview;
