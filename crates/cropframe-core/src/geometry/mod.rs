//! Crop geometry: pure functions over viewport and source coordinates.
//!
//! Nothing in this module touches pixels. The engine composes these pieces
//! into an interaction state machine, and the renderer reads them to paint.
//!
//! # Coordinate Systems
//!
//! - Viewport: pixels of the on-screen surface, origin top-left
//! - Painted region: the sub-rectangle of the viewport covered by the image
//! - Source: pixels of the full-resolution source bitmap

mod adjust;
mod display;
mod mapping;
mod placement;
mod rect;

pub use adjust::{constrain, drag_to, resize_from_corner, DEFAULT_MIN_CROP_WIDTH};
pub use display::{DisplayTransform, Rotation};
pub use hit_test::{hit_test, Corner, CursorHint, HitZone, DEFAULT_HANDLE_SIZE};
pub use mapping::{map_to_source, output_dimensions, SourceRect};
pub use placement::{initial_crop_rect, DEFAULT_INITIAL_FILL};
pub use rect::{CropRect, Point, Viewport};
