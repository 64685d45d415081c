//! Source image acquisition for the crop engine.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG bytes into an upright RGB bitmap
//! - Cutting pixel regions out of a bitmap
//! - Resampling a region to the fixed output size
//! - Quarter-turn rotation of the source bitmap
//!
//! How the bytes arrived (file picker, drag and drop, network) is the
//! caller's concern; decoding only ever sees a byte slice.
//!
//! # Examples
//!
//! ```ignore
//! use cropframe_core::decode::decode_image;
//!
//! let bytes = std::fs::read("portrait.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod resize;
mod source;
mod types;

pub use resize::{crop_region, resize, rotate};
pub use source::{decode_image, get_orientation};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
