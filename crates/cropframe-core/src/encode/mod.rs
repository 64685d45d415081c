//! Output encoding for committed crops.
//!
//! The committed crop is handed to an upload call as an encoded raster; JPEG
//! is the only format produced.

mod jpeg;

pub use jpeg::{encode_image, encode_jpeg, EncodeError};
