//! Engine-level error taxonomy.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors surfaced by the crop engine.
///
/// Resize and drag never fail: out-of-bounds input is clamped silently.
#[derive(Debug, Error)]
pub enum CropError {
    /// Source bytes could not be decoded; no engine was created.
    #[error("Invalid image: {0}")]
    InvalidImage(#[from] DecodeError),

    /// Target aspect ratio is not a positive finite number.
    #[error("Invalid aspect ratio {0}: must be positive and finite")]
    InvalidAspectRatio(f64),

    /// Viewport size cap is not a positive finite number.
    #[error("Invalid viewport size cap {0}: must be positive and finite")]
    InvalidViewport(f64),

    /// A config value is out of range or not a finite number.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The crop maps to an unusable source rectangle. Engine state is
    /// unchanged; the user may adjust and retry.
    #[error("Degenerate crop: source rectangle ({x}, {y}) {width}x{height} is outside the image")]
    DegenerateCrop {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    /// Encoding the output raster failed.
    #[error("Failed to encode crop: {0}")]
    Encode(#[from] EncodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CropError::InvalidAspectRatio(-1.0);
        assert_eq!(
            err.to_string(),
            "Invalid aspect ratio -1: must be positive and finite"
        );

        let err = CropError::DegenerateCrop {
            x: 930.0,
            y: 0.0,
            width: -30.0,
            height: 240.0,
        };
        assert!(err.to_string().starts_with("Degenerate crop"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = CropError::InvalidConfig("initial_fill 2 must be in (0, 1]".to_string());
        assert_eq!(err.to_string(), "Invalid config: initial_fill 2 must be in (0, 1]");
    }

    #[test]
    fn test_from_decode_error() {
        let err: CropError = DecodeError::InvalidFormat.into();
        assert!(matches!(err, CropError::InvalidImage(DecodeError::InvalidFormat)));
    }
}
