//! Tunable constants for a crop session.

use serde::{Deserialize, Serialize};

use crate::decode::FilterType;
use crate::error::CropError;
use crate::geometry::{DEFAULT_HANDLE_SIZE, DEFAULT_INITIAL_FILL, DEFAULT_MIN_CROP_WIDTH};

/// How the quarter-turn rotation control affects the committed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotationMode {
    /// Rotation only changes the preview. Commit samples the unrotated
    /// source through the display transform.
    #[default]
    Cosmetic,
    /// Commit rotates the source by the same quarter turn first, so the
    /// output matches what the user framed.
    Applied,
}

/// Crop session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Side length of the square corner handles (viewport pixels)
    pub handle_size: f64,
    /// Width floor for resizes (viewport pixels)
    pub min_crop_width: f64,
    /// Fraction of the painted region the initial crop may cover
    pub initial_fill: f64,
    /// Zoom lower bound
    pub min_scale: f64,
    /// Zoom upper bound
    pub max_scale: f64,
    /// Zoom change per zoom_in/zoom_out step
    pub zoom_step: f64,
    /// Long edge of the committed output (pixels)
    pub output_long_edge: u32,
    /// JPEG quality of the committed output (1-100)
    pub jpeg_quality: u8,
    pub resample_filter: FilterType,
    pub rotation_mode: RotationMode,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            handle_size: DEFAULT_HANDLE_SIZE,
            min_crop_width: DEFAULT_MIN_CROP_WIDTH,
            initial_fill: DEFAULT_INITIAL_FILL,
            min_scale: 0.5,
            max_scale: 3.0,
            zoom_step: 0.1,
            output_long_edge: 800,
            jpeg_quality: 90,
            resample_filter: FilterType::Lanczos3,
            rotation_mode: RotationMode::Cosmetic,
        }
    }
}

impl CropConfig {
    /// Create a new CropConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every tunable before a session is built on it.
    ///
    /// # Errors
    ///
    /// `CropError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), CropError> {
        let invalid = |msg: String| Err(CropError::InvalidConfig(msg));

        if !(self.handle_size.is_finite() && self.handle_size >= 0.0) {
            return invalid(format!("handle_size {} must be >= 0", self.handle_size));
        }
        if !(self.min_crop_width.is_finite() && self.min_crop_width >= 0.0) {
            return invalid(format!("min_crop_width {} must be >= 0", self.min_crop_width));
        }
        if !(self.initial_fill > 0.0 && self.initial_fill <= 1.0) {
            return invalid(format!("initial_fill {} must be in (0, 1]", self.initial_fill));
        }
        if !(self.min_scale.is_finite() && self.max_scale.is_finite())
            || self.min_scale <= 0.0
            || self.min_scale > self.max_scale
        {
            return invalid(format!(
                "scale range [{}, {}] must satisfy 0 < min <= max",
                self.min_scale, self.max_scale
            ));
        }
        if !(self.zoom_step.is_finite() && self.zoom_step >= 0.0) {
            return invalid(format!("zoom_step {} must be >= 0", self.zoom_step));
        }
        if self.output_long_edge == 0 {
            return invalid("output_long_edge must be positive".to_string());
        }
        Ok(())
    }

    /// Clamp a zoom factor into `[min_scale, max_scale]`.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}
