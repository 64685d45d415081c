//! The crop session state machine.
//!
//! A `CropEngine` owns one source image for the lifetime of a crop session.
//! Pointer events drive an explicit `InteractionState`; every transition is
//! handled to completion before the next event, and the crop rectangle is
//! only ever replaced by the pure geometry functions in [`crate::geometry`].
//!
//! # Lifecycle
//!
//! 1. Construct from bytes or a decoded bitmap (decoding errors surface here)
//! 2. Feed pointer down/move/up, zoom and rotate events
//! 3. `commit()` to produce the output raster, or drop the engine to cancel
//!
//! A failed commit leaves the engine untouched so the user can keep adjusting.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::config::{CropConfig, RotationMode};
use crate::decode::{self, DecodeError, DecodedImage};
use crate::encode;
use crate::error::CropError;
use crate::geometry::{
    constrain, drag_to, hit_test, initial_crop_rect, map_to_source, output_dimensions,
    resize_from_corner, Corner, CropRect, CursorHint, DisplayTransform, HitZone, Point, Rotation,
    SourceRect, Viewport,
};

/// What the pointer is currently doing to the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Moving the rect; `grab_offset` is the pointer position relative to
    /// the rect's top-left at pointer-down.
    Dragging { grab_offset: Point },
    /// Resizing from `corner`; `last` is the previous pointer position, so
    /// deltas are measured between consecutive moves.
    Resizing { corner: Corner, last: Point },
}

impl InteractionState {
    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::Dragging { .. } => "dragging",
            InteractionState::Resizing { .. } => "resizing",
        }
    }
}

/// Result of a pointer move: the current rect and the cursor to show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerUpdate {
    pub rect: CropRect,
    pub cursor: CursorHint,
}

/// An encoded crop ready for upload.
#[derive(Debug, Clone)]
pub struct CroppedImage {
    pub width: u32,
    pub height: u32,
    /// JPEG bytes
    pub bytes: Vec<u8>,
}

/// Interactive fixed-aspect-ratio crop over a single source image.
#[derive(Debug, Clone)]
pub struct CropEngine {
    source: DecodedImage,
    aspect_ratio: f64,
    viewport: Viewport,
    config: CropConfig,
    scale: f64,
    rotation: Rotation,
    crop: CropRect,
    state: InteractionState,
}

impl CropEngine {
    /// Decode `bytes` and start a session.
    ///
    /// `size_cap` bounds the viewport width; `None` uses
    /// [`Viewport::default_size_cap`].
    pub fn from_bytes(
        bytes: &[u8],
        aspect_ratio: f64,
        size_cap: Option<f64>,
        config: CropConfig,
    ) -> Result<Self, CropError> {
        let source = decode::decode_image(bytes)?;
        Self::new(source, aspect_ratio, size_cap, config)
    }

    /// Start a session over an already decoded bitmap.
    pub fn new(
        source: DecodedImage,
        aspect_ratio: f64,
        size_cap: Option<f64>,
        config: CropConfig,
    ) -> Result<Self, CropError> {
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(CropError::InvalidAspectRatio(aspect_ratio));
        }
        let size_cap = size_cap.unwrap_or_else(|| Viewport::default_size_cap(aspect_ratio));
        if !(size_cap.is_finite() && size_cap > 0.0) {
            return Err(CropError::InvalidViewport(size_cap));
        }
        if source.is_empty() {
            return Err(DecodeError::InvalidDimensions {
                width: source.width,
                height: source.height,
            }
            .into());
        }
        if !source.has_valid_buffer() {
            return Err(DecodeError::CorruptedFile(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{}",
                source.pixels.len(),
                source.pixel_count() * 3,
                source.width,
                source.height
            ))
            .into());
        }
        config.validate()?;

        let viewport = Viewport::for_aspect_ratio(aspect_ratio, size_cap);
        let transform =
            DisplayTransform::compute(source.width, source.height, &viewport, 1.0, Rotation::None);
        let crop = constrain(
            &initial_crop_rect(&transform, aspect_ratio, config.initial_fill),
            aspect_ratio,
            &viewport,
        );

        log::debug!(
            "crop session: source {}x{}, viewport {}x{}, initial rect {:?}",
            source.width,
            source.height,
            viewport.width,
            viewport.height,
            crop
        );

        Ok(Self {
            source,
            aspect_ratio,
            viewport,
            config,
            scale: 1.0,
            rotation: Rotation::None,
            crop,
            state: InteractionState::Idle,
        })
    }

    pub fn source(&self) -> &DecodedImage {
        &self.source
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn crop_rect(&self) -> CropRect {
        self.crop
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.state
    }

    /// Where the image is currently painted in the viewport.
    pub fn display_transform(&self) -> DisplayTransform {
        DisplayTransform::compute(
            self.source.width,
            self.source.height,
            &self.viewport,
            self.scale,
            self.rotation,
        )
    }

    pub fn hit_test(&self, x: f64, y: f64) -> HitZone {
        hit_test(&self.crop, Point::new(x, y), self.config.handle_size)
    }

    /// Cursor hint for a pointer position, without changing any state.
    pub fn cursor_at(&self, x: f64, y: f64) -> CursorHint {
        self.hit_test(x, y).cursor()
    }

    /// Begin a drag or resize, or stay idle if the pointer missed the rect.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> InteractionState {
        let p = Point::new(x, y);
        self.state = match self.hit_test(x, y) {
            HitZone::Handle(corner) => InteractionState::Resizing { corner, last: p },
            HitZone::Body => InteractionState::Dragging {
                grab_offset: Point::new(x - self.crop.x, y - self.crop.y),
            },
            HitZone::Outside => InteractionState::Idle,
        };
        log::trace!("pointer down at ({x}, {y}): {}", self.state.name());
        self.state
    }

    /// Apply the active interaction for a pointer move.
    ///
    /// The cursor hint reflects the position against the rect as it was
    /// before this move.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> PointerUpdate {
        let p = Point::new(x, y);
        let cursor = self.cursor_at(x, y);

        match self.state {
            InteractionState::Resizing { corner, last } => {
                self.crop = resize_from_corner(
                    &self.crop,
                    corner,
                    p.x - last.x,
                    self.aspect_ratio,
                    &self.viewport,
                    self.config.min_crop_width,
                );
                self.state = InteractionState::Resizing { corner, last: p };
            }
            InteractionState::Dragging { grab_offset } => {
                self.crop = drag_to(&self.crop, p, grab_offset, &self.viewport);
            }
            InteractionState::Idle => {}
        }

        PointerUpdate {
            rect: self.crop,
            cursor,
        }
    }

    /// End any drag or resize.
    pub fn on_pointer_up(&mut self) {
        if self.state != InteractionState::Idle {
            log::trace!("pointer up: {} -> idle", self.state.name());
        }
        self.state = InteractionState::Idle;
    }

    /// Change the zoom factor by `delta`, clamped to the configured range.
    pub fn set_zoom(&mut self, delta: f64) {
        self.scale = self.config.clamp_scale(self.scale + delta);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.config.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(-self.config.zoom_step);
    }

    /// Advance the display rotation by 90 degrees.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.next();
    }

    /// Replace the crop rect. Height is re-derived from width and the rect is
    /// pulled back inside the viewport.
    pub fn set_crop_rect(&mut self, rect: CropRect) -> CropRect {
        self.crop = constrain(&rect, self.aspect_ratio, &self.viewport);
        self.crop
    }

    /// Re-run the initial placement against the current display transform.
    pub fn reset_crop_rect(&mut self) -> CropRect {
        let placed = initial_crop_rect(
            &self.display_transform(),
            self.aspect_ratio,
            self.config.initial_fill,
        );
        self.set_crop_rect(placed)
    }

    /// The bitmap commit samples from, with the rotation applied when the
    /// rotation mode asks for it.
    fn commit_source(&self) -> Result<Cow<'_, DecodedImage>, CropError> {
        match self.config.rotation_mode {
            RotationMode::Cosmetic => Ok(Cow::Borrowed(&self.source)),
            RotationMode::Applied => Ok(Cow::Owned(decode::rotate(&self.source, self.rotation)?)),
        }
    }

    /// The source rectangle the current crop maps to.
    pub fn source_rect(&self) -> Result<SourceRect, CropError> {
        let (width, height) = match self.config.rotation_mode {
            RotationMode::Applied if self.rotation.swaps_dimensions() => {
                (self.source.height, self.source.width)
            }
            _ => (self.source.width, self.source.height),
        };
        map_to_source(&self.crop, &self.display_transform(), width, height)
    }

    /// Extract and resample the crop without encoding it.
    pub fn render_output(&self) -> Result<DecodedImage, CropError> {
        let rect = self.source_rect().inspect_err(|e| {
            log::warn!("rejecting crop {:?}: {e}", self.crop);
        })?;

        let source = self.commit_source()?;
        let (x, y, width, height) = rect.to_pixel_bounds(source.width, source.height);
        let region = decode::crop_region(&source, x, y, width, height);

        let (out_width, out_height) =
            output_dimensions(self.aspect_ratio, self.config.output_long_edge);
        Ok(decode::resize(
            &region,
            out_width,
            out_height,
            self.config.resample_filter,
        )?)
    }

    /// Produce the final encoded crop.
    ///
    /// # Errors
    ///
    /// `CropError::DegenerateCrop` if the crop maps outside the image; the
    /// engine is left unchanged.
    pub fn commit(&self) -> Result<CroppedImage, CropError> {
        let output = self.render_output()?;
        let bytes = encode::encode_image(&output, self.config.jpeg_quality)?;

        log::debug!(
            "committed {}x{} crop ({} bytes)",
            output.width,
            output.height,
            bytes.len()
        );

        Ok(CroppedImage {
            width: output.width,
            height: output.height,
            bytes,
        })
    }
}
