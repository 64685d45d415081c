//! Viewport-space primitives: points, the crop rectangle and the viewport.

use serde::{Deserialize, Serialize};

/// A position in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The user-adjustable crop selection, in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Inclusive containment test, matching the pointer hit rules.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// True if the rect lies within `[0, width] x [0, height]` of the viewport,
    /// allowing `tolerance` for floating-point drift.
    pub fn is_within(&self, viewport: &Viewport, tolerance: f64) -> bool {
        self.x >= -tolerance
            && self.y >= -tolerance
            && self.right() <= viewport.width + tolerance
            && self.bottom() <= viewport.height + tolerance
    }
}

/// The fixed-size drawing surface the user frames the crop on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Viewport shaped like the target crop: `size_cap` wide, height derived
    /// from the aspect ratio.
    pub fn for_aspect_ratio(aspect_ratio: f64, size_cap: f64) -> Self {
        Self {
            width: size_cap,
            height: size_cap / aspect_ratio,
        }
    }

    /// Width cap used when the caller has no container constraint:
    /// landscape crops get a wider surface than portrait ones.
    pub fn default_size_cap(aspect_ratio: f64) -> f64 {
        if aspect_ratio > 1.0 {
            500.0
        } else {
            400.0
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Rounded pixel dimensions for rendering.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.width.round().max(1.0) as u32,
            self.height.round().max(1.0) as u32,
        )
    }
}
