//! Display transform: where the source image is painted inside the viewport.
//!
//! The image is fitted so that it is fully visible, centered, and constrained
//! by whichever axis is tighter (letterboxing). The user zoom factor scales
//! the constrained axis; quarter-turn rotations swap the effective source
//! dimensions before the fit is computed.
//!
//! ```text
//! image wider than viewport          image taller than viewport
//! +------------------+               +----+--------+----+
//! |     (band)       |               |    |        |    |
//! +------------------+               |band| image  |band|
//! |      image       |               |    |        |    |
//! +------------------+               |    |        |    |
//! |     (band)       |               +----+--------+----+
//! +------------------+
//! ```

use serde::{Deserialize, Serialize};

use super::{Point, Viewport};

/// Quarter-turn rotation applied to the displayed image, clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    None,
    Quarter,
    Half,
    ThreeQuarter,
}

impl Rotation {
    /// Advance by 90 degrees, wrapping at 360.
    pub fn next(self) -> Self {
        match self {
            Rotation::None => Rotation::Quarter,
            Rotation::Quarter => Rotation::Half,
            Rotation::Half => Rotation::ThreeQuarter,
            Rotation::ThreeQuarter => Rotation::None,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::None => 0,
            Rotation::Quarter => 90,
            Rotation::Half => 180,
            Rotation::ThreeQuarter => 270,
        }
    }

    /// 90 and 270 degree turns swap width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Quarter | Rotation::ThreeQuarter)
    }

    /// Map a normalized position in the displayed (rotated) image back to a
    /// normalized position in the unrotated source.
    pub fn unrotate_normalized(self, u: f64, v: f64) -> (f64, f64) {
        match self {
            Rotation::None => (u, v),
            Rotation::Quarter => (v, 1.0 - u),
            Rotation::Half => (1.0 - u, 1.0 - v),
            Rotation::ThreeQuarter => (1.0 - v, u),
        }
    }
}

/// The rectangle within the viewport where the image is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayTransform {
    pub draw_width: f64,
    pub draw_height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl DisplayTransform {
    /// Compute the painted region for an image of `image_width x image_height`
    /// shown in `viewport` at zoom `scale` and the given rotation.
    ///
    /// Pure function of its inputs; all dimensions must be positive.
    pub fn compute(
        image_width: u32,
        image_height: u32,
        viewport: &Viewport,
        scale: f64,
        rotation: Rotation,
    ) -> Self {
        let (effective_width, effective_height) = if rotation.swaps_dimensions() {
            (image_height as f64, image_width as f64)
        } else {
            (image_width as f64, image_height as f64)
        };

        let image_aspect = effective_width / effective_height;
        let canvas_aspect = viewport.aspect_ratio();

        if image_aspect > canvas_aspect {
            // Relatively wider: fill horizontally, center vertically
            let draw_width = viewport.width * scale;
            let draw_height = draw_width / image_aspect;
            Self {
                draw_width,
                draw_height,
                offset_x: 0.0,
                offset_y: (viewport.height - draw_height) / 2.0,
            }
        } else {
            let draw_height = viewport.height * scale;
            let draw_width = draw_height * image_aspect;
            Self {
                draw_width,
                draw_height,
                offset_x: (viewport.width - draw_width) / 2.0,
                offset_y: 0.0,
            }
        }
    }

    /// Normalized position of a viewport point within the painted region,
    /// or `None` if it falls outside (in a letterbox band).
    pub fn normalize(&self, p: Point) -> Option<(f64, f64)> {
        let u = (p.x - self.offset_x) / self.draw_width;
        let v = (p.y - self.offset_y) / self.draw_height;
        ((0.0..1.0).contains(&u) && (0.0..1.0).contains(&v)).then_some((u, v))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the painted region keeps the (effective) image aspect ratio.
        #[test]
        fn prop_preserves_image_aspect(
            (w, h) in (1u32..=8000, 1u32..=8000),
            (vw, vh) in (50.0f64..=1000.0, 50.0f64..=1000.0),
            scale in 0.5f64..=3.0,
        ) {
            let t = DisplayTransform::compute(w, h, &Viewport::new(vw, vh), scale, Rotation::None);
            let expected = w as f64 / h as f64;
            prop_assert!((t.draw_width / t.draw_height - expected).abs() / expected < 1e-9);
        }

        /// Property: at scale 1 the image is fully visible and centered on the free axis.
        #[test]
        fn prop_unit_scale_fits_and_centers(
            (w, h) in (1u32..=8000, 1u32..=8000),
            (vw, vh) in (50.0f64..=1000.0, 50.0f64..=1000.0),
        ) {
            let viewport = Viewport::new(vw, vh);
            let t = DisplayTransform::compute(w, h, &viewport, 1.0, Rotation::None);

            prop_assert!(t.draw_width <= vw + 1e-9);
            prop_assert!(t.draw_height <= vh + 1e-9);
            prop_assert!((t.offset_x * 2.0 + t.draw_width - vw).abs() < 1e-6);
            prop_assert!((t.offset_y * 2.0 + t.draw_height - vh).abs() < 1e-6);
        }
    }
}
