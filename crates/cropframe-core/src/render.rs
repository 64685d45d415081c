//! Preview rendering: paints the engine's current geometry into an RGB frame.
//!
//! This is a thin adapter over the engine's geometry. It reads the display
//! transform and crop rect and never feeds anything back into the engine.
//!
//! Layers, bottom to top:
//! 1. Letterbox background
//! 2. Source image, nearest-sampled through the display transform and rotation
//! 3. 50% dimming outside the crop rect
//! 4. Crop border
//! 5. Corner handles

use crate::decode::DecodedImage;
use crate::engine::CropEngine;
use crate::geometry::{Corner, CropRect, Point};

/// Letterbox band color.
pub const BACKGROUND: [u8; 3] = [31, 41, 55];
/// Border and handle color.
pub const ACCENT: [u8; 3] = [234, 179, 8];
/// Border stroke width in pixels.
pub const BORDER_WIDTH: f64 = 2.0;

/// Render the viewport as the user currently sees it.
pub fn render_preview(engine: &CropEngine) -> DecodedImage {
    let (width, height) = engine.viewport().pixel_size();
    let mut frame = DecodedImage::filled(width, height, BACKGROUND);

    paint_image(&mut frame, engine);
    paint_overlay(&mut frame, &engine.crop_rect(), engine.config().handle_size);

    frame
}

/// The image turns about the center of the painted region, so the preview
/// shows exactly the region `display_transform()` reports to hit-testing and
/// commit mapping. At scale 1 that region is centered and this is the
/// viewport center.
fn paint_image(frame: &mut DecodedImage, engine: &CropEngine) {
    let source = engine.source();
    let transform = engine.display_transform();
    let rotation = engine.rotation();
    let (src_w, src_h) = (source.width as f64, source.height as f64);

    for y in 0..frame.height {
        for x in 0..frame.width {
            let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let Some((u, v)) = transform.normalize(center) else {
                continue;
            };
            let (su, sv) = rotation.unrotate_normalized(u, v);
            let sx = ((su * src_w) as u32).min(source.width - 1);
            let sy = ((sv * src_h) as u32).min(source.height - 1);
            frame.set_pixel(x, y, source.pixel(sx, sy));
        }
    }
}

fn paint_overlay(frame: &mut DecodedImage, crop: &CropRect, handle_size: f64) {
    let half = handle_size / 2.0;
    let handles: Vec<Point> = Corner::ALL.iter().map(|c| c.point_on(crop)).collect();

    for y in 0..frame.height {
        for x in 0..frame.width {
            let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);

            let on_handle = handles
                .iter()
                .any(|h| (p.x - h.x).abs() <= half && (p.y - h.y).abs() <= half);
            if on_handle || on_border(crop, p) {
                frame.set_pixel(x, y, ACCENT);
            } else if !crop.contains(p) {
                let [r, g, b] = frame.pixel(x, y);
                frame.set_pixel(x, y, [r / 2, g / 2, b / 2]);
            }
        }
    }
}

/// True if `p` lies on the border stroke, centered on the rect's edges.
fn on_border(crop: &CropRect, p: Point) -> bool {
    let half = BORDER_WIDTH / 2.0;
    let within_x = p.x >= crop.x - half && p.x <= crop.right() + half;
    let within_y = p.y >= crop.y - half && p.y <= crop.bottom() + half;

    let near_vertical = (p.x - crop.x).abs() <= half || (p.x - crop.right()).abs() <= half;
    let near_horizontal = (p.y - crop.y).abs() <= half || (p.y - crop.bottom()).abs() <= half;

    (near_vertical && within_y) || (near_horizontal && within_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CropConfig;

    fn engine_for(source: DecodedImage, ratio: f64) -> CropEngine {
        CropEngine::new(source, ratio, Some(400.0), CropConfig::default()).unwrap()
    }

    #[test]
    fn test_frame_matches_viewport() {
        let engine = engine_for(DecodedImage::filled(1600, 1200, [200, 200, 200]), 4.0 / 3.0);
        let frame = render_preview(&engine);
        assert_eq!((frame.width, frame.height), (400, 300));
    }

    #[test]
    fn test_letterbox_band_is_dimmed_background() {
        // 2:1 image in a square viewport: bands above and below
        let engine = engine_for(DecodedImage::filled(200, 100, [200, 200, 200]), 1.0);
        let frame = render_preview(&engine);

        let [r, g, b] = BACKGROUND;
        assert_eq!(frame.pixel(200, 10), [r / 2, g / 2, b / 2]);
    }

    #[test]
    fn test_crop_interior_shows_image() {
        let engine = engine_for(DecodedImage::filled(1600, 1200, [200, 100, 50]), 4.0 / 3.0);
        let frame = render_preview(&engine);
        assert_eq!(frame.pixel(200, 150), [200, 100, 50]);
    }

    #[test]
    fn test_outside_crop_is_dimmed() {
        let engine = engine_for(DecodedImage::filled(1600, 1200, [200, 100, 50]), 4.0 / 3.0);
        // Initial rect is (40, 30) 320x240; (10, 150) is image but outside the crop
        let frame = render_preview(&engine);
        assert_eq!(frame.pixel(10, 150), [100, 50, 25]);
    }

    #[test]
    fn test_handles_and_border_use_accent() {
        let engine = engine_for(DecodedImage::filled(1600, 1200, [0, 0, 0]), 4.0 / 3.0);
        let rect = engine.crop_rect();
        let frame = render_preview(&engine);

        // Top-left handle, slightly outside the rect
        assert_eq!(frame.pixel(rect.x as u32 - 4, rect.y as u32 - 4), ACCENT);
        // Middle of the top edge
        assert_eq!(frame.pixel(200, rect.y as u32), ACCENT);
    }

    #[test]
    fn test_quarter_turn_at_unit_scale_is_centered() {
        let mut source = DecodedImage::filled(200, 100, [0, 0, 255]);
        for y in 0..100 {
            for x in 0..100 {
                source.set_pixel(x, y, [255, 0, 0]);
            }
        }
        let mut engine = engine_for(source, 1.0);
        engine.rotate();
        let frame = render_preview(&engine);

        // The turned image is 200x400, leaving equal 100px bands either side
        let [r, g, b] = BACKGROUND;
        let band = [r / 2, g / 2, b / 2];
        assert_eq!(frame.pixel(95, 200), band);
        assert_eq!(frame.pixel(304, 200), band);
        assert_ne!(frame.pixel(105, 200), band);
        assert_ne!(frame.pixel(294, 200), band);
    }

    #[test]
    fn test_rotated_preview_moves_content() {
        // Left half red, right half blue
        let mut source = DecodedImage::filled(200, 100, [0, 0, 255]);
        for y in 0..100 {
            for x in 0..100 {
                source.set_pixel(x, y, [255, 0, 0]);
            }
        }
        let mut engine = engine_for(source, 1.0);
        engine.set_crop_rect(CropRect::new(0.0, 0.0, 400.0, 400.0));

        let frame = render_preview(&engine);
        assert_eq!(frame.pixel(100, 200), [255, 0, 0]);
        assert_eq!(frame.pixel(300, 200), [0, 0, 255]);

        // A clockwise quarter turn brings the red half to the top
        engine.rotate();
        let frame = render_preview(&engine);
        assert_eq!(frame.pixel(200, 100), [255, 0, 0]);
        assert_eq!(frame.pixel(200, 300), [0, 0, 255]);
    }
}
