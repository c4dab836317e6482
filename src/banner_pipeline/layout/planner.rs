use tracing::debug;
use crate::banner_pipeline::layout::types::LayoutConfig;
use crate::banner_pipeline::raster::types::{BoundingBox, Placement};

/// Placement for an external overlay of `overlay_w` x `overlay_h` pixels.
///
/// The overlay is shrunk (never enlarged) to fit the detected logo area, or
/// a default area when the banner is blank, capped to a fraction of the
/// banner. It is then right-aligned with `config.padding` and centred
/// vertically.
pub fn plan_replace(
    canvas_w: u32,
    canvas_h: u32,
    content: Option<BoundingBox>,
    overlay_w: u32,
    overlay_h: u32,
    config: &LayoutConfig,
) -> Placement {
    let (area_w, area_h) = match content {
        Some(bbox) => (bbox.width(), bbox.height()),
        None => (
            ratio_of(canvas_w, config.default_area.0),
            ratio_of(canvas_h, config.default_area.1),
        ),
    };

    let max_w = area_w.min(ratio_of(canvas_w, config.max_extent.0));
    let max_h = area_h.min(ratio_of(canvas_h, config.max_extent.1));

    let scale = fit_scale(max_w, max_h, overlay_w, overlay_h);

    // A cap of zero on a tiny canvas falls back to scale 1.0, so clamp to the
    // canvas as well to keep the overlay inside it.
    let dest_w = ((overlay_w as f64 * scale).floor() as u32).max(1).min(canvas_w);
    let dest_h = ((overlay_h as f64 * scale).floor() as u32).max(1).min(canvas_h);

    debug!(area_w, area_h, max_w, max_h, scale, "Planned overlay size");

    anchor(canvas_w, canvas_h, dest_w, dest_h, config.padding)
}

/// Placement for moving the existing artwork, unscaled.
///
/// Returns `None` when the banner has no content; there is nothing to move
/// and the banner should be left as it is.
pub fn plan_relocate(
    canvas_w: u32,
    canvas_h: u32,
    content: Option<BoundingBox>,
    config: &LayoutConfig,
) -> Option<Placement> {
    let bbox = content?;
    Some(anchor(canvas_w, canvas_h, bbox.width(), bbox.height(), config.padding))
}

/// Uniform scale that fits the overlay into `max_w` x `max_h` without upscaling.
fn fit_scale(max_w: u32, max_h: u32, overlay_w: u32, overlay_h: u32) -> f64 {
    let scale = 1.0_f64
        .min(max_w as f64 / overlay_w as f64)
        .min(max_h as f64 / overlay_h as f64);

    if scale > 0.0 { scale } else { 1.0 }
}

/// Right-aligns with `padding` and centres vertically. Padding shrinks
/// rather than pushing the rectangle off the canvas.
fn anchor(canvas_w: u32, canvas_h: u32, dest_w: u32, dest_h: u32, padding: u32) -> Placement {
    Placement {
        dest_x: canvas_w.saturating_sub(dest_w).saturating_sub(padding),
        dest_y: canvas_h.saturating_sub(dest_h) / 2,
        dest_w,
        dest_h,
    }
}

fn ratio_of(length: u32, ratio: f64) -> u32 {
    (length as f64 * ratio).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo_box() -> BoundingBox {
        BoundingBox { left: 20, top: 10, right: 120, bottom: 50 }
    }

    #[test]
    fn test_relocate_existing_logo() {
        let placement = plan_relocate(500, 63, Some(logo_box()), &LayoutConfig::default());
        assert_eq!(
            placement,
            Some(Placement { dest_x: 389, dest_y: 11, dest_w: 101, dest_h: 41 })
        );
    }

    #[test]
    fn test_relocate_blank_banner_is_noop() {
        assert_eq!(plan_relocate(500, 63, None, &LayoutConfig::default()), None);
    }

    #[test]
    fn test_replace_blank_banner_uses_default_area() {
        let placement = plan_replace(500, 63, None, 64, 64, &LayoutConfig::default());
        assert_eq!(placement, Placement { dest_x: 453, dest_y: 13, dest_w: 37, dest_h: 37 });
    }

    #[test]
    fn test_replace_fits_detected_area() {
        // 101x41 area, 64x64 icon: height bound, 41/64
        let placement = plan_replace(500, 63, Some(logo_box()), 64, 64, &LayoutConfig::default());
        assert_eq!(placement, Placement { dest_x: 449, dest_y: 11, dest_w: 41, dest_h: 41 });
    }

    #[test]
    fn test_replace_never_upscales() {
        let placement = plan_replace(500, 63, Some(logo_box()), 16, 8, &LayoutConfig::default());
        assert_eq!(placement.dest_w, 16);
        assert_eq!(placement.dest_h, 8);
        assert_eq!(placement.dest_x, 500 - 16 - 10);
        assert_eq!(placement.dest_y, (63 - 8) / 2);
    }

    #[test]
    fn test_padding_shrinks_instead_of_overflowing() {
        let wide = BoundingBox { left: 0, top: 0, right: 95, bottom: 9 };
        let placement = plan_relocate(100, 10, Some(wide), &LayoutConfig::default()).unwrap();
        assert_eq!(placement.dest_x, 0);
        assert_eq!(placement.dest_y, 0);
        assert!(placement.fits_within(100, 10));
    }

    #[test]
    fn test_custom_padding() {
        let config = LayoutConfig { padding: 25, ..LayoutConfig::default() };
        let placement = plan_relocate(500, 63, Some(logo_box()), &config).unwrap();
        assert_eq!(placement.dest_x, 500 - 101 - 25);
    }

    #[test]
    fn test_scale_is_within_unit_interval() {
        for &(max_w, max_h) in &[(0, 0), (0, 5), (1, 1), (37, 125), (300, 56)] {
            for &(ow, oh) in &[(1, 1), (1, 1000), (1000, 1), (64, 64), (4096, 2048)] {
                let scale = fit_scale(max_w, max_h, ow, oh);
                assert!(scale > 0.0 && scale <= 1.0, "scale {} for {:?}", scale, (max_w, max_h, ow, oh));
            }
        }
    }

    #[test]
    fn test_placements_stay_on_canvas() {
        let config = LayoutConfig::default();
        let canvases = [(1, 1), (1, 50), (50, 1), (3, 3), (11, 7), (500, 63), (493, 58)];
        let overlays = [(1, 1), (2, 300), (300, 2), (64, 64), (1024, 1024)];

        for &(w, h) in &canvases {
            let boxes = [
                None,
                Some(BoundingBox::at(0, 0)),
                Some(BoundingBox { left: 0, top: 0, right: w - 1, bottom: h - 1 }),
                Some(BoundingBox { left: w / 2, top: h / 2, right: w - 1, bottom: h - 1 }),
            ];
            for content in boxes {
                for &(ow, oh) in &overlays {
                    let placement = plan_replace(w, h, content, ow, oh, &config);
                    assert!(placement.dest_w >= 1 && placement.dest_h >= 1);
                    assert!(placement.fits_within(w, h), "{:?} on {}x{}", placement, w, h);
                }
                if let Some(placement) = plan_relocate(w, h, content, &config) {
                    assert!(placement.fits_within(w, h), "{:?} on {}x{}", placement, w, h);
                }
            }
        }
    }
}
