use image::RgbaImage;
use tracing::debug;
use crate::banner_pipeline::raster::types::{BoundingBox, Color};

/// Bounding box of every pixel that differs exactly from `background`.
///
/// Returns `None` when the whole raster is background.
pub fn locate_content(pixels: &RgbaImage, background: &Color) -> Option<BoundingBox> {
    locate_content_with(pixels, background, |pixel, bg| pixel == bg)
}

/// Bounding box of every pixel that `is_background` rejects.
///
/// Every pixel is visited once; there is no early exit because the full
/// extent of the artwork is needed.
pub fn locate_content_with<F>(
    pixels: &RgbaImage,
    background: &Color,
    is_background: F,
) -> Option<BoundingBox>
where
    F: Fn(&Color, &Color) -> bool,
{
    let mut found: Option<BoundingBox> = None;

    for (x, y, pixel) in pixels.enumerate_pixels() {
        if is_background(pixel, background) {
            continue;
        }
        found = Some(match found {
            Some(mut bbox) => {
                bbox.include(x, y);
                bbox
            }
            None => BoundingBox::at(x, y),
        });
    }

    match &found {
        Some(bbox) => debug!(
            left = bbox.left,
            top = bbox.top,
            right = bbox.right,
            bottom = bbox.bottom,
            "Located banner content"
        ),
        None => debug!("Banner has no content besides background"),
    }

    found
}
