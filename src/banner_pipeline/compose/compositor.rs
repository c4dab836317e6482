use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;
use crate::banner_pipeline::raster::types::{BoundingBox, Color, Placement};

/// Paints `overlay` over a copy of `source`, resampled into `placement`.
///
/// The source is copied whole first so decorative banner content outside
/// the logo survives. The overlay is alpha-blended on top after resizing
/// with `filter`; icons are usually shrunk, so a smooth filter matters.
pub fn composite_replace(
    source: &RgbaImage,
    background: Color,
    placement: Placement,
    overlay: &RgbaImage,
    filter: FilterType,
) -> RgbaImage {
    let mut output = RgbaImage::from_pixel(source.width(), source.height(), background);
    imageops::replace(&mut output, source, 0, 0);

    let scaled = imageops::resize(overlay, placement.dest_w, placement.dest_h, filter);
    debug!(
        from_w = overlay.width(),
        from_h = overlay.height(),
        to_w = scaled.width(),
        to_h = scaled.height(),
        ?filter,
        "Resampled overlay"
    );

    imageops::overlay(&mut output, &scaled, placement.dest_x as i64, placement.dest_y as i64);
    output
}

/// Moves the `crop` region of `source` to `placement` on a blank canvas.
///
/// The crop is copied 1:1; only background remains everywhere else.
pub fn composite_relocate(
    source: &RgbaImage,
    background: Color,
    placement: Placement,
    crop: BoundingBox,
) -> RgbaImage {
    let mut output = RgbaImage::from_pixel(source.width(), source.height(), background);

    let artwork = imageops::crop_imm(source, crop.left, crop.top, crop.width(), crop.height()).to_image();
    imageops::replace(&mut output, &artwork, placement.dest_x as i64, placement.dest_y as i64);

    output
}
