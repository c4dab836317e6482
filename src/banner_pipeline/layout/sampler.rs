use image::RgbaImage;
use crate::banner_pipeline::raster::types::Color;

/// Background colour of a banner, taken from its top-left pixel.
///
/// Banner bitmaps carry no transparency or background marker; the installer
/// banner convention keeps the corner clear of artwork, so the corner pixel
/// stands in for the background everywhere.
///
/// Decoded rasters are never empty (the reader rejects zero-sized images).
pub fn sample_background(pixels: &RgbaImage) -> Color {
    *pixels.get_pixel(0, 0)
}
