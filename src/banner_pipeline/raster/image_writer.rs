use std::io::Write;
use image::codecs::bmp::BmpEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat};
use tracing::debug;
use crate::banner_pipeline::common::error::{Result, BannerError};
use crate::banner_pipeline::raster::types::BannerRaster;
use crate::banner_pipeline::raster::writer::RasterWriter;

/// Encodes a raster back into the container format it was read from.
///
/// Banners without alpha are written as 24-bit RGB; installer toolsets
/// reject 32-bit banner bitmaps.
pub struct ImageCrateWriter;

impl RasterWriter for ImageCrateWriter {
    fn write_raster(&self, raster: &BannerRaster, mut output: &mut dyn Write) -> Result<()> {
        let (width, height) = (raster.width(), raster.height());
        debug!("Encoding {:?} banner: {}x{}", raster.format, width, height);

        let rgb;
        let (bytes, color_type): (&[u8], ExtendedColorType) = if raster.has_alpha {
            (raster.pixels.as_raw(), ExtendedColorType::Rgba8)
        } else {
            rgb = DynamicImage::ImageRgba8(raster.pixels.clone()).into_rgb8();
            (rgb.as_raw(), ExtendedColorType::Rgb8)
        };

        match raster.format {
            ImageFormat::Bmp => BmpEncoder::new(&mut output)
                .write_image(bytes, width, height, color_type)
                .map_err(|e| BannerError::EncodeError(e.to_string()))?,
            ImageFormat::Png => PngEncoder::new(&mut output)
                .write_image(bytes, width, height, color_type)
                .map_err(|e| BannerError::EncodeError(e.to_string()))?,
            other => return Err(BannerError::UnsupportedFormat(format!("{:?}", other))),
        }

        debug!("Banner encoding complete");
        Ok(())
    }
}
