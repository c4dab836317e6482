//! Raster reader implementation using the image library.
//!
//! Banners arrive as uncompressed BMP files; replacement icons may be PNG,
//! BMP or ICO. Everything is widened to 8-bit RGBA in memory so the layout
//! stages only ever deal with one pixel type.

use tracing::debug;
use crate::banner_pipeline::common::error::{Result, BannerError};
use crate::banner_pipeline::raster::types::BannerRaster;
use crate::banner_pipeline::raster::reader::RasterReader;

/// Raster reader backed by the `image` crate decoders.
pub struct ImageCrateReader;

impl RasterReader for ImageCrateReader {
    /// Decodes a banner or icon from its file bytes.
    ///
    /// The container format is sniffed from the magic bytes rather than
    /// taken from the file extension.
    ///
    /// # Returns
    ///
    /// * `Ok(BannerRaster)` - Decoded pixels plus the source format and alpha layout
    /// * `Err(BannerError::DecodeError)` - Unknown or malformed image data
    /// * `Err(BannerError::InvalidDimensions)` - The image has no pixels
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use banner_logo_rs::banner_pipeline::{ImageCrateReader, RasterReader};
    ///
    /// let bytes = std::fs::read("banner.bmp").unwrap();
    /// let banner = ImageCrateReader.read_raster(&bytes).unwrap();
    /// println!("{}x{}", banner.width(), banner.height());
    /// ```
    fn read_raster(&self, data: &[u8]) -> Result<BannerRaster> {
        debug!("Decoding image, {} bytes", data.len());

        let format = image::guess_format(data)
            .map_err(|e| BannerError::DecodeError(e.to_string()))?;

        let decoded = image::load_from_memory_with_format(data, format)
            .map_err(|e| BannerError::DecodeError(e.to_string()))?;

        let (width, height) = (decoded.width(), decoded.height());
        if width == 0 || height == 0 {
            return Err(BannerError::InvalidDimensions(width, height));
        }

        let has_alpha = decoded.color().has_alpha();
        debug!("Decoded {:?} image: {}x{}, alpha: {}", format, width, height, has_alpha);

        Ok(BannerRaster::new(decoded.into_rgba8(), format, has_alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner_pipeline::raster::{ImageCrateWriter, RasterWriter};
    use image::{ImageFormat, Rgba, RgbaImage};

    #[test]
    fn test_rejects_garbage() {
        let result = ImageCrateReader.read_raster(b"definitely not a bitmap");
        assert!(matches!(result, Err(BannerError::DecodeError(_))));
    }

    #[test]
    fn test_reads_back_written_bmp() {
        let mut pixels = RgbaImage::from_pixel(8, 4, Rgba([255, 255, 255, 255]));
        pixels.put_pixel(3, 2, Rgba([10, 20, 30, 255]));
        let banner = BannerRaster::new(pixels.clone(), ImageFormat::Bmp, false);

        let mut bytes = Vec::new();
        ImageCrateWriter.write_raster(&banner, &mut bytes).unwrap();

        let decoded = ImageCrateReader.read_raster(&bytes).unwrap();
        assert_eq!(decoded.format, ImageFormat::Bmp);
        assert!(!decoded.has_alpha);
        assert_eq!(decoded.pixels, pixels);
    }
}
