use crate::banner_pipeline::common::error::Result;
use crate::banner_pipeline::raster::types::BannerRaster;

pub trait RasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<BannerRaster>;
}
