use std::io::Write;
use crate::banner_pipeline::common::error::Result;
use crate::banner_pipeline::raster::types::BannerRaster;

pub trait RasterWriter {
    fn write_raster(&self, raster: &BannerRaster, output: &mut dyn Write) -> Result<()>;
}
