//! Raster module
//!
//! This module holds the pixel data model shared by the layout stages and the
//! decode/encode seams that move banners and icons in and out of memory.

mod reader;
mod writer;
mod image_reader;
mod image_writer;
pub mod types;

pub use reader::RasterReader;
pub use writer::RasterWriter;
pub use image_reader::ImageCrateReader;
pub use image_writer::ImageCrateWriter;
pub use types::{BannerRaster, BoundingBox, Color, Placement};
