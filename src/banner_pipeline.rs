//! Banner logo pipeline module
//!
//! This module locates the logo on an installer banner, plans where the new
//! (or relocated) logo goes, composites the result and persists it with a
//! backup of the original. Each stage lives in its own submodule and the
//! `pipeline` module drives them in order.

pub mod common;
pub mod raster;
pub mod layout;
pub mod compose;
pub mod persist;
pub mod pipeline;


pub use common::{
    BannerError,
    Result,
};

pub use raster::{
    BannerRaster,
    BoundingBox,
    Color,
    ImageCrateReader,
    ImageCrateWriter,
    Placement,
    RasterReader,
    RasterWriter,
};

pub use layout::{
    BackgroundMatch,
    LayoutConfig,
    LayoutMode,
    locate_content,
    locate_content_with,
    plan_relocate,
    plan_replace,
    sample_background,
};

pub use compose::{
    composite_relocate,
    composite_replace,
};

pub use persist::{
    BackupPersister,
    backup_path,
    write_atomic,
};

pub use pipeline::{
    BannerConfig,
    BannerConfigBuilder,
    BannerOutcome,
    BannerPipeline,
    MissingAsset,
};
