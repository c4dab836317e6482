//! Pipeline orchestration module
//!
//! Drives the banner stages in order: decode, sample background, locate
//! content, plan, composite, encode and persist.

mod config;
mod outcome;
mod banner_update;

pub use config::{BannerConfig, BannerConfigBuilder};
pub use outcome::{BannerOutcome, MissingAsset};
pub use banner_update::BannerPipeline;
