use std::path::PathBuf;
use crate::banner_pipeline::common::error::BannerError;
use crate::banner_pipeline::raster::types::Placement;

/// An input file that was not there, so the update was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingAsset {
    Banner(PathBuf),
    Icon(PathBuf),
    /// Replace mode was run without an icon path
    IconNotGiven,
}

/// What a banner update run did. Only `Updated` touched the filesystem.
#[derive(Debug)]
pub enum BannerOutcome {
    /// Banner rewritten; `backup` holds the original bytes when enabled
    Updated {
        placement: Placement,
        backup: Option<PathBuf>,
    },
    /// Relocate mode on a banner with nothing but background
    Unchanged,
    /// A required input file does not exist
    Skipped(MissingAsset),
    /// Placement computed, nothing written
    DryRun { placement: Placement },
    /// The update failed and the banner was left as it was
    Failed(BannerError),
}

impl BannerOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, BannerOutcome::Updated { .. })
    }

    pub fn placement(&self) -> Option<Placement> {
        match self {
            BannerOutcome::Updated { placement, .. } | BannerOutcome::DryRun { placement } => Some(*placement),
            _ => None,
        }
    }
}
