//! Banner update configuration types

use image::imageops::FilterType;
use crate::banner_pipeline::layout::types::{BackgroundMatch, LayoutConfig, LayoutMode};

/// Configuration for a banner update run
#[derive(Debug, Clone)]
pub struct BannerConfig {
    /// Replace the logo with an icon, or move the existing one
    pub mode: LayoutMode,
    /// Padding and size ratios used by the planner
    pub layout: LayoutConfig,
    /// How pixels are matched against the background colour
    pub background_match: BackgroundMatch,
    /// Resampling filter for the overlay icon
    pub resize_filter: FilterType,
    /// Appended to the banner file name to form the backup path
    pub backup_suffix: String,
    /// Whether to keep a copy of the original banner
    pub create_backup: bool,
    /// Plan and log the placement without writing anything
    pub dry_run: bool,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Relocate,
            layout: LayoutConfig::default(),
            background_match: BackgroundMatch::Exact,
            resize_filter: FilterType::CatmullRom,
            backup_suffix: ".bak".to_string(),
            create_backup: true,
            dry_run: false,
        }
    }
}

impl BannerConfig {
    pub fn builder() -> BannerConfigBuilder {
        BannerConfigBuilder::default()
    }
}

/// Builder for BannerConfig
#[derive(Default)]
pub struct BannerConfigBuilder {
    mode: Option<LayoutMode>,
    padding: Option<u32>,
    default_area: Option<(f64, f64)>,
    max_extent: Option<(f64, f64)>,
    background_match: Option<BackgroundMatch>,
    resize_filter: Option<FilterType>,
    backup_suffix: Option<String>,
    create_backup: Option<bool>,
    dry_run: Option<bool>,
}

impl BannerConfigBuilder {
    pub fn mode(mut self, mode: LayoutMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn default_area(mut self, width_ratio: f64, height_ratio: f64) -> Self {
        self.default_area = Some((width_ratio, height_ratio));
        self
    }

    pub fn max_extent(mut self, width_ratio: f64, height_ratio: f64) -> Self {
        self.max_extent = Some((width_ratio, height_ratio));
        self
    }

    pub fn background_match(mut self, matcher: BackgroundMatch) -> Self {
        self.background_match = Some(matcher);
        self
    }

    pub fn resize_filter(mut self, filter: FilterType) -> Self {
        self.resize_filter = Some(filter);
        self
    }

    pub fn backup_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.backup_suffix = Some(suffix.into());
        self
    }

    pub fn create_backup(mut self, enable: bool) -> Self {
        self.create_backup = Some(enable);
        self
    }

    pub fn dry_run(mut self, enable: bool) -> Self {
        self.dry_run = Some(enable);
        self
    }

    pub fn build(self) -> BannerConfig {
        let default = BannerConfig::default();
        BannerConfig {
            mode: self.mode.unwrap_or(default.mode),
            layout: LayoutConfig {
                padding: self.padding.unwrap_or(default.layout.padding),
                default_area: self.default_area.unwrap_or(default.layout.default_area),
                max_extent: self.max_extent.unwrap_or(default.layout.max_extent),
            },
            background_match: self.background_match.unwrap_or(default.background_match),
            resize_filter: self.resize_filter.unwrap_or(default.resize_filter),
            backup_suffix: self.backup_suffix.unwrap_or(default.backup_suffix),
            create_backup: self.create_backup.unwrap_or(default.create_backup),
            dry_run: self.dry_run.unwrap_or(default.dry_run),
        }
    }
}
