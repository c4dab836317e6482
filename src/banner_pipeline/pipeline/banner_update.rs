use tracing::{debug, info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::banner_pipeline::{
    common::error::{BannerError, Result},
    compose::{composite_relocate, composite_replace},
    layout::{LayoutMode, locate_content_with, plan_relocate, plan_replace, sample_background},
    persist::BackupPersister,
    pipeline::config::BannerConfig,
    pipeline::outcome::{BannerOutcome, MissingAsset},
    raster::{BannerRaster, ImageCrateReader, ImageCrateWriter, Placement, RasterReader, RasterWriter},
};

pub struct BannerPipeline<R: RasterReader, W: RasterWriter> {
    reader: R,
    writer: W,
    config: BannerConfig,
}

impl BannerPipeline<ImageCrateReader, ImageCrateWriter> {
    pub fn new(config: BannerConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: ImageCrateWriter,
            config,
        }
    }
}

impl<R: RasterReader, W: RasterWriter> BannerPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: BannerConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Runs the pure stages on decoded rasters.
    ///
    /// Returns the placement and the new banner, or `None` when relocate mode
    /// finds nothing to move.
    pub fn compose(
        &self,
        banner: &BannerRaster,
        overlay: Option<&BannerRaster>,
    ) -> Result<Option<(Placement, BannerRaster)>> {
        let (width, height) = (banner.width(), banner.height());
        let background = sample_background(&banner.pixels);
        debug!(?background, "Sampled background colour");

        let content = {
            let _span = tracing::info_span!("locate_content", width, height).entered();
            let matcher = self.config.background_match;
            locate_content_with(&banner.pixels, &background, |pixel, bg| matcher.matches(pixel, bg))
        };

        let overlay = match self.config.mode {
            LayoutMode::Replace => Some(overlay.ok_or(BannerError::MissingOverlay)?),
            LayoutMode::Relocate => None,
        };

        let placement = {
            let _span = tracing::info_span!("plan_layout", mode = ?self.config.mode).entered();
            match overlay {
                Some(overlay) => Some(plan_replace(
                    width,
                    height,
                    content,
                    overlay.width(),
                    overlay.height(),
                    &self.config.layout,
                )),
                None => plan_relocate(width, height, content, &self.config.layout),
            }
        };

        let Some(placement) = placement else {
            return Ok(None);
        };
        info!(
            x = placement.dest_x,
            y = placement.dest_y,
            w = placement.dest_w,
            h = placement.dest_h,
            "Planned logo placement"
        );

        let pixels = {
            let _span = tracing::info_span!("composite").entered();
            match (overlay, content) {
                (Some(overlay), _) => composite_replace(
                    &banner.pixels,
                    background,
                    placement,
                    &overlay.pixels,
                    self.config.resize_filter,
                ),
                (None, Some(crop)) => composite_relocate(&banner.pixels, background, placement, crop),
                // plan_relocate only places a located box
                (None, None) => return Ok(None),
            }
        };

        Ok(Some((placement, banner.with_pixels(pixels))))
    }

    /// Decodes, composes and encodes a banner held in memory.
    ///
    /// Nothing is written to `output` when the result is `Ok(None)`.
    #[instrument(skip(self, banner_data, icon_data, output), fields(banner_size = banner_data.len()))]
    pub fn convert(
        &self,
        banner_data: &[u8],
        icon_data: Option<&[u8]>,
        output: &mut dyn Write,
    ) -> Result<Option<Placement>> {
        let banner = {
            let _span = tracing::info_span!("decode_banner").entered();
            self.reader.read_raster(banner_data)?
        };

        let overlay = match (self.config.mode, icon_data) {
            (LayoutMode::Replace, Some(data)) => {
                let _span = tracing::info_span!("decode_icon").entered();
                Some(self.reader.read_raster(data)?)
            }
            (LayoutMode::Replace, None) => return Err(BannerError::MissingOverlay),
            (LayoutMode::Relocate, Some(_)) => {
                debug!("Relocate mode ignores the overlay icon");
                None
            }
            (LayoutMode::Relocate, None) => None,
        };

        let Some((placement, composed)) = self.compose(&banner, overlay.as_ref())? else {
            info!("Banner has no logo to relocate, leaving it as is");
            return Ok(None);
        };

        {
            let _span = tracing::info_span!("encode_banner").entered();
            self.writer.write_raster(&composed, output)?;
        }

        Ok(Some(placement))
    }

    /// Updates the banner file in place, keeping a backup of the original.
    ///
    /// A missing banner, or a missing or unspecified icon in replace mode,
    /// skips the update without error. Any failure after that leaves the banner file as it was.
    #[instrument(skip(self, banner_path, icon_path))]
    pub fn update_file<P: AsRef<Path>>(
        &self,
        banner_path: P,
        icon_path: Option<&Path>,
    ) -> Result<BannerOutcome> {
        let banner_path = banner_path.as_ref();

        if !banner_path.is_file() {
            info!(banner = %banner_path.display(), "Banner not found, skipping logo update");
            return Ok(BannerOutcome::Skipped(MissingAsset::Banner(banner_path.to_path_buf())));
        }

        let icon_path = match self.config.mode {
            LayoutMode::Replace => {
                let Some(icon_path) = icon_path else {
                    info!("No icon given, skipping logo update");
                    return Ok(BannerOutcome::Skipped(MissingAsset::IconNotGiven));
                };
                if !icon_path.is_file() {
                    info!(icon = %icon_path.display(), "Icon not found, skipping logo update");
                    return Ok(BannerOutcome::Skipped(MissingAsset::Icon(icon_path.to_path_buf())));
                }
                Some(icon_path)
            }
            LayoutMode::Relocate => None,
        };

        info!(
            banner = %banner_path.display(),
            mode = ?self.config.mode,
            "Updating banner logo"
        );

        let banner_data = {
            let _span = tracing::info_span!("read_banner_file").entered();
            std::fs::read(banner_path).map_err(|e| {
                BannerError::InputReadError(format!("{}: {}", banner_path.display(), e))
            })?
        };

        let icon_data = match icon_path {
            Some(path) => Some(std::fs::read(path).map_err(|e| {
                BannerError::InputReadError(format!("{}: {}", path.display(), e))
            })?),
            None => None,
        };

        let mut encoded = Vec::new();
        let Some(placement) = self.convert(&banner_data, icon_data.as_deref(), &mut encoded)? else {
            return Ok(BannerOutcome::Unchanged);
        };

        if self.config.dry_run {
            info!("Dry run, banner not written");
            return Ok(BannerOutcome::DryRun { placement });
        }

        let backup = {
            let _span = tracing::info_span!("persist").entered();
            self.persister().persist(banner_path, &banner_data, &encoded)?
        };

        Ok(BannerOutcome::Updated { placement, backup })
    }

    /// Like [`update_file`](Self::update_file), but never fails: errors are
    /// logged once as a warning and reported as [`BannerOutcome::Failed`].
    /// The logo is cosmetic and must not stop the surrounding build.
    pub fn run_file<P: AsRef<Path>>(&self, banner_path: P, icon_path: Option<&Path>) -> BannerOutcome {
        let banner_path = banner_path.as_ref();
        match self.update_file(banner_path, icon_path) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(banner = %banner_path.display(), "Banner logo update failed: {}", e);
                BannerOutcome::Failed(e)
            }
        }
    }

    fn persister(&self) -> BackupPersister {
        if self.config.create_backup {
            BackupPersister::new(self.config.backup_suffix.clone())
        } else {
            BackupPersister::without_backup()
        }
    }

    pub fn config(&self) -> &BannerConfig {
        &self.config
    }
}
