use std::path::PathBuf;

use anyhow::bail;
use banner_logo_rs::banner_pipeline::{
    BackgroundMatch, BannerConfig, BannerOutcome, BannerPipeline, LayoutMode,
};
use banner_logo_rs::logger;
use clap::{Parser, ValueEnum};

use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Mode {
    /// Paint the icon given with --icon in place of the current logo
    Replace,
    /// Move the banner's own logo to the right-hand side
    Relocate,
}

impl From<Mode> for LayoutMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Replace => LayoutMode::Replace,
            Mode::Relocate => LayoutMode::Relocate,
        }
    }
}

/// Right-aligns the logo on an installer banner bitmap.
#[derive(Parser, Debug)]
#[command(name = "banner-logo", version)]
struct Args {
    /// Banner bitmap to update in place
    banner: PathBuf,

    #[arg(long, value_enum, default_value_t = Mode::Relocate)]
    mode: Mode,

    /// Replacement icon (required with --mode replace)
    #[arg(long)]
    icon: Option<PathBuf>,

    /// Right margin in pixels
    #[arg(long, default_value_t = 10)]
    padding: u32,

    /// Per-channel difference still treated as background
    #[arg(long, default_value_t = 0)]
    tolerance: u8,

    #[arg(long, default_value = ".bak")]
    backup_suffix: String,

    /// Plan the placement without writing files
    #[arg(long)]
    dry_run: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_with_default(if args.verbose { "debug" } else { "info" });

    if args.mode == Mode::Replace && args.icon.is_none() {
        bail!("--mode replace needs an --icon");
    }

    let background_match = match args.tolerance {
        0 => BackgroundMatch::Exact,
        limit => BackgroundMatch::Tolerance(limit),
    };

    let config = BannerConfig::builder()
        .mode(args.mode.into())
        .padding(args.padding)
        .background_match(background_match)
        .backup_suffix(args.backup_suffix)
        .dry_run(args.dry_run)
        .build();
    let pipeline = BannerPipeline::new(config);

    info!(
        mode = ?pipeline.config().mode,
        padding = pipeline.config().layout.padding,
        background_match = ?pipeline.config().background_match,
        "Banner logo pipeline initialized"
    );
    if pipeline.config().dry_run {
        info!("Dry run: no files will be written");
    }

    match pipeline.run_file(&args.banner, args.icon.as_deref()) {
        BannerOutcome::Updated { placement, backup } => info!(
            ?placement,
            backup = ?backup,
            "Banner logo updated"
        ),
        BannerOutcome::DryRun { placement } => info!(?placement, "Dry run complete"),
        BannerOutcome::Unchanged => info!("Banner left unchanged"),
        BannerOutcome::Skipped(missing) => info!(?missing, "Banner logo update skipped"),
        // already reported by the pipeline; the build carries on
        BannerOutcome::Failed(_) => warn!("Continuing with the original banner"),
    }

    Ok(())
}
