use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Initializes logging with `RUST_LOG`, falling back to `info`.
pub fn init() {
    init_with_default("info");
}

/// Initializes logging with `RUST_LOG`, falling back to `default_level`.
///
/// Stage spans are only reported on close when the filter is at debug level
/// or finer, so a normal build log stays one line per outcome.
pub fn init_with_default(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let filter_text = env_filter.to_string();
    let is_debug = filter_text.contains("debug") || filter_text.contains("trace");

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(if is_debug {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        });

    // A subscriber may already be installed when the library is embedded
    // in a larger build tool.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
