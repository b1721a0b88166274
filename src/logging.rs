// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or invalid. `TraceLayer` emits request spans at DEBUG.
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Build the filter from an explicit directive string, or the default.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

pub fn setup_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_target(false)
        .init();
}
