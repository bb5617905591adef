//! Logging setup

use tracing_subscriber::{fmt, EnvFilter};

use crate::core::config::DEFAULT_LOG_FILTER;

/// Installs the global subscriber. Logs go to stderr so they never land inside
/// the card drawn on stdout; `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
