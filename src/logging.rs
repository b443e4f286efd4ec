//! Logging utilities wrapping `tracing` initialisation

use crate::config::LoggingOptions;
use std::io;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Initialise the global tracing subscriber according to the provided
/// logging options: single-line entries on stdout with a timestamp and level.
///
/// Subsequent calls are ignored to avoid reinitialisation panics. An
/// unparsable level falls back to `info` rather than failing; exit codes are
/// reserved for the pipeline itself.
pub fn init(options: &LoggingOptions) {
    if tracing::dispatcher::has_been_set() {
        // Already configured by tests or caller; nothing to do.
        return;
    }

    let env_filter = EnvFilter::try_new(options.level.as_str())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = Registry::default()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_timer(UtcTime::rfc_3339())
                .with_writer(|| io::stdout())
                .with_ansi(options.color)
                .with_target(false)
                .with_level(true),
        )
        .try_init();
}
