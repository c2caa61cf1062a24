//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFile;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Builds the filter: `RUST_LOG` wins, then `config.trace_level`, then
/// `info`. An unparsable directive falls back to the default level.
#[must_use]
pub fn resolve_filter(config: &Config) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initializes the global tracing subscriber.
///
/// Sets up a registry with:
/// 1. An [`EnvFilter`] from [`resolve_filter`]
/// 2. A fmt layer writing to stderr, or to a [`RotatingFile`] at
///    `config.trace_file` without ANSI colors
///
/// # Initialization Behavior
///
/// - Creates the log file's parent directory if needed
/// - Falls back to stderr if that directory cannot be created
/// - Idempotent: Safe to call multiple times (only first call takes effect)
///
/// # Example
///
/// ```
/// use roster::observability::init_tracing;
/// use roster::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let filter = resolve_filter(config);

    let file = config.trace_file.as_ref().and_then(|path| {
        let writer = RotatingFile::new(path.into());
        writer.ensure_parent().ok().map(|()| Arc::new(writer))
    });

    let result = match file {
        Some(writer) => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(false).with_writer(writer))
            .try_init(),
        None => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!(trace_file = ?config.trace_file, "tracing initialized");
    }
}
