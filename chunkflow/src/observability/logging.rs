//! Tracing subscriber setup.

use crate::config::LoggingConfig;
use crate::errors::{BatchError, Result};
use tracing_subscriber::EnvFilter;

/// Installs a global `tracing` subscriber built from `config`.
///
/// # Errors
///
/// Returns `BatchError::Logging` if the filter directive is invalid or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_new(&config.filter).map_err(|e| BatchError::Logging(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| BatchError::Logging(e.to_string()))
}
