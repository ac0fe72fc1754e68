//! Configuration types for chunk providers and logging.

use crate::errors::{BatchError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for building chunks from an item reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Maximum number of items read into one chunk.
    #[serde(default = "default_commit_interval")]
    pub commit_interval: usize,
}

fn default_commit_interval() -> usize {
    10
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            commit_interval: default_commit_interval(),
        }
    }
}

impl ChunkConfig {
    /// Creates a new chunk configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the commit interval.
    #[must_use]
    pub fn with_commit_interval(mut self, commit_interval: usize) -> Self {
        self.commit_interval = commit_interval;
        self
    }

    /// Checks that the configuration can be used.
    ///
    /// # Errors
    ///
    /// Returns `BatchError::Configuration` if the commit interval is zero.
    pub fn validate(&self) -> Result<()> {
        if self.commit_interval == 0 {
            return Err(BatchError::configuration(
                "commit_interval must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Configuration for the tracing subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (e.g., `"info"` or `"chunkflow=debug"`).
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Creates a new logging configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter directive.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Enables or disables JSON output.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_config_defaults() {
        let config = ChunkConfig::new();
        assert_eq!(config.commit_interval, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chunk_config_rejects_zero_interval() {
        let config = ChunkConfig::new().with_commit_interval(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, BatchError::Configuration(_)));
    }

    #[test]
    fn test_chunk_config_deserialize_with_defaults() {
        let config: ChunkConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ChunkConfig::default());

        let config: ChunkConfig = serde_json::from_str(r#"{"commit_interval": 3}"#).unwrap();
        assert_eq!(config.commit_interval, 3);
    }

    #[test]
    fn test_logging_config_builders() {
        let config = LoggingConfig::new()
            .with_filter("chunkflow=debug")
            .with_json(true);

        assert_eq!(config.filter, "chunkflow=debug");
        assert!(config.json);
    }

    #[test]
    fn test_logging_config_deserialize_with_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert_eq!(config.filter, "info");
        assert!(config.json);
    }
}
