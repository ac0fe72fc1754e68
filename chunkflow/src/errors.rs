//! Error types for chunk-oriented step execution.
//!
//! Every fault that crosses the tasklet boundary is a [`BatchError`] produced
//! by a collaborator. The tasklet returns it exactly as it received it.

use std::collections::HashMap;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = BatchError> = std::result::Result<T, E>;

/// The main error type for chunkflow operations.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Reading an item from the input failed.
    #[error("Item read failed: {0}")]
    ItemRead(String),

    /// Transforming an item failed.
    #[error("Item process failed: {0}")]
    ItemProcess(String),

    /// Writing a batch of items failed.
    #[error("Item write failed: {0}")]
    ItemWrite(String),

    /// A configuration value was rejected.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The tracing subscriber could not be installed.
    #[error("Logging initialization failed: {0}")]
    Logging(String),

    /// Any other collaborator error, displayed as-is.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BatchError {
    /// Creates an item read error.
    #[must_use]
    pub fn read(reason: impl Into<String>) -> Self {
        Self::ItemRead(reason.into())
    }

    /// Creates an item process error.
    #[must_use]
    pub fn process(reason: impl Into<String>) -> Self {
        Self::ItemProcess(reason.into())
    }

    /// Creates an item write error.
    #[must_use]
    pub fn write(reason: impl Into<String>) -> Self {
        Self::ItemWrite(reason.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration(reason.into())
    }

    /// Returns a stable name for the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ItemRead(_) => "ItemRead",
            Self::ItemProcess(_) => "ItemProcess",
            Self::ItemWrite(_) => "ItemWrite",
            Self::Configuration(_) => "Configuration",
            Self::Logging(_) => "Logging",
            Self::Other(_) => "Other",
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("type".to_string(), serde_json::json!(self.kind()));
        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_map_to_variants() {
        assert!(matches!(BatchError::read("x"), BatchError::ItemRead(m) if m == "x"));
        assert!(matches!(BatchError::process("x"), BatchError::ItemProcess(_)));
        assert!(matches!(BatchError::write("x"), BatchError::ItemWrite(_)));
        assert!(matches!(BatchError::configuration("x"), BatchError::Configuration(_)));
    }

    #[test]
    fn test_other_is_transparent() {
        let err: BatchError = anyhow::anyhow!("Foo!").into();
        assert_eq!(err.to_string(), "Foo!");
        assert_eq!(err.kind(), "Other");
    }

    #[test]
    fn test_error_to_dict() {
        let err = BatchError::write("disk full");
        let dict = err.to_dict();

        assert_eq!(dict.get("type").unwrap(), "ItemWrite");
        assert_eq!(dict.get("message").unwrap(), "Item write failed: disk full");
    }
}
