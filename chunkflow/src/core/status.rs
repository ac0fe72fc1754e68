//! Exit and repeat status types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The outcome recorded for a step.
///
/// Only [`ExitStatus::stopped`] is ever written by the tasklet itself. The
/// other codes are set by whoever drives the step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExitStatus {
    /// Machine-readable exit code (e.g., `"COMPLETED"`).
    pub exit_code: String,
    /// Free-form description, empty when unset.
    #[serde(default)]
    pub exit_description: String,
}

impl ExitStatus {
    /// Code for an outcome that could not be determined.
    pub const UNKNOWN: &'static str = "UNKNOWN";
    /// Code for a step that is still running.
    pub const EXECUTING: &'static str = "EXECUTING";
    /// Code for a step that finished normally.
    pub const COMPLETED: &'static str = "COMPLETED";
    /// Code for a step that had nothing to do.
    pub const NOOP: &'static str = "NOOP";
    /// Code for a step that failed.
    pub const FAILED: &'static str = "FAILED";
    /// Code for a step that ended because a stop was requested.
    pub const STOPPED: &'static str = "STOPPED";

    /// Creates a status with the given code and no description.
    #[must_use]
    pub fn new(exit_code: impl Into<String>) -> Self {
        Self {
            exit_code: exit_code.into(),
            exit_description: String::new(),
        }
    }

    /// `UNKNOWN` status.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN)
    }

    /// `EXECUTING` status.
    #[must_use]
    pub fn executing() -> Self {
        Self::new(Self::EXECUTING)
    }

    /// `COMPLETED` status.
    #[must_use]
    pub fn completed() -> Self {
        Self::new(Self::COMPLETED)
    }

    /// `NOOP` status.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(Self::NOOP)
    }

    /// `FAILED` status.
    #[must_use]
    pub fn failed() -> Self {
        Self::new(Self::FAILED)
    }

    /// `STOPPED` status.
    #[must_use]
    pub fn stopped() -> Self {
        Self::new(Self::STOPPED)
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.exit_description = description.into();
        self
    }

    /// Returns true while the step is executing or its outcome is unknown.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.exit_code == Self::EXECUTING || self.exit_code == Self::UNKNOWN
    }

    /// Combines two statuses, keeping the more severe code.
    ///
    /// Descriptions are joined with `"; "`.
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        let exit_code = if self.severity_cmp(other) == Ordering::Less {
            other.exit_code.clone()
        } else {
            self.exit_code.clone()
        };

        let exit_description = match (
            self.exit_description.is_empty(),
            other.exit_description.is_empty(),
        ) {
            (_, true) => self.exit_description.clone(),
            (true, false) => other.exit_description.clone(),
            (false, false) => format!("{}; {}", self.exit_description, other.exit_description),
        };

        Self {
            exit_code,
            exit_description,
        }
    }

    /// Orders statuses by severity, falling back to the code for custom codes.
    #[must_use]
    pub fn severity_cmp(&self, other: &Self) -> Ordering {
        self.severity()
            .cmp(&other.severity())
            .then_with(|| self.exit_code.cmp(&other.exit_code))
    }

    fn severity(&self) -> u8 {
        match self.exit_code.as_str() {
            Self::EXECUTING => 1,
            Self::COMPLETED => 2,
            Self::NOOP => 3,
            Self::STOPPED => 4,
            Self::FAILED => 5,
            Self::UNKNOWN => 6,
            _ => 7,
        }
    }
}

impl Default for ExitStatus {
    fn default() -> Self {
        Self::executing()
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exit_description.is_empty() {
            write!(f, "{}", self.exit_code)
        } else {
            write!(f, "{} ({})", self.exit_code, self.exit_description)
        }
    }
}

/// Whether the outer driver should invoke the tasklet again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatStatus {
    /// More work may exist; call again.
    Continuable,
    /// Input is exhausted or a stop was honoured; do not call again.
    Finished,
}

impl RepeatStatus {
    /// Returns true for [`RepeatStatus::Continuable`].
    #[must_use]
    pub fn is_continuable(self) -> bool {
        matches!(self, Self::Continuable)
    }

    /// Maps a boolean onto a repeat status.
    #[must_use]
    pub fn continue_if(continuable: bool) -> Self {
        if continuable {
            Self::Continuable
        } else {
            Self::Finished
        }
    }

    /// Continuable only if both `self` and `continuable` are.
    #[must_use]
    pub fn and(self, continuable: bool) -> Self {
        Self::continue_if(self.is_continuable() && continuable)
    }
}

impl fmt::Display for RepeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuable => write!(f, "continuable"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_default_is_executing() {
        let status = ExitStatus::default();
        assert_eq!(status.exit_code, ExitStatus::EXECUTING);
        assert!(status.is_running());
    }

    #[test]
    fn test_exit_status_equality_includes_description() {
        assert_eq!(ExitStatus::stopped(), ExitStatus::stopped());
        assert_ne!(
            ExitStatus::stopped(),
            ExitStatus::stopped().with_description("operator request")
        );
    }

    #[test]
    fn test_exit_status_and_keeps_more_severe_code() {
        let combined = ExitStatus::completed().and(&ExitStatus::failed());
        assert_eq!(combined.exit_code, ExitStatus::FAILED);

        let combined = ExitStatus::failed().and(&ExitStatus::completed());
        assert_eq!(combined.exit_code, ExitStatus::FAILED);

        let combined = ExitStatus::stopped().and(&ExitStatus::new("CUSTOM"));
        assert_eq!(combined.exit_code, "CUSTOM");
    }

    #[test]
    fn test_exit_status_and_joins_descriptions() {
        let left = ExitStatus::completed().with_description("first");
        let right = ExitStatus::noop().with_description("second");
        assert_eq!(left.and(&right).exit_description, "first; second");

        let right = ExitStatus::noop();
        assert_eq!(left.and(&right).exit_description, "first");
    }

    #[test]
    fn test_exit_status_display() {
        assert_eq!(ExitStatus::stopped().to_string(), "STOPPED");
        assert_eq!(
            ExitStatus::failed().with_description("boom").to_string(),
            "FAILED (boom)"
        );
    }

    #[test]
    fn test_repeat_status_helpers() {
        assert!(RepeatStatus::Continuable.is_continuable());
        assert!(!RepeatStatus::Finished.is_continuable());
        assert_eq!(RepeatStatus::continue_if(true), RepeatStatus::Continuable);
        assert_eq!(RepeatStatus::continue_if(false), RepeatStatus::Finished);
        assert_eq!(RepeatStatus::Continuable.and(false), RepeatStatus::Finished);
        assert_eq!(RepeatStatus::Finished.and(true), RepeatStatus::Finished);
    }

    #[test]
    fn test_repeat_status_serialize() {
        let json = serde_json::to_string(&RepeatStatus::Continuable).unwrap();
        assert_eq!(json, r#""continuable""#);

        let deserialized: RepeatStatus = serde_json::from_str(r#""finished""#).unwrap();
        assert_eq!(deserialized, RepeatStatus::Finished);
    }
}
