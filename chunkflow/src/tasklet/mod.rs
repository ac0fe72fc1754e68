//! Tasklets: the repeatable unit a step driver invokes until it finishes.

mod chunk_oriented;

pub use chunk_oriented::ChunkOrientedTasklet;

use crate::context::ChunkContext;
use crate::core::{RepeatStatus, StepContribution};
use crate::errors::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit of step work invoked repeatedly by an outer driver.
///
/// The driver keeps calling [`execute`](Tasklet::execute) while it returns
/// [`RepeatStatus::Continuable`]. Errors are returned to the driver, which
/// decides whether to abort, retry or stop the step.
#[async_trait]
pub trait Tasklet: Send + Sync {
    /// Performs one invocation.
    async fn execute(
        &self,
        contribution: &mut StepContribution,
        chunk_context: &ChunkContext,
    ) -> Result<RepeatStatus>;

    /// Requests that the next invocation stop instead of doing work.
    fn stop(&self);
}

/// Lifecycle of a tasklet as seen by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskletState {
    /// More work may exist.
    Ready,
    /// A stop was requested but no invocation has observed it yet.
    Stopping,
    /// An invocation returned [`RepeatStatus::Finished`].
    Terminal,
}

impl fmt::Display for TaskletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::Stopping => write!(f, "stopping"),
            Self::Terminal => write!(f, "terminal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasklet_state_display() {
        assert_eq!(TaskletState::Ready.to_string(), "ready");
        assert_eq!(TaskletState::Stopping.to_string(), "stopping");
        assert_eq!(TaskletState::Terminal.to_string(), "terminal");
    }
}
