//! Core value types for chunk-oriented steps.
//!
//! This module contains:
//! - The chunk handed from provider to processor
//! - The step contribution carrying progress counts
//! - Exit and repeat status types

mod chunk;
mod contribution;
mod status;

pub use chunk::Chunk;
pub use contribution::StepContribution;
pub use status::{ExitStatus, RepeatStatus};
