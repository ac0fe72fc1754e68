//! Testing utilities for chunk-oriented steps.
//!
//! This module provides:
//! - Scripted and failing chunk providers
//! - Counting and failing chunk processors
//! - Assertions over step contributions

mod assertions;
mod mocks;

pub use assertions::{assert_counts, assert_counts_not_decreased, assert_exit_code};
pub use mocks::{
    CountingChunkProcessor, ErrorFactory, FailingChunkProcessor, FailingChunkProvider,
    ScriptedChunkProvider,
};
