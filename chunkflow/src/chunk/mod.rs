//! Chunk capabilities consumed by the tasklet.
//!
//! This module provides:
//! - The [`ChunkProvider`] and [`ChunkProcessor`] traits
//! - Reader/processor/writer backed implementations of both

mod simple_processor;
mod simple_provider;

pub use simple_processor::SimpleChunkProcessor;
pub use simple_provider::SimpleChunkProvider;

use crate::core::{Chunk, StepContribution};
use crate::errors::Result;
use async_trait::async_trait;

/// Produces chunks of input for a tasklet.
#[async_trait]
pub trait ChunkProvider<T: Send + Sync>: Send + Sync {
    /// Acquires the next chunk.
    ///
    /// Implementations call `increment_read_count` once per item included and
    /// return an end-marked chunk once input is exhausted. An empty chunk that
    /// is not end-marked is allowed and is processed like any other.
    async fn provide(&self, contribution: &mut StepContribution) -> Result<Chunk<T>>;

    /// Bookkeeping after the chunk was fully processed.
    ///
    /// Not called when `provide` or the processor failed.
    async fn post_process(
        &self,
        _contribution: &mut StepContribution,
        _chunk: &Chunk<T>,
    ) -> Result<()> {
        Ok(())
    }
}

/// Consumes chunks handed over by a tasklet.
#[async_trait]
pub trait ChunkProcessor<T: Send + Sync>: Send + Sync {
    /// Processes every item of `chunk`.
    ///
    /// Implementations call `increment_write_count` with the number of items
    /// actually written, which may be less than the chunk size.
    async fn process(&self, contribution: &mut StepContribution, chunk: &Chunk<T>) -> Result<()>;
}
