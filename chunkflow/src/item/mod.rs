//! Item-at-a-time collaborators.
//!
//! Readers, processors and writers plug job logic into
//! [`SimpleChunkProvider`](crate::chunk::SimpleChunkProvider) and
//! [`SimpleChunkProcessor`](crate::chunk::SimpleChunkProcessor).

mod memory;
mod processor;

pub use memory::{InMemoryItemWriter, ListItemReader};
pub use processor::{FnItemProcessor, PassThroughItemProcessor};

use crate::errors::Result;
use async_trait::async_trait;

/// Reads items one at a time from some input.
#[async_trait]
pub trait ItemReader<T: Send>: Send + Sync {
    /// Reads the next item.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    async fn read(&self) -> Result<Option<T>>;
}

/// Transforms one item, or filters it out by returning `Ok(None)`.
#[async_trait]
pub trait ItemProcessor<I: Send, O: Send>: Send + Sync {
    /// Processes a single item.
    async fn process(&self, item: I) -> Result<Option<O>>;
}

/// Writes a batch of items.
#[async_trait]
pub trait ItemWriter<T: Send + Sync>: Send + Sync {
    /// Writes all items, in order.
    async fn write(&self, items: &[T]) -> Result<()>;
}
