//! Chunk processor that transforms items one by one and writes them together.

use super::ChunkProcessor;
use crate::core::{Chunk, StepContribution};
use crate::errors::Result;
use crate::item::{ItemProcessor, ItemWriter};
use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::trace;

/// Runs each item through an [`ItemProcessor`] and hands the survivors to an
/// [`ItemWriter`] in a single call.
///
/// Filtered items are added to the filter count. The write count grows by the
/// number of items written, and only once the writer succeeded.
pub struct SimpleChunkProcessor<I, O, P, W> {
    processor: P,
    writer: W,
    _items: PhantomData<fn(I) -> O>,
}

impl<I, O, P, W> SimpleChunkProcessor<I, O, P, W>
where
    I: Clone + Send + Sync,
    O: Send + Sync,
    P: ItemProcessor<I, O>,
    W: ItemWriter<O>,
{
    /// Creates a processor from an item processor and a writer.
    pub fn new(processor: P, writer: W) -> Self {
        Self {
            processor,
            writer,
            _items: PhantomData,
        }
    }

    /// The underlying writer.
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<I, O, P, W> std::fmt::Debug for SimpleChunkProcessor<I, O, P, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleChunkProcessor").finish_non_exhaustive()
    }
}

#[async_trait]
impl<I, O, P, W> ChunkProcessor<I> for SimpleChunkProcessor<I, O, P, W>
where
    I: Clone + Send + Sync + 'static,
    O: Send + Sync + 'static,
    P: ItemProcessor<I, O>,
    W: ItemWriter<O>,
{
    async fn process(&self, contribution: &mut StepContribution, chunk: &Chunk<I>) -> Result<()> {
        let mut outputs = Vec::with_capacity(chunk.len());
        let mut filtered = 0_u64;

        for item in chunk {
            match self.processor.process(item.clone()).await? {
                Some(output) => outputs.push(output),
                None => filtered += 1,
            }
        }

        if filtered > 0 {
            contribution.increment_filter_count(filtered);
        }

        if !outputs.is_empty() {
            self.writer.write(&outputs).await?;
            contribution.increment_write_count(outputs.len() as u64);
        }

        trace!(written = outputs.len(), filtered, "Chunk written");
        Ok(())
    }
}
