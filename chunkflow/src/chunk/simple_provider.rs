//! Chunk provider that reads a fixed number of items per chunk.

use super::ChunkProvider;
use crate::config::ChunkConfig;
use crate::core::{Chunk, StepContribution};
use crate::errors::Result;
use crate::item::ItemReader;
use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::trace;

/// Builds chunks of up to `commit_interval` items from an [`ItemReader`].
///
/// When the reader runs dry part way through a chunk, the partial chunk is
/// returned as is and the following call yields the end-marked chunk.
pub struct SimpleChunkProvider<T, R> {
    reader: R,
    commit_interval: usize,
    _item: PhantomData<fn() -> T>,
}

impl<T, R> SimpleChunkProvider<T, R>
where
    T: Send + Sync,
    R: ItemReader<T>,
{
    /// Creates a provider reading from `reader`.
    ///
    /// # Errors
    ///
    /// Returns `BatchError::Configuration` if `config` is invalid.
    pub fn new(reader: R, config: &ChunkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            commit_interval: config.commit_interval,
            _item: PhantomData,
        })
    }

    /// Maximum number of items per chunk.
    #[must_use]
    pub fn commit_interval(&self) -> usize {
        self.commit_interval
    }

    /// The underlying reader.
    #[must_use]
    pub fn reader(&self) -> &R {
        &self.reader
    }
}

impl<T, R> std::fmt::Debug for SimpleChunkProvider<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleChunkProvider")
            .field("commit_interval", &self.commit_interval)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T, R> ChunkProvider<T> for SimpleChunkProvider<T, R>
where
    T: Send + Sync + 'static,
    R: ItemReader<T>,
{
    async fn provide(&self, contribution: &mut StepContribution) -> Result<Chunk<T>> {
        let mut chunk = Chunk::new();

        while chunk.len() < self.commit_interval {
            match self.reader.read().await? {
                Some(item) => {
                    contribution.increment_read_count();
                    chunk.add(item);
                }
                None => {
                    if chunk.is_empty() {
                        trace!("Reader exhausted");
                        chunk.set_end();
                    }
                    break;
                }
            }
        }

        trace!(items = chunk.len(), end = chunk.is_end(), "Chunk provided");
        Ok(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BatchError;
    use crate::item::ListItemReader;
    use parking_lot::Mutex;

    fn provider(items: Vec<u32>, commit_interval: usize) -> SimpleChunkProvider<u32, ListItemReader<u32>> {
        let config = ChunkConfig::new().with_commit_interval(commit_interval);
        SimpleChunkProvider::new(ListItemReader::new(items), &config).unwrap()
    }

    #[test]
    fn test_rejects_zero_commit_interval() {
        let config = ChunkConfig::new().with_commit_interval(0);
        let result = SimpleChunkProvider::<u32, _>::new(ListItemReader::new(vec![1]), &config);
        assert!(matches!(result, Err(BatchError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_provides_full_then_partial_then_end() {
        let provider = provider(vec![1, 2, 3, 4, 5], 2);
        let mut contribution = StepContribution::new("load");

        let first = provider.provide(&mut contribution).await.unwrap();
        assert_eq!(first.items(), &[1, 2]);
        assert!(!first.is_end());

        let second = provider.provide(&mut contribution).await.unwrap();
        assert_eq!(second.items(), &[3, 4]);

        let third = provider.provide(&mut contribution).await.unwrap();
        assert_eq!(third.items(), &[5]);
        assert!(!third.is_end());

        let fourth = provider.provide(&mut contribution).await.unwrap();
        assert!(fourth.is_end());
        assert!(fourth.is_empty());

        assert_eq!(contribution.read_count(), 5);
    }

    #[tokio::test]
    async fn test_empty_reader_yields_end_immediately() {
        let provider = provider(Vec::new(), 3);
        let mut contribution = StepContribution::new("load");

        let chunk = provider.provide(&mut contribution).await.unwrap();
        assert!(chunk.is_end());
        assert_eq!(contribution.read_count(), 0);
    }

    struct FlakyReader {
        remaining_before_failure: Mutex<u32>,
    }

    #[async_trait]
    impl ItemReader<u32> for FlakyReader {
        async fn read(&self) -> Result<Option<u32>> {
            let mut remaining = self.remaining_before_failure.lock();
            if *remaining == 0 {
                return Err(BatchError::read("connection reset"));
            }
            *remaining -= 1;
            Ok(Some(*remaining))
        }
    }

    #[tokio::test]
    async fn test_read_error_keeps_counted_items() {
        let reader = FlakyReader {
            remaining_before_failure: Mutex::new(2),
        };
        let provider = SimpleChunkProvider::new(reader, &ChunkConfig::new()).unwrap();
        let mut contribution = StepContribution::new("load");

        let err = provider.provide(&mut contribution).await.unwrap_err();
        assert!(matches!(err, BatchError::ItemRead(m) if m == "connection reset"));
        assert_eq!(contribution.read_count(), 2);
    }
}
