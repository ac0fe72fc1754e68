//! In-memory readers and writers.

use super::{ItemReader, ItemWriter};
use crate::errors::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Reads items from an owned list, front to back.
#[derive(Debug)]
pub struct ListItemReader<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> ListItemReader<T> {
    /// Creates a reader over `items`.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: Mutex::new(items.into_iter().collect()),
        }
    }

    /// Number of items not yet read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.lock().len()
    }
}

#[async_trait]
impl<T: Send + 'static> ItemReader<T> for ListItemReader<T> {
    async fn read(&self) -> Result<Option<T>> {
        Ok(self.items.lock().pop_front())
    }
}

/// Collects written items in memory.
#[derive(Debug, Default)]
pub struct InMemoryItemWriter<T> {
    written: Mutex<Vec<T>>,
    batches: Mutex<usize>,
}

impl<T> InMemoryItemWriter<T> {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            written: Mutex::new(Vec::new()),
            batches: Mutex::new(0),
        }
    }

    /// Number of `write` calls received.
    #[must_use]
    pub fn batch_count(&self) -> usize {
        *self.batches.lock()
    }
}

impl<T: Clone> InMemoryItemWriter<T> {
    /// Returns a copy of everything written so far.
    #[must_use]
    pub fn written(&self) -> Vec<T> {
        self.written.lock().clone()
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> ItemWriter<T> for InMemoryItemWriter<T> {
    async fn write(&self, items: &[T]) -> Result<()> {
        self.written.lock().extend_from_slice(items);
        *self.batches.lock() += 1;
        Ok(())
    }
}
