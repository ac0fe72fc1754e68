//! Generic item processors.

use super::ItemProcessor;
use crate::errors::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// Returns every item unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughItemProcessor;

#[async_trait]
impl<T: Send + 'static> ItemProcessor<T, T> for PassThroughItemProcessor {
    async fn process(&self, item: T) -> Result<Option<T>> {
        Ok(Some(item))
    }
}

/// A processor backed by a synchronous closure.
pub struct FnItemProcessor<F> {
    func: F,
}

impl<F> FnItemProcessor<F> {
    /// Wraps `func` as an item processor.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Debug for FnItemProcessor<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnItemProcessor").finish_non_exhaustive()
    }
}

#[async_trait]
impl<I, O, F> ItemProcessor<I, O> for FnItemProcessor<F>
where
    I: Send + 'static,
    O: Send + 'static,
    F: Fn(I) -> Result<Option<O>> + Send + Sync,
{
    async fn process(&self, item: I) -> Result<Option<O>> {
        (self.func)(item)
    }
}
