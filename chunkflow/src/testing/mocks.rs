//! Mock chunk providers and processors for testing.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::chunk::{ChunkProcessor, ChunkProvider};
use crate::core::{Chunk, StepContribution};
use crate::errors::{BatchError, Result};

/// Factory for the error a failing mock returns.
pub type ErrorFactory = Box<dyn Fn() -> BatchError + Send + Sync>;

/// A provider that hands out a fixed list of chunks, then end-marked chunks.
///
/// Every item of a provided chunk is counted as read.
#[derive(Debug)]
pub struct ScriptedChunkProvider<T> {
    chunks: Mutex<VecDeque<Chunk<T>>>,
    provide_calls: Mutex<usize>,
    post_process_calls: Mutex<usize>,
}

impl<T> ScriptedChunkProvider<T> {
    /// Creates a provider returning `chunks` in order.
    #[must_use]
    pub fn new(chunks: Vec<Chunk<T>>) -> Self {
        Self {
            chunks: Mutex::new(chunks.into()),
            provide_calls: Mutex::new(0),
            post_process_calls: Mutex::new(0),
        }
    }

    /// Returns the number of `provide` calls.
    #[must_use]
    pub fn provide_calls(&self) -> usize {
        *self.provide_calls.lock()
    }

    /// Returns the number of `post_process` calls.
    #[must_use]
    pub fn post_process_calls(&self) -> usize {
        *self.post_process_calls.lock()
    }

    /// Returns the number of scripted chunks not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.chunks.lock().len()
    }
}

impl<T: Clone> ScriptedChunkProvider<T> {
    /// Creates a provider returning `times` copies of `chunk`.
    #[must_use]
    pub fn repeating(chunk: Chunk<T>, times: usize) -> Self {
        Self::new(vec![chunk; times])
    }
}

#[async_trait]
impl<T: Send + Sync + 'static> ChunkProvider<T> for ScriptedChunkProvider<T> {
    async fn provide(&self, contribution: &mut StepContribution) -> Result<Chunk<T>> {
        *self.provide_calls.lock() += 1;

        let chunk = self.chunks.lock().pop_front().unwrap_or_else(Chunk::end);
        for _ in chunk.iter() {
            contribution.increment_read_count();
        }
        Ok(chunk)
    }

    async fn post_process(
        &self,
        _contribution: &mut StepContribution,
        _chunk: &Chunk<T>,
    ) -> Result<()> {
        *self.post_process_calls.lock() += 1;
        Ok(())
    }
}

/// A provider whose `provide` always fails.
///
/// It can count some reads before failing to simulate a partial chunk.
pub struct FailingChunkProvider<T> {
    error: ErrorFactory,
    reads_before_failure: u64,
    _item: PhantomData<fn() -> T>,
}

impl<T> FailingChunkProvider<T> {
    /// Creates a provider failing with the error built by `error`.
    pub fn new<F>(error: F) -> Self
    where
        F: Fn() -> BatchError + Send + Sync + 'static,
    {
        Self {
            error: Box::new(error),
            reads_before_failure: 0,
            _item: PhantomData,
        }
    }

    /// Counts `reads` items as read before each failure.
    #[must_use]
    pub fn with_reads_before_failure(mut self, reads: u64) -> Self {
        self.reads_before_failure = reads;
        self
    }
}

impl<T> Debug for FailingChunkProvider<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FailingChunkProvider")
            .field("reads_before_failure", &self.reads_before_failure)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: Send + Sync + 'static> ChunkProvider<T> for FailingChunkProvider<T> {
    async fn provide(&self, contribution: &mut StepContribution) -> Result<Chunk<T>> {
        for _ in 0..self.reads_before_failure {
            contribution.increment_read_count();
        }
        Err((self.error)())
    }
}

/// A processor that counts every item of every chunk as written.
#[derive(Debug, Default)]
pub struct CountingChunkProcessor {
    call_count: Mutex<usize>,
    chunk_sizes: Mutex<Vec<usize>>,
}

impl CountingChunkProcessor {
    /// Creates a new counting processor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of `process` calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }

    /// Returns the size of each processed chunk, in call order.
    #[must_use]
    pub fn chunk_sizes(&self) -> Vec<usize> {
        self.chunk_sizes.lock().clone()
    }
}

#[async_trait]
impl<T: Send + Sync + 'static> ChunkProcessor<T> for CountingChunkProcessor {
    async fn process(&self, contribution: &mut StepContribution, chunk: &Chunk<T>) -> Result<()> {
        *self.call_count.lock() += 1;
        self.chunk_sizes.lock().push(chunk.len());
        contribution.increment_write_count(chunk.len() as u64);
        Ok(())
    }
}

/// A processor whose `process` always fails.
pub struct FailingChunkProcessor {
    error: ErrorFactory,
    call_count: Mutex<usize>,
}

impl FailingChunkProcessor {
    /// Creates a processor failing with the error built by `error`.
    pub fn new<F>(error: F) -> Self
    where
        F: Fn() -> BatchError + Send + Sync + 'static,
    {
        Self {
            error: Box::new(error),
            call_count: Mutex::new(0),
        }
    }

    /// Returns the number of `process` calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }
}

impl Debug for FailingChunkProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FailingChunkProcessor")
            .field("call_count", &self.call_count())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: Send + Sync + 'static> ChunkProcessor<T> for FailingChunkProcessor {
    async fn process(&self, _contribution: &mut StepContribution, _chunk: &Chunk<T>) -> Result<()> {
        *self.call_count.lock() += 1;
        Err((self.error)())
    }
}
