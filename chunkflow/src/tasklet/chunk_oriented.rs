//! The chunk-oriented tasklet: one chunk read and processed per invocation.

use super::{Tasklet, TaskletState};
use crate::cancellation::StopSignal;
use crate::chunk::{ChunkProcessor, ChunkProvider};
use crate::context::ChunkContext;
use crate::core::{ExitStatus, RepeatStatus, StepContribution};
use crate::errors::Result;
use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, instrument, trace};

/// Pairs a [`ChunkProvider`] with a [`ChunkProcessor`].
///
/// Each [`execute`](Self::execute) call handles at most one chunk:
///
/// 1. If a stop was requested, the exit status becomes `STOPPED` and the call
///    finishes without touching the provider.
/// 2. The provider supplies a chunk. An end-marked chunk finishes the call
///    without reaching the processor.
/// 3. The processor consumes the chunk, then the provider's `post_process`
///    runs, and the call reports [`RepeatStatus::Continuable`].
///
/// Once a call has returned [`RepeatStatus::Finished`] the tasklet is terminal:
/// later calls return `Finished` again without reaching the provider. A stop
/// request still marks the exit status `STOPPED` on those calls.
///
/// Errors from the provider or processor are returned untouched and end the
/// call at the point they occurred. Counts already recorded are kept.
///
/// Calls to `execute` must be serialized by the driver. [`stop`](Self::stop)
/// may be called from any thread at any time.
pub struct ChunkOrientedTasklet<T, P, S> {
    provider: P,
    processor: S,
    stop_signal: StopSignal,
    finished: AtomicBool,
    _item: PhantomData<fn() -> T>,
}

impl<T, P, S> ChunkOrientedTasklet<T, P, S>
where
    T: Send + Sync + 'static,
    P: ChunkProvider<T>,
    S: ChunkProcessor<T>,
{
    /// Creates a tasklet from its two collaborators.
    pub fn new(provider: P, processor: S) -> Self {
        Self {
            provider,
            processor,
            stop_signal: StopSignal::new(),
            finished: AtomicBool::new(false),
            _item: PhantomData,
        }
    }

    /// Runs one invocation. See the type-level docs for the protocol.
    ///
    /// `chunk_context` is only read, never modified.
    #[instrument(
        level = "debug",
        name = "chunk_tasklet.execute",
        skip_all,
        fields(step = %chunk_context.step_name(), run_id = %chunk_context.run_id())
    )]
    pub async fn execute(
        &self,
        contribution: &mut StepContribution,
        chunk_context: &ChunkContext,
    ) -> Result<RepeatStatus> {
        if self.stop_signal.is_requested() {
            debug!("Stop observed, marking contribution as stopped");
            contribution.set_exit_status(ExitStatus::stopped());
            self.finished.store(true, Ordering::Release);
            return Ok(RepeatStatus::Finished);
        }

        if self.finished.load(Ordering::Acquire) {
            trace!("Already finished, skipping provider");
            return Ok(RepeatStatus::Finished);
        }

        let chunk = self.provider.provide(contribution).await?;

        if chunk.is_end() {
            debug!(read_count = contribution.read_count(), "Input exhausted");
            self.finished.store(true, Ordering::Release);
            return Ok(RepeatStatus::Finished);
        }

        self.processor.process(contribution, &chunk).await?;
        self.provider.post_process(contribution, &chunk).await?;

        trace!(
            items = chunk.len(),
            read_count = contribution.read_count(),
            write_count = contribution.write_count(),
            "Chunk processed"
        );
        Ok(RepeatStatus::Continuable)
    }

    /// Requests a stop, honoured at the start of the next `execute` call.
    ///
    /// An invocation already in progress runs to completion.
    pub fn stop(&self) {
        self.stop_signal.request();
    }

    /// Returns true once [`stop`](Self::stop) has been called.
    #[must_use]
    pub fn is_stop_requested(&self) -> bool {
        self.stop_signal.is_requested()
    }

    /// Where the tasklet is in its lifecycle.
    #[must_use]
    pub fn state(&self) -> TaskletState {
        if self.finished.load(Ordering::Acquire) {
            TaskletState::Terminal
        } else if self.stop_signal.is_requested() {
            TaskletState::Stopping
        } else {
            TaskletState::Ready
        }
    }

    /// The chunk provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The chunk processor.
    #[must_use]
    pub fn processor(&self) -> &S {
        &self.processor
    }
}

impl<T, P, S> std::fmt::Debug for ChunkOrientedTasklet<T, P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkOrientedTasklet")
            .field("stop_signal", &self.stop_signal)
            .field("finished", &self.finished.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T, P, S> Tasklet for ChunkOrientedTasklet<T, P, S>
where
    T: Send + Sync + 'static,
    P: ChunkProvider<T>,
    S: ChunkProcessor<T>,
{
    async fn execute(
        &self,
        contribution: &mut StepContribution,
        chunk_context: &ChunkContext,
    ) -> Result<RepeatStatus> {
        Self::execute(self, contribution, chunk_context).await
    }

    fn stop(&self) {
        Self::stop(self);
    }
}
