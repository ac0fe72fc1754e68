//! # Chunkflow
//!
//! Chunk-oriented batch step execution.
//!
//! A [`ChunkOrientedTasklet`](tasklet::ChunkOrientedTasklet) is the unit an
//! outer step driver invokes until it reports it is finished. Each invocation:
//!
//! - **Checks for a stop request**: a requested stop marks the step `STOPPED`
//!   before any input is read
//! - **Acquires one chunk** from a [`ChunkProvider`](chunk::ChunkProvider)
//! - **Hands it to a [`ChunkProcessor`](chunk::ChunkProcessor)** and lets the
//!   provider do its post-chunk bookkeeping
//!
//! Progress lives in a caller-owned [`StepContribution`](core::StepContribution).
//! Errors from collaborators are returned unchanged.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chunkflow::prelude::*;
//!
//! let provider = SimpleChunkProvider::new(
//!     ListItemReader::new(vec!["a", "b", "c"]),
//!     &ChunkConfig::new().with_commit_interval(2),
//! )?;
//! let processor = SimpleChunkProcessor::new(PassThroughItemProcessor, InMemoryItemWriter::new());
//! let tasklet = ChunkOrientedTasklet::new(provider, processor);
//!
//! let mut contribution = StepContribution::new("copy");
//! let ctx = ChunkContext::new("copy");
//! while tasklet.execute(&mut contribution, &ctx).await?.is_continuable() {}
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cancellation;
pub mod chunk;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod item;
pub mod observability;
pub mod tasklet;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cancellation::StopSignal;
    pub use crate::chunk::{
        ChunkProcessor, ChunkProvider, SimpleChunkProcessor, SimpleChunkProvider,
    };
    pub use crate::config::{ChunkConfig, LoggingConfig};
    pub use crate::context::ChunkContext;
    pub use crate::core::{Chunk, ExitStatus, RepeatStatus, StepContribution};
    pub use crate::errors::BatchError;
    pub use crate::item::{
        FnItemProcessor, InMemoryItemWriter, ItemProcessor, ItemReader, ItemWriter,
        ListItemReader, PassThroughItemProcessor,
    };
    pub use crate::observability::init_tracing;
    pub use crate::tasklet::{ChunkOrientedTasklet, Tasklet, TaskletState};
}
