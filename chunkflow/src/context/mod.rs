//! Per-invocation context shared between the driver and the tasklet.

mod chunk_context;

pub use chunk_context::ChunkContext;
