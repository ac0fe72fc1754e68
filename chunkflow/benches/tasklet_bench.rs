//! Benchmarks for tasklet execution.

use chunkflow::prelude::*;
use chunkflow::testing::CountingChunkProcessor;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn drain(items: u32, commit_interval: usize) -> u64 {
    let provider = SimpleChunkProvider::new(
        ListItemReader::new(0..items),
        &ChunkConfig::new().with_commit_interval(commit_interval),
    )
    .expect("valid chunk config");
    let tasklet = ChunkOrientedTasklet::new(provider, CountingChunkProcessor::new());
    let mut contribution = StepContribution::new("bench");
    let ctx = ChunkContext::new("bench");

    futures::executor::block_on(async {
        while tasklet
            .execute(&mut contribution, &ctx)
            .await
            .expect("in-memory step cannot fail")
            .is_continuable()
        {}
    });
    contribution.write_count()
}

fn tasklet_benchmark(c: &mut Criterion) {
    c.bench_function("drain_10k_items_chunk_100", |b| {
        b.iter(|| black_box(drain(10_000, 100)))
    });

    c.bench_function("drain_10k_items_chunk_1", |b| {
        b.iter(|| black_box(drain(10_000, 1)))
    });
}

criterion_group!(benches, tasklet_benchmark);
criterion_main!(benches);
