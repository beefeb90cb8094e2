//! Scratchpad Reuse Benchmark
//!
//! One-shot hashing allocates a 2 MiB scratchpad per call; a reused
//! [`cryptonight::Hasher`] keeps the allocation across digests. This
//! measures what the per-call allocation actually costs.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

// =============================================================================
// BENCHMARK: ALLOCATION REUSE
// =============================================================================

/// Fresh engine per digest vs. a hasher rearmed by `finalize_reset`.
fn bench_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scratchpad-Reuse");
    group.sample_size(10); // Every sample walks the full scratchpad.
    group.throughput(Throughput::Elements(1));

    let mut input = vec![0u8; 64];
    rand::rng().fill(&mut input[..]);

    group.bench_function("fresh engine per digest", |b| {
        b.iter(|| cryptonight::hash(black_box(&input)));
    });

    group.bench_function("reused hasher", |b| {
        let mut hasher = cryptonight::Hasher::new();
        b.iter(|| {
            hasher.update(black_box(&input));
            hasher.finalize_reset()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reuse);
criterion_main!(benches);
