//! CryptoNight Latency Benchmark
//!
//! Per-hash latency across input sizes. The 2 MiB scratchpad walk is
//! fixed work, so the curve stays nearly flat until absorption of large
//! inputs starts to register.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

// =============================================================================
// BENCHMARK: PER-HASH LATENCY
// =============================================================================

/// One digest per iteration, inputs from empty to 1 MB.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("Latency");
    group.sample_size(10); // Every sample walks the full scratchpad.

    let sizes = [
        (0, "empty"),
        (64, "64B"),
        (KB, "1KB"),
        (64 * KB, "64KB"),
        (MB, "1MB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| cryptonight::hash(black_box(data))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_latency);
criterion_main!(benches);
