//! Backend Comparison Benchmark
//!
//! Compares the runtime dispatcher against explicitly forced AES-NI and
//! portable kernels. Quantifies the cost of the fallback path.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use cryptonight::Backend;
use rand::prelude::*;
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("CryptoNight Backends");
    group.sample_size(10); // Portable samples run an order of magnitude slower.
    group.throughput(Throughput::Elements(1));

    let mut input = vec![0u8; 256];
    rand::rng().fill(&mut input[..]);

    // 1. Auto (Production Path)
    // Measures runtime dispatch plus the fastest kernel this CPU offers
    group.bench_function(format!("Auto ({})", cryptonight::active_backend()), |b| {
        b.iter(|| cryptonight::hash(black_box(&input)));
    });

    // 2. AES-NI - Explicit hardware kernel
    #[cfg(target_arch = "x86_64")]
    if is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2") {
        group.bench_function("AES-NI (Forced)", |b| {
            b.iter(|| cryptonight::hash_with_backend(black_box(&input), Backend::AesNi).unwrap());
        });
    }

    // 3. Portable - Pure Rust, no SIMD
    // Baseline to quantify the speedup from hardware AES
    group.bench_function("Portable (Forced)", |b| {
        b.iter(|| cryptonight::hash_with_backend(black_box(&input), Backend::Portable).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
