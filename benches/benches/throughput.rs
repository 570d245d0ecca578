//! Turb1600 Criterion Benchmark
//!
//! Latency and throughput measurements across the rate boundary and bulk
//! sizes, with a SHA-512 baseline for scale.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use sha2::{Digest, Sha512};
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs around the 136-byte rate.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (16, "16B"),
        (64, "64B"),
        (135, "135B"),
        (136, "136B"),
        (137, "137B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| turb1600::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Throughput for multi-block inputs.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(50);

    let sizes = [
        (16 * KB, "16KB"),
        (256 * KB, "256KB"),
        (MB, "1MB"),
        (4 * MB, "4MB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| turb1600::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: BASELINE
// =============================================================================

/// Side-by-side with SHA-512 at a fixed size, for scale.
fn bench_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Baseline");

    let size = 64 * KB;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("turb1600", |b| {
        b.iter(|| turb1600::hash(black_box(&input)))
    });

    group.bench_function("sha2-512", |b| {
        b.iter(|| Sha512::digest(black_box(&input)))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(benches, bench_latency, bench_bulk, bench_baseline);
criterion_main!(benches);
