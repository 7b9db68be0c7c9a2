//! Running-mean benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of the O(n·k) methods (1K to 100K points)
//! - Dense versus sparse products (quadratic versus linear growth)
//! - Band construction (direct CSC build versus sparsifying a dense matrix)
//! - Half-width (window length) at a fixed size
//! - Edge policies
//! - Float types (f32 versus f64)
//!
//! Run with: `cargo bench`

use bandmean::prelude::*;
use bandmean::{EdgePolicy, Method};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::Normal;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a noisy slow sine wave.
fn generate_signal(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.3).unwrap();

    (0..size)
        .map(|i| {
            let t = i as f64 * 20.0 / size as f64;
            t.sin() + noise_dist.sample(&mut rng)
        })
        .collect()
}

/// Generate a random walk.
fn generate_random_walk(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let step_dist = Normal::new(0.0, 1.0).unwrap();

    let mut level = 0.0;
    (0..size)
        .map(|_| {
            level += step_dist.sample(&mut rng);
            level
        })
        .collect()
}

fn model(k: usize, method: Method, policy: EdgePolicy) -> RunningMeanModel {
    RunningMean::new()
        .half_width(k)
        .method(method)
        .edge_policy(policy)
        .build()
        .unwrap()
}

// ============================================================================
// Scalability Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [1_000, 5_000, 10_000, 50_000, 100_000] {
        let x = generate_signal(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        for method in [Direct, Sparse, Filter] {
            let m = model(5, method, Missing);
            group.bench_with_input(BenchmarkId::new(method.name(), size), &x, |b, x| {
                b.iter(|| m.smooth(black_box(x)).unwrap())
            });
        }
    }
    group.finish();
}

// ============================================================================
// Dense Versus Sparse
// ============================================================================

fn bench_dense_vs_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("dense_vs_sparse");
    group.sample_size(10);

    for size in [256, 512, 1_024, 2_048, 4_096] {
        let x = generate_signal(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        for method in [Sparse, Dense, SparsifiedDense] {
            let m = model(2, method, Missing);
            group.bench_with_input(BenchmarkId::new(method.name(), size), &x, |b, x| {
                b.iter(|| m.smooth(black_box(x)).unwrap())
            });
        }
    }
    group.finish();
}

// ============================================================================
// Band Construction
// ============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.sample_size(10);

    for size in [512, 2_048, 4_096] {
        group.bench_with_input(BenchmarkId::new("direct_csc", size), &size, |b, &n| {
            b.iter(|| BandedMatrixIndex::new(black_box(n), 3).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("dense_alloc", size), &size, |b, &n| {
            b.iter(|| DenseBandMatrix::<f64>::new(black_box(n), 3).unwrap())
        });

        let dense = DenseBandMatrix::<f64>::new(size, 3).unwrap();
        group.bench_with_input(BenchmarkId::new("sparsify", size), &dense, |b, d| {
            b.iter(|| BandedMatrixIndex::from_dense(black_box(d)))
        });
    }
    group.finish();
}

// ============================================================================
// Half-width
// ============================================================================

fn bench_half_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("half_width");
    let x = generate_random_walk(20_000, 7);

    for k in [1, 5, 25, 100, 500] {
        for method in [Direct, Sparse, Filter] {
            let m = model(k, method, Missing);
            group.bench_with_input(BenchmarkId::new(method.name(), k), &x, |b, x| {
                b.iter(|| m.smooth(black_box(x)).unwrap())
            });
        }
    }
    group.finish();
}

// ============================================================================
// Edge Policies
// ============================================================================

fn bench_edge_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_policy");
    let x = generate_signal(10_000, 42);

    for (label, policy) in [("missing", Missing), ("shrink", Shrink)] {
        for method in [Direct, Sparse, Filter] {
            let m = model(50, method, policy);
            group.bench_with_input(
                BenchmarkId::new(method.name(), label),
                &x,
                |b, x| b.iter(|| m.smooth(black_box(x)).unwrap()),
            );
        }
    }
    group.finish();
}

// ============================================================================
// Float Types
// ============================================================================

fn bench_float_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("float_types");
    let x64 = generate_signal(50_000, 42);
    let x32: Vec<f32> = x64.iter().map(|&v| v as f32).collect();

    let m = model(10, Sparse, Missing);
    group.bench_function("sparse_f64", |b| {
        b.iter(|| m.smooth(black_box(&x64)).unwrap())
    });
    group.bench_function("sparse_f32", |b| {
        b.iter(|| m.smooth(black_box(&x32)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_dense_vs_sparse,
    bench_construction,
    bench_half_width,
    bench_edge_policy,
    bench_float_types,
);

criterion_main!(benches);
