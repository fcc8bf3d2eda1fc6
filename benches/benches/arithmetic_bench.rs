//! # Arithmetic Benchmarks
//!
//! Measures `combine` for every kind pairing, the Hamilton product and
//! scalar operations. All operations are O(1).
//!
//! Run: `cargo bench --bench arithmetic_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hyper_core::prelude::*;

/// Benchmark combine over each (lhs, rhs) kind pairing
fn bench_combine_pairings(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");

    let complex = HyperComplex::complex(2.0, 3.0);
    let quaternion = HyperComplex::quaternion(1.0, 2.0, 3.0, 4.0);
    let pairings = [
        ("complex_complex", complex, complex),
        ("complex_quaternion", complex, quaternion),
        ("quaternion_complex", quaternion, complex),
        ("quaternion_quaternion", quaternion, quaternion),
    ];

    for op in Op::ALL {
        for (name, lhs, rhs) in pairings {
            group.bench_with_input(
                BenchmarkId::new(op.name(), name),
                &(lhs, rhs),
                |b, (l, r)| {
                    b.iter(|| {
                        black_box(combine(black_box(l), op, black_box(r)))
                    })
                }
            );
        }
    }

    group.finish();
}

/// Benchmark raw quaternion operations
fn bench_quaternion(c: &mut Criterion) {
    let mut group = c.benchmark_group("quaternion");

    let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q = Quaternion::new(-0.5, 1.5, 0.25, 2.0);

    group.bench_function("hamilton", |b| {
        b.iter(|| {
            black_box(black_box(p).hamilton(black_box(q)))
        })
    });

    group.bench_function("inverse", |b| {
        b.iter(|| {
            black_box(black_box(p).inv())
        })
    });

    group.bench_function("divide", |b| {
        b.iter(|| {
            black_box(black_box(p) / black_box(q))
        })
    });

    group.finish();
}

/// Benchmark scalar operands
fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");

    let quaternion = HyperComplex::quaternion(1.0, 2.0, 3.0, 4.0);

    for op in Op::ALL {
        group.bench_function(op.name(), |b| {
            b.iter(|| {
                black_box(combine_scalar(black_box(&quaternion), op, 2.0))
            })
        });
    }

    group.bench_function("equality_widened", |b| {
        let complex = HyperComplex::complex(1.0, 2.0);
        let widened = HyperComplex::quaternion(1.0, 2.0, 0.0, 0.0);
        b.iter(|| {
            black_box(black_box(complex) == black_box(widened))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_combine_pairings,
    bench_quaternion,
    bench_scalar,
);

criterion_main!(benches);
