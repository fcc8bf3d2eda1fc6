//! # Calculator Benchmarks
//!
//! Measures push, calculate chains of growing depth and the
//! division-by-zero rejection path.
//!
//! Run: `cargo bench --bench calculator_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hyper_calc::{Calculator, CalculatorConfig, Operand};
use hyper_core::prelude::*;
use std::rc::Rc;

fn operands(count: usize) -> Vec<Operand> {
    (0..count)
        .map(|n| {
            let x = n as f64 + 1.0;
            if n % 2 == 0 {
                Rc::new(HyperComplex::complex(x, x * 0.5))
            } else {
                Rc::new(HyperComplex::quaternion(x, 1.0, -x, 0.25))
            }
        })
        .collect()
}

/// Benchmark pushing caller-owned operands
fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator_push");

    for size in [8, 64, 512] {
        let handles = operands(size);
        group.bench_with_input(
            BenchmarkId::new("push", size),
            &handles,
            |b, h| {
                b.iter(|| {
                    let mut calc = Calculator::with_config(CalculatorConfig { initial_capacity: size });
                    for operand in h.iter() {
                        calc.push(operand);
                    }
                    black_box(calc.size())
                })
            }
        );
    }

    group.finish();
}

/// Benchmark folding a full stack down to one result
fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator_chain");

    for size in [8, 64, 512] {
        let handles = operands(size);
        for op in [Op::Add, Op::Multiply] {
            group.bench_with_input(
                BenchmarkId::new(op.name(), size),
                &handles,
                |b, h| {
                    b.iter(|| {
                        let mut calc = Calculator::from_stack(h.clone());
                        while calc.size() > 1 {
                            let _ = calc.calculate(op);
                        }
                        black_box(calc.top().map(|t| t.norm_sqr()))
                    })
                }
            );
        }
    }

    group.finish();
}

/// Benchmark the guarded division path
fn bench_division_guard(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator_division");

    let dividend: Operand = Rc::new(HyperComplex::quaternion(1.0, 2.0, 3.0, 4.0));
    let zero: Operand = Rc::new(HyperComplex::complex(0.0, 0.0));
    let divisor: Operand = Rc::new(HyperComplex::complex(2.0, 3.0));

    group.bench_function("rejected_by_zero", |b| {
        let mut calc = Calculator::from_stack(vec![Rc::clone(&dividend), Rc::clone(&zero)]);
        b.iter(|| {
            black_box(calc.calculate(Op::Divide).is_err())
        })
    });

    group.bench_function("accepted", |b| {
        b.iter(|| {
            let mut calc = Calculator::from_stack(vec![Rc::clone(&dividend), Rc::clone(&divisor)]);
            black_box(calc.calculate(Op::Divide).is_ok())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_chain,
    bench_division_guard,
);

criterion_main!(benches);
