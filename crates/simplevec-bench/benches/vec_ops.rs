//! Criterion micro-benchmarks for SimpleVec growth, insertion and resize.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use simplevec_bench::{
    front_insert_workload, push_workload, reserved_push_workload, resize_cycle_workload,
};
use simplevec_core::{Doubling, ExactFit};

/// Benchmark: append n elements, doubling vs exact-fit vs pre-reserved.
fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");
    for n in [64usize, 1024, 8192] {
        group.bench_with_input(BenchmarkId::new("doubling", n), &n, |b, &n| {
            b.iter(|| black_box(push_workload::<Doubling>(n)));
        });
        group.bench_with_input(BenchmarkId::new("exact_fit", n), &n, |b, &n| {
            b.iter(|| black_box(push_workload::<ExactFit>(n)));
        });
        group.bench_with_input(BenchmarkId::new("reserved", n), &n, |b, &n| {
            b.iter(|| black_box(reserved_push_workload(n)));
        });
    }
    group.finish();
}

/// Benchmark: n insertions at the beginning (quadratic shifting).
fn bench_front_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_insert");
    for n in [64usize, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(front_insert_workload(n)));
        });
    }
    group.finish();
}

/// Benchmark: shrink, regrow in place, then regrow past capacity.
fn bench_resize_cycle(c: &mut Criterion) {
    c.bench_function("resize_cycle_10k", |b| {
        b.iter(|| black_box(resize_cycle_workload(black_box(10_000))));
    });
}

criterion_group!(
    benches,
    bench_push_back,
    bench_front_insert,
    bench_resize_cycle
);
criterion_main!(benches);
