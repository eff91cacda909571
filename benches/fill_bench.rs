//! Criterion benchmark harness: measures fill latency for both storage
//! layouts at multiple record counts.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use layout_bench::layout::{fill_inline, fill_nested, RECORD_COUNT, RECORD_WIDTH};
use std::hint::black_box;

/// Record counts to benchmark.
fn record_counts() -> Vec<(&'static str, usize)> {
    vec![("1k", 1_000), ("10k", RECORD_COUNT), ("100k", 100_000)]
}

fn bench_fill_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill/nested");
    for (label, records) in record_counts() {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &records,
            |b, &records| {
                b.iter(|| black_box(fill_nested(records, RECORD_WIDTH)));
            },
        );
    }
    group.finish();
}

fn bench_fill_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill/inline");
    for (label, records) in record_counts() {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &records,
            |b, &records| {
                b.iter(|| black_box(fill_inline(records)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fill_nested, bench_fill_inline);
criterion_main!(benches);
