//! Search benchmarks over sorted data.
//!
//! Every algorithm probes one present and one absent key per size, so the
//! hit and miss paths are measured separately.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use seekit_core::prelude::*;

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

// Even values only: odd probes always miss.
fn generate_sorted(size: usize) -> Vec<i64> {
    (0..size as i64).map(|i| i * 2).collect()
}

fn searches() -> Vec<(&'static str, fn(&[i64], &i64) -> bool)> {
    vec![
        ("linear", linear_search::<i64>),
        ("binary", binary_search::<i64>),
        ("jump", jump_search::<i64>),
        ("interpolation", interpolation_search::<i64>),
        ("exponential", exponential_search::<i64>),
        ("fibonacci", fibonacci_search::<i64>),
    ]
}

fn bench_hits(c: &mut Criterion) {
    for (name, search) in searches() {
        let mut group = c.benchmark_group(format!("{name}_hit"));
        for size in SIZES.iter() {
            let data = generate_sorted(*size);
            let item = data[data.len() * 2 / 3];
            group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _size| {
                b.iter(|| search(&data, &item));
            });
        }
        group.finish();
    }
}

fn bench_misses(c: &mut Criterion) {
    for (name, search) in searches() {
        let mut group = c.benchmark_group(format!("{name}_miss"));
        for size in SIZES.iter() {
            let data = generate_sorted(*size);
            let item = data[data.len() * 2 / 3] + 1;
            group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _size| {
                b.iter(|| search(&data, &item));
            });
        }
        group.finish();
    }
}

fn bench_sublist(c: &mut Criterion) {
    let mut group = c.benchmark_group("sublist_tail_run");
    for size in [100, 1_000, 10_000].iter() {
        let haystack: Vec<u32> = (0..*size as u32).collect();
        let needle: Vec<u32> = haystack[haystack.len() - 10..].to_vec();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _size| {
            b.iter(|| sublist_search(&haystack, &needle));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hits, bench_misses, bench_sublist);
criterion_main!(benches);
