//! Benchmarks for leapjoin-join using criterion.
//!
//! Relations are generated the way the perf harness does it: start at 0 and
//! add a pseudo-random gap in `1..=100` per key.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use leapjoin_core::{Key, SortedTable};
use leapjoin_index::KeyIndex;
use leapjoin_join::{hash_join_count, leapfrog_count, IndexCursor, SliceCursor};

/// Simple LCG for reproducible gaps
fn gapped_table(count: usize, seed: u64) -> SortedTable {
    let mut s = seed;
    let mut cur: Key = 0;
    let mut keys = Vec::with_capacity(count);
    for _ in 0..count {
        keys.push(cur);
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        cur += 1 + ((s >> 33) % 100) as Key;
    }
    SortedTable::new(keys).unwrap()
}

fn tables(arity: usize, size: usize) -> Vec<SortedTable> {
    (0..arity)
        .map(|i| gapped_table(size, 12345 + i as u64 * 67890))
        .collect()
}

fn join_algorithms_benchmark(c: &mut Criterion) {
    for arity in [2, 3] {
        let mut group = c.benchmark_group(format!("join_{}_way", arity));

        for size in [1_000, 10_000, 100_000] {
            let tables = tables(arity, size);
            let indexes: Vec<KeyIndex> = tables.iter().map(KeyIndex::from_table).collect();

            group.bench_with_input(BenchmarkId::new("leapfrog_slice", size), &size, |b, _| {
                b.iter(|| {
                    let cursors = tables.iter().map(|t| SliceCursor::new(t)).collect();
                    black_box(leapfrog_count(cursors))
                });
            });

            group.bench_with_input(BenchmarkId::new("leapfrog_index", size), &size, |b, _| {
                b.iter(|| {
                    let cursors = indexes.iter().map(IndexCursor::new).collect();
                    black_box(leapfrog_count(cursors))
                });
            });

            group.bench_with_input(BenchmarkId::new("hash", size), &size, |b, _| {
                b.iter(|| black_box(hash_join_count(&tables)));
            });
        }

        group.finish();
    }
}

fn skewed_sizes_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("join_skewed");

    // A small relation against a large one: index seeks skip whole runs.
    let large = gapped_table(100_000, 12345);
    let small = gapped_table(100, 67890);
    let large_index = KeyIndex::from_table(&large);
    let small_index = KeyIndex::from_table(&small);

    group.bench_function("leapfrog_slice", |b| {
        b.iter(|| {
            black_box(leapfrog_count(vec![
                SliceCursor::new(&large),
                SliceCursor::new(&small),
            ]))
        });
    });

    group.bench_function("leapfrog_index", |b| {
        b.iter(|| {
            black_box(leapfrog_count(vec![
                IndexCursor::new(&large_index),
                IndexCursor::new(&small_index),
            ]))
        });
    });

    group.bench_function("hash", |b| {
        b.iter(|| black_box(hash_join_count(&[&large, &small])));
    });

    group.finish();
}

criterion_group!(benches, join_algorithms_benchmark, skewed_sizes_benchmark);
criterion_main!(benches);
