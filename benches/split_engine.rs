//! Benchmarks for the balanced-split engine
//!
//! The search is exponential by construction; these benchmarks pin down the
//! two interesting regimes: a hoard the root-level bipartition settles
//! immediately, and a hoard that forces the reservation walk to dig.
//! Run with: `cargo bench --bench split_engine`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plunder::{balanced_split, split_in_two, Treasure};

// =============================================================================
// Benchmark Data
// =============================================================================

/// Doubled powers of two: the greedy bipartition splits this at the root
fn doubling_hoard() -> Vec<Treasure> {
    let values = [1u64, 2, 4, 8, 16, 32, 1, 2, 4, 8, 16, 32];
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Treasure::new(i.to_string(), v))
        .collect()
}

/// Distinct primes: odd total, no clean halves, the walk has to reserve
fn prime_hoard() -> Vec<Treasure> {
    let values = [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29];
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Treasure::new(i.to_string(), v))
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_split_in_two(c: &mut Criterion) {
    let hoard = doubling_hoard();
    c.bench_function("split_in_two_12", |b| {
        b.iter(|| split_in_two(black_box(&hoard)))
    });
}

fn bench_balanced_split_root_hit(c: &mut Criterion) {
    let hoard = doubling_hoard();
    c.bench_function("balanced_split_root_hit", |b| {
        b.iter(|| balanced_split(black_box(&hoard)).unwrap())
    });
}

fn bench_balanced_split_deep_search(c: &mut Criterion) {
    let hoard = prime_hoard();
    c.bench_function("balanced_split_deep_search", |b| {
        b.iter(|| balanced_split(black_box(&hoard)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_split_in_two,
    bench_balanced_split_root_hit,
    bench_balanced_split_deep_search
);
criterion_main!(benches);
