//! Allocation balance checking

use std::collections::HashSet;

use crate::models::{Pirate, Treasure};

/// Check whether an allocation covers every treasure and keeps every
/// pirate's haul within a deviation band around the mean.
///
/// Coverage is structural: an input treasure counts as allocated when any
/// pirate holds a treasure with the same name and value. If any input
/// treasure is unaccounted for, the allocation is unbalanced regardless of
/// the deviation.
///
/// The band is computed in floating point: with `total` the combined input
/// value and `mean = total / pirates.len()`, every pirate's haul must lie in
/// `[mean * (100 - deviation) / 100, mean * (100 + deviation) / 100]`.
/// `deviation_percent` is expected in `[0, 200]`: 0 demands exact mean
/// equality, 200 admits any non-negative haul. Out-of-range values are a
/// caller error and are not checked.
///
/// # Panics
///
/// Panics when `pirates` is empty: the mean is undefined there, and the
/// caller is expected to hand over at least one pirate.
pub fn is_balanced(treasures: &[Treasure], pirates: &[Pirate], deviation_percent: u32) -> bool {
    assert!(
        !pirates.is_empty(),
        "is_balanced requires at least one pirate"
    );

    let held: HashSet<&Treasure> = pirates.iter().flat_map(|p| p.treasures()).collect();

    let mut total: u64 = 0;
    for treasure in treasures {
        if !held.contains(treasure) {
            return false;
        }
        total += treasure.value;
    }

    let mean = total as f64 / pirates.len() as f64;
    let deviation = f64::from(deviation_percent);
    let low = mean * (100.0 - deviation) / 100.0;
    let high = mean * (100.0 + deviation) / 100.0;

    pirates.iter().all(|pirate| {
        let haul = pirate.total_value() as f64;
        low <= haul && haul <= high
    })
}
