//! Balanced three-way treasure splitting
//!
//! The engine reserves a subset of the hoard for the captain and tries to
//! split everything else into two exactly-equal halves for the first mate
//! and the quartermaster. Reservations are enumerated exhaustively, so the
//! search visits `O(2^n)` states in the worst case; the halving itself uses
//! a greedy heuristic, not an exact partition solver. The engine targets
//! small, test-scale hoards, and [`SplitConfig`] bounds it against anything
//! larger.
//!
//! # Search
//!
//! `search(lo, reserved)` walks reservation subsets in depth-first,
//! input-index order, visiting each subset exactly once. At every state with
//! an even remaining value it attempts the bipartition; a success is an
//! explicit candidate carrying the two sides and their common value. A child
//! candidate replaces the current best only when its value is strictly
//! greater, so the first candidate reached at a given value wins and the
//! result is deterministic.
//!
//! Treasures are tracked by input index throughout, which keeps the output
//! an exact partition of the input even when two treasures are structurally
//! identical.

use crate::config::SplitConfig;
use crate::error::{AllocationError, Result};
use crate::models::{BalancedSplit, Pirate, Treasure, CAPTAIN, FIRST_MATE, QUARTERMASTER};
use crate::report::SplitReport;

/// Attempt an equal-value two-way split of `items`.
///
/// Greedy heuristic: stable-sort by value descending (ties keep input
/// order), then hand each item to the side with the smaller running sum; an
/// exact tie goes to side 1. Returns the two sides when their sums come out
/// equal and `None` otherwise. The heuristic can miss an equal split that
/// exists.
pub fn split_in_two(items: &[Treasure]) -> Option<(Vec<Treasure>, Vec<Treasure>)> {
    let values: Vec<u64> = items.iter().map(|t| t.value).collect();
    let all: Vec<usize> = (0..items.len()).collect();
    greedy_bipartition(&values, &all).map(|(side1, side2)| {
        (
            side1.into_iter().map(|i| items[i].clone()).collect(),
            side2.into_iter().map(|i| items[i].clone()).collect(),
        )
    })
}

/// Split `treasures` three ways with [`SplitConfig::default`], so that the
/// first mate and the quartermaster receive exactly equal total value and
/// that value is the largest the search can balance. The captain keeps the
/// rest; when nothing can be balanced the captain keeps everything.
///
/// # Example
///
/// ```
/// use plunder::{balanced_split, Treasure};
///
/// let hoard = vec![
///     Treasure::new("One", 1),
///     Treasure::new("Two", 2),
///     Treasure::new("Three", 3),
/// ];
/// let split = balanced_split(&hoard)?;
/// assert_eq!(split.first_mate.total_value(), 3);
/// assert_eq!(split.quartermaster.total_value(), 3);
/// assert!(split.captain.treasures().is_empty());
/// # Ok::<(), plunder::AllocationError>(())
/// ```
pub fn balanced_split(treasures: &[Treasure]) -> Result<BalancedSplit> {
    balanced_split_with(treasures, &SplitConfig::default()).map(|(split, _)| split)
}

/// Same as [`balanced_split`], with explicit guards and the run report.
///
/// # Errors
///
/// [`AllocationError::TooManyTreasures`] when the input is larger than
/// `config.max_treasures`; [`AllocationError::SearchBudgetExceeded`] when
/// the search walks past `config.node_budget` states.
pub fn balanced_split_with(
    treasures: &[Treasure],
    config: &SplitConfig,
) -> Result<(BalancedSplit, SplitReport)> {
    if treasures.len() > config.max_treasures {
        return Err(AllocationError::TooManyTreasures {
            count: treasures.len(),
            limit: config.max_treasures,
        });
    }

    let values: Vec<u64> = treasures.iter().map(|t| t.value).collect();
    let total: u64 = values.iter().sum();

    let mut search = ReservationSearch {
        values: &values,
        node_budget: config.node_budget,
        explored: 0,
    };
    let outcome = search.run(0, &mut Vec::new(), total)?;

    let mut captain = Pirate::new(CAPTAIN);
    let mut first_mate = Pirate::new(FIRST_MATE);
    let mut quartermaster = Pirate::new(QUARTERMASTER);

    let equal_value = match outcome {
        Some(candidate) => {
            let mut taken = vec![false; treasures.len()];
            for &i in candidate.side1.iter().chain(&candidate.side2) {
                taken[i] = true;
            }
            // Balanced members receive their side in assignment order; the
            // captain sweeps up the reservation in input order.
            for &i in &candidate.side1 {
                first_mate.add_treasure(treasures[i].clone());
            }
            for &i in &candidate.side2 {
                quartermaster.add_treasure(treasures[i].clone());
            }
            for (i, treasure) in treasures.iter().enumerate() {
                if !taken[i] {
                    captain.add_treasure(treasure.clone());
                }
            }
            candidate.value
        }
        None => {
            for treasure in treasures {
                captain.add_treasure(treasure.clone());
            }
            0
        }
    };

    let report = SplitReport {
        treasures: treasures.len(),
        explored: search.explored,
        node_budget: config.node_budget,
        equal_value,
        reserve_value: total - equal_value * 2,
    };

    Ok((
        BalancedSplit {
            captain,
            first_mate,
            quartermaster,
        },
        report,
    ))
}

/// A successful bipartition of everything outside some reservation
struct Candidate {
    /// Common value of both sides
    value: u64,
    side1: Vec<usize>,
    side2: Vec<usize>,
}

/// State for one exhaustive walk over reservation subsets
struct ReservationSearch<'a> {
    values: &'a [u64],
    node_budget: u64,
    explored: u64,
}

impl ReservationSearch<'_> {
    /// Depth-first walk over reservation subsets.
    ///
    /// `lo` is the smallest index this state may still reserve, `reserved`
    /// holds the reserved indices in ascending order, and `rest_sum` is the
    /// value left outside the reservation. Returns the best candidate in
    /// this subtree, preferring strictly greater values and, among equals,
    /// the candidate reached first.
    fn run(
        &mut self,
        lo: usize,
        reserved: &mut Vec<usize>,
        rest_sum: u64,
    ) -> Result<Option<Candidate>> {
        self.explored += 1;
        if self.explored > self.node_budget {
            return Err(AllocationError::SearchBudgetExceeded {
                explored: self.explored,
                budget: self.node_budget,
            });
        }

        // Direct attempt: an odd remainder can never split equally.
        let mut best = if rest_sum % 2 == 0 {
            let rest = self.rest_of(reserved);
            greedy_bipartition(self.values, &rest).map(|(side1, side2)| Candidate {
                value: rest_sum / 2,
                side1,
                side2,
            })
        } else {
            None
        };
        let mut best_value = best.as_ref().map_or(0, |c| c.value);

        for i in lo..self.values.len() {
            let child_rest = rest_sum - self.values[i];
            // Nothing below can beat child_rest / 2, and equal values never
            // replace the incumbent.
            if child_rest / 2 <= best_value {
                continue;
            }
            reserved.push(i);
            let found = self.run(i + 1, reserved, child_rest)?;
            reserved.pop();
            if let Some(candidate) = found {
                if candidate.value > best_value {
                    best_value = candidate.value;
                    best = Some(candidate);
                }
            }
        }

        Ok(best)
    }

    /// Indices outside `reserved`, in input order
    fn rest_of(&self, reserved: &[usize]) -> Vec<usize> {
        let mut rest = Vec::with_capacity(self.values.len() - reserved.len());
        let mut skip = reserved.iter().peekable();
        for i in 0..self.values.len() {
            if skip.peek() == Some(&&i) {
                skip.next();
            } else {
                rest.push(i);
            }
        }
        rest
    }
}

/// Greedy equal-split attempt over `rest`, which indexes into `values`.
///
/// Descending stable sort, smaller side first, ties to side 1. `Some` only
/// when the final sums match exactly.
fn greedy_bipartition(values: &[u64], rest: &[usize]) -> Option<(Vec<usize>, Vec<usize>)> {
    let mut ordered: Vec<usize> = rest.to_vec();
    ordered.sort_by(|&a, &b| values[b].cmp(&values[a]));

    let mut side1 = Vec::new();
    let mut side2 = Vec::new();
    let (mut sum1, mut sum2) = (0u64, 0u64);

    for idx in ordered {
        if sum1 > sum2 {
            sum2 += values[idx];
            side2.push(idx);
        } else {
            sum1 += values[idx];
            side1.push(idx);
        }
    }

    (sum1 == sum2).then_some((side1, side2))
}
