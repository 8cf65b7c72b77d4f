//! Placement plans: exclusive prefix sums of per-vertex child counts.
//!
//! A plan decides, before any child is written, exactly where in the next
//! frontier every current-frontier vertex's children will land. Ranges of
//! distinct vertices are disjoint by construction, which is what lets the
//! offset-driven strategy run all writers with zero synchronization.

use core::ops::Range;

use crate::concurrency::{fork_join_map, split_ranges};
use crate::tree::WeightedTree;

/// Destination offsets for one frontier, stored CSR-style: entry `i` is the
/// first output slot of frontier vertex `i`'s children, and the final entry
/// is the total child count of the level.
///
/// Invariants (checked in debug builds):
/// - `offsets[i + 1] - offsets[i] == tree.child_count(frontier[i])`
/// - offsets are non-decreasing.
pub struct PlacementPlan {
    offsets: Vec<usize>,
}

impl PlacementPlan {
    /// Builds the plan with a sequential exclusive scan.
    pub fn build(tree: &WeightedTree, frontier: &[usize]) -> Self {
        let mut offsets = Vec::with_capacity(frontier.len() + 1);
        let mut running = 0usize;
        offsets.push(0);
        for &vertex in frontier {
            running += tree.child_count(vertex);
            offsets.push(running);
        }
        Self { offsets }
    }

    /// Builds the plan with a two-pass parallel scan: per-chunk totals first,
    /// a sequential scan over the (few) chunk totals, then a parallel fill of
    /// each chunk's entries from its base offset.
    ///
    /// Equal to [`build`](Self::build) for every input; only the work
    /// partitioning differs.
    ///
    /// # Panics
    ///
    /// Panics if `threads` is zero.
    pub fn build_parallel(tree: &WeightedTree, frontier: &[usize], threads: usize) -> Self {
        assert!(threads != 0, "threads must be > 0");
        let len = frontier.len();
        if threads == 1 || len <= 1 {
            return Self::build(tree, frontier);
        }

        // Pass 1: child-count total of every chunk.
        let totals = fork_join_map(len, threads, |range| {
            frontier[range]
                .iter()
                .map(|&vertex| tree.child_count(vertex))
                .sum::<usize>()
        });

        // Exclusive scan over chunk totals gives each chunk its base offset.
        let mut base = 0usize;
        let bases: Vec<usize> = totals
            .iter()
            .map(|&total| {
                let b = base;
                base += total;
                b
            })
            .collect();
        let grand_total = base;

        // Pass 2: each worker fills its own chunk of the offsets array.
        // `split_ranges` is deterministic, so this partition matches pass 1.
        let mut offsets = vec![0usize; len + 1];
        std::thread::scope(|scope| {
            let mut rest: &mut [usize] = &mut offsets[..len];
            for (range, &chunk_base) in split_ranges(len, threads).zip(&bases) {
                let (chunk, tail) = rest.split_at_mut(range.len());
                rest = tail;
                let vertices = &frontier[range];
                scope.spawn(move || {
                    let mut cursor = chunk_base;
                    for (slot, &vertex) in chunk.iter_mut().zip(vertices) {
                        *slot = cursor;
                        cursor += tree.child_count(vertex);
                    }
                });
            }
        });
        offsets[len] = grand_total;

        let plan = Self { offsets };
        debug_assert!(plan.offsets.windows(2).all(|w| w[0] <= w[1]));
        plan
    }

    /// Number of frontier vertices the plan covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// True for the plan of an empty frontier.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First output slot assigned to frontier vertex `i`.
    #[inline]
    pub fn start(&self, i: usize) -> usize {
        self.offsets[i]
    }

    /// Output range assigned to frontier vertex `i`.
    #[inline]
    pub fn range(&self, i: usize) -> Range<usize> {
        self.offsets[i]..self.offsets[i + 1]
    }

    /// Total number of children across the whole frontier, i.e. the exact
    /// size of the next frontier.
    #[inline]
    pub fn total_children(&self) -> usize {
        *self.offsets.last().expect("plan offsets are never empty")
    }
}
