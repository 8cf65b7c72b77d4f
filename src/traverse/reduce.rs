//! The weighted reducer: `Σ weight(v) × depth` over one frontier.
//!
//! Addition over `u64` is associative and commutative within range, so the
//! sequential sum, the chunked fork-join sum, and the rayon sum agree for
//! every work partition. All arithmetic is checked: silent wraparound would
//! invalidate the cross-strategy comparisons, so overflow aborts instead.

use crate::concurrency::fork_join_map;
use crate::tree::WeightedTree;

#[cold]
#[inline(never)]
fn overflow_abort(depth: usize) -> ! {
    panic!("depth-weighted sum overflowed the u64 accumulator at depth {depth}");
}

/// Sequential reduction over one frontier at `depth`.
pub fn level_sum(tree: &WeightedTree, frontier: &[usize], depth: usize) -> u64 {
    let depth_factor = depth as u64;
    let mut sum = 0u64;
    for &vertex in frontier {
        let term = match u64::from(tree.weight_of(vertex)).checked_mul(depth_factor) {
            Some(term) => term,
            None => overflow_abort(depth),
        };
        sum = match sum.checked_add(term) {
            Some(sum) => sum,
            None => overflow_abort(depth),
        };
    }
    sum
}

/// Chunked fork-join reduction: per-chunk partial sums on scoped workers,
/// combined at the join.
///
/// # Panics
///
/// Panics if `threads` is zero, or on accumulator overflow.
pub fn level_sum_parallel(
    tree: &WeightedTree,
    frontier: &[usize],
    depth: usize,
    threads: usize,
) -> u64 {
    let partials = fork_join_map(frontier.len(), threads, |range| {
        level_sum(tree, &frontier[range], depth)
    });
    partials.into_iter().fold(0u64, |acc, partial| {
        match acc.checked_add(partial) {
            Some(acc) => acc,
            None => overflow_abort(depth),
        }
    })
}

/// Rayon-backed reduction: `par_iter().map().sum()` over `u128` partials,
/// checked back into `u64`.
///
/// # Panics
///
/// Panics on accumulator overflow.
#[cfg(feature = "parallel")]
pub fn level_sum_rayon(tree: &WeightedTree, frontier: &[usize], depth: usize) -> u64 {
    use rayon::prelude::*;

    let total: u128 = frontier
        .par_iter()
        .map(|&vertex| u128::from(tree.weight_of(vertex)) * depth as u128)
        .sum();
    match u64::try_from(total) {
        Ok(total) => total,
        Err(_) => overflow_abort(depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_weights(weights: Vec<u32>) -> WeightedTree {
        let parents: Vec<usize> = (1..weights.len()).map(|v| v - 1).collect();
        WeightedTree::from_parents(weights, &parents).unwrap()
    }

    #[test]
    fn sequential_and_parallel_sums_agree() {
        let tree = tree_with_weights((0..1000).map(|w| w % 97).collect());
        let frontier: Vec<usize> = (0..1000).collect();
        let reference = level_sum(&tree, &frontier, 5);
        assert_eq!(reference, (0..1000u64).map(|w| (w % 97) * 5).sum::<u64>());
        for threads in [1, 2, 3, 8, 33] {
            assert_eq!(
                level_sum_parallel(&tree, &frontier, 5, threads),
                reference,
                "threads={threads}"
            );
        }
    }

    #[test]
    fn empty_frontier_sums_to_zero() {
        let tree = tree_with_weights(vec![3]);
        assert_eq!(level_sum(&tree, &[], 4), 0);
        assert_eq!(level_sum_parallel(&tree, &[], 4, 4), 0);
    }

    #[test]
    #[should_panic(expected = "overflowed the u64 accumulator")]
    fn term_overflow_aborts() {
        let tree = tree_with_weights(vec![u32::MAX, u32::MAX]);
        // weight × depth alone exceeds u64.
        level_sum(&tree, &[0, 1], usize::MAX);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn rayon_sum_matches_sequential() {
        let tree = tree_with_weights((0..512).map(|w| w + 1).collect());
        let frontier: Vec<usize> = (0..512).collect();
        assert_eq!(
            level_sum_rayon(&tree, &frontier, 3),
            level_sum(&tree, &frontier, 3)
        );
    }
}
