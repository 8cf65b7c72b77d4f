//! Offset-precomputed parallel placement.
//!
//! Two phases. Phase A builds a [`PlacementPlan`] — every frontier vertex's
//! destination range, known before a single child is written. Phase B
//! allocates the output at its exact final size and hands each worker a
//! disjoint `&mut` slice carved off with `split_at_mut`: exclusive write
//! ownership per chunk, so aliasing is impossible by construction and the
//! writers need no synchronization at all.

use crate::concurrency::split_ranges;
use crate::tree::WeightedTree;

use super::plan::PlacementPlan;

/// Expands the frontier by precomputed disjoint placement.
///
/// Output is identical to the sequential strategy, including order: every
/// child lands at the slot the plan assigned it.
///
/// # Panics
///
/// Panics if `threads` is zero.
pub fn expand(tree: &WeightedTree, frontier: &[usize], threads: usize) -> Vec<usize> {
    assert!(threads != 0, "threads must be > 0");
    if frontier.is_empty() {
        return Vec::new();
    }

    let plan = PlacementPlan::build_parallel(tree, frontier, threads);
    let mut next = vec![0usize; plan.total_children()];

    std::thread::scope(|scope| {
        let plan = &plan;
        // Hand out one disjoint output slice per chunk. Chunk boundaries are
        // plan offsets, so consecutive slices tile the buffer exactly.
        let mut rest: &mut [usize] = &mut next;
        let mut consumed = 0usize;
        for range in split_ranges(frontier.len(), threads) {
            let chunk_start = plan.start(range.start);
            let chunk_end = plan.start(range.end);
            debug_assert_eq!(chunk_start, consumed);
            let (chunk, tail) = rest.split_at_mut(chunk_end - chunk_start);
            rest = tail;
            consumed = chunk_end;

            let vertices = &frontier[range.clone()];
            let first = range.start;
            scope.spawn(move || {
                for (i, &vertex) in vertices.iter().enumerate() {
                    let children = tree.children_of(vertex);
                    let base = plan.start(first + i) - chunk_start;
                    chunk[base..base + children.len()].copy_from_slice(children);
                }
            });
        }
    });

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planned_expansion_preserves_frontier_order() {
        // 0 -> 1,2 ; 1 -> 3,4 ; 2 -> 5
        let tree = WeightedTree::from_parents(vec![1; 6], &[0, 0, 1, 1, 2]).unwrap();
        for threads in [1, 2, 4] {
            assert_eq!(expand(&tree, &[0], threads), vec![1, 2]);
            assert_eq!(expand(&tree, &[1, 2], threads), vec![3, 4, 5]);
            assert_eq!(expand(&tree, &[3, 4, 5], threads), Vec::<usize>::new());
        }
    }
}
