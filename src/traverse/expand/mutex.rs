//! Lock-guarded parallel append.
//!
//! Correct but contended: every append serializes on one mutex, so
//! throughput is bounded by lock traffic rather than by the copying itself.
//! Kept as the simplest correct parallel discipline and as the contention
//! baseline the offset and atomic strategies are measured against.

use std::sync::Mutex;

use crate::concurrency::split_ranges;
use crate::tree::WeightedTree;

/// Expands the frontier with one scoped worker per chunk; each worker takes
/// the shared lock once per vertex and appends that vertex's children while
/// holding it.
///
/// The output multiset equals the sequential strategy's; the order within
/// the output depends on lock acquisition order and is unspecified.
///
/// # Panics
///
/// Panics if `threads` is zero.
pub fn expand(tree: &WeightedTree, frontier: &[usize], threads: usize) -> Vec<usize> {
    assert!(threads != 0, "threads must be > 0");

    let next = Mutex::new(Vec::with_capacity(tree.vertex_count()));

    std::thread::scope(|scope| {
        let next = &next;
        for range in split_ranges(frontier.len(), threads) {
            let vertices = &frontier[range];
            scope.spawn(move || {
                for &vertex in vertices {
                    let children = tree.children_of(vertex);
                    if children.is_empty() {
                        continue;
                    }
                    next.lock().unwrap().extend_from_slice(children);
                }
            });
        }
    });

    next.into_inner().unwrap()
}
