//! Baseline sequential expansion: ground truth for every other strategy.

use crate::tree::WeightedTree;

/// Appends each frontier vertex's children, in frontier order, to a fresh
/// output buffer. No concurrency; the output order is fully deterministic.
pub fn expand(tree: &WeightedTree, frontier: &[usize]) -> Vec<usize> {
    let mut next = Vec::new();
    for &vertex in frontier {
        next.extend_from_slice(tree.children_of(vertex));
    }
    next
}
