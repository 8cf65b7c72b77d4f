//! Atomic-counter parallel placement.
//!
//! No precomputation phase: the output is pre-sized to the tree's vertex
//! count (a safe over-estimate — one level's children can never exceed the
//! remaining vertices), and workers claim one unique slot per child with a
//! `fetch_add` on a shared counter. Costs one atomic per child instead of
//! one scan per level; the counter lives in a [`CachePadded`] cell so the
//! claim traffic does not false-share with neighboring state.

use core::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;

use crate::concurrency::split_ranges;
use crate::tree::WeightedTree;

/// A raw output cursor that may cross thread boundaries.
///
/// Workers write through this pointer only at indices claimed via the shared
/// counter, which hands out each index at most once.
#[derive(Copy, Clone)]
struct ClaimedSlots(*mut usize);

// SAFETY: every write through the pointer targets a distinct claimed index,
// and the enclosing thread scope joins before the buffer is read or freed.
unsafe impl Send for ClaimedSlots {}

/// Expands the frontier by atomic slot claiming.
///
/// The output multiset equals the sequential strategy's; slot order depends
/// on claim interleaving and is unspecified.
///
/// # Panics
///
/// Panics if `threads` is zero, or — indicating a logic defect, not a
/// runtime condition — if more slots are claimed than the pre-sized buffer
/// holds.
pub fn expand(tree: &WeightedTree, frontier: &[usize], threads: usize) -> Vec<usize> {
    assert!(threads != 0, "threads must be > 0");
    if frontier.is_empty() {
        return Vec::new();
    }

    let capacity = tree.vertex_count();
    let mut next = vec![0usize; capacity];
    let cursor = CachePadded::new(AtomicUsize::new(0));
    let slots = ClaimedSlots(next.as_mut_ptr());

    std::thread::scope(|scope| {
        let cursor = &cursor;
        for range in split_ranges(frontier.len(), threads) {
            let vertices = &frontier[range];
            scope.spawn(move || {
                // Capture the whole `Send` wrapper, not just its `*mut usize`
                // field (edition 2021 disjoint closure capture would otherwise
                // capture the non-`Send` pointer directly).
                let slots = slots;
                for &vertex in vertices {
                    for &child in tree.children_of(vertex) {
                        let slot = cursor.fetch_add(1, Ordering::Relaxed);
                        assert!(
                            slot < capacity,
                            "claimed slot {slot} exceeds pre-sized capacity {capacity}"
                        );
                        // SAFETY: `slot < capacity` was just checked, and the
                        // fetch_add above hands this index to exactly one
                        // worker. The scope join publishes the write.
                        unsafe { *slots.0.add(slot) = child };
                    }
                }
            });
        }
    });

    let claimed = cursor.into_inner().into_inner();
    debug_assert!(claimed <= capacity);
    next.truncate(claimed);
    next
}
