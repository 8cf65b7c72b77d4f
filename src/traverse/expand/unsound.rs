//! The documented anti-pattern: unsynchronized parallel append.
//!
//! This is what the offset and atomic strategies exist to avoid. Workers
//! share a pre-sized buffer and a cursor, but the cursor is bumped with a
//! *separate* load and store — a read-modify-write that is not atomic. Two
//! workers can observe the same cursor value, claim the same slot, and lose
//! a child (and with it that child's whole subtree contribution).
//!
//! The buffer cells are atomics with relaxed stores, so the broken part is
//! confined to the claiming discipline: the demonstration shows *data loss*,
//! not undefined behavior. Compiled only under the `unsound-demo` feature
//! and never reachable from [`Strategy`](super::Strategy) — its sole job is
//! to prove the cross-strategy agreement test can tell a race from a
//! correct implementation.

use core::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;

use crate::concurrency::split_ranges;
use crate::tree::WeightedTree;

/// Expands the frontier with the broken split read-modify-write claim.
///
/// On a multicore host with a wide frontier this loses or duplicates
/// children with near certainty. Never use outside race-detection tests.
///
/// # Panics
///
/// Panics if `threads` is zero.
pub fn expand_racy(tree: &WeightedTree, frontier: &[usize], threads: usize) -> Vec<usize> {
    assert!(threads != 0, "threads must be > 0");
    if frontier.is_empty() {
        return Vec::new();
    }

    let capacity = tree.vertex_count();
    let next: Vec<AtomicUsize> = (0..capacity).map(|_| AtomicUsize::new(0)).collect();
    let cursor = CachePadded::new(AtomicUsize::new(0));

    std::thread::scope(|scope| {
        let next = &next;
        let cursor = &cursor;
        for range in split_ranges(frontier.len(), threads) {
            let vertices = &frontier[range];
            scope.spawn(move || {
                for &vertex in vertices {
                    for &child in tree.children_of(vertex) {
                        // BROKEN: load + store is not an atomic increment.
                        // Two workers can read the same value and claim the
                        // same slot.
                        let slot = cursor.load(Ordering::Relaxed);
                        cursor.store(slot + 1, Ordering::Relaxed);
                        if slot < capacity {
                            next[slot].store(child, Ordering::Relaxed);
                        }
                    }
                }
            });
        }
    });

    let claimed = cursor.into_inner().into_inner().min(capacity);
    next.into_iter()
        .take(claimed)
        .map(AtomicUsize::into_inner)
        .collect()
}
