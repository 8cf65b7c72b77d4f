//! Frontier expansion strategies.
//!
//! Each strategy turns the current frontier into the concatenation of every
//! vertex's children, differing only in the discipline that keeps parallel
//! workers from corrupting the shared output:
//!
//! - [`Strategy::Sequential`] — one thread, appends in frontier order;
//!   defines the reference multiset.
//! - [`Strategy::MutexAppend`] — parallel workers serialize every append
//!   through one lock.
//! - [`Strategy::PlannedOffsets`] — a [`PlacementPlan`] (exclusive prefix
//!   sum) fixes disjoint destination ranges before any write; workers then
//!   run lock-free on their own slices.
//! - [`Strategy::AtomicSlots`] — workers claim unique slots from a shared
//!   fetch-add counter into a buffer pre-sized to the vertex count.
//!
//! All four produce the same multiset of vertex ids; only `Sequential` and
//! `PlannedOffsets` also fix the order. The depth-weighted total depends on
//! identity and depth alone, so every strategy yields the same sum.

pub mod atomic;
pub mod mutex;
pub mod offsets;
pub mod plan;
pub mod sequential;
#[cfg(feature = "unsound-demo")]
pub mod unsound;

pub use plan::PlacementPlan;

use crate::tree::WeightedTree;

/// The synchronization discipline used to build the next frontier.
///
/// A plain set of named variants: strategies are data, not trait objects,
/// so a harness can enumerate and label them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Single-threaded append in frontier order; the correctness reference.
    Sequential,
    /// Parallel workers appending under one shared mutex.
    MutexAppend {
        /// Worker thread count; must be non-zero.
        threads: usize,
    },
    /// Two-phase: parallel prefix-sum plan, then unsynchronized disjoint
    /// writes.
    PlannedOffsets {
        /// Worker thread count; must be non-zero.
        threads: usize,
    },
    /// Fetch-add slot claiming into a pre-sized buffer.
    AtomicSlots {
        /// Worker thread count; must be non-zero.
        threads: usize,
    },
}

impl Strategy {
    /// Short display name, stable across runs (used by benches and the
    /// comparison harness).
    pub fn label(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::MutexAppend { .. } => "mutex-append",
            Self::PlannedOffsets { .. } => "planned-offsets",
            Self::AtomicSlots { .. } => "atomic-slots",
        }
    }

    /// Worker thread count this strategy will use (1 for `Sequential`).
    pub fn threads(self) -> usize {
        match self {
            Self::Sequential => 1,
            Self::MutexAppend { threads }
            | Self::PlannedOffsets { threads }
            | Self::AtomicSlots { threads } => threads,
        }
    }

    /// All four strategies at a given worker count, reference first.
    pub fn all(threads: usize) -> [Self; 4] {
        [
            Self::Sequential,
            Self::MutexAppend { threads },
            Self::PlannedOffsets { threads },
            Self::AtomicSlots { threads },
        ]
    }
}

/// Produces the next frontier from `frontier` under `strategy`.
///
/// # Panics
///
/// Panics if the strategy carries a zero thread count.
pub fn expand(tree: &WeightedTree, frontier: &[usize], strategy: Strategy) -> Vec<usize> {
    match strategy {
        Strategy::Sequential => sequential::expand(tree, frontier),
        Strategy::MutexAppend { threads } => mutex::expand(tree, frontier, threads),
        Strategy::PlannedOffsets { threads } => offsets::expand(tree, frontier, threads),
        Strategy::AtomicSlots { threads } => atomic::expand(tree, frontier, threads),
    }
}
