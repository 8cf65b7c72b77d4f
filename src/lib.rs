//! # `wavefront` - Level-Synchronous Tree Traversal
//!
//! Computes depth-weighted aggregates over large rooted trees by
//! breadth-first, level-synchronous traversal: every vertex contributes
//! `weight × depth`, and all vertices of one depth are processed before any
//! vertex of the next. The interesting part is not the arithmetic but the
//! frontier expansion — building the next level's vertex set from many
//! parents in parallel without two workers corrupting the shared output.
//!
//! ## Safety Guarantees
//!
//! ### Write disjointness
//! - **Ownership handoff**: the offset-driven strategy sizes the next
//!   frontier exactly (via an exclusive prefix sum computed before any
//!   write), then hands each worker its own `&mut` slice. Aliasing is ruled
//!   out by construction, not by runtime arbitration.
//! - **Atomic arbitration**: the counter-driven strategy hands out unique
//!   slots with `fetch_add`; a claimed slot is written by exactly one worker.
//! - **Mutual exclusion**: the lock-driven strategy serializes appends; safe
//!   but contended, kept as the comparison baseline.
//!
//! ### Level barriers
//! - Every parallel phase is a scoped fork-join; the join is the
//!   happens-before edge that publishes level d's writes before level d+1
//!   reads them.
//!
//! ### Fail-fast contracts
//! - Malformed adjacency data is rejected at construction, never discovered
//!   mid-traversal. Capacity violations and accumulator overflow abort with
//!   a diagnostic naming the invariant — retrying a data race does not make
//!   it correct.
//!
//! ## Architecture
//!
//! 1. **Tree Store** ([`WeightedTree`]): immutable CSR-layout tree, one
//!    `u32` weight per vertex; unsynchronized concurrent reads are safe.
//! 2. **Level Driver** ([`LevelDriver`]): the `Active(frontier)` /
//!    `Done(total)` state machine; one step reduces and expands one level.
//! 3. **Expansion Strategies** ([`Strategy`]): sequential, mutex-append,
//!    planned-offsets, atomic-slots — identical output multisets, different
//!    synchronization disciplines.
//! 4. **Weighted Reducer** ([`reduce`](traverse::reduce)): associative
//!    `Σ weight × depth`, sequential or fork-join partitioned.
//!
//! ## Example
//!
//! ```rust
//! use wavefront::{Strategy, WeightedTree};
//!
//! // 0 -> 1,2 ; 1 -> 3 ; weights 1,2,3,4.
//! let tree = WeightedTree::from_parents(vec![1, 2, 3, 4], &[0, 0, 1]).unwrap();
//!
//! // 1×1 + (2+3)×2 + 4×3 = 23, whatever the strategy.
//! let total = tree.depth_weighted_sum(Strategy::Sequential);
//! assert_eq!(total, 23);
//! assert_eq!(
//!     tree.depth_weighted_sum(Strategy::PlannedOffsets { threads: 2 }),
//!     total
//! );
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod concurrency;
pub mod traverse;
pub mod tree;

pub use traverse::{DriverState, LevelDriver, LevelReport, PlacementPlan, Strategy};
pub use tree::{random_tree, TreeConfig, TreeError, WeightedTree};

// Compile-time layout claims.
const _: () = {
    use core::mem;

    // A strategy is a tag plus a thread count; it is passed by value
    // everywhere and must stay register-sized.
    assert!(mem::size_of::<Strategy>() <= 2 * mem::size_of::<usize>());
};
