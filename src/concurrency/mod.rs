//! Concurrency helpers shared by the parallel expansion strategies.
//!
//! These provide *structure* (balanced chunking, scoped fork-join), not
//! synchronization: each strategy brings its own discipline for the shared
//! output buffer.

pub mod scope;

pub use scope::{fork_join_map, split_ranges};
