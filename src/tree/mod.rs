//! Tree storage and generation.
//!
//! - `store`: the immutable CSR-layout weighted tree
//! - `generate`: seeded random tree construction

pub mod generate;
pub mod store;

pub use generate::{random_tree, TreeConfig};
pub use store::{TreeError, WeightedTree};
