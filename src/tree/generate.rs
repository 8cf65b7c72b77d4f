//! Seeded random tree generation.
//!
//! Vertex `v > 0` gets a uniformly random parent among the vertices created
//! before it, which guarantees acyclicity by construction order, and a
//! uniformly random weight in `0..=max_weight`. The generator is driven by a
//! seeded [`SmallRng`] so a configuration always reproduces the same tree.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::WeightedTree;

/// Shape and seed of a generated tree.
///
/// Deserializable so a harness can read it from a JSON file; every field has
/// a default matching the reference workload (10M vertices, weights up to
/// 1000, fixed seed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Total number of vertices, root included. Must be at least 1.
    pub vertices: usize,
    /// Weights are drawn uniformly from `0..=max_weight`.
    pub max_weight: u32,
    /// PRNG seed; equal seeds reproduce equal trees.
    pub seed: u64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            vertices: 10_000_000,
            max_weight: 1_000,
            seed: 12345,
        }
    }
}

/// Generates a random weighted tree from `config`.
///
/// # Panics
///
/// Panics if `config.vertices` is zero.
pub fn random_tree(config: &TreeConfig) -> WeightedTree {
    assert!(config.vertices > 0, "vertices must be > 0");

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut weights = Vec::with_capacity(config.vertices);
    let mut parents = Vec::with_capacity(config.vertices.saturating_sub(1));

    for vertex in 0..config.vertices {
        weights.push(rng.gen_range(0..=config.max_weight));
        if vertex > 0 {
            parents.push(rng.gen_range(0..vertex));
        }
    }

    // Parents precede their children by construction, so this cannot fail.
    match WeightedTree::from_parents(weights, &parents) {
        Ok(tree) => tree,
        Err(err) => unreachable!("generated parents are creation-ordered: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_same_tree() {
        let config = TreeConfig {
            vertices: 500,
            max_weight: 100,
            seed: 7,
        };
        let a = random_tree(&config);
        let b = random_tree(&config);
        assert_eq!(a.vertex_count(), b.vertex_count());
        for v in 0..a.vertex_count() {
            assert_eq!(a.weight_of(v), b.weight_of(v));
            assert_eq!(a.children_of(v), b.children_of(v));
        }
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = random_tree(&TreeConfig {
            vertices: 64,
            max_weight: 1_000,
            seed: 1,
        });
        let b = random_tree(&TreeConfig {
            vertices: 64,
            max_weight: 1_000,
            seed: 2,
        });
        let same = (0..64).all(|v| a.weight_of(v) == b.weight_of(v));
        assert!(!same, "two seeds produced identical weight vectors");
    }

    #[test]
    fn config_roundtrips_through_json_with_defaults() {
        let config: TreeConfig = serde_json::from_str(r#"{"vertices": 42}"#).unwrap();
        assert_eq!(config.vertices, 42);
        assert_eq!(config.max_weight, TreeConfig::default().max_weight);
        assert_eq!(config.seed, TreeConfig::default().seed);
    }
}
