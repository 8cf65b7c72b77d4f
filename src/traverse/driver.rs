//! The level-synchronous driver.
//!
//! Holds the current frontier, runs the reducer and the expansion strategy
//! over it, swaps in the next frontier, and stops when it comes back empty.
//! There is a hard barrier between levels: both the reducer and the expander
//! are fork-join calls that return only after every worker joined, so all of
//! level d's writes are visible before any thread reads level d+1.

use crate::traverse::expand::{self, Strategy};
use crate::traverse::reduce;
use crate::tree::WeightedTree;

/// Observable driver state: either a pending frontier or the final total.
#[derive(Debug, PartialEq, Eq)]
pub enum DriverState<'a> {
    /// Levels remain; `frontier` is the next one to be processed.
    Active {
        /// Depth the pending frontier will be processed at.
        depth: usize,
        /// The pending frontier, in the order its strategy produced it.
        frontier: &'a [usize],
    },
    /// Traversal finished.
    Done {
        /// The depth-weighted total over the whole tree.
        total: u64,
    },
}

/// What one driver step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelReport {
    /// Depth of the level just processed (the root level is depth 1).
    pub depth: usize,
    /// Number of vertices in the processed frontier.
    pub width: usize,
    /// `Σ weight × depth` over the processed frontier.
    pub level_sum: u64,
}

/// Level-synchronous traversal state machine over a borrowed tree.
pub struct LevelDriver<'t> {
    tree: &'t WeightedTree,
    frontier: Vec<usize>,
    depth: usize,
    total: u64,
}

impl<'t> LevelDriver<'t> {
    /// Starts a traversal; the root alone forms the first frontier.
    pub fn new(tree: &'t WeightedTree) -> Self {
        Self {
            tree,
            frontier: vec![0],
            depth: 0,
            total: 0,
        }
    }

    /// Current state: the pending frontier, or the final total.
    pub fn state(&self) -> DriverState<'_> {
        if self.frontier.is_empty() {
            DriverState::Done { total: self.total }
        } else {
            DriverState::Active {
                depth: self.depth + 1,
                frontier: &self.frontier,
            }
        }
    }

    /// Processes one level: reduce, expand, swap. Returns `None` once done.
    ///
    /// # Panics
    ///
    /// Panics if the strategy carries a zero thread count, or on accumulator
    /// overflow.
    pub fn step(&mut self, strategy: Strategy) -> Option<LevelReport> {
        if self.frontier.is_empty() {
            return None;
        }
        self.depth += 1;

        let level_sum = match strategy.threads() {
            1 => reduce::level_sum(self.tree, &self.frontier, self.depth),
            threads => reduce::level_sum_parallel(self.tree, &self.frontier, self.depth, threads),
        };
        let next = expand::expand(self.tree, &self.frontier, strategy);

        self.total = match self.total.checked_add(level_sum) {
            Some(total) => total,
            None => panic!(
                "depth-weighted sum overflowed the u64 accumulator at depth {}",
                self.depth
            ),
        };

        let report = LevelReport {
            depth: self.depth,
            width: self.frontier.len(),
            level_sum,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            depth = report.depth,
            width = report.width,
            level_sum = report.level_sum,
            strategy = strategy.label(),
            "level complete"
        );

        self.frontier = next;
        Some(report)
    }

    /// Runs to completion and returns the depth-weighted total.
    pub fn run(mut self, strategy: Strategy) -> u64 {
        while self.step(strategy).is_some() {}
        self.total
    }
}

impl WeightedTree {
    /// Computes `Σ weight(v) × depth(v)` over the whole tree, with the root
    /// at depth 1, using `strategy` to build each level's frontier.
    ///
    /// Every strategy returns the same total; only throughput differs.
    ///
    /// # Panics
    ///
    /// Panics if the strategy carries a zero thread count, or on accumulator
    /// overflow.
    pub fn depth_weighted_sum(&self, strategy: Strategy) -> u64 {
        LevelDriver::new(self).run(strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_steps_report_each_level() {
        // 0 -> 1,2 ; 1 -> 3 ; weights 1,2,3,4
        let tree = WeightedTree::from_parents(vec![1, 2, 3, 4], &[0, 0, 1]).unwrap();
        let mut driver = LevelDriver::new(&tree);

        assert_eq!(
            driver.state(),
            DriverState::Active {
                depth: 1,
                frontier: &[0]
            }
        );

        let first = driver.step(Strategy::Sequential).unwrap();
        assert_eq!(first, LevelReport { depth: 1, width: 1, level_sum: 1 });

        let second = driver.step(Strategy::Sequential).unwrap();
        assert_eq!(second, LevelReport { depth: 2, width: 2, level_sum: 10 });

        let third = driver.step(Strategy::Sequential).unwrap();
        assert_eq!(third, LevelReport { depth: 3, width: 1, level_sum: 12 });

        assert_eq!(driver.step(Strategy::Sequential), None);
        assert_eq!(driver.state(), DriverState::Done { total: 23 });
    }

    #[test]
    fn run_matches_manual_stepping() {
        let tree = WeightedTree::from_parents(vec![5, 1, 2], &[0, 0]).unwrap();
        assert_eq!(tree.depth_weighted_sum(Strategy::Sequential), 5 + 2 + 4);
    }
}
