use proptest::prelude::*;
use wavefront::{PlacementPlan, WeightedTree};

fn assert_plan_invariants(tree: &WeightedTree, frontier: &[usize], plan: &PlacementPlan) {
    assert_eq!(plan.len(), frontier.len());
    for (i, &vertex) in frontier.iter().enumerate() {
        let range = plan.range(i);
        assert_eq!(range.len(), tree.child_count(vertex), "vertex slot {i}");
        // Ranges are adjacent, hence pairwise disjoint for distinct slots.
        if i + 1 < frontier.len() {
            assert_eq!(range.end, plan.range(i + 1).start);
        }
    }
    if let Some(last) = frontier.len().checked_sub(1) {
        assert_eq!(plan.range(last).end, plan.total_children());
    } else {
        assert_eq!(plan.total_children(), 0);
    }
}

#[test]
fn empty_and_singleton_frontiers() {
    let tree = WeightedTree::from_parents(vec![1, 1, 1], &[0, 0]).unwrap();

    let empty = PlacementPlan::build(&tree, &[]);
    assert_plan_invariants(&tree, &[], &empty);
    assert!(empty.is_empty());

    let root_only = PlacementPlan::build(&tree, &[0]);
    assert_plan_invariants(&tree, &[0], &root_only);
    assert_eq!(root_only.range(0), 0..2);

    let leaf_only = PlacementPlan::build(&tree, &[2]);
    assert_plan_invariants(&tree, &[2], &leaf_only);
    assert_eq!(leaf_only.total_children(), 0);
}

proptest! {
    #[test]
    fn plan_ranges_are_disjoint_and_exact(
        assignments in prop::collection::vec(any::<prop::sample::Index>(), 1..200),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..64),
        threads in 1usize..6,
    ) {
        let mut parents = Vec::with_capacity(assignments.len());
        for (i, parent) in assignments.iter().enumerate() {
            parents.push(parent.index(i + 1));
        }
        let n = parents.len() + 1;
        let tree = WeightedTree::from_parents(vec![1; n], &parents).unwrap();

        // An arbitrary frontier-shaped vertex list (duplicates allowed; the
        // plan only promises disjoint ranges for distinct slots).
        let frontier: Vec<usize> = picks.iter().map(|p| p.index(n)).collect();

        let sequential = PlacementPlan::build(&tree, &frontier);
        assert_plan_invariants(&tree, &frontier, &sequential);

        let parallel = PlacementPlan::build_parallel(&tree, &frontier, threads);
        assert_plan_invariants(&tree, &frontier, &parallel);
        for i in 0..frontier.len() {
            prop_assert_eq!(parallel.range(i), sequential.range(i));
        }
        prop_assert_eq!(parallel.total_children(), sequential.total_children());
    }
}
