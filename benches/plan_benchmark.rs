use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wavefront::{random_tree, DriverState, LevelDriver, PlacementPlan, Strategy, TreeConfig};

/// The widest frontier of a generated tree — where the scan has real work.
fn widest_frontier(tree: &wavefront::WeightedTree) -> Vec<usize> {
    let mut driver = LevelDriver::new(tree);
    let mut widest = Vec::new();
    loop {
        match driver.state() {
            DriverState::Active { frontier, .. } => {
                if frontier.len() > widest.len() {
                    widest = frontier.to_vec();
                }
            }
            DriverState::Done { .. } => break,
        }
        driver.step(Strategy::Sequential);
    }
    widest
}

fn bench_plan_scan(c: &mut Criterion) {
    let tree = random_tree(&TreeConfig {
        vertices: 1_000_000,
        max_weight: 1_000,
        seed: 4242,
    });
    let frontier = widest_frontier(&tree);
    let threads = std::thread::available_parallelism().map_or(1, usize::from);

    let mut group = c.benchmark_group("placement_plan");
    group.bench_function("sequential_scan", |b| {
        b.iter(|| black_box(PlacementPlan::build(&tree, &frontier).total_children()));
    });
    group.bench_function("parallel_scan", |b| {
        b.iter(|| {
            black_box(PlacementPlan::build_parallel(&tree, &frontier, threads).total_children())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_plan_scan);
criterion_main!(benches);
