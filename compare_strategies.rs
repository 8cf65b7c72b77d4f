//! Strategy comparison harness.
//!
//! Generates one seeded random tree, runs every expansion strategy over it,
//! times each run, and verifies all totals agree. Usage:
//!
//! ```text
//! compare_strategies [config.json] [--json]
//! ```
//!
//! The optional JSON file deserializes into [`TreeConfig`]; omitted fields
//! take the reference-workload defaults (10M vertices, weights 0..=1000,
//! fixed seed). `--json` emits the report as JSON instead of a table.

use std::time::Instant;

use anyhow::{ensure, Context, Result};
use serde::Serialize;
use wavefront::{random_tree, Strategy, TreeConfig};

#[derive(Serialize)]
struct RunReport {
    strategy: &'static str,
    threads: usize,
    elapsed_secs: f64,
    total: u64,
}

fn main() -> Result<()> {
    let mut emit_json = false;
    let mut config_path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            emit_json = true;
        } else {
            config_path = Some(arg);
        }
    }

    let config: TreeConfig = match &config_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading tree config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing tree config {path}"))?
        }
        None => TreeConfig::default(),
    };
    let threads = std::thread::available_parallelism().map_or(1, usize::from);

    eprintln!(
        "generating tree: {} vertices, weights 0..={}, seed {}",
        config.vertices, config.max_weight, config.seed
    );
    let started = Instant::now();
    let tree = random_tree(&config);
    eprintln!("generated in {:.3}s", started.elapsed().as_secs_f64());

    let mut reports = Vec::new();
    let mut reference: Option<u64> = None;
    for strategy in Strategy::all(threads) {
        let started = Instant::now();
        let total = tree.depth_weighted_sum(strategy);
        let elapsed = started.elapsed();

        match reference {
            None => reference = Some(total),
            Some(expected) => ensure!(
                total == expected,
                "strategy {} returned {total}, sequential reference returned {expected}",
                strategy.label()
            ),
        }

        if !emit_json {
            println!(
                "{:>16}  threads={:<3} {:>9.3}s  total={total}",
                strategy.label(),
                strategy.threads(),
                elapsed.as_secs_f64()
            );
        }
        reports.push(RunReport {
            strategy: strategy.label(),
            threads: strategy.threads(),
            elapsed_secs: elapsed.as_secs_f64(),
            total,
        });
    }

    if emit_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}
