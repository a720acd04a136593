//! Compare command - Batch comparison of heuristics on random instances

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::output;
use crate::experiment::{ExperimentConfig, ExperimentRunner};
use crate::search::AStar;

#[derive(Parser, Debug)]
#[command(about = "Compare heuristics over randomly generated trials")]
pub struct CompareArgs {
    /// Number of random trial instances
    #[arg(long, short = 't', default_value_t = 20)]
    pub trials: usize,

    /// Iteration budget per search
    #[arg(long, default_value_t = AStar::DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export the full report as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let runner = ExperimentRunner::new(ExperimentConfig {
        trials: args.trials,
        max_iterations: args.max_iterations,
        seed: args.seed,
        progress: !args.no_progress,
    });

    println!(
        "Running {} trials per heuristic (budget {} iterations)...",
        args.trials,
        output::format_number(args.max_iterations)
    );
    let report = runner.run()?;

    output::print_section("Heuristic comparison");
    println!("Seed: {}", report.seed);
    for summary in &report.summaries {
        output::print_subsection(&summary.heuristic);
        println!(
            "Solved: {}/{} ({:.1}%)",
            summary.solved,
            summary.trials,
            summary.success_rate * 100.0
        );
        if let Some(mean_len) = summary.mean_path_length {
            println!("Mean path length: {mean_len:.2}");
        }
        println!(
            "Nodes expanded: mean {:.1}, median {:.1}",
            summary.mean_nodes_expanded, summary.median_nodes_expanded
        );
        println!(
            "Mean max frontier size: {:.1}",
            summary.mean_max_frontier_size
        );
        println!("Mean time: {:.2} ms", summary.mean_time_ms);
    }

    if let Some(export_path) = &args.export {
        let file = File::create(export_path)
            .with_context(|| format!("creating export file {}", export_path.display()))?;
        serde_json::to_writer_pretty(file, &report)?;
        println!("\nReport exported to {}", export_path.display());
    }

    Ok(())
}
