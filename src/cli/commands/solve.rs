//! Solve command - Run A* on a single board

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::cli::output;
use crate::puzzle::{is_likely_solvable, Board, GoalSet, State};
use crate::search::{heuristic_by_name, AStar, SearchStats};

#[derive(Parser, Debug)]
#[command(about = "Solve a single board with a chosen heuristic")]
pub struct SolveArgs {
    /// Board as 9 characters, row-major; 0 or _ for the blank
    /// (e.g. "123450786")
    pub board: String,

    /// Heuristic to use: manhattan or misplaced-linear-conflict
    #[arg(long, short = 'H', default_value = "manhattan")]
    pub heuristic: String,

    /// Iteration budget for the search
    #[arg(long, default_value_t = AStar::DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,

    /// Print every state along the solution path
    #[arg(long)]
    pub show_path: bool,

    /// Export the result as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct SolveResult {
    initial: String,
    heuristic: String,
    solved: bool,
    path: Option<Vec<String>>,
    stats: SearchStats,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let initial = State::new(board);
    let goals = GoalSet::standard();
    let heuristic = heuristic_by_name(&args.heuristic)?;
    let heuristic_name = heuristic.name().to_string();
    let engine = AStar::from_boxed(heuristic);

    output::print_section("Initial state");
    println!("{initial}");
    if !is_likely_solvable(&initial) {
        println!("\nNote: parity pre-check suggests this instance may be unsolvable.");
    }

    let (path, stats) = engine.search(&initial, &goals, args.max_iterations);

    output::print_section("Result");
    match &path {
        Some(path) => {
            println!(
                "Solution found in {} moves",
                stats.path_length.unwrap_or(path.len() - 1)
            );
            if args.show_path {
                for (step, state) in path.iter().enumerate() {
                    output::print_subsection(&format!("Step {step}"));
                    println!("{state}");
                }
            }
        }
        None => println!("No solution found within the iteration budget."),
    }
    println!(
        "Nodes expanded: {}",
        output::format_number(stats.nodes_expanded)
    );
    println!(
        "Max frontier size: {}",
        output::format_number(stats.max_frontier_size)
    );
    println!("Time taken: {}", output::format_duration(stats.time_taken));

    if let Some(export_path) = &args.export {
        let result = SolveResult {
            initial: initial.encode(),
            heuristic: heuristic_name,
            solved: path.is_some(),
            path: path.map(|states| states.iter().map(State::encode).collect()),
            stats,
        };
        let file = File::create(export_path)
            .with_context(|| format!("creating export file {}", export_path.display()))?;
        serde_json::to_writer_pretty(file, &result)?;
        println!("\nResult exported to {}", export_path.display());
    }

    Ok(())
}
