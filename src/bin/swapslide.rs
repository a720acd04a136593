//! swapslide CLI - A* solver for the swap-rule 8-puzzle
//!
//! Provides two commands:
//! - Solving a single board with a chosen heuristic
//! - Comparing heuristics over batches of random instances

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "swapslide")]
#[command(version, about = "A* solver for the swap-rule 8-puzzle", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single board with a chosen heuristic
    Solve(swapslide::cli::commands::solve::SolveArgs),

    /// Compare heuristics over randomly generated trials
    Compare(swapslide::cli::commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => swapslide::cli::commands::solve::execute(args),
        Commands::Compare(args) => swapslide::cli::commands::compare::execute(args),
    }
}
