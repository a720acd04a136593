//! swapslide: A* solver for a 3x3 sliding-tile puzzle variant
//!
//! This crate provides:
//! - A board/state model for an 8-puzzle with an automatic tile-swap
//!   rule (tiles 1/3 and 2/4 exchange places when they become adjacent)
//! - Four accepted goal configurations instead of one
//! - A best-first (A*) engine with pluggable heuristic estimators
//! - Random instance generation and an advisory solvability pre-check
//! - A batch experiment runner comparing heuristic performance

pub mod cli;
pub mod error;
pub mod experiment;
pub mod puzzle;
pub mod search;
pub mod types;

pub use error::{Error, Result};
pub use experiment::{ExperimentConfig, ExperimentReport, ExperimentRunner};
pub use puzzle::{Board, Direction, GoalSet, PuzzleGame, State};
pub use search::{AStar, Heuristic, ManhattanDistance, MisplacedLinearConflict, SearchStats};
pub use types::Coord;
