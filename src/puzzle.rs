//! Swap-rule 8-puzzle implementation

pub mod board;
pub mod game;
pub mod goals;
pub mod solvability;

pub use board::{Board, Direction, State};
pub use game::PuzzleGame;
pub use goals::GoalSet;
pub use solvability::{inversion_count, is_likely_solvable};
