//! A* search over the puzzle transition model

pub mod astar;
pub mod heuristic;
pub mod node;

pub use astar::{AStar, SearchStats};
pub use heuristic::{heuristic_by_name, Heuristic, ManhattanDistance, MisplacedLinearConflict};
pub use node::{NodeArena, SearchNode};
