//! CLI infrastructure for the swapslide solver
//!
//! This module provides the command-line interface for solving single
//! instances and for batch comparisons of the heuristic estimators.

pub mod commands;
pub mod output;
