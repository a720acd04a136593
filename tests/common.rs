//! Common test utilities for the swapslide test suite.
//!
//! Provides brute-force distance computation over the real transition
//! model and generation of instances reachable from a goal through
//! slide-only transitions.

use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::Rng;
use swapslide::{GoalSet, State};

/// True minimum number of transitions from `start` to the nearest goal,
/// via breadth-first enumeration of the full transition model (slides
/// plus triggered swaps). Returns `None` when no goal is reachable
/// within `limit` transitions.
pub fn brute_force_distance(start: &State, goals: &GoalSet, limit: usize) -> Option<usize> {
    if start.is_goal(goals) {
        return Some(0);
    }

    let mut visited: HashSet<State> = HashSet::new();
    let mut frontier: VecDeque<(State, usize)> = VecDeque::new();
    visited.insert(*start);
    frontier.push_back((*start, 0));

    while let Some((state, depth)) = frontier.pop_front() {
        if depth == limit {
            continue;
        }
        for successor in state.successors() {
            if !visited.insert(successor) {
                continue;
            }
            if successor.is_goal(goals) {
                return Some(depth + 1);
            }
            frontier.push_back((successor, depth + 1));
        }
    }
    None
}

/// Whether a transition from `from` to `to` was a pure slide: exactly
/// the blank cell and one tile cell changed. A triggered swap always
/// touches at least one additional cell.
pub fn is_pure_slide(from: &State, to: &State) -> bool {
    let differing = from
        .board()
        .cells()
        .iter()
        .zip(to.board().cells().iter())
        .filter(|(a, b)| a != b)
        .count();
    differing == 2
}

/// Random walk of up to `steps` transitions from `start`, restricted to
/// successors reached without any swap firing. May stop early when no
/// swap-free successor exists.
pub fn slide_only_walk(start: &State, steps: usize, rng: &mut StdRng) -> State {
    let mut current = *start;
    for _ in 0..steps {
        let candidates: Vec<State> = current
            .successors()
            .into_iter()
            .filter(|next| is_pure_slide(&current, next))
            .collect();
        if candidates.is_empty() {
            break;
        }
        current = candidates[rng.random_range(0..candidates.len())];
    }
    current
}
