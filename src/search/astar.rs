//! Best-first A* engine over the puzzle transition model.
//!
//! Each `search` call owns its open heap, closed set, lookup map, and
//! node arena, so concurrent searches sharing one engine are safe by
//! construction. Closed states are never reopened; with a consistent
//! heuristic the first goal popped yields a cost-minimal path. With a
//! heuristic that is admissible but not consistent, optimality is not
//! guaranteed under this no-reopening policy.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::puzzle::{GoalSet, State};

use super::heuristic::Heuristic;
use super::node::{NodeArena, SearchNode};

/// Statistics accumulated during one search invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of transitions in the returned path, `None` when no path
    /// was found.
    pub path_length: Option<usize>,
    /// Nodes expanded (popped and not a goal, successors generated).
    pub nodes_expanded: usize,
    /// High-water mark of the open set.
    pub max_frontier_size: usize,
    /// Wall-clock duration of the invocation.
    pub time_taken: Duration,
}

/// Frontier entry. The heap orders by ascending `f`, tie-broken by
/// ascending `h` (prefer the node whose remaining estimate is smaller).
/// Entries are never re-prioritized in place: an improved path pushes a
/// fresh entry and the stale one is discarded when popped.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: u32,
    h: u32,
    g: u32,
    node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.h == other.h
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    // Reversed so the max-heap pops the smallest f first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
    }
}

/// A* search engine driven by a pluggable heuristic.
pub struct AStar {
    heuristic: Box<dyn Heuristic>,
}

impl AStar {
    /// Default iteration budget: large but finite.
    pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

    pub fn new(heuristic: impl Heuristic + 'static) -> Self {
        AStar {
            heuristic: Box::new(heuristic),
        }
    }

    pub fn from_boxed(heuristic: Box<dyn Heuristic>) -> Self {
        AStar { heuristic }
    }

    /// The heuristic driving this engine.
    pub fn heuristic(&self) -> &dyn Heuristic {
        self.heuristic.as_ref()
    }

    /// Search for a path from `initial` to any member of `goals`.
    ///
    /// Returns the ordered path from the initial state to the goal,
    /// inclusive, or `None` when the open set is exhausted or the
    /// iteration budget is hit. Both are normal outcomes, not errors,
    /// and the statistics record is populated either way.
    pub fn search(
        &self,
        initial: &State,
        goals: &GoalSet,
        max_iterations: usize,
    ) -> (Option<Vec<State>>, SearchStats) {
        let started = Instant::now();

        let mut arena = NodeArena::new();
        let mut open = BinaryHeap::new();
        // Best known g per state currently on the frontier, for O(1)
        // duplicate detection and stale-entry filtering.
        let mut open_best: HashMap<State, u32> = HashMap::new();
        let mut closed: HashSet<State> = HashSet::new();

        let mut nodes_expanded = 0;
        let mut max_frontier_size = 1;

        let h0 = self.heuristic.estimate(initial, goals);
        let start = arena.insert(SearchNode::new(*initial, None, 0, h0));
        open.push(OpenEntry {
            f: h0,
            h: h0,
            g: 0,
            node: start,
        });
        open_best.insert(*initial, 0);

        let mut iterations = 0;
        while iterations < max_iterations {
            max_frontier_size = max_frontier_size.max(open.len());
            let Some(entry) = open.pop() else {
                break;
            };
            let state = arena.get(entry.node).state;

            if closed.contains(&state) {
                continue;
            }
            // A cheaper entry for this state was pushed after this one.
            if open_best.get(&state).is_some_and(|&best| best < entry.g) {
                continue;
            }
            open_best.remove(&state);

            if state.is_goal(goals) {
                let path = arena.path_to(entry.node);
                let stats = SearchStats {
                    path_length: Some(path.len() - 1),
                    nodes_expanded,
                    max_frontier_size,
                    time_taken: started.elapsed(),
                };
                return (Some(path), stats);
            }

            closed.insert(state);
            nodes_expanded += 1;
            iterations += 1;

            for successor in state.successors() {
                if closed.contains(&successor) {
                    continue;
                }
                let g = entry.g + 1;
                if open_best.get(&successor).is_some_and(|&best| best <= g) {
                    continue;
                }
                let h = self.heuristic.estimate(&successor, goals);
                open_best.insert(successor, g);
                let node = arena.insert(SearchNode::new(successor, Some(entry.node), g, h));
                open.push(OpenEntry {
                    f: g + h,
                    h,
                    g,
                    node,
                });
            }
        }

        let stats = SearchStats {
            path_length: None,
            nodes_expanded,
            max_frontier_size,
            time_taken: started.elapsed(),
        };
        (None, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Board;
    use crate::search::heuristic::{ManhattanDistance, MisplacedLinearConflict};

    fn state(rows: [[u8; 3]; 3]) -> State {
        State::new(Board::from_rows(rows).unwrap())
    }

    #[test]
    fn test_initial_state_already_goal() {
        let goals = GoalSet::standard();
        let goal = state([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        let engine = AStar::new(ManhattanDistance::new());

        let (path, stats) = engine.search(&goal, &goals, AStar::DEFAULT_MAX_ITERATIONS);
        assert_eq!(path, Some(vec![goal]));
        assert_eq!(stats.path_length, Some(0));
        assert_eq!(stats.nodes_expanded, 0);
        assert_eq!(stats.max_frontier_size, 1);
    }

    #[test]
    fn test_one_move_instance() {
        let goals = GoalSet::standard();
        let initial = state([[1, 2, 3], [4, 5, 0], [7, 8, 6]]);
        let engine = AStar::new(ManhattanDistance::new());

        let (path, stats) = engine.search(&initial, &goals, AStar::DEFAULT_MAX_ITERATIONS);
        let path = path.expect("one slide away from the row-order goal");
        assert_eq!(stats.path_length, Some(1));
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], initial);
        assert!(path[1].is_goal(&goals));
        assert!(stats.nodes_expanded <= 2);
    }

    #[test]
    fn test_zero_iteration_budget() {
        let goals = GoalSet::standard();
        let initial = state([[1, 2, 3], [4, 5, 0], [7, 8, 6]]);
        let engine = AStar::new(ManhattanDistance::new());

        let (path, stats) = engine.search(&initial, &goals, 0);
        assert!(path.is_none());
        assert_eq!(stats.path_length, None);
        assert_eq!(stats.nodes_expanded, 0);
    }

    #[test]
    fn test_path_through_swap_counts_one_transition() {
        // The first move slides tile 1 next to tile 3 and the swap
        // fires; the slide plus swap must appear as a single edge.
        let s0 = state([[3, 0, 1], [4, 5, 6], [7, 8, 2]]);
        let s1 = s0.make_move(crate::puzzle::Direction::Right).unwrap();
        let s2 = s1.make_move(crate::puzzle::Direction::Down).unwrap();
        let goals = GoalSet::new([s2, s2, s2, s2]);

        let engine = AStar::new(ManhattanDistance::new());
        let (path, stats) = engine.search(&s0, &goals, AStar::DEFAULT_MAX_ITERATIONS);
        let path = path.expect("two transitions reach the target");
        assert_eq!(stats.path_length, Some(2));
        assert_eq!(path, vec![s0, s1, s2]);
    }

    #[test]
    fn test_returned_path_is_a_transition_chain() {
        let goals = GoalSet::standard();
        let initial = state([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);
        let engine = AStar::new(MisplacedLinearConflict::new());

        let (path, stats) = engine.search(&initial, &goals, AStar::DEFAULT_MAX_ITERATIONS);
        let path = path.expect("instance two slides from the row-order goal");
        assert_eq!(stats.path_length, Some(path.len() - 1));
        for pair in path.windows(2) {
            assert!(
                pair[0].successors().contains(&pair[1]),
                "consecutive path states must be one transition apart"
            );
        }
        assert!(path.last().unwrap().is_goal(&goals));
    }

    #[test]
    fn test_both_heuristics_agree_on_small_instance() {
        let goals = GoalSet::standard();
        let initial = state([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);

        let (manhattan_path, _) = AStar::new(ManhattanDistance::new()).search(
            &initial,
            &goals,
            AStar::DEFAULT_MAX_ITERATIONS,
        );
        let (mlc_path, _) = AStar::new(MisplacedLinearConflict::new()).search(
            &initial,
            &goals,
            AStar::DEFAULT_MAX_ITERATIONS,
        );
        assert_eq!(
            manhattan_path.map(|p| p.len()),
            mlc_path.map(|p| p.len())
        );
    }

    #[test]
    fn test_stats_populated_on_budget_exhaustion() {
        let goals = GoalSet::standard();
        let initial = state([[8, 6, 7], [2, 5, 4], [3, 0, 1]]);
        let engine = AStar::new(ManhattanDistance::new());

        let (path, stats) = engine.search(&initial, &goals, 5);
        assert!(path.is_none());
        assert!(stats.nodes_expanded <= 5);
        assert!(stats.max_frontier_size >= 1);
    }
}
