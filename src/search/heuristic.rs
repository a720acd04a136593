//! Heuristic estimators for the A* engine.
//!
//! Every estimator maps a state and the goal set to a non-negative
//! estimate, defined as the minimum per-goal estimate across the four
//! goals. The engine's no-reopening policy is only optimal when the
//! estimator is consistent; an estimator that is merely admissible may
//! yield a suboptimal path, which is a documented constraint of the
//! engine rather than a defect here.

use crate::puzzle::{GoalSet, State};
use crate::types::Coord;

/// A pluggable estimate of the remaining transition count to the
/// nearest goal.
pub trait Heuristic: Send + Sync {
    /// Estimated number of transitions from `state` to the nearest goal.
    fn estimate(&self, state: &State, goals: &GoalSet) -> u32;

    /// Short human-readable name for reports and CLI output.
    fn name(&self) -> &str;

    /// Fixed rationale for why the estimate never overestimates.
    fn explain_admissibility(&self) -> &str;

    /// Fixed rationale for why the estimate respects the triangle
    /// inequality across transitions.
    fn explain_consistency(&self) -> &str;
}

/// Sum over tiles 1-8 of the row+column distance to the tile's cell in
/// the goal, minimized across the four goals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl ManhattanDistance {
    pub fn new() -> Self {
        ManhattanDistance
    }

    fn goal_distance(state: &State, goal: &State) -> u32 {
        (1..=8)
            .filter_map(|label| {
                let current = state.tile_position(label)?;
                let target = goal.tile_position(label)?;
                Some(current.manhattan(target))
            })
            .sum()
    }
}

impl Heuristic for ManhattanDistance {
    fn estimate(&self, state: &State, goals: &GoalSet) -> u32 {
        goals
            .iter()
            .map(|goal| Self::goal_distance(state, goal))
            .min()
            .unwrap_or(0)
    }

    fn name(&self) -> &str {
        "manhattan"
    }

    fn explain_admissibility(&self) -> &str {
        "Each slide changes exactly one tile's row+column distance by at most 1, \
         so the summed distance can drop by at most 1 per transition; taking the \
         minimum across the goal set keeps the bound against the nearest goal."
    }

    fn explain_consistency(&self) -> &str {
        "For slide transitions the estimate of adjacent states differs by at most \
         the transition cost of 1, satisfying the triangle inequality. A triggered \
         swap relocates a tile pair and can shift the estimate by more than 1, so \
         consistency is guaranteed only on the slide portion of the model."
    }
}

/// Per goal, the count of misplaced non-blank tiles plus twice the
/// number of linear conflicts, minimized across the four goals.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedLinearConflict;

impl MisplacedLinearConflict {
    pub fn new() -> Self {
        MisplacedLinearConflict
    }

    fn goal_estimate(state: &State, goal: &State) -> u32 {
        Self::misplaced_tiles(state, goal) + 2 * Self::linear_conflicts(state, goal)
    }

    fn misplaced_tiles(state: &State, goal: &State) -> u32 {
        let mut misplaced = 0;
        for index in 0..9 {
            let coord = Coord::from_index(index);
            let tile = state.board().get(coord);
            if tile != 0 && tile != goal.board().get(coord) {
                misplaced += 1;
            }
        }
        misplaced
    }

    /// Count pairs of tiles that share their goal row (resp. column),
    /// currently sit in that row (resp. column), and appear in reversed
    /// relative order. Each pair forces at least two extra transitions
    /// for one tile to step around the other and back.
    fn linear_conflicts(state: &State, goal: &State) -> u32 {
        let mut conflicts = 0;

        for row in 0..3 {
            let tiles: Vec<u8> = (0..3)
                .map(|col| state.board().get(Coord::new(row, col)))
                .filter(|&tile| tile != 0)
                .collect();

            for (i, &tile_i) in tiles.iter().enumerate() {
                let Some(goal_i) = goal.tile_position(tile_i) else {
                    continue;
                };
                if goal_i.row != row {
                    continue;
                }
                for &tile_j in &tiles[i + 1..] {
                    let Some(goal_j) = goal.tile_position(tile_j) else {
                        continue;
                    };
                    if goal_j.row == row && goal_i.col > goal_j.col {
                        conflicts += 1;
                    }
                }
            }
        }

        for col in 0..3 {
            let tiles: Vec<u8> = (0..3)
                .map(|row| state.board().get(Coord::new(row, col)))
                .filter(|&tile| tile != 0)
                .collect();

            for (i, &tile_i) in tiles.iter().enumerate() {
                let Some(goal_i) = goal.tile_position(tile_i) else {
                    continue;
                };
                if goal_i.col != col {
                    continue;
                }
                for &tile_j in &tiles[i + 1..] {
                    let Some(goal_j) = goal.tile_position(tile_j) else {
                        continue;
                    };
                    if goal_j.col == col && goal_i.row > goal_j.row {
                        conflicts += 1;
                    }
                }
            }
        }

        conflicts
    }
}

impl Heuristic for MisplacedLinearConflict {
    fn estimate(&self, state: &State, goals: &GoalSet) -> u32 {
        goals
            .iter()
            .map(|goal| Self::goal_estimate(state, goal))
            .min()
            .unwrap_or(0)
    }

    fn name(&self) -> &str {
        "misplaced-linear-conflict"
    }

    fn explain_admissibility(&self) -> &str {
        "Every misplaced tile needs at least one transition to reach its goal \
         cell, and each linear conflict forces a minimum of two extra transitions \
         for one of the conflicting tiles to detour around the other."
    }

    fn explain_consistency(&self) -> &str {
        "A single slide moves one tile, changing the misplaced count by at most 1 \
         and creating or resolving conflicts only for that tile's line, so the \
         estimate tracks the transition cost on the slide portion of the model."
    }
}

/// Look up a heuristic by its CLI name.
///
/// # Errors
///
/// Returns [`crate::Error::UnknownHeuristic`] for unrecognized names.
pub fn heuristic_by_name(name: &str) -> crate::Result<Box<dyn Heuristic>> {
    match name {
        "manhattan" => Ok(Box::new(ManhattanDistance::new())),
        "misplaced-linear-conflict" | "mlc" => Ok(Box::new(MisplacedLinearConflict::new())),
        _ => Err(crate::Error::UnknownHeuristic {
            name: name.to_string(),
            expected: "manhattan, misplaced-linear-conflict".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Board;

    fn state(rows: [[u8; 3]; 3]) -> State {
        State::new(Board::from_rows(rows).unwrap())
    }

    #[test]
    fn test_manhattan_is_zero_at_every_goal() {
        let goals = GoalSet::standard();
        let heuristic = ManhattanDistance::new();
        for goal in goals.iter() {
            assert_eq!(heuristic.estimate(goal, &goals), 0);
        }
    }

    #[test]
    fn test_manhattan_single_displaced_tile() {
        let goals = GoalSet::standard();
        let heuristic = ManhattanDistance::new();
        // Tile 6 is one cell from its row-order goal position.
        let s = state([[1, 2, 3], [4, 5, 0], [7, 8, 6]]);
        assert_eq!(heuristic.estimate(&s, &goals), 1);
    }

    #[test]
    fn test_manhattan_takes_minimum_over_goals() {
        let heuristic = ManhattanDistance::new();
        // One step from the reverse-order goal but far from row order:
        // the minimum must come from the reverse goal.
        let s = state([[8, 7, 6], [5, 4, 0], [2, 1, 3]]);
        let goals = GoalSet::standard();
        let reverse = goals.goals()[1];
        assert_eq!(ManhattanDistance::goal_distance(&s, &reverse), 1);
        assert_eq!(heuristic.estimate(&s, &goals), 1);
    }

    #[test]
    fn test_misplaced_count() {
        let goal = state([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        let s = state([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        assert_eq!(MisplacedLinearConflict::misplaced_tiles(&s, &goal), 2);
        assert_eq!(MisplacedLinearConflict::misplaced_tiles(&goal, &goal), 0);
    }

    #[test]
    fn test_row_linear_conflict() {
        let goal = state([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        // 2 and 1 share goal row 0 and are reversed.
        let s = state([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        assert_eq!(MisplacedLinearConflict::linear_conflicts(&s, &goal), 1);
        assert_eq!(MisplacedLinearConflict::goal_estimate(&s, &goal), 2 + 2);
    }

    #[test]
    fn test_column_linear_conflict() {
        let goal = state([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        // 4 and 1 share goal column 0 and are reversed vertically.
        let s = state([[4, 2, 3], [1, 5, 6], [7, 8, 0]]);
        assert_eq!(MisplacedLinearConflict::linear_conflicts(&s, &goal), 1);
    }

    #[test]
    fn test_no_conflict_when_order_matches() {
        let goal = state([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        // 8 is displaced within its goal row but 7 and 8 keep their
        // goal order, so no conflict is charged.
        let s = state([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert_eq!(MisplacedLinearConflict::linear_conflicts(&s, &goal), 0);
    }

    #[test]
    fn test_mlc_is_zero_at_every_goal() {
        let goals = GoalSet::standard();
        let heuristic = MisplacedLinearConflict::new();
        for goal in goals.iter() {
            assert_eq!(heuristic.estimate(goal, &goals), 0);
        }
    }

    #[test]
    fn test_explanations_are_non_empty() {
        let heuristics: [&dyn Heuristic; 2] =
            [&ManhattanDistance::new(), &MisplacedLinearConflict::new()];
        for h in heuristics {
            assert!(!h.explain_admissibility().is_empty());
            assert!(!h.explain_consistency().is_empty());
            assert!(!h.name().is_empty());
        }
    }

    #[test]
    fn test_heuristic_by_name() {
        assert_eq!(heuristic_by_name("manhattan").unwrap().name(), "manhattan");
        assert_eq!(
            heuristic_by_name("mlc").unwrap().name(),
            "misplaced-linear-conflict"
        );
        assert!(heuristic_by_name("euclidean").is_err());
    }
}
