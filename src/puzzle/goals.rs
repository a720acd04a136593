//! The four accepted terminal configurations.

use super::board::{Board, State};

/// The set of exactly four goal configurations, fixed at construction
/// of the owning game context. A state is a goal iff it equals any
/// member of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalSet {
    goals: [State; 4],
}

impl GoalSet {
    /// Build a goal set from four literal target states.
    pub fn new(goals: [State; 4]) -> Self {
        GoalSet { goals }
    }

    /// The standard four targets: row order with the blank last, its
    /// reverse, and the same two with the blank leading.
    pub fn standard() -> Self {
        let boards = [
            [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
            [[8, 7, 6], [5, 4, 3], [2, 1, 0]],
            [[0, 1, 2], [3, 4, 5], [6, 7, 8]],
            [[0, 8, 7], [6, 5, 4], [3, 2, 1]],
        ];
        GoalSet {
            goals: boards.map(|rows| {
                State::new(Board::from_rows(rows).expect("goal boards are valid permutations"))
            }),
        }
    }

    /// Whether a state matches any goal.
    pub fn contains(&self, state: &State) -> bool {
        self.goals.iter().any(|goal| goal == state)
    }

    /// The four goals, in fixed order.
    pub fn goals(&self) -> &[State; 4] {
        &self.goals
    }

    /// Iterate over the goals.
    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.goals.iter()
    }
}
