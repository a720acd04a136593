//! High-level game context: goal set, initial state, current state.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{random, Rng, SeedableRng};

use super::board::{Board, Direction, State};
use super::goals::GoalSet;

/// A puzzle game instance owning the fixed goal set and tracking the
/// current configuration as moves are played.
#[derive(Debug, Clone)]
pub struct PuzzleGame {
    goals: GoalSet,
    initial: State,
    current: State,
}

impl PuzzleGame {
    /// Create a game from a given initial state with the standard goals.
    pub fn new(initial: State) -> Self {
        PuzzleGame {
            goals: GoalSet::standard(),
            initial,
            current: initial,
        }
    }

    /// Create a game from a freshly generated random configuration.
    pub fn random() -> Self {
        let mut rng = StdRng::seed_from_u64(random());
        Self::new(Self::random_state(&mut rng))
    }

    /// Create a game from a random configuration drawn from `rng`.
    pub fn random_with_rng(rng: &mut impl Rng) -> Self {
        Self::new(Self::random_state(rng))
    }

    /// Generate a uniformly random configuration.
    ///
    /// The result is not necessarily solvable; an unsolvable instance
    /// simply exhausts the search budget without finding a goal.
    pub fn random_state(rng: &mut impl Rng) -> State {
        let mut labels = [0u8, 1, 2, 3, 4, 5, 6, 7, 8];
        labels.shuffle(rng);
        State::new(Board::from_cells(labels).expect("shuffled labels form a permutation"))
    }

    /// Reset the current state back to the initial state.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }

    /// Apply a move to the current state. Returns `false` when the move
    /// would leave the board bounds, leaving the current state unchanged.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        match self.current.make_move(direction) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Whether the current state matches any goal.
    pub fn is_solved(&self) -> bool {
        self.current.is_goal(&self.goals)
    }

    /// The goal set.
    pub fn goal_set(&self) -> &GoalSet {
        &self.goals
    }

    /// The initial state.
    pub fn initial_state(&self) -> &State {
        &self.initial
    }

    /// The current state.
    pub fn current_state(&self) -> &State {
        &self.current
    }
}
