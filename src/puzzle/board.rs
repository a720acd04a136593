//! Board and state representation for the swap-rule 8-puzzle.
//!
//! A board holds the labels 0-8 exactly once, with 0 as the blank. The
//! transition model is the usual blank slide plus an automatic swap:
//! after every slide, if tiles 1 and 3 occupy 4-adjacent cells they
//! exchange places, and independently so for tiles 2 and 4. The slide
//! and any triggered swaps together form a single transition of cost 1.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::Coord;

use super::goals::GoalSet;

/// A direction the blank can slide in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the fixed successor-generation order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) delta applied to the blank coordinate.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction that moves the blank back where it came from.
    ///
    /// Note that applying a move and then its opposite does not
    /// generally restore the original board: a swap that fired on the
    /// first move is not undone by the second.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// A 3x3 board holding the labels 0-8, each exactly once.
///
/// Construction validates the permutation invariant, so every `Board`
/// in circulation has a well-defined blank cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; 9],
}

impl Board {
    /// Create a board from a flat row-major cell array.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardContents`] if the cells are
    /// not a permutation of 0-8.
    pub fn from_cells(cells: [u8; 9]) -> Result<Self, crate::Error> {
        let mut seen = [false; 9];
        for &label in &cells {
            if label > 8 {
                return Err(crate::Error::InvalidBoardContents {
                    reason: format!("label {label} is outside 0-8"),
                });
            }
            if seen[label as usize] {
                return Err(crate::Error::InvalidBoardContents {
                    reason: format!("label {label} appears more than once"),
                });
            }
            seen[label as usize] = true;
        }
        Ok(Board { cells })
    }

    /// Create a board from three rows.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardContents`] if the cells are
    /// not a permutation of 0-8.
    pub fn from_rows(rows: [[u8; 3]; 3]) -> Result<Self, crate::Error> {
        let mut cells = [0u8; 9];
        for (r, row) in rows.iter().enumerate() {
            for (c, &label) in row.iter().enumerate() {
                cells[r * 3 + c] = label;
            }
        }
        Self::from_cells(cells)
    }

    /// Create a board from a 9-character string.
    ///
    /// Whitespace is filtered out. Each remaining character must be a
    /// digit `0`-`8`, with `_` accepted as an alias for the blank.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 usable characters are present, a
    /// character is not a valid label, or the labels do not form a
    /// permutation of 0-8.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: cleaned.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [0u8; 9];
        for (i, &c) in cleaned.iter().take(9).enumerate() {
            cells[i] = match c {
                '_' => 0,
                '0'..='8' => c as u8 - b'0',
                _ => {
                    return Err(crate::Error::InvalidTileCharacter {
                        character: c,
                        position: i,
                        context: s.to_string(),
                    });
                }
            };
        }
        Self::from_cells(cells)
    }

    /// Label at a coordinate.
    pub fn get(&self, coord: Coord) -> u8 {
        self.cells[coord.index()]
    }

    /// Flat row-major view of the cells.
    pub fn cells(&self) -> &[u8; 9] {
        &self.cells
    }

    /// Coordinate of a label, or `None` if the label is not on the board.
    pub fn position_of(&self, label: u8) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&cell| cell == label)
            .map(Coord::from_index)
    }

    /// Compact 9-character key representation, `_` for the blank.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|&cell| {
                if cell == 0 {
                    '_'
                } else {
                    (b'0' + cell) as char
                }
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                if col > 0 {
                    write!(f, " ")?;
                }
                let cell = self.cells[row * 3 + col];
                if cell == 0 {
                    write!(f, "_")?;
                } else {
                    write!(f, "{cell}")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// One puzzle configuration: a board plus its cached blank coordinate.
///
/// States are immutable once constructed; every transition returns a
/// fresh `State`. Equality and hashing are a pure function of the board
/// contents, so states reached along different paths compare equal and
/// can serve as set and map keys.
#[derive(Debug, Clone, Copy)]
pub struct State {
    board: Board,
    blank: Coord,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}

impl State {
    /// Wrap a validated board, caching its blank coordinate.
    pub fn new(board: Board) -> Self {
        let blank = board
            .position_of(0)
            .expect("validated board always contains the blank");
        State { board, blank }
    }

    /// The underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cached coordinate of the blank cell.
    pub fn blank_position(&self) -> Coord {
        self.blank
    }

    /// Coordinate of a numbered tile (labels 1-8).
    ///
    /// Returns `None` for the blank label or any label not on the board.
    pub fn tile_position(&self, label: u8) -> Option<Coord> {
        if (1..=8).contains(&label) {
            self.board.position_of(label)
        } else {
            None
        }
    }

    /// Slide the blank one cell in `direction`, then apply the swap rule.
    ///
    /// Returns `None` when the move would leave the 3x3 bounds; this is
    /// an expected outcome, not an error. On success the slide plus any
    /// triggered swaps count as a single transition of cost 1.
    #[must_use = "make_move returns a new state; the original is unchanged"]
    pub fn make_move(&self, direction: Direction) -> Option<State> {
        let target = self.blank.offset(direction.delta())?;
        let mut cells = self.board.cells;
        cells[self.blank.index()] = cells[target.index()];
        cells[target.index()] = 0;
        apply_swap_rule(&mut cells);
        Some(State {
            board: Board { cells },
            blank: target,
        })
    }

    /// All states reachable in one transition, in the fixed order
    /// up, down, left, right. Every non-failing move is included; on a
    /// 3x3 board there are always between 2 and 4.
    pub fn successors(&self) -> Vec<State> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| self.make_move(direction))
            .collect()
    }

    /// Whether this state equals any member of the goal set.
    pub fn is_goal(&self, goals: &GoalSet) -> bool {
        goals.contains(self)
    }

    /// Compact key representation of the board.
    pub fn encode(&self) -> String {
        self.board.encode()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board.fmt(f)
    }
}

/// Exchange tiles 1/3 and, independently, tiles 2/4 when a pair is
/// 4-adjacent. Both checks run on every transition and both may fire on
/// the same move since the pairs are disjoint.
fn apply_swap_rule(cells: &mut [u8; 9]) {
    for (a, b) in [(1u8, 3u8), (2u8, 4u8)] {
        let pos_a = cells.iter().position(|&cell| cell == a).map(Coord::from_index);
        let pos_b = cells.iter().position(|&cell| cell == b).map(Coord::from_index);
        if let (Some(pos_a), Some(pos_b)) = (pos_a, pos_b) {
            if pos_a.is_adjacent(pos_b) {
                cells[pos_a.index()] = b;
                cells[pos_b.index()] = a;
            }
        }
    }
}
