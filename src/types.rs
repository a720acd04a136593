//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate. Both components must be in `0..3`.
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Flat index into a row-major 9-cell array.
    pub const fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Coordinate for a flat index in `0..9`.
    pub const fn from_index(index: usize) -> Self {
        Coord {
            row: index / 3,
            col: index % 3,
        }
    }

    /// 4-adjacency (row + column) distance to another coordinate.
    pub fn manhattan(self, other: Coord) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }

    /// Whether two coordinates are 4-adjacent (Manhattan distance 1).
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// Offset by a (row, col) delta, or `None` if the result leaves the board.
    pub fn offset(self, delta: (isize, isize)) -> Option<Coord> {
        let row = self.row.checked_add_signed(delta.0)?;
        let col = self.col.checked_add_signed(delta.1)?;
        if row < 3 && col < 3 {
            Some(Coord { row, col })
        } else {
            None
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for i in 0..9 {
            assert_eq!(Coord::from_index(i).index(), i);
        }
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(2, 2)), 4);
        assert_eq!(Coord::new(1, 1).manhattan(Coord::new(1, 1)), 0);
        assert!(Coord::new(0, 1).is_adjacent(Coord::new(0, 0)));
        assert!(!Coord::new(0, 0).is_adjacent(Coord::new(1, 1)));
    }

    #[test]
    fn test_offset_bounds() {
        assert_eq!(Coord::new(0, 0).offset((-1, 0)), None);
        assert_eq!(Coord::new(2, 2).offset((0, 1)), None);
        assert_eq!(Coord::new(1, 1).offset((1, 0)), Some(Coord::new(2, 1)));
    }
}
