//! Board coordinates

use super::BOARD_SIZE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell on the board, `row` and `col` both in `0..8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position
    ///
    /// Callers pass coordinates in `0..8`; out-of-range values are
    /// reduced modulo the board size so the invariant always holds.
    pub const fn new(row: u8, col: u8) -> Self {
        Self {
            row: row % BOARD_SIZE as u8,
            col: col % BOARD_SIZE as u8,
        }
    }

    /// Position offset by a row/column delta, or `None` if it leaves the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Position offset by a delta, wrapping around the board edges
    pub fn wrapping_offset(self, d_row: i8, d_col: i8) -> Self {
        let size = BOARD_SIZE as i8;
        Self {
            row: (self.row as i8 + d_row).rem_euclid(size) as u8,
            col: (self.col as i8 + d_col).rem_euclid(size) as u8,
        }
    }

    /// Cell halfway between two positions two diagonal steps apart
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    /// Signed row distance from `self` to `other`
    pub fn row_delta(self, other: Self) -> i8 {
        other.row as i8 - self.row as i8
    }

    /// Signed column distance from `self` to `other`
    pub fn col_delta(self, other: Self) -> i8 {
        other.col as i8 - self.col as i8
    }

    /// Dark squares carry the pieces
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_bounds() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.offset(1, 1), Some(Position::new(1, 1)));
        assert_eq!(corner.offset(-1, 1), None);
        assert_eq!(corner.offset(1, -1), None);
        assert_eq!(Position::new(7, 7).offset(1, 0), None);
        assert_eq!(Position::new(5, 5).offset(2, 2), Some(Position::new(7, 7)));
    }

    #[test]
    fn test_wrapping_offset() {
        assert_eq!(Position::new(0, 0).wrapping_offset(-1, 0), Position::new(7, 0));
        assert_eq!(Position::new(7, 3).wrapping_offset(1, 0), Position::new(0, 3));
        assert_eq!(Position::new(2, 0).wrapping_offset(0, -1), Position::new(2, 7));
        assert_eq!(Position::new(2, 7).wrapping_offset(0, 1), Position::new(2, 0));
    }

    #[test]
    fn test_midpoint_and_deltas() {
        let from = Position::new(2, 1);
        let to = Position::new(4, 3);
        assert_eq!(from.midpoint(to), Position::new(3, 2));
        assert_eq!(from.row_delta(to), 2);
        assert_eq!(to.col_delta(from), -2);
    }

    #[test]
    fn test_dark_squares() {
        assert!(Position::new(0, 1).is_dark());
        assert!(Position::new(2, 1).is_dark());
        assert!(!Position::new(0, 0).is_dark());
    }
}
