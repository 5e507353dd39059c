//! Board model
//!
//! The 8x8 grid is the single source of truth for piece placement.
//! It performs no validation; the rule engine decides what may change.

pub mod position;
pub mod square;

pub use position::Position;
pub use square::{Player, Square};

/// Number of rows and columns
pub const BOARD_SIZE: usize = 8;

/// Rows initially filled for each side
const HOME_ROWS: u8 = 3;

/// The 8x8 grid of square values, indexed `[row][col]`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Board {
    cells: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial_layout()
    }
}

impl Board {
    /// Board with no pieces
    pub const fn empty() -> Self {
        Self {
            cells: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting layout
    ///
    /// Player 1 men on the dark squares of rows 0-2, Player 2 men on
    /// the dark squares of rows 5-7.
    pub fn initial_layout() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Position::new(row, col);
                if !pos.is_dark() {
                    continue;
                }
                if row < HOME_ROWS {
                    board.set(pos, Square::Player1Man);
                } else if row >= BOARD_SIZE as u8 - HOME_ROWS {
                    board.set(pos, Square::Player2Man);
                }
            }
        }
        board
    }

    /// Value at a position
    pub fn get(&self, pos: Position) -> Square {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Overwrite the value at a position
    pub fn set(&mut self, pos: Position, value: Square) {
        self.cells[pos.row as usize][pos.col as usize] = value;
    }

    /// Number of pieces (men and kings) owned by `player`
    pub fn piece_count(&self, player: Player) -> u8 {
        self.iter().filter(|(_, sq)| sq.belongs_to(player)).count() as u8
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Square)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, sq)| (Position::new(row as u8, col as u8), *sq))
        })
    }

    /// Positions of every piece owned by `player`
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(move |(_, sq)| sq.belongs_to(player))
            .map(|(pos, _)| pos)
    }
}
