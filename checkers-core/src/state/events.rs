//! Events fed to the controller and the transitions they produce

use super::machine::Outcome;
use crate::board::{Player, Position};
use crate::input::Direction;

/// Events that drive the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Cursor moved one cell
    Move(Direction),
    /// Select pressed on the cursor cell
    Select,
    /// Countdown reached zero
    TimeExpired,
}

/// A move that was applied to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveRecord {
    pub player: Player,
    pub from: Position,
    pub to: Position,
    /// Cell of the captured piece
    pub captured: Option<Position>,
    /// The piece was crowned on this move
    pub promoted: bool,
    /// Points awarded for this move
    pub points: u8,
}

/// What an event did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Cursor now at this cell
    CursorMoved(Position),
    /// Piece picked up
    Selected(Position),
    /// Event had no effect
    Rejected,
    /// Move applied and the turn passed to the opponent
    TurnComplete(MoveRecord),
    /// Capture applied; the same piece must jump again
    ChainContinues(MoveRecord),
    /// Game finished
    GameOver(Outcome),
}
