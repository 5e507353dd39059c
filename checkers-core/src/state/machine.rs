//! Controller states
//!
//! The controller is always in exactly one of these states. `GameOver`
//! is terminal: once entered, no event leaves it.

use crate::board::{Player, Position};
use crate::game::Scores;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    /// Outcome decided by score: higher score wins, equal scores draw
    pub fn by_score(scores: &Scores) -> Self {
        match scores.leader() {
            Some(player) => Outcome::Winner(player),
            None => Outcome::Draw,
        }
    }

    /// Text for the result line of the final screen
    pub const fn headline(self) -> &'static str {
        match self {
            Outcome::Winner(Player::Player1) => "PLAYER 1 WINS",
            Outcome::Winner(Player::Player2) => "PLAYER 2 WINS",
            Outcome::Draw => "DRAW",
        }
    }
}

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Waiting for the mover to pick a piece
    NoSelection,
    /// A piece of the mover is selected
    ///
    /// `chained` is set after a capture that must be continued; only a
    /// further jump of the same piece is accepted then.
    PieceSelected { at: Position, chained: bool },
    /// Game finished; all input is ignored
    GameOver(Outcome),
}

impl State {
    /// Check if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::GameOver(_))
    }

    /// Currently selected cell, if any
    pub fn selection(&self) -> Option<Position> {
        match self {
            State::PieceSelected { at, .. } => Some(*at),
            _ => None,
        }
    }

    /// Check if a multi-jump chain is in progress
    pub fn in_chain(&self) -> bool {
        matches!(self, State::PieceSelected { chained: true, .. })
    }
}
