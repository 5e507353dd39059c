//! Per-player score keeping

use crate::board::Player;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Points for capturing a piece
pub const CAPTURE_POINTS: u8 = 1;

/// Points for crowning a man
pub const PROMOTION_POINTS: u8 = 2;

/// Score of both players
///
/// Scores only ever grow; additions saturate instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scores {
    player1: u16,
    player2: u16,
}

impl Scores {
    pub const fn new(player1: u16, player2: u16) -> Self {
        Self { player1, player2 }
    }

    /// Score of one player
    pub const fn get(&self, player: Player) -> u16 {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }

    /// Add points to a player's score
    pub fn award(&mut self, player: Player, points: u8) {
        let slot = match player {
            Player::Player1 => &mut self.player1,
            Player::Player2 => &mut self.player2,
        };
        *slot = slot.saturating_add(u16::from(points));
    }

    /// Player with the strictly higher score
    pub fn leader(&self) -> Option<Player> {
        match self.player1.cmp(&self.player2) {
            core::cmp::Ordering::Greater => Some(Player::Player1),
            core::cmp::Ordering::Less => Some(Player::Player2),
            core::cmp::Ordering::Equal => None,
        }
    }
}

/// Points earned by one move
pub const fn move_points(captured: bool, promoted: bool) -> u8 {
    let mut points = 0;
    if captured {
        points += CAPTURE_POINTS;
    }
    if promoted {
        points += PROMOTION_POINTS;
    }
    points
}
