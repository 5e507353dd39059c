//! Players and square values

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    /// Starts on rows 0-2, moves toward row 7
    #[default]
    Player1,
    /// Starts on rows 5-7, moves toward row 0
    Player2,
}

impl Player {
    /// The other player
    pub const fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Row delta of a forward move for this player's men
    pub const fn forward(self) -> i8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => -1,
        }
    }

    /// Row on which this player's men are promoted
    pub const fn promotion_row(self) -> u8 {
        match self {
            Player::Player1 => 7,
            Player::Player2 => 0,
        }
    }

    /// Square value of an unpromoted piece of this player
    pub const fn man(self) -> Square {
        match self {
            Player::Player1 => Square::Player1Man,
            Player::Player2 => Square::Player2Man,
        }
    }

    /// Square value of a king of this player
    pub const fn king(self) -> Square {
        match self {
            Player::Player1 => Square::Player1King,
            Player::Player2 => Square::Player2King,
        }
    }

    /// Short label used on the status lines
    pub const fn label(self) -> &'static str {
        match self {
            Player::Player1 => "P1",
            Player::Player2 => "P2",
        }
    }
}

/// Content of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Square {
    #[default]
    Empty,
    Player1Man,
    Player2Man,
    Player1King,
    Player2King,
}

impl Square {
    /// Owner of the piece on this square, if any
    pub const fn owner(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Player1Man | Square::Player1King => Some(Player::Player1),
            Square::Player2Man | Square::Player2King => Some(Player::Player2),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    pub const fn is_king(self) -> bool {
        matches!(self, Square::Player1King | Square::Player2King)
    }

    pub const fn is_man(self) -> bool {
        matches!(self, Square::Player1Man | Square::Player2Man)
    }

    /// Check if this square holds a piece of `player`
    pub fn belongs_to(self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    /// Check if this square holds a piece of `player`'s opponent
    pub fn is_opponent_of(self, player: Player) -> bool {
        self.owner() == Some(player.opponent())
    }

    /// The king value for a man; kings and empty squares are unchanged
    pub const fn promoted(self) -> Self {
        match self {
            Square::Player1Man => Square::Player1King,
            Square::Player2Man => Square::Player2King,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner() {
        assert_eq!(Square::Empty.owner(), None);
        assert_eq!(Square::Player1Man.owner(), Some(Player::Player1));
        assert_eq!(Square::Player1King.owner(), Some(Player::Player1));
        assert_eq!(Square::Player2Man.owner(), Some(Player::Player2));
        assert_eq!(Square::Player2King.owner(), Some(Player::Player2));
    }

    #[test]
    fn test_promotion_only_affects_men() {
        assert_eq!(Square::Player1Man.promoted(), Square::Player1King);
        assert_eq!(Square::Player2Man.promoted(), Square::Player2King);
        assert_eq!(Square::Player1King.promoted(), Square::Player1King);
        assert_eq!(Square::Empty.promoted(), Square::Empty);
    }

    #[test]
    fn test_player_directions() {
        assert_eq!(Player::Player1.forward(), 1);
        assert_eq!(Player::Player2.forward(), -1);
        assert_eq!(Player::Player1.promotion_row(), 7);
        assert_eq!(Player::Player2.promotion_row(), 0);
        assert_eq!(Player::Player1.opponent(), Player::Player2);
    }

    #[test]
    fn test_opponent_check() {
        assert!(Square::Player2King.is_opponent_of(Player::Player1));
        assert!(!Square::Player1Man.is_opponent_of(Player::Player1));
        assert!(!Square::Empty.is_opponent_of(Player::Player2));
    }
}
