//! Configuration type definitions

use crate::board::Player;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default length of a game in seconds
pub const DEFAULT_TIME_LIMIT_S: u32 = 300;

/// Longest game the `MM:SS` clock can show (99:59)
pub const MAX_TIME_LIMIT_S: u32 = 99 * 60 + 59;

/// Default button settle interval in milliseconds
pub const DEFAULT_SETTLE_MS: u32 = 200;

/// Longest settle interval accepted
pub const MAX_SETTLE_MS: u32 = 2000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Time limit of zero would end the game immediately
    ZeroTimeLimit,
    /// Time limit does not fit the clock display
    TimeLimitTooLong,
    /// Settle interval would make the buttons unusable
    SettleTooLong,
}

/// Game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Total game time in seconds
    pub time_limit_s: u32,
    /// Minimum time between two accepted presses of the same button group (ms)
    pub settle_ms: u32,
    /// Player who moves first
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit_s: DEFAULT_TIME_LIMIT_S,
            settle_ms: DEFAULT_SETTLE_MS,
            first_player: Player::Player1,
        }
    }
}

impl GameConfig {
    /// Check that all values are in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_limit_s == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if self.time_limit_s > MAX_TIME_LIMIT_S {
            return Err(ConfigError::TimeLimitTooLong);
        }
        if self.settle_ms > MAX_SETTLE_MS {
            return Err(ConfigError::SettleTooLong);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.time_limit_s, 300);
        assert_eq!(config.first_player, Player::Player1);
    }

    #[test]
    fn test_rejects_zero_time() {
        let config = GameConfig {
            time_limit_s: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeLimit));
    }

    #[test]
    fn test_rejects_long_time() {
        let config = GameConfig {
            time_limit_s: MAX_TIME_LIMIT_S + 1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TimeLimitTooLong));

        let config = GameConfig {
            time_limit_s: MAX_TIME_LIMIT_S,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_long_settle() {
        let config = GameConfig {
            settle_ms: 5000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SettleTooLong));
    }
}
