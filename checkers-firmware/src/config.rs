//! Game configuration
//!
//! Values come from game.toml, checked by the build script and turned
//! into constants. They are validated again at boot.

use checkers_core::GameConfig;
use defmt::*;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/game_config.rs"));
}

/// Configuration compiled into the firmware
pub fn load() -> GameConfig {
    let config = GameConfig {
        time_limit_s: generated::TIME_LIMIT_S,
        settle_ms: generated::SETTLE_MS,
        first_player: generated::FIRST_PLAYER,
    };

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            error!("Invalid game configuration: {:?}, using defaults", e);
            GameConfig::default()
        }
    }
}
