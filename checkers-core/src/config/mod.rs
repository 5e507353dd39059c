//! Configuration
//!
//! Game settings are fixed at build time. The firmware validates them
//! again at boot and falls back to the defaults if they are rejected.

pub mod types;

pub use types::{
    ConfigError, GameConfig, DEFAULT_SETTLE_MS, DEFAULT_TIME_LIMIT_S, MAX_SETTLE_MS,
    MAX_TIME_LIMIT_S,
};
