//! Board-agnostic game engine for the checkers firmware
//!
//! This crate contains all game logic that does not depend on
//! specific hardware implementations:
//!
//! - Board model and starting layout
//! - Move rules (steps, jumps, multi-jump chains, promotion)
//! - Turn controller with scoring and the countdown
//! - Button-to-cursor input mapping with debounce
//! - Renderer and button-source traits plus the screen painter
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod rules;
pub mod state;
pub mod timer;
pub mod traits;

pub use board::{Board, Player, Position, Square, BOARD_SIZE};
pub use config::GameConfig;
pub use game::{Game, Scores};
pub use state::{Event, Outcome, State, Transition};
