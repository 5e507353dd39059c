//! Turn and game controller
//!
//! Owns the board, scores, turn, cursor, and countdown of one game and
//! runs the controller state machine over them.

pub mod controller;
pub mod scores;

pub use controller::{Game, MAX_TRANSITIONS};
pub use scores::{move_points, Scores, CAPTURE_POINTS, PROMOTION_POINTS};
