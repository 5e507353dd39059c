//! Screen rendering
//!
//! Builds the game screen out of [`Renderer`](crate::traits::Renderer)
//! primitives.
//!
//! The display is a 240x320 portrait TFT. The board fills the top
//! 240x240 pixels; the status area below it shows the countdown and
//! both scores.

pub mod layout;
pub mod painter;

#[cfg(test)]
pub(crate) mod testing;

pub use layout::*;
pub use painter::{
    draw_board, draw_game_over, draw_scores, draw_square, draw_status, draw_timer,
};
