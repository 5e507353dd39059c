//! Embassy async tasks
//!
//! The tick task paces the game task through a signal.

pub mod game;
pub mod tick;

pub use game::game_task;
pub use tick::tick_task;
