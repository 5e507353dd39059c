//! Hardware abstraction traits
//!
//! These traits define the interface between the game logic
//! and hardware-specific implementations.

pub mod buttons;
pub mod renderer;

pub use buttons::{ButtonSource, ButtonState};
pub use renderer::{Color, RenderError, Renderer};
