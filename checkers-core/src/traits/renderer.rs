//! Renderer trait for the game screen
//!
//! The core never touches pixels itself. It describes what to draw in
//! screen coordinates and semantic colors, and a display crate maps
//! those onto real hardware.

/// Errors that can occur while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Communication with the display failed
    Communication,
    /// Coordinates outside the drawable area
    OutOfBounds,
}

/// Semantic colors used by the game screen
///
/// The display backend owns the palette that maps these to pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Screen background and status area
    Background,
    /// Dark (playable) board squares
    BoardDark,
    /// Light board squares
    BoardLight,
    Player1,
    Player2,
    Player1King,
    Player2King,
    /// Border around the square under the cursor
    Cursor,
    /// Border around the selected piece
    Selection,
    /// Status text
    Text,
}

/// Drawing primitives consumed by the game core
///
/// Coordinates are in pixels with the origin at the top-left corner.
pub trait Renderer {
    /// Fill the whole screen with one color
    fn clear_screen(&mut self, color: Color) -> Result<(), RenderError>;

    /// Fill a rectangle
    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color)
        -> Result<(), RenderError>;

    /// Draw a 1-pixel rectangle outline
    fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color)
        -> Result<(), RenderError>;

    /// Fill a circle centered on `(cx, cy)`
    fn fill_circle(&mut self, cx: u16, cy: u16, radius: u16, color: Color)
        -> Result<(), RenderError>;

    /// Print text with its top-left corner at `(x, y)`
    ///
    /// - `size`: 1 for the small font, 2 for the large font
    fn draw_text(&mut self, x: u16, y: u16, text: &str, color: Color, size: u8)
        -> Result<(), RenderError>;
}
