//! Screen layout constants

use crate::board::{Position, Square, BOARD_SIZE};
use crate::traits::Color;

/// Screen width in pixels (portrait)
pub const SCREEN_WIDTH: u16 = 240;

/// Screen height in pixels (portrait)
pub const SCREEN_HEIGHT: u16 = 320;

/// Side of one board square in pixels
pub const SQUARE_SIZE: u16 = 30;

/// Radius of a piece
pub const PIECE_RADIUS: u16 = 10;

/// Radius of the inner mark that distinguishes a king
pub const KING_MARK_RADIUS: u16 = 4;

/// Side of the whole board in pixels
pub const BOARD_PIXELS: u16 = SQUARE_SIZE * BOARD_SIZE as u16;

/// First pixel row of the status area
pub const STATUS_Y: u16 = BOARD_PIXELS;

/// Left margin of status text
pub const STATUS_X: u16 = 8;

/// Height of one status line
pub const LINE_HEIGHT: u16 = 24;

/// Font size for status text
pub const STATUS_TEXT_SIZE: u8 = 2;

/// Status line holding the countdown
pub const TIMER_LINE: u16 = 0;

/// Radius of the dot marking the player to move
pub const TURN_MARK_RADIUS: u16 = 6;

/// Horizontal center of the turn marker
pub const TURN_MARK_X: u16 = SCREEN_WIDTH - 20;

/// Character width for a font size
///
/// Size 1 is a 6x10 font, size 2 a 10x20 font.
pub const fn char_width(size: u8) -> u16 {
    match size {
        1 => 6,
        _ => 10,
    }
}

/// Character height for a font size
pub const fn char_height(size: u8) -> u16 {
    match size {
        1 => 10,
        _ => 20,
    }
}

/// Top-left pixel of a board square
pub const fn square_origin(pos: Position) -> (u16, u16) {
    (pos.col as u16 * SQUARE_SIZE, pos.row as u16 * SQUARE_SIZE)
}

/// Center pixel of a board square
pub const fn square_center(pos: Position) -> (u16, u16) {
    let (x, y) = square_origin(pos);
    (x + SQUARE_SIZE / 2, y + SQUARE_SIZE / 2)
}

/// Background color of a board square
pub const fn square_color(pos: Position) -> Color {
    if pos.is_dark() {
        Color::BoardDark
    } else {
        Color::BoardLight
    }
}

/// Body color and optional king mark color for a square's piece
pub const fn piece_colors(square: Square) -> Option<(Color, Option<Color>)> {
    match square {
        Square::Empty => None,
        Square::Player1Man => Some((Color::Player1, None)),
        Square::Player2Man => Some((Color::Player2, None)),
        Square::Player1King => Some((Color::Player1King, Some(Color::Player1))),
        Square::Player2King => Some((Color::Player2King, Some(Color::Player2))),
    }
}

/// Top pixel row of a status line's band
pub const fn status_line_top(line: u16) -> u16 {
    STATUS_Y + line * LINE_HEIGHT
}

/// Top pixel row of the text on a status line
pub const fn status_line_y(line: u16) -> u16 {
    status_line_top(line) + 2
}

/// X coordinate that centers `text` horizontally on the screen
pub fn centered_x(text: &str, size: u8) -> u16 {
    let width = text.len() as u16 * char_width(size);
    SCREEN_WIDTH.saturating_sub(width) / 2
}
