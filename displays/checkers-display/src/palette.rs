//! RGB565 palette for the semantic screen colors

use checkers_core::traits::Color;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;

/// Raw RGB565 value of a semantic color
pub const fn raw_color(color: Color) -> u16 {
    match color {
        Color::Background => 0x0000,
        Color::BoardDark => 0x8410,
        Color::BoardLight => 0xFFFF,
        Color::Player1 => 0xF800,
        Color::Player2 => 0x001F,
        Color::Player1King => 0xFD20,
        Color::Player2King => 0x07FF,
        Color::Cursor => 0xFFE0,
        Color::Selection => 0x07E0,
        Color::Text => 0xFFFF,
    }
}

/// Convert a semantic color to a pixel color
pub fn rgb565(color: Color) -> Rgb565 {
    Rgb565::from(RawU16::new(raw_color(color)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::RgbColor;

    #[test]
    fn test_primary_colors() {
        assert_eq!(rgb565(Color::Player1), Rgb565::RED);
        assert_eq!(rgb565(Color::Player2), Rgb565::BLUE);
        assert_eq!(rgb565(Color::Background), Rgb565::BLACK);
        assert_eq!(rgb565(Color::Text), Rgb565::WHITE);
        assert_eq!(rgb565(Color::Cursor), Rgb565::YELLOW);
        assert_eq!(rgb565(Color::Selection), Rgb565::GREEN);
        assert_eq!(rgb565(Color::Player2King), Rgb565::CYAN);
    }

    #[test]
    fn test_board_squares_differ() {
        assert_ne!(raw_color(Color::BoardDark), raw_color(Color::BoardLight));
    }

    #[test]
    fn test_pieces_visible_on_dark_squares() {
        for piece in [
            Color::Player1,
            Color::Player2,
            Color::Player1King,
            Color::Player2King,
        ] {
            assert_ne!(raw_color(piece), raw_color(Color::BoardDark));
        }
    }
}
