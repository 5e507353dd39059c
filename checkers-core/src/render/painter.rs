//! Drawing routines for the board, status area, and final screen

use core::fmt::Write;

use heapless::String;

use super::layout::*;
use crate::board::{Board, Player, Position};
use crate::game::Scores;
use crate::state::Outcome;
use crate::timer::format_clock;
use crate::traits::{Color, RenderError, Renderer};

/// Color used for a player's status elements
const fn player_color(player: Player) -> Color {
    match player {
        Player::Player1 => Color::Player1,
        Player::Player2 => Color::Player2,
    }
}

/// Status line of a player's score
const fn score_line(player: Player) -> u16 {
    match player {
        Player::Player1 => TIMER_LINE + 1,
        Player::Player2 => TIMER_LINE + 2,
    }
}

/// Blank one status line
fn clear_line<R: Renderer>(r: &mut R, line: u16) -> Result<(), RenderError> {
    r.fill_rect(
        0,
        status_line_top(line),
        SCREEN_WIDTH,
        LINE_HEIGHT,
        Color::Background,
    )
}

/// Draw one board square with its piece and highlights
///
/// The selection border sits one pixel inside the cursor border so both
/// stay visible when they coincide.
pub fn draw_square<R: Renderer>(
    r: &mut R,
    board: &Board,
    pos: Position,
    cursor: Position,
    selection: Option<Position>,
) -> Result<(), RenderError> {
    let (x, y) = square_origin(pos);
    r.fill_rect(x, y, SQUARE_SIZE, SQUARE_SIZE, square_color(pos))?;

    if let Some((body, mark)) = piece_colors(board.get(pos)) {
        let (cx, cy) = square_center(pos);
        r.fill_circle(cx, cy, PIECE_RADIUS, body)?;
        if let Some(mark) = mark {
            r.fill_circle(cx, cy, KING_MARK_RADIUS, mark)?;
        }
    }

    if selection == Some(pos) {
        r.draw_rect(x + 1, y + 1, SQUARE_SIZE - 2, SQUARE_SIZE - 2, Color::Selection)?;
    }
    if cursor == pos {
        r.draw_rect(x, y, SQUARE_SIZE, SQUARE_SIZE, Color::Cursor)?;
    }

    Ok(())
}

/// Draw every square of the board
pub fn draw_board<R: Renderer>(
    r: &mut R,
    board: &Board,
    cursor: Position,
    selection: Option<Position>,
) -> Result<(), RenderError> {
    for (pos, _) in board.iter() {
        draw_square(r, board, pos, cursor, selection)?;
    }
    Ok(())
}

/// Draw the countdown line
pub fn draw_timer<R: Renderer>(r: &mut R, remaining_s: u32) -> Result<(), RenderError> {
    clear_line(r, TIMER_LINE)?;

    let mut text: String<16> = String::new();
    let _ = text.push_str("Time ");
    let _ = text.push_str(&format_clock(remaining_s));

    r.draw_text(
        STATUS_X,
        status_line_y(TIMER_LINE),
        &text,
        Color::Text,
        STATUS_TEXT_SIZE,
    )
}

/// Draw both score lines and the turn marker
pub fn draw_scores<R: Renderer>(
    r: &mut R,
    scores: &Scores,
    turn: Player,
) -> Result<(), RenderError> {
    for player in [Player::Player1, Player::Player2] {
        let line = score_line(player);
        clear_line(r, line)?;

        let mut text: String<16> = String::new();
        let _ = write!(text, "{}: {}", player.label(), scores.get(player));
        let y = status_line_y(line);
        r.draw_text(STATUS_X, y, &text, player_color(player), STATUS_TEXT_SIZE)?;

        if player == turn {
            r.fill_circle(
                TURN_MARK_X,
                y + char_height(STATUS_TEXT_SIZE) / 2,
                TURN_MARK_RADIUS,
                player_color(player),
            )?;
        }
    }
    Ok(())
}

/// Draw the whole status area
pub fn draw_status<R: Renderer>(
    r: &mut R,
    remaining_s: u32,
    scores: &Scores,
    turn: Player,
) -> Result<(), RenderError> {
    draw_timer(r, remaining_s)?;
    draw_scores(r, scores, turn)
}

/// Replace the screen with the final result
pub fn draw_game_over<R: Renderer>(
    r: &mut R,
    outcome: Outcome,
    scores: &Scores,
) -> Result<(), RenderError> {
    r.clear_screen(Color::Background)?;

    let title = "GAME OVER";
    r.draw_text(centered_x(title, 2), 100, title, Color::Text, 2)?;

    let headline = outcome.headline();
    let color = match outcome {
        Outcome::Winner(player) => player_color(player),
        Outcome::Draw => Color::Text,
    };
    r.draw_text(centered_x(headline, 2), 140, headline, color, 2)?;

    let mut text: String<24> = String::new();
    let _ = write!(
        text,
        "P1 {} - P2 {}",
        scores.get(Player::Player1),
        scores.get(Player::Player2)
    );
    r.draw_text(centered_x(&text, 2), 180, &text, Color::Text, 2)
}
