//! Game controller
//!
//! A [`Game`] is driven once per loop iteration through [`Game::step`].
//! Every change to the board or status area is pushed to the renderer
//! as it happens. The screen is only repainted in full by
//! [`Game::start`], or on the next step after a draw failed.

use heapless::Vec;

use super::scores::{move_points, Scores};
use crate::board::{Board, Player, Position};
use crate::config::GameConfig;
use crate::input::{Direction, InputFrame};
use crate::render::{draw_board, draw_game_over, draw_scores, draw_square, draw_status, draw_timer};
use crate::rules;
use crate::state::{Event, MoveRecord, Outcome, State, Transition};
use crate::timer::Countdown;
use crate::traits::{RenderError, Renderer};

/// Most transitions a single step can produce
///
/// One cursor move, one select, and the end of the game.
pub const MAX_TRANSITIONS: usize = 4;

/// One game of checkers
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    scores: Scores,
    turn: Player,
    state: State,
    cursor: Position,
    countdown: Countdown,
    /// Seconds currently shown on the timer line
    shown_remaining_s: u32,
    /// A draw failed, the screen is out of date
    needs_repaint: bool,
}

impl Game {
    /// Start a game from the standard layout at `now_ms`
    pub fn new(config: &GameConfig, now_ms: u32) -> Self {
        Self::with_board(Board::initial_layout(), config.first_player, config, now_ms)
    }

    /// Start a game from an arbitrary position
    pub fn with_board(board: Board, turn: Player, config: &GameConfig, now_ms: u32) -> Self {
        let countdown = Countdown::start(now_ms, config.time_limit_s);
        Self {
            board,
            scores: Scores::default(),
            turn,
            state: State::NoSelection,
            cursor: Position::new(0, 0),
            countdown,
            shown_remaining_s: countdown.budget_s(),
            needs_repaint: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Player to move
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Check if the game has ended
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Seconds left on the clock at `now_ms`
    pub fn remaining_s(&self, now_ms: u32) -> u32 {
        self.countdown.remaining_s(now_ms)
    }

    /// Draw the whole screen
    pub fn start<R: Renderer>(&mut self, now_ms: u32, r: &mut R) -> Result<(), RenderError> {
        self.repaint(now_ms, r)
    }

    /// Run one loop iteration
    ///
    /// The countdown is checked before any input. A direction is handled
    /// before select. After input, the game ends if the player to move
    /// has nothing left to play, and the timer line is refreshed when
    /// the displayed second changes.
    ///
    /// A failed draw does not abort the frame: every event is still
    /// applied, the first error is returned, and the next step repaints
    /// the whole screen.
    pub fn step<R: Renderer>(
        &mut self,
        now_ms: u32,
        frame: InputFrame,
        r: &mut R,
    ) -> Result<Vec<Transition, MAX_TRANSITIONS>, RenderError> {
        let mut out = Vec::new();
        let mut result = if self.needs_repaint {
            self.repaint(now_ms, r)
        } else {
            Ok(())
        };
        if self.state.is_terminal() {
            return result.map(|()| out);
        }

        if self.countdown.is_expired(now_ms) {
            result = result.and(self.dispatch(Event::TimeExpired, r, &mut out));
            return result.map(|()| out);
        }

        if let Some(direction) = frame.direction {
            result = result.and(self.dispatch(Event::Move(direction), r, &mut out));
        }
        if frame.select {
            result = result.and(self.dispatch(Event::Select, r, &mut out));
        }

        if self.state == State::NoSelection && !rules::has_any_move(&self.board, self.turn) {
            let finished = self.finish(Outcome::by_score(&self.scores), r);
            result = result.and(self.mark(finished).map(|t| {
                let _ = out.push(t);
            }));
            return result.map(|()| out);
        }

        let remaining = self.countdown.remaining_s(now_ms);
        if remaining != self.shown_remaining_s {
            self.shown_remaining_s = remaining;
            let drawn = draw_timer(r, remaining);
            result = result.and(self.mark(drawn));
        }

        result.map(|()| out)
    }

    /// Process a single event
    ///
    /// The event takes effect even when drawing it fails.
    pub fn handle<R: Renderer>(&mut self, event: Event, r: &mut R) -> Result<Transition, RenderError> {
        let handled = match (self.state, event) {
            (State::GameOver(_), _) => Ok(Transition::Rejected),
            (_, Event::TimeExpired) => self.finish(Outcome::by_score(&self.scores), r),
            (_, Event::Move(direction)) => self.move_cursor(direction, r),
            (State::NoSelection, Event::Select) => self.select(r),
            (State::PieceSelected { at, .. }, Event::Select) => self.attempt_move(at, r),
        };
        self.mark(handled)
    }

    fn dispatch<R: Renderer>(
        &mut self,
        event: Event,
        r: &mut R,
        out: &mut Vec<Transition, MAX_TRANSITIONS>,
    ) -> Result<(), RenderError> {
        let transition = self.handle(event, r)?;
        let _ = out.push(transition);
        Ok(())
    }

    /// Schedule a full repaint if `result` is a draw failure
    fn mark<T>(&mut self, result: Result<T, RenderError>) -> Result<T, RenderError> {
        if result.is_err() {
            self.needs_repaint = true;
        }
        result
    }

    fn repaint<R: Renderer>(&mut self, now_ms: u32, r: &mut R) -> Result<(), RenderError> {
        self.needs_repaint = false;
        let painted = if let State::GameOver(outcome) = self.state {
            draw_game_over(r, outcome, &self.scores)
        } else {
            self.shown_remaining_s = self.countdown.remaining_s(now_ms);
            draw_board(r, &self.board, self.cursor, self.state.selection())
                .and_then(|()| draw_status(r, self.shown_remaining_s, &self.scores, self.turn))
        };
        self.mark(painted)
    }

    fn move_cursor<R: Renderer>(
        &mut self,
        direction: Direction,
        r: &mut R,
    ) -> Result<Transition, RenderError> {
        let old = self.cursor;
        let (d_row, d_col) = direction.delta();
        self.cursor = old.wrapping_offset(d_row, d_col);

        self.redraw(old, r)?;
        self.redraw(self.cursor, r)?;
        Ok(Transition::CursorMoved(self.cursor))
    }

    fn select<R: Renderer>(&mut self, r: &mut R) -> Result<Transition, RenderError> {
        let at = self.cursor;
        if !self.board.get(at).belongs_to(self.turn) {
            return Ok(Transition::Rejected);
        }

        self.state = State::PieceSelected { at, chained: false };
        self.redraw(at, r)?;
        Ok(Transition::Selected(at))
    }

    /// Try to move the selected piece to the cursor cell
    ///
    /// Mid-chain only a further jump is accepted. An illegal target is
    /// rejected and the selection stays.
    fn attempt_move<R: Renderer>(&mut self, from: Position, r: &mut R) -> Result<Transition, RenderError> {
        let to = self.cursor;
        let kind = match rules::classify(&self.board, from, to, self.turn) {
            Some(kind) if !self.state.in_chain() || kind.is_capture() => kind,
            _ => return Ok(Transition::Rejected),
        };

        let applied = rules::apply(&mut self.board, from, to, kind);
        let points = move_points(applied.captured.is_some(), applied.promoted);
        self.scores.award(self.turn, points);

        let record = MoveRecord {
            player: self.turn,
            from,
            to,
            captured: applied.captured,
            promoted: applied.promoted,
            points,
        };

        let transition = if kind.is_capture() && rules::has_further_capture(&self.board, to) {
            self.state = State::PieceSelected {
                at: to,
                chained: true,
            };
            Transition::ChainContinues(record)
        } else {
            self.state = State::NoSelection;
            self.turn = self.turn.opponent();
            Transition::TurnComplete(record)
        };

        self.redraw(from, r)?;
        self.redraw(to, r)?;
        if let Some(captured) = applied.captured {
            self.redraw(captured, r)?;
        }
        draw_scores(r, &self.scores, self.turn)?;

        Ok(transition)
    }

    fn finish<R: Renderer>(&mut self, outcome: Outcome, r: &mut R) -> Result<Transition, RenderError> {
        self.state = State::GameOver(outcome);
        draw_game_over(r, outcome, &self.scores)?;
        Ok(Transition::GameOver(outcome))
    }

    fn redraw<R: Renderer>(&self, pos: Position, r: &mut R) -> Result<(), RenderError> {
        draw_square(r, &self.board, pos, self.cursor, self.state.selection())
    }
}
