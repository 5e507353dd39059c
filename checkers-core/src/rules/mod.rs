//! Move rule engine
//!
//! Decides which moves are legal, applies accepted moves to the board,
//! and detects when a capturing piece must keep jumping.
//!
//! Men capture only opposing men; kings capture men and kings. Only
//! single-step and single-jump geometry exists (no flying kings).

use heapless::Vec;

use crate::board::{Board, Player, Position, Square};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Diagonal directions as (row, col) deltas
const DIAGONALS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Kind of a legal move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// One diagonal step
    Step,
    /// Two diagonal steps over an opposing piece
    Jump { captured: Position },
}

impl MoveKind {
    pub fn is_capture(&self) -> bool {
        matches!(self, MoveKind::Jump { .. })
    }
}

/// Result of applying a move to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Applied {
    /// Cell emptied by the capture, if any
    pub captured: Option<Position>,
    /// The moving man became a king
    pub promoted: bool,
}

/// Check if `capturer` may jump over `victim`
fn can_capture(capturer: Square, victim: Square) -> bool {
    let Some(owner) = capturer.owner() else {
        return false;
    };
    if capturer.is_king() {
        victim.is_opponent_of(owner)
    } else {
        victim.is_opponent_of(owner) && victim.is_man()
    }
}

/// Directions a piece may travel in
fn directions(piece: Square) -> impl Iterator<Item = (i8, i8)> {
    let forward = piece.owner().map(Player::forward);
    let king = piece.is_king();
    DIAGONALS
        .into_iter()
        .filter(move |(d_row, _)| king || Some(*d_row) == forward)
}

/// Classify a move, returning `None` if it is illegal
pub fn classify(board: &Board, from: Position, to: Position, mover: Player) -> Option<MoveKind> {
    let piece = board.get(from);
    if !piece.belongs_to(mover) || !board.get(to).is_empty() {
        return None;
    }

    let d_row = from.row_delta(to);
    let d_col = from.col_delta(to);

    let step_ok = if piece.is_king() {
        d_row.abs() == 1
    } else {
        d_row == mover.forward()
    };
    if step_ok && d_col.abs() == 1 {
        return Some(MoveKind::Step);
    }

    let jump_ok = if piece.is_king() {
        d_row.abs() == 2
    } else {
        d_row == 2 * mover.forward()
    };
    if jump_ok && d_col.abs() == 2 {
        let captured = from.midpoint(to);
        if can_capture(piece, board.get(captured)) {
            return Some(MoveKind::Jump { captured });
        }
    }

    None
}

/// Check if moving `mover`'s piece from `from` to `to` is legal
pub fn is_legal(board: &Board, from: Position, to: Position, mover: Player) -> bool {
    classify(board, from, to, mover).is_some()
}

/// Check if the piece at `at` can make another capture
pub fn has_further_capture(board: &Board, at: Position) -> bool {
    let piece = board.get(at);
    directions(piece).any(|(d_row, d_col)| {
        match (at.offset(d_row, d_col), at.offset(2 * d_row, 2 * d_col)) {
            (Some(over), Some(landing)) => {
                can_capture(piece, board.get(over)) && board.get(landing).is_empty()
            }
            _ => false,
        }
    })
}

/// Every legal destination for the piece at `from`
pub fn destinations(board: &Board, from: Position, mover: Player) -> Vec<(Position, MoveKind), 8> {
    let mut out = Vec::new();
    for (d_row, d_col) in DIAGONALS {
        for reach in [1, 2] {
            if let Some(to) = from.offset(reach * d_row, reach * d_col) {
                if let Some(kind) = classify(board, from, to, mover) {
                    // Capacity covers four diagonals at two reaches
                    let _ = out.push((to, kind));
                }
            }
        }
    }
    out
}

/// Check if `player` has at least one legal move anywhere on the board
pub fn has_any_move(board: &Board, player: Player) -> bool {
    board
        .pieces(player)
        .any(|from| !destinations(board, from, player).is_empty())
}

/// Apply a classified move
///
/// Relocates the piece, clears the captured cell, and promotes a man
/// that lands on its promotion row. Kings never promote again.
pub fn apply(board: &mut Board, from: Position, to: Position, kind: MoveKind) -> Applied {
    let piece = board.get(from);
    board.set(from, Square::Empty);

    let captured = match kind {
        MoveKind::Jump { captured } => {
            board.set(captured, Square::Empty);
            Some(captured)
        }
        MoveKind::Step => None,
    };

    let promoted = piece.is_man()
        && piece
            .owner()
            .is_some_and(|owner| to.row == owner.promotion_row());

    board.set(to, if promoted { piece.promoted() } else { piece });

    Applied { captured, promoted }
}
