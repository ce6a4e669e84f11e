//! Move ordering for search.

use std::cmp::Reverse;

use super::constants::{
    CAPTURE_SCORE, CENTER_SCORE, CHAIN_PIECE_SCORE, KING_MOVE_SCORE, PROMOTION_SCORE,
};
use crate::board::{Board, Color, Move};

/// Heuristic priority of `mv` for `color`; higher is searched first.
#[must_use]
pub fn order_score(board: &Board, mv: &Move, color: Color) -> i32 {
    let size = board.size();
    let mut score = 0;

    if mv.is_capture() {
        score += CAPTURE_SCORE + i32::from(mv.captures) * CHAIN_PIECE_SCORE;
    }
    if let Some(piece) = board.piece_at(mv.from) {
        if piece.king {
            score += KING_MOVE_SCORE;
        } else if mv.to.row() == color.promotion_row(size) {
            score += PROMOTION_SCORE;
        }
    }
    score += (size - mv.to.center_distance(size)) as i32 * CENTER_SCORE;

    score
}

/// Sort `moves` best-first. Equal scores keep generation order.
pub fn order_moves(board: &Board, moves: &mut [Move], color: Color) {
    moves.sort_by_cached_key(|mv| Reverse(order_score(board, mv, color)));
}
