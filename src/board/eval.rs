//! Position and move evaluation.

use super::eval_terms::{structure_score, SideTally};
use super::eval_terms::tables::{
    MOVE_ADVANCE_WEIGHT, MOVE_CAPTURE_BONUS, MOVE_EDGE_PENALTY, MOVE_KING_BONUS,
    MOVE_PROMOTION_BONUS,
};
use super::{Board, Color, Move};

impl Board {
    /// Static score of the position from `perspective`'s point of view.
    ///
    /// Sums signed per-piece worth, then adds the whole-board terms. Terminal
    /// positions are scored by the search, not here.
    #[must_use]
    pub fn evaluate_board(&self, perspective: Color) -> i32 {
        let mut score = 0;
        let mut tallies = [SideTally::default(); 2];
        for (sq, piece) in self.pieces() {
            let steps = self.legal_moves_from(sq, false).len();
            tallies[piece.color.index()].record(sq, piece, steps, self.size);

            let worth = self.piece_score(sq, piece, steps);
            if piece.color == perspective {
                score += worth;
            } else {
                score -= worth;
            }
        }

        let own = &tallies[perspective.index()];
        let opp = &tallies[perspective.opponent().index()];
        score + structure_score(own, opp)
    }

    /// Cheap one-move heuristic used by the greedy tier.
    ///
    /// `mv` must start on a piece of `color`.
    #[must_use]
    pub fn evaluate_move(&self, mv: &Move, color: Color) -> i32 {
        let Some(piece) = self.piece_at(mv.from) else {
            return 0;
        };
        let mut score = 0;

        if mv.is_capture() {
            score += MOVE_CAPTURE_BONUS;
        }
        if piece.king {
            score += MOVE_KING_BONUS;
        }

        let advance = match color {
            Color::Red => self.size - mv.to.row(),
            Color::Black => mv.to.row(),
        };
        score += advance as i32 * MOVE_ADVANCE_WEIGHT;

        if !piece.king {
            if mv.to.row() == color.promotion_row(self.size) {
                score += MOVE_PROMOTION_BONUS;
            }
            if mv.to.col() == 0 || mv.to.col() == self.size - 1 {
                score -= MOVE_EDGE_PENALTY;
            }
        }

        score
    }
}
