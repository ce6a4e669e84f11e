//! Per-piece move generation.
//!
//! Men and American kings take short steps (one square, or a single jump over
//! an adjacent enemy). Brazilian and International kings fly along diagonals.

mod kings;
mod short;

use super::{Board, Color, Move, Piece, Square};

/// All four diagonal directions as (d_row, d_col)
pub(crate) const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const RED_FORWARD: [(isize, isize); 2] = [(-1, -1), (-1, 1)];
const BLACK_FORWARD: [(isize, isize); 2] = [(1, -1), (1, 1)];

impl Board {
    /// Single-step moves for the piece on `from`.
    ///
    /// With `captures_only` the slides are dropped, and Brazilian and
    /// International men also look backward for jumps. An empty square (or
    /// one off the board) yields no moves.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square, captures_only: bool) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some(piece) = self.piece_at(from) else {
            return moves;
        };

        let flying = self.variant.flying_kings() && piece.king;
        for &(d_row, d_col) in self.directions(piece, captures_only) {
            if flying {
                self.long_moves(from, piece, (d_row, d_col), captures_only, &mut moves);
            } else {
                self.short_moves(from, piece, (d_row, d_col), captures_only, &mut moves);
            }
        }
        moves
    }

    fn directions(&self, piece: Piece, captures_only: bool) -> &'static [(isize, isize)] {
        if piece.king || (captures_only && self.variant.men_capture_backward()) {
            return &DIAGONALS;
        }
        match piece.color {
            Color::Red => &RED_FORWARD,
            Color::Black => &BLACK_FORWARD,
        }
    }

    /// Jumps available to the piece on `from`
    #[inline]
    #[must_use]
    pub fn capture_moves_from(&self, from: Square) -> Vec<Move> {
        self.legal_moves_from(from, true)
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }
}
