//! Per-piece terms: material, centre, advancement, safety, mobility.

use crate::board::movegen::DIAGONALS;
use crate::board::state::Board;
use crate::board::types::{Piece, Square};

use super::tables::{
    ADVANCE_WEIGHT, CENTER_WEIGHT, EDGE_BONUS, KING_VALUE, MAN_VALUE, MOBILITY_WEIGHT,
    NEIGHBOR_BONUS,
};

impl Board {
    /// Unsigned worth to its owner of the piece on `sq`, which has `steps`
    /// legal steps.
    #[must_use]
    pub fn piece_score(&self, sq: Square, piece: Piece, steps: usize) -> i32 {
        let material = if piece.king { KING_VALUE } else { MAN_VALUE };
        let mobility = steps as i32 * MOBILITY_WEIGHT;
        material
            + self.center_bonus(sq)
            + self.advancement_bonus(sq, piece)
            + self.safety_bonus(sq, piece)
            + mobility
    }

    /// Closer to the middle is better
    pub(crate) fn center_bonus(&self, sq: Square) -> i32 {
        (self.size - sq.center_distance(self.size)) as i32 * CENTER_WEIGHT
    }

    /// Men gain value as they near the crowning row
    pub(crate) fn advancement_bonus(&self, sq: Square, piece: Piece) -> i32 {
        if piece.king {
            return 0;
        }
        piece.color.advancement(sq.row(), self.size) as i32 * ADVANCE_WEIGHT
    }

    /// Edge files plus friendly diagonal neighbours
    pub(crate) fn safety_bonus(&self, sq: Square, piece: Piece) -> i32 {
        let mut bonus = 0;
        if sq.col() == 0 || sq.col() == self.size - 1 {
            bonus += EDGE_BONUS;
        }
        let friends = DIAGONALS
            .iter()
            .filter_map(|&(d_row, d_col)| sq.offset(d_row, d_col, 1, self.size))
            .filter(|&n| self.piece_at(n).is_some_and(|p| p.color == piece.color))
            .count();
        bonus + friends as i32 * NEIGHBOR_BONUS
    }
}
