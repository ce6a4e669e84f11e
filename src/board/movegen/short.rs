use super::super::{Board, Move, Piece, Square};

impl Board {
    /// One-square slide and one-square jump along `dir`.
    pub(super) fn short_moves(
        &self,
        from: Square,
        piece: Piece,
        (d_row, d_col): (isize, isize),
        captures_only: bool,
        moves: &mut Vec<Move>,
    ) {
        if !captures_only {
            if let Some(to) = from.offset(d_row, d_col, 1, self.size) {
                if self.is_empty(to) {
                    moves.push(Move::quiet(from, to));
                }
            }
        }

        let (Some(over), Some(to)) = (
            from.offset(d_row, d_col, 1, self.size),
            from.offset(d_row, d_col, 2, self.size),
        ) else {
            return;
        };
        let jumps_enemy = self
            .piece_at(over)
            .is_some_and(|victim| victim.color != piece.color);
        if jumps_enemy && self.is_empty(to) {
            moves.push(Move::capture(from, to, over));
        }
    }
}
