use super::super::{Board, Move, Piece, Square};

impl Board {
    /// Flying-king scan along `dir`.
    ///
    /// Empty squares before the first piece are slides. The first enemy met
    /// becomes the victim for every empty landing square beyond it, until a
    /// second piece closes the line. A friendly piece closes it at once.
    pub(super) fn long_moves(
        &self,
        from: Square,
        piece: Piece,
        (d_row, d_col): (isize, isize),
        captures_only: bool,
        moves: &mut Vec<Move>,
    ) {
        let mut victim: Option<Square> = None;
        let mut dist = 1;

        while let Some(sq) = from.offset(d_row, d_col, dist, self.size) {
            match (self.piece_at(sq), victim) {
                (Some(other), _) if other.color == piece.color => break,
                (Some(_), None) => victim = Some(sq),
                (Some(_), Some(_)) => break,
                (None, Some(over)) => moves.push(Move::capture(from, sq, over)),
                (None, None) => {
                    if !captures_only {
                        moves.push(Move::quiet(from, sq));
                    }
                }
            }
            dist += 1;
        }
    }
}
