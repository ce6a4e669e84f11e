use std::fmt;

use super::{Board, Square};

impl fmt::Display for Board {
    /// ASCII diagram with row indices on the left, Black's back row on top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            write!(f, "{row:>2} ")?;
            for col in 0..self.size {
                let sq = Square(row, col);
                let ch = match self.piece_at(sq) {
                    Some(piece) => piece.to_char(),
                    None if sq.is_playable() => '.',
                    None => ' ',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        write!(f, "{} to move ({})", self.turn, self.variant)
    }
}
