//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides. Red moves first and starts on the high-numbered rows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Both colors in index order (Red=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::Red, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row on which a man of this color is crowned
    #[inline]
    #[must_use]
    pub const fn promotion_row(self, size: usize) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => size - 1,
        }
    }

    /// Row this color defends (its own back row)
    #[inline]
    #[must_use]
    pub const fn back_row(self, size: usize) -> usize {
        match self {
            Color::Red => size - 1,
            Color::Black => 0,
        }
    }

    /// Number of rows a man on `row` has advanced from its back row
    #[inline]
    #[must_use]
    pub(crate) const fn advancement(self, row: usize, size: usize) -> usize {
        match self {
            Color::Red => size - 1 - row,
            Color::Black => row,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece on the board: a man, or a king once crowned.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub king: bool,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Piece { color, king: false }
    }

    #[inline]
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Piece { color, king: true }
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Diagram character: `r`/`b` for men, `R`/`B` for kings
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.color, self.king) {
            (Color::Red, false) => 'r',
            (Color::Red, true) => 'R',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }
}
