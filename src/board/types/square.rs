//! Square types and utilities.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Widest supported board (International).
pub const MAX_SIZE: usize = 10;

/// Number of cells in the widest supported board.
pub(crate) const MAX_CELLS: usize = MAX_SIZE * MAX_SIZE;

/// A square on the board, represented as (row, col).
///
/// Row 0 is Black's back row; Red's back row is `size - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a playable square with bounds checking
    pub fn new(row: usize, col: usize, size: usize) -> Result<Self, SquareError> {
        if row >= size || col >= size {
            return Err(SquareError::OutOfBounds { row, col, size });
        }
        if (row + col) % 2 == 0 {
            return Err(SquareError::LightSquare { row, col });
        }
        Ok(Square(row, col))
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Dark squares are the only ones pieces stand on
    #[inline]
    #[must_use]
    pub const fn is_playable(self) -> bool {
        (self.0 + self.1) % 2 == 1
    }

    /// Step `dist` squares along `(d_row, d_col)`, staying on a `size` board
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, dist: isize, size: usize) -> Option<Square> {
        let row = self.0 as isize + d_row * dist;
        let col = self.1 as isize + d_col * dist;
        let limit = size as isize;
        if (0..limit).contains(&row) && (0..limit).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Fixed-width cell index used for hashing, independent of board size
    #[inline]
    #[must_use]
    pub(crate) const fn cell(self) -> usize {
        self.0 * MAX_SIZE + self.1
    }

    /// Manhattan distance to the board centre (`size / 2`, `size / 2`)
    #[inline]
    #[must_use]
    pub(crate) fn center_distance(self, size: usize) -> usize {
        let center = size / 2;
        self.0.abs_diff(center) + self.1.abs_diff(center)
    }

    /// Standard 1-based playable-square number, counted row by row from row 0.
    #[must_use]
    pub fn number(self, size: usize) -> Option<usize> {
        if self.0 >= size || self.1 >= size || !self.is_playable() {
            return None;
        }
        Some(self.0 * (size / 2) + self.1 / 2 + 1)
    }

    /// Inverse of [`Square::number`].
    pub fn from_number(number: usize, size: usize) -> Result<Self, SquareError> {
        let per_row = size / 2;
        if number == 0 || number > per_row * size {
            return Err(SquareError::InvalidNumber { number, size });
        }
        let idx = number - 1;
        let row = idx / per_row;
        let col = (idx % per_row) * 2 + if row % 2 == 0 { 1 } else { 0 };
        Ok(Square(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    /// Checks against the widest board; callers holding a board should prefer
    /// [`Square::new`] with its size.
    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col, MAX_SIZE)
    }
}
