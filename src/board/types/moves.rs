//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A single step: one slide, or one jump over exactly one enemy piece.
///
/// A multi-jump is played as a chain of these, one per call to
/// [`Board::apply_move`](crate::board::Board::apply_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The enemy piece jumped by this step
    pub captured: Option<Square>,
    /// Pieces taken by the longest chain that starts with this step
    /// (1 for a lone jump, 0 for a slide).
    pub captures: u8,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
            captures: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square, captured: Square) -> Self {
        Move {
            from,
            to,
            captured: Some(captured),
            captures: 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Numeric notation: `11-15` for a slide, `11x18` for a jump.
    #[must_use]
    pub fn notation(&self, size: usize) -> String {
        let sep = if self.is_capture() { 'x' } else { '-' };
        match (self.from.number(size), self.to.number(size)) {
            (Some(from), Some(to)) => format!("{from}{sep}{to}"),
            _ => format!("{}{sep}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{sep}{}", self.from, self.to)
    }
}
