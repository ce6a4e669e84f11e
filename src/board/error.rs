//! Error types for board operations.

use std::fmt;

use super::Square;

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column past the edge of the board
    OutOfBounds { row: usize, col: usize, size: usize },
    /// Light squares never hold pieces
    LightSquare { row: usize, col: usize },
    /// Square number outside `1..=size*size/2`
    InvalidNumber { number: usize, size: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, col, size } => {
                write!(f, "Square ({row},{col}) is outside a {size}x{size} board")
            }
            SquareError::LightSquare { row, col } => {
                write!(f, "Square ({row},{col}) is not a playable square")
            }
            SquareError::InvalidNumber { number, size } => {
                write!(f, "Square number {number} is not valid on a {size}x{size} board")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for position string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Position string has too few `:`-separated parts (needs 3)
    TooFewParts { found: usize },
    /// Side to move must be 'W' or 'B'
    InvalidSideToMove { found: String },
    /// Piece list must start with 'W' or 'B'
    InvalidColor { found: String },
    /// Square token is not a valid square number
    InvalidSquare { token: String },
    /// Range `a-b` with `a > b` or bad bounds
    InvalidRange { token: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have 3 parts, found {found}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'W' or 'B'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "Invalid piece list '{found}', expected a 'W' or 'B' prefix")
            }
            FenError::InvalidSquare { token } => {
                write!(f, "Invalid square '{token}' in FEN")
            }
            FenError::InvalidRange { token } => {
                write!(f, "Invalid square range '{token}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for rejected move submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece is currently selected
    NoSelection,
    /// Destination is not among the selected piece's pending moves
    IllegalDestination { to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoSelection => write!(f, "No piece selected"),
            MoveError::IllegalDestination { to } => {
                write!(f, "Destination {to} is not a legal move for the selected piece")
            }
        }
    }
}

impl std::error::Error for MoveError {}
