//! Fluent builder for constructing draughts positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use draughts_engine::board::{BoardBuilder, Color, Piece, Square, Variant};
//!
//! let board = BoardBuilder::new(Variant::Brazilian)
//!     .piece(Square(1, 2), Piece::man(Color::Black))
//!     .piece(Square(2, 3), Piece::man(Color::Red))
//!     .side_to_move(Color::Black)
//!     .build();
//! assert_eq!(board.legal_moves(Color::Black).len(), 1);
//! ```

use super::{Board, Color, Piece, Square, Variant};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    variant: Variant,
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        BoardBuilder {
            variant,
            pieces: Vec::new(),
            side_to_move: Color::Red,
        }
    }

    /// Create a builder starting from the opening position.
    #[must_use]
    pub fn starting_position(variant: Variant) -> Self {
        let mut builder = Self::new(variant);
        builder.pieces = Board::new(variant).pieces().collect();
        builder
    }

    /// Place a piece. Later placements on the same square win; off-board and
    /// light squares are ignored at build time.
    #[must_use]
    pub fn piece(mut self, sq: Square, piece: Piece) -> Self {
        self.pieces.push((sq, piece));
        self
    }

    /// Place several men of one color.
    #[must_use]
    pub fn men(mut self, color: Color, squares: &[Square]) -> Self {
        self.pieces
            .extend(squares.iter().map(|&sq| (sq, Piece::man(color))));
        self
    }

    /// Place several kings of one color.
    #[must_use]
    pub fn kings(mut self, color: Color, squares: &[Square]) -> Self {
        self.pieces
            .extend(squares.iter().map(|&sq| (sq, Piece::king(color))));
        self
    }

    /// Empty a square.
    #[must_use]
    pub fn clear(mut self, sq: Square) -> Self {
        self.pieces.retain(|&(placed, _)| placed != sq);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty(self.variant);
        for (sq, piece) in self.pieces {
            board.set_piece(sq, piece);
        }
        board.set_side_to_move(self.side_to_move);
        board
    }
}
