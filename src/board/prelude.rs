//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use draughts_engine::board::prelude::*;
//!
//! let board = new_game(Variant::International);
//! assert!(board.check_winner().is_none());
//! ```

pub use super::{
    find_best_move, new_game, Board, BoardBuilder, Color, Difficulty, FenError, Move, MoveError,
    MoveOutcome, Piece, SearchState, Square, SquareError, Variant,
};
