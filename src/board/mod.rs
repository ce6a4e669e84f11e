//! Draughts board representation and game logic.
//!
//! One `Board` type covers the American, Brazilian and International rule
//! sets. Moves are single steps; a multi-capture is a chain of jumps during
//! which the same side stays on move.
//!
//! # Example
//! ```
//! use draughts_engine::board::{Board, Color, Variant};
//!
//! let board = Board::new(Variant::American);
//! let moves = board.legal_moves(Color::Red);
//! assert_eq!(moves.len(), 7);
//! ```

mod builder;
mod captures;
mod display;
mod error;
mod eval;
mod eval_terms;
mod fen;
mod game;
mod make_move;
mod movegen;
mod perft;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use captures::CaptureGroup;
pub use error::{FenError, MoveError, SquareError};
pub use game::new_game;
pub use make_move::MoveOutcome;
pub use state::Board;
pub use types::{Color, Move, Piece, Square, Variant, MAX_SIZE};

// Public API - computer opponent
pub use search::{
    find_best_move, get_best_move, search, Difficulty, GreedySelector, MinimaxSelector,
    MoveSelector, RandomSelector, SearchResult, SearchState, DEFAULT_TT_MB,
};

// Search internals for callers who want fine-grained control
pub use search::{
    order_moves, order_score, SearchParams, SearchStats, EXPERT_DEPTH, HARD_DEPTH, WIN_SCORE,
};

pub(crate) use types::MAX_CELLS;
