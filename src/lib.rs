//! Draughts rules engine with a minimax opponent.
//!
//! Logging goes through the `log` facade when the `logging` feature is on;
//! the application picks the logger.

#[cfg(feature = "logging")]
macro_rules! search_log {
    ($lvl:ident, $($arg:tt)*) => {
        log::$lvl!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! search_log {
    ($lvl:ident, $($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

pub mod board;
pub mod tt;
mod zobrist;

pub use board::{Board, Color, Difficulty, Move, Piece, Square, Variant};
pub use tt::TranspositionTable;
