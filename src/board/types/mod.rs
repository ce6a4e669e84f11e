//! Core draughts types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `Piece` and `Color` - men, kings and the two sides
//! - `Square` - (row, col) board coordinates and square numbering
//! - `Move` - a single slide or jump
//! - `Variant` - the American, Brazilian and International rule sets

mod moves;
mod piece;
mod square;
mod variant;

pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::{Square, MAX_SIZE};
pub use variant::Variant;

pub(crate) use square::MAX_CELLS;
