//! Evaluation terms.
//!
//! Contains evaluation functions for:
//! - Material, centre control, advancement, safety and mobility per piece
//! - Piece, king, back-row and mobility differentials
//! - Decisive material dominance and fragile endgames

mod helpers;
mod positional;
mod structure;
pub mod tables;

pub use helpers::SideTally;
pub use structure::structure_score;
