//! Per-side counts gathered in one pass and shared by the whole-board terms.

use crate::board::types::{Piece, Square};

/// Counts for one color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideTally {
    pub pieces: usize,
    pub kings: usize,
    /// Pieces still on their own back row
    pub back_row: usize,
    /// Sum of per-piece step counts
    pub mobility: usize,
}

impl SideTally {
    /// Add one piece standing on `sq` with `steps` legal steps.
    pub fn record(&mut self, sq: Square, piece: Piece, steps: usize, size: usize) {
        self.pieces += 1;
        if piece.king {
            self.kings += 1;
        }
        if sq.row() == piece.color.back_row(size) {
            self.back_row += 1;
        }
        self.mobility += steps;
    }
}
