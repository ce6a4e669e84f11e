//! Zobrist hashing for draughts positions.
//!
//! Provides incrementally-updatable 64-bit position keys for the transposition table.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece, Square, MAX_CELLS as CELLS};

pub(crate) struct ZobristKeys {
    // piece_keys[color][king][cell]
    pub(crate) piece_keys: [[[u64; CELLS]; 2]; 2],
    pub(crate) black_to_move_key: u64,
    // chain_keys[cell] : square of a piece that must keep capturing
    pub(crate) chain_keys: [u64; CELLS],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut piece_keys = [[[0; CELLS]; 2]; 2];
        let mut chain_keys = [0; CELLS];

        for color in &mut piece_keys {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for key in &mut chain_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            chain_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
pub(crate) fn piece_key(piece: Piece, sq: Square) -> u64 {
    ZOBRIST.piece_keys[piece.color.index()][usize::from(piece.king)][sq.cell()]
}

#[inline]
pub(crate) fn side_key(color: Color) -> u64 {
    match color {
        Color::Red => 0,
        Color::Black => ZOBRIST.black_to_move_key,
    }
}

#[inline]
pub(crate) fn chain_key(sq: Square) -> u64 {
    ZOBRIST.chain_keys[sq.cell()]
}
