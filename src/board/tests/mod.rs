//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece step generation for men and both king kinds
//! - `captures.rs` - Mandatory capture, maximum capture and chains
//! - `game.rs` - Selection, move submission, game end, position strings
//! - `perft.rs` - Leaf counts from the opening positions
//! - `search.rs` - Minimax against an unpruned reference, tiers
//! - `proptest.rs` - Property-based tests

mod captures;

use super::{Board, BoardBuilder, Color, Square, Variant};

/// Empty board of `variant` with the given men, `to_move` on move.
pub(super) fn position(
    variant: Variant,
    red: &[Square],
    black: &[Square],
    to_move: Color,
) -> Board {
    BoardBuilder::new(variant)
        .men(Color::Red, red)
        .men(Color::Black, black)
        .side_to_move(to_move)
        .build()
}

/// Plain minimax without pruning, ordering or cache: the yardstick the
/// real search must agree with.
pub(super) fn reference_minimax(board: &Board, depth: u32, root: Color) -> i32 {
    use super::WIN_SCORE;

    if let Some(winner) = board.check_winner() {
        return if winner == root { WIN_SCORE } else { -WIN_SCORE };
    }
    if depth == 0 {
        return board.evaluate_board(root);
    }
    let mover = board.side_to_move();
    let moves = board.legal_moves(mover);
    if moves.is_empty() {
        return if mover == root { -WIN_SCORE } else { WIN_SCORE };
    }
    let scores = moves.iter().map(|mv| {
        let mut child = board.clone();
        child.apply_move(mv);
        reference_minimax(&child, depth - 1, root)
    });
    if mover == root {
        scores.max().unwrap_or(-WIN_SCORE)
    } else {
        scores.min().unwrap_or(WIN_SCORE)
    }
}

/// Best root score for `color` by [`reference_minimax`].
pub(super) fn reference_root(board: &Board, color: Color, depth: u32) -> Option<i32> {
    board
        .legal_moves(color)
        .iter()
        .map(|mv| {
            let mut child = board.clone();
            child.apply_move(mv);
            reference_minimax(&child, depth.saturating_sub(1), color)
        })
        .max()
}
