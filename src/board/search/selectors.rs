//! Move selectors, one per difficulty tier.

use rand::seq::SliceRandom;

use super::constants::GREEDY_TOP_N;
use super::{search, SearchParams, SearchState};
use crate::board::{Board, Color, Move};

/// Something that can propose a move for `color`.
///
/// Returns `None` only when `color` has no legal move.
pub trait MoveSelector {
    fn select_move(&self, board: &Board, color: Color, state: &mut SearchState) -> Option<Move>;
}

/// Any legal move, uniformly at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSelector;

impl MoveSelector for RandomSelector {
    fn select_move(&self, board: &Board, color: Color, state: &mut SearchState) -> Option<Move> {
        board.legal_moves(color).choose(&mut state.rng).copied()
    }
}

/// A random capture if there is one; otherwise a random pick among the
/// best few moves by [`Board::evaluate_move`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select_move(&self, board: &Board, color: Color, state: &mut SearchState) -> Option<Move> {
        let moves = board.legal_moves(color);

        let captures: Vec<Move> = moves.iter().copied().filter(Move::is_capture).collect();
        if !captures.is_empty() {
            return captures.choose(&mut state.rng).copied();
        }

        let mut scored: Vec<(i32, Move)> = moves
            .iter()
            .map(|mv| (board.evaluate_move(mv, color), *mv))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(GREEDY_TOP_N);
        scored.choose(&mut state.rng).map(|&(_, mv)| mv)
    }
}

/// Fixed-depth alpha-beta search.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimaxSelector {
    pub params: SearchParams,
}

impl MinimaxSelector {
    #[must_use]
    pub const fn new(params: SearchParams) -> Self {
        MinimaxSelector { params }
    }
}

impl MoveSelector for MinimaxSelector {
    fn select_move(&self, board: &Board, color: Color, state: &mut SearchState) -> Option<Move> {
        search(board, color, &self.params, state).map(|result| result.best_move)
    }
}
