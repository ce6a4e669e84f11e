//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Every explored step gets its own cloned board, so siblings never see
//! each other's changes. A node whose step leaves a capture chain open is
//! searched with the same side to move again; otherwise the side flips.

use rand::seq::SliceRandom;

use crate::tt::BoundType;

use super::constants::{INFINITY, WIN_SCORE};
use super::move_order::order_moves;
use super::{SearchParams, SearchResult, SearchState};
use crate::board::{Board, Color, Move};

/// Search context for a single top-level search
pub(crate) struct MinimaxContext<'a> {
    pub state: &'a mut SearchState,
    pub params: SearchParams,
    /// The side the search is choosing a move for
    pub root: Color,
}

impl MinimaxContext<'_> {
    /// Score every root move and keep the first one with the highest score.
    pub fn search_root(&mut self, board: &Board) -> Option<SearchResult> {
        let mut moves = board.legal_moves(self.root);
        if moves.is_empty() {
            return None;
        }
        if self.params.move_ordering {
            order_moves(board, &mut moves, self.root);
        }

        let child_depth = self.params.depth.saturating_sub(1);
        let mut best_move: Option<Move> = None;
        let mut best_score = -INFINITY;

        for mv in &moves {
            let mut child = board.clone();
            child.apply_move(mv);
            // Later moves only matter if they beat the best so far
            let score = self.minimax(&child, child_depth, best_score, INFINITY);
            if score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
        }

        let best_move = match best_move {
            Some(mv) => mv,
            None => *moves.choose(&mut self.state.rng)?,
        };
        Some(SearchResult {
            best_move,
            score: best_score,
        })
    }

    /// Minimax value of `board` from the root side's point of view.
    ///
    /// Fail-soft: a returned score `<= alpha` is an upper bound and one
    /// `>= beta` a lower bound; anything in between is exact.
    pub fn minimax(&mut self, board: &Board, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.state.stats.nodes += 1;

        if let Some(winner) = board.check_winner() {
            return if winner == self.root { WIN_SCORE } else { -WIN_SCORE };
        }
        if depth == 0 {
            return board.evaluate_board(self.root);
        }

        let key = board.hash();
        if self.params.use_cache {
            if let Some(entry) = self.state.tt.probe(key) {
                if entry.usable(depth, alpha, beta) {
                    self.state.stats.tt_hits += 1;
                    return entry.score();
                }
            }
        }

        let mover = board.side_to_move();
        let maximizing = mover == self.root;
        let mut moves = board.legal_moves(mover);
        if moves.is_empty() {
            return if maximizing { -WIN_SCORE } else { WIN_SCORE };
        }
        if self.params.move_ordering {
            order_moves(board, &mut moves, mover);
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in &moves {
            let mut child = board.clone();
            child.apply_move(mv);
            let score = self.minimax(&child, depth - 1, alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.state.stats.cutoffs += 1;
                break;
            }
        }

        if self.params.use_cache {
            let bound = if best <= alpha_orig {
                BoundType::UpperBound
            } else if best >= beta_orig {
                BoundType::LowerBound
            } else {
                BoundType::Exact
            };
            self.state.tt.store(key, depth, best, bound);
        }

        best
    }
}
