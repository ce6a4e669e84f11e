//! Search module implementing the computer opponent.
//!
//! Features:
//! - Four difficulty tiers behind one [`MoveSelector`] capability
//! - Fixed-depth minimax with alpha-beta pruning
//! - Move ordering (captures by chain length, promotions, king moves, centre)
//! - Transposition table keyed by Zobrist hash, with bound-aware reuse

mod constants;
mod minimax;
mod move_order;
mod params;
mod selectors;

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tt::TranspositionTable;

use super::{Board, Color, Move};
use minimax::MinimaxContext;

pub use constants::{EXPERT_DEPTH, HARD_DEPTH, WIN_SCORE};
pub use move_order::{order_moves, order_score};
pub use params::SearchParams;
pub use selectors::{GreedySelector, MinimaxSelector, MoveSelector, RandomSelector};

/// Default transposition table size in MB
pub const DEFAULT_TT_MB: usize = 16;

/// Result of a minimax search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The first root move reaching the best score
    pub best_move: Move,
    /// Its score from the searching side's point of view
    pub score: i32,
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub tt_hits: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn reset_search(&mut self) {
        *self = SearchStats::default();
    }
}

/// Everything that outlives a single recursion frame: the cache, the random
/// source for the random tiers, and counters.
pub struct SearchState {
    pub(crate) tt: TranspositionTable,
    pub(crate) rng: StdRng,
    pub stats: SearchStats,
}

impl SearchState {
    #[must_use]
    pub fn new(tt_mb: usize) -> Self {
        SearchState {
            tt: TranspositionTable::new(tt_mb),
            rng: StdRng::from_entropy(),
            stats: SearchStats::default(),
        }
    }

    /// Reproducible random choices for the easy and medium tiers
    #[must_use]
    pub fn with_seed(tt_mb: usize, seed: u64) -> Self {
        SearchState {
            tt: TranspositionTable::new(tt_mb),
            rng: StdRng::seed_from_u64(seed),
            stats: SearchStats::default(),
        }
    }

    /// A state for one `difficulty`: the full table for tiers that cache,
    /// the smallest one otherwise.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let uses_cache = difficulty.params().is_some_and(|params| params.use_cache);
        Self::new(if uses_cache { DEFAULT_TT_MB } else { 0 })
    }

    #[must_use]
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_TT_MB)
    }
}

/// Difficulty tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    /// Uniformly random legal move
    Easy,
    /// Captures first, else a pick among the top few by a one-move heuristic
    Medium,
    /// Depth-6 alpha-beta
    Hard,
    /// Depth-8 alpha-beta with move ordering and the transposition table
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// The strategy playing at this tier
    #[must_use]
    pub fn selector(self) -> Box<dyn MoveSelector> {
        match self {
            Difficulty::Easy => Box::new(RandomSelector),
            Difficulty::Medium => Box::new(GreedySelector),
            Difficulty::Hard | Difficulty::Expert => {
                Box::new(MinimaxSelector::new(self.params().unwrap_or_default()))
            }
        }
    }

    /// Search parameters for the minimax tiers
    #[must_use]
    pub const fn params(self) -> Option<SearchParams> {
        match self {
            Difficulty::Easy | Difficulty::Medium => None,
            Difficulty::Hard => Some(SearchParams::hard()),
            Difficulty::Expert => Some(SearchParams::expert()),
        }
    }

    #[must_use]
    pub const fn depth(self) -> Option<u32> {
        match self.params() {
            Some(params) => Some(params.depth),
            None => None,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
            Difficulty::Expert => write!(f, "expert"),
        }
    }
}

/// Pick a move for `color` at `difficulty`, or `None` if it has no move.
pub fn find_best_move(
    board: &Board,
    color: Color,
    difficulty: Difficulty,
    state: &mut SearchState,
) -> Option<Move> {
    let mv = difficulty.selector().select_move(board, color, state);
    search_log!(
        debug,
        "{difficulty} move for {color}: {}",
        mv.map_or_else(|| "none".to_string(), |mv| mv.notation(board.size()))
    );
    mv
}

/// [`find_best_move`] with a fresh state sized for `difficulty`.
///
/// Callers picking many moves should keep one [`SearchState`] and call
/// [`find_best_move`] instead.
#[must_use]
pub fn get_best_move(board: &Board, color: Color, difficulty: Difficulty) -> Option<Move> {
    find_best_move(
        board,
        color,
        difficulty,
        &mut SearchState::for_difficulty(difficulty),
    )
}

/// Run a minimax search for `color` with explicit parameters.
pub fn search(
    board: &Board,
    color: Color,
    params: &SearchParams,
    state: &mut SearchState,
) -> Option<SearchResult> {
    state.stats.reset_search();
    if params.use_cache {
        state.tt.clear();
        search_log!(trace, "transposition table cleared");
    }

    let result = MinimaxContext {
        state: &mut *state,
        params: *params,
        root: color,
    }
    .search_root(board);

    if let Some(result) = &result {
        search_log!(
            debug,
            "depth {} best {} score {} nodes {} tt_hits {} cutoffs {}",
            params.depth,
            result.best_move.notation(board.size()),
            result.score,
            state.stats.nodes,
            state.stats.tt_hits,
            state.stats.cutoffs
        );
    }
    result
}
