#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{EXPERT_DEPTH, HARD_DEPTH};

/// Knobs for the minimax tiers.
///
/// When `use_cache` is set the transposition table is cleared at the start
/// of every search and filled as the search runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    pub depth: u32,
    pub move_ordering: bool,
    pub use_cache: bool,
}

impl SearchParams {
    /// Depth 6, plain alpha-beta
    #[must_use]
    pub const fn hard() -> Self {
        SearchParams {
            depth: HARD_DEPTH,
            move_ordering: false,
            use_cache: false,
        }
    }

    /// Depth 8 with move ordering and the transposition table
    #[must_use]
    pub const fn expert() -> Self {
        SearchParams {
            depth: EXPERT_DEPTH,
            move_ordering: true,
            use_cache: true,
        }
    }

    #[must_use]
    pub const fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub const fn with_move_ordering(mut self, on: bool) -> Self {
        self.move_ordering = on;
        self
    }

    #[must_use]
    pub const fn with_cache(mut self, on: bool) -> Self {
        self.use_cache = on;
        self
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::expert()
    }
}
