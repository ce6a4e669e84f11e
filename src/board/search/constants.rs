//! Search constants.
//!
//! Contains the terminal scores and move-ordering weights used by the
//! alpha-beta search.

// ============================================================================
// SCORES
// ============================================================================

/// Score of a decided game, from the winner's point of view
pub const WIN_SCORE: i32 = 100_000;

/// Bound wider than any reachable score
pub const INFINITY: i32 = 1_000_000;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier.

/// Any jump
pub const CAPTURE_SCORE: i32 = 10_000;

/// Per piece taken by the longest chain the jump starts
pub const CHAIN_PIECE_SCORE: i32 = 1_000;

/// Man reaching the crowning row
pub const PROMOTION_SCORE: i32 = 800;

/// Moving a king
pub const KING_MOVE_SCORE: i32 = 500;

/// Per unit of `size - distance_to_centre` of the landing square
pub const CENTER_SCORE: i32 = 10;

// ============================================================================
// TIERS
// ============================================================================

pub const HARD_DEPTH: u32 = 6;
pub const EXPERT_DEPTH: u32 = 8;

/// Greedy tier picks among this many best-ranked moves
pub const GREEDY_TOP_N: usize = 3;
