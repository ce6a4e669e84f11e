//! Evaluation constants.
//!
//! Contains all weights used by the evaluation functions. Only their
//! relative size matters.

// ============================================================================
// MATERIAL
// ============================================================================

pub const MAN_VALUE: i32 = 300;
pub const KING_VALUE: i32 = 500;

// ============================================================================
// PER-PIECE POSITIONAL TERMS
// ============================================================================

/// Per unit of `size - distance_to_centre`
pub const CENTER_WEIGHT: i32 = 10;

/// Per row a man has advanced from its own back row
pub const ADVANCE_WEIGHT: i32 = 20;

/// Piece on the left or right edge cannot be jumped sideways
pub const EDGE_BONUS: i32 = 10;

/// Per same-colour diagonal neighbour
pub const NEIGHBOR_BONUS: i32 = 5;

/// Per legal step of the piece
pub const MOBILITY_WEIGHT: i32 = 5;

// ============================================================================
// WHOLE-BOARD TERMS
// ============================================================================

pub const PIECE_DIFF_WEIGHT: i32 = 50;
pub const KING_DIFF_WEIGHT: i32 = 75;
pub const BACK_ROW_WEIGHT: i32 = 15;
pub const MOBILITY_DIFF_WEIGHT: i32 = 3;

/// Awarded when one side has more than twice the other's pieces
pub const DOMINANCE_BONUS: i32 = 500;

/// Charged when down to this many pieces or fewer while behind in kings
pub const FRAGILE_PIECE_LIMIT: usize = 3;
pub const FRAGILE_ENDGAME_PENALTY: i32 = 200;

// ============================================================================
// SINGLE-MOVE HEURISTIC
// ============================================================================

pub const MOVE_CAPTURE_BONUS: i32 = 1000;
pub const MOVE_KING_BONUS: i32 = 200;
pub const MOVE_ADVANCE_WEIGHT: i32 = 50;
pub const MOVE_PROMOTION_BONUS: i32 = 1500;
pub const MOVE_EDGE_PENALTY: i32 = 100;
