//! Whole-board terms built from the two sides' tallies.

use super::helpers::SideTally;
use super::tables::{
    BACK_ROW_WEIGHT, DOMINANCE_BONUS, FRAGILE_ENDGAME_PENALTY, FRAGILE_PIECE_LIMIT,
    KING_DIFF_WEIGHT, MOBILITY_DIFF_WEIGHT, PIECE_DIFF_WEIGHT,
};

/// Differentials, material dominance and the fragile-endgame penalty,
/// from `own`'s point of view.
#[must_use]
pub fn structure_score(own: &SideTally, opp: &SideTally) -> i32 {
    let diff = |a: usize, b: usize| a as i32 - b as i32;

    let mut score = diff(own.pieces, opp.pieces) * PIECE_DIFF_WEIGHT
        + diff(own.kings, opp.kings) * KING_DIFF_WEIGHT
        + diff(own.back_row, opp.back_row) * BACK_ROW_WEIGHT
        + diff(own.mobility, opp.mobility) * MOBILITY_DIFF_WEIGHT;

    if own.pieces > 2 * opp.pieces {
        score += DOMINANCE_BONUS;
    } else if opp.pieces > 2 * own.pieces {
        score -= DOMINANCE_BONUS;
    }

    if own.pieces <= FRAGILE_PIECE_LIMIT && own.kings < opp.kings {
        score -= FRAGILE_ENDGAME_PENALTY;
    }

    score
}
