//! Capture groups, chain lengths and the maximum-capture rule.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Move, Square};

/// The jumps available to one piece.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaptureGroup {
    pub from: Square,
    pub moves: Vec<Move>,
}

impl Board {
    /// Every capturing piece of `color` with its legal first jumps.
    ///
    /// Each jump is annotated with the length of the longest chain it starts.
    /// Under Brazilian and International rules only the jumps reaching the
    /// global maximum survive, and pieces left with none are dropped.
    #[must_use]
    pub fn all_possible_captures(&self, color: Color) -> Vec<CaptureGroup> {
        let mut groups = Vec::new();
        for (from, _) in self.pieces_of(color) {
            let moves = self.annotated_captures_from(from);
            if !moves.is_empty() {
                groups.push(CaptureGroup { from, moves });
            }
        }

        if self.variant.maximum_capture() {
            retain_longest(&mut groups);
        }
        groups
    }

    /// Legal next jumps for the piece on `from` while it is mid-chain.
    #[must_use]
    pub fn continuation_moves(&self, from: Square) -> Vec<Move> {
        let moves = self.annotated_captures_from(from);
        if !self.variant.maximum_capture() {
            return moves;
        }
        let longest = moves.iter().map(|mv| mv.captures).max().unwrap_or(0);
        moves.into_iter().filter(|mv| mv.captures == longest).collect()
    }

    /// Quick test for any jump at all, without chain lengths
    #[must_use]
    pub fn has_capture(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(from, _)| !self.capture_moves_from(from).is_empty())
    }

    fn annotated_captures_from(&self, from: Square) -> Vec<Move> {
        let mut moves = self.capture_moves_from(from);
        for mv in &mut moves {
            mv.captures = self.chain_length(mv);
        }
        moves
    }

    /// Pieces taken by the longest chain beginning with `mv`.
    ///
    /// Plays the steps on a scratch copy with the same removal and promotion
    /// rules `apply_move` uses, so the count matches what can really be played.
    pub(crate) fn chain_length(&self, mv: &Move) -> u8 {
        let mut scratch = self.clone();
        let promoted = scratch.play_step(mv);
        if promoted && self.variant.promotion_ends_capture() {
            return 1;
        }
        let longest = scratch
            .capture_moves_from(mv.to)
            .iter()
            .map(|next| scratch.chain_length(next))
            .max()
            .unwrap_or(0);
        1 + longest
    }
}

fn retain_longest(groups: &mut Vec<CaptureGroup>) {
    let longest = groups
        .iter()
        .flat_map(|group| group.moves.iter())
        .map(|mv| mv.captures)
        .max()
        .unwrap_or(0);
    for group in groups.iter_mut() {
        group.moves.retain(|mv| mv.captures == longest);
    }
    groups.retain(|group| !group.moves.is_empty());
}
