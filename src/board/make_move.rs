#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Move};

/// What happened when a step was applied
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    /// The same piece must jump again; the turn has not passed
    pub continue_capture: bool,
    /// The moving man was crowned on this step
    pub promoted: bool,
}

impl Board {
    /// Relocate the piece, remove the jumped piece, crown on the far row.
    /// Returns whether the piece was crowned.
    pub(crate) fn play_step(&mut self, mv: &Move) -> bool {
        let Some(mut piece) = self.remove_piece(mv.from) else {
            return false;
        };
        if let Some(victim) = mv.captured {
            self.remove_piece(victim);
        }
        let promoted = !piece.king && mv.to.row() == piece.color.promotion_row(self.size);
        if promoted {
            piece.king = true;
        }
        self.set_piece(mv.to, piece);
        promoted
    }

    /// Apply one step for the piece on `mv.from`.
    ///
    /// After a jump, if the piece can jump again the turn stays with its
    /// owner, the piece becomes the selection and its continuations become
    /// the pending moves. A man crowned by a jump under International rules
    /// stops there. Otherwise the turn passes to the mover's opponent.
    ///
    /// `mv` is assumed to come from this board's move generator.
    pub fn apply_move(&mut self, mv: &Move) -> MoveOutcome {
        let Some(mover) = self.piece_at(mv.from).map(|piece| piece.color) else {
            debug_assert!(false, "apply_move from empty square {}", mv.from);
            return MoveOutcome::default();
        };

        let promoted = self.play_step(mv);
        self.clear_selection();

        let stops_here = promoted && self.variant.promotion_ends_capture();
        if mv.is_capture() && !stops_here {
            let next = self.continuation_moves(mv.to);
            if !next.is_empty() {
                self.set_side_to_move(mover);
                self.set_chain(Some(mv.to));
                self.selection = Some(mv.to);
                self.pending = next;
                return MoveOutcome {
                    continue_capture: true,
                    promoted,
                };
            }
        }

        self.set_chain(None);
        self.set_side_to_move(mover.opponent());
        MoveOutcome {
            continue_capture: false,
            promoted,
        }
    }
}
