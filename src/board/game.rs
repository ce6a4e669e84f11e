//! Turn protocol: selection, move submission and game end.

use super::{Board, Color, Move, MoveError, MoveOutcome, Square, Variant};

impl Board {
    /// Start over with the opening position of `variant`.
    pub fn reset(&mut self, variant: Variant) {
        *self = Board::new(variant);
    }

    /// Try to pick up the piece on (`row`, `col`) for the side to move.
    ///
    /// Fails, leaving the board untouched, for empty or off-board squares,
    /// enemy pieces, pieces without a move, pieces barred by mandatory
    /// capture, and any piece other than the one mid-chain. On success the
    /// piece's legal steps become the pending moves.
    pub fn select(&mut self, row: usize, col: usize) -> bool {
        let sq = Square(row, col);
        let Some(piece) = self.piece_at(sq) else {
            return false;
        };
        if piece.color != self.turn {
            return false;
        }

        let moves = match self.chain {
            Some(chain) if chain != sq => return false,
            Some(_) => self.continuation_moves(sq),
            None => {
                let groups = self.all_possible_captures(self.turn);
                if groups.is_empty() {
                    self.legal_moves_from(sq, false)
                } else {
                    match groups.into_iter().find(|group| group.from == sq) {
                        Some(group) => group.moves,
                        None => return false,
                    }
                }
            }
        };

        if moves.is_empty() {
            return false;
        }
        self.selection = Some(sq);
        self.pending = moves;
        true
    }

    /// Play the pending move landing on (`row`, `col`).
    pub fn move_to(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.selection.is_none() {
            return Err(MoveError::NoSelection);
        }
        let to = Square(row, col);
        let Some(mv) = self.pending.iter().find(|mv| mv.to == to).copied() else {
            return Err(MoveError::IllegalDestination { to });
        };
        Ok(self.apply_move(&mv))
    }

    /// Every step `color` may legally play now.
    ///
    /// Mid-chain only the chain piece's continuations count; otherwise
    /// captures are mandatory (longest only where the variant says so), and
    /// without captures every slide is available.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        if color == self.turn {
            if let Some(chain) = self.chain {
                return self.continuation_moves(chain);
            }
        }

        let groups = self.all_possible_captures(color);
        if !groups.is_empty() {
            return groups.into_iter().flat_map(|group| group.moves).collect();
        }
        self.pieces_of(color)
            .flat_map(|(from, _)| self.legal_moves_from(from, false))
            .collect()
    }

    /// The winner, if the game is over.
    ///
    /// A side loses with no pieces left, or when it is to move and none of
    /// its pieces has a step or a jump. Jumps count in every direction the
    /// variant allows, so a man whose only move is a backward capture is
    /// not blocked.
    #[must_use]
    pub fn check_winner(&self) -> Option<Color> {
        for color in [Color::Black, Color::Red] {
            if self.piece_count(color) == 0 || (self.turn == color && !self.has_any_move(color)) {
                return Some(color.opponent());
            }
        }
        None
    }

    fn has_any_move(&self, color: Color) -> bool {
        self.pieces_of(color).any(|(from, _)| {
            !self.legal_moves_from(from, false).is_empty()
                || !self.capture_moves_from(from).is_empty()
        })
    }
}

/// The opening position for `variant`.
#[must_use]
pub fn new_game(variant: Variant) -> Board {
    Board::new(variant)
}
