use super::{Color, Move, Piece, Square, Variant, MAX_CELLS};
use crate::zobrist;

/// A draughts position plus the turn protocol state layered on top of it.
///
/// `selection`/`pending` describe what the side to move has picked up;
/// `chain` is set while a piece is part-way through a multi-capture and
/// must keep jumping. Both are reset whenever the turn passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) variant: Variant,
    pub(crate) size: usize,
    pub(crate) cells: [Option<Piece>; MAX_CELLS],
    pub(crate) turn: Color,
    pub(crate) selection: Option<Square>,
    pub(crate) pending: Vec<Move>,
    pub(crate) chain: Option<Square>,
    pub(crate) hash: u64, // Zobrist hash
}

impl Board {
    /// The opening position for `variant`, Red to move.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let mut board = Board::empty(variant);
        let size = board.size;
        let rows = variant.setup_rows();

        for row in 0..size {
            let color = if row < rows {
                Color::Black
            } else if row >= size - rows {
                Color::Red
            } else {
                continue;
            };
            for col in 0..size {
                let sq = Square(row, col);
                if sq.is_playable() {
                    board.set_piece(sq, Piece::man(color));
                }
            }
        }
        board
    }

    /// A board with no pieces, Red to move.
    #[must_use]
    pub fn empty(variant: Variant) -> Self {
        let mut board = Board {
            variant,
            size: variant.board_size(),
            cells: [None; MAX_CELLS],
            turn: Color::Red,
            selection: None,
            pending: Vec::new(),
            chain: None,
            hash: 0,
        };
        board.hash = board.calculate_hash();
        board
    }

    #[inline]
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    /// Destinations reachable by the selected piece
    #[inline]
    #[must_use]
    pub fn pending_moves(&self) -> &[Move] {
        &self.pending
    }

    /// Square of the piece that must continue a capture chain, if any
    #[inline]
    #[must_use]
    pub fn chain(&self) -> Option<Square> {
        self.chain
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn in_bounds(&self, sq: Square) -> bool {
        sq.0 < self.size && sq.1 < self.size
    }

    /// Piece on `sq`; squares off the board read as empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if self.in_bounds(sq) {
            self.cells[sq.cell()]
        } else {
            None
        }
    }

    /// Place `piece` on `sq`, replacing whatever was there.
    ///
    /// Off-board and light squares are ignored.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        if !self.in_bounds(sq) || !sq.is_playable() {
            return;
        }
        self.remove_piece(sq);
        self.cells[sq.cell()] = Some(piece);
        self.hash ^= zobrist::piece_key(piece, sq);
    }

    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        if !self.in_bounds(sq) {
            return None;
        }
        let old = self.cells[sq.cell()].take();
        if let Some(piece) = old {
            self.hash ^= zobrist::piece_key(piece, sq);
        }
        old
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.hash ^= zobrist::side_key(self.turn);
        self.turn = color;
        self.hash ^= zobrist::side_key(self.turn);
    }

    pub(crate) fn set_chain(&mut self, chain: Option<Square>) {
        if let Some(sq) = self.chain {
            self.hash ^= zobrist::chain_key(sq);
        }
        self.chain = chain;
        if let Some(sq) = self.chain {
            self.hash ^= zobrist::chain_key(sq);
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection = None;
        self.pending.clear();
    }

    /// Recompute the Zobrist hash from scratch
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        let mut hash = zobrist::side_key(self.turn);
        for (sq, piece) in self.pieces() {
            hash ^= zobrist::piece_key(piece, sq);
        }
        if let Some(sq) = self.chain {
            hash ^= zobrist::chain_key(sq);
        }
        hash
    }

    /// All playable squares, row by row
    pub fn playable_squares(&self) -> impl Iterator<Item = Square> {
        let size = self.size;
        (0..size).flat_map(move |row| ((1 - row % 2)..size).step_by(2).map(move |col| Square(row, col)))
    }

    /// Every occupied square with its piece
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.playable_squares()
            .filter_map(move |sq| self.cells[sq.cell()].map(|piece| (sq, piece)))
    }

    /// Occupied squares of one color
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    #[must_use]
    pub fn king_count(&self, color: Color) -> usize {
        self.pieces_of(color).filter(|(_, piece)| piece.king).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}
