use super::Board;

impl Board {
    /// Count leaf nodes of the ply tree `depth` plies deep.
    ///
    /// Every step is a ply, so each jump of a multi-capture counts once.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(self.turn);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            let mut child = self.clone();
            child.apply_move(m);
            nodes += child.perft(depth - 1);
        }

        nodes
    }
}
