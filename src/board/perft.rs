use super::{GameState, Move};

impl GameState {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .into_iter()
            .map(|m| self.after(m.from, m.to).perft(depth - 1))
            .sum()
    }

    /// Per-root-move breakdown of `perft`, in `legal_moves` order.
    #[must_use]
    pub fn perft_divide(&self, depth: u32) -> Vec<(Move, u64)> {
        self.legal_moves()
            .into_iter()
            .map(|m| (m, self.after(m.from, m.to).perft(depth.saturating_sub(1))))
            .collect()
    }
}
