use super::super::attack_tables::KING_ATTACKS;
use super::super::{
    home_king_square, home_rook_square, Bitboard, Color, GameState, Piece, PieceKind, Square,
};

impl GameState {
    /// King movement rules: a step onto a square the opponent does not
    /// attack, or a two-file castle from the home square.
    pub(super) fn king_pattern(&self, from: Square, to: Square, color: Color) -> bool {
        if KING_ATTACKS[from.index()].contains(to) {
            return !self.threatmap(color.opponent()).contains(to);
        }
        let d_file = to.file() as i8 - from.file() as i8;
        from == home_king_square(color)
            && to.rank() == from.rank()
            && d_file.abs() == 2
            && self.castle_allowed(color, d_file > 0)
    }

    /// Castling gate for one wing. The king must be on its home square.
    pub(crate) fn castle_allowed(&self, color: Color, kingside: bool) -> bool {
        if !self.side(color).can_castle(kingside) {
            return false;
        }
        let king_sq = home_king_square(color);
        let rook_sq = home_rook_square(color, kingside);
        if self.board.get(king_sq) != Some(Piece::new(color, PieceKind::King))
            || self.board.get(rook_sq) != Some(Piece::new(color, PieceKind::Rook))
        {
            return false;
        }

        let (low, high) = if kingside {
            (king_sq.index(), rook_sq.index())
        } else {
            (rook_sq.index(), king_sq.index())
        };
        let between_empty = Square::all()
            .filter(|sq| sq.index() > low && sq.index() < high)
            .all(|sq| self.board.is_empty(sq));
        if !between_empty || self.is_in_check(color) {
            return false;
        }

        let step = if kingside { 1 } else { -1 };
        let threats = self.threatmap(color.opponent());
        [king_sq.offset(0, step), king_sq.offset(0, 2 * step)]
            .into_iter()
            .all(|sq| sq.is_some_and(|sq| !threats.contains(sq)))
    }

    /// Step squares plus the two castle destinations when on the home square
    pub(super) fn king_targets(&self, from: Square, color: Color) -> Bitboard {
        let mut targets = KING_ATTACKS[from.index()];
        if from == home_king_square(color) {
            for d_file in [-2, 2] {
                if let Some(sq) = from.offset(0, d_file) {
                    targets = targets.with(sq);
                }
            }
        }
        targets
    }
}
