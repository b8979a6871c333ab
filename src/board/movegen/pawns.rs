use super::super::attack_tables::pawn_attacks;
use super::super::{Bitboard, Color, GameState, PieceKind, Square};

/// Rank a pawn of `color` lands on when capturing en passant (6th / 3rd).
#[inline]
fn en_passant_rank(color: Color) -> u8 {
    match color {
        Color::White => 5,
        Color::Black => 2,
    }
}

impl GameState {
    /// Square of the pawn removed if a pawn of `color` moving `from -> to`
    /// captures en passant, `None` otherwise.
    pub(crate) fn en_passant_victim(
        &self,
        from: Square,
        to: Square,
        color: Color,
    ) -> Option<Square> {
        if from.file() == to.file()
            || self.en_passant_file != Some(to.file())
            || to.rank() != en_passant_rank(color)
            || !self.board.is_empty(to)
        {
            return None;
        }
        let victim = to.offset(-color.pawn_direction(), 0)?;
        match self.board.get(victim) {
            Some(p) if p.kind == PieceKind::Pawn && p.color != color => Some(victim),
            _ => None,
        }
    }

    /// Pawn movement rules: single push, double push from the start rank,
    /// diagonal capture, en passant.
    pub(super) fn pawn_pattern(&self, from: Square, to: Square, color: Color) -> bool {
        let dir = color.pawn_direction();
        let d_rank = to.rank() as i8 - from.rank() as i8;
        let d_file = to.file() as i8 - from.file() as i8;

        if d_file == 0 {
            if d_rank == dir {
                return self.board.is_empty(to);
            }
            if d_rank == 2 * dir && from.rank() == color.pawn_start_rank() {
                return from
                    .offset(dir, 0)
                    .is_some_and(|mid| self.board.is_empty(mid) && self.board.is_empty(to));
            }
            return false;
        }

        if !pawn_attacks(color, from).contains(to) {
            return false;
        }
        match self.board.color_on(to) {
            Some(owner) => owner != color,
            None => self.en_passant_victim(from, to, color).is_some(),
        }
    }

    /// Every square a pawn on `from` could possibly reach this ply
    pub(super) fn pawn_targets(&self, from: Square, color: Color) -> Bitboard {
        let dir = color.pawn_direction();
        let mut targets = pawn_attacks(color, from);
        if let Some(one) = from.offset(dir, 0) {
            targets = targets.with(one);
        }
        if from.rank() == color.pawn_start_rank() {
            if let Some(two) = from.offset(2 * dir, 0) {
                targets = targets.with(two);
            }
        }
        targets
    }
}
