use super::pst::{BONUS, MATERIAL};
use super::{Color, GameState};

/// Magnitude of a checkmate score
pub const MATE_SCORE: i32 = 100_000;

/// Plies without a capture after which the game is scored as a draw
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// Charged against the side to move while it is in check
pub(crate) const CHECK_PENALTY: i32 = 50;

impl GameState {
    /// Static score in centipawns, positive when White is better.
    ///
    /// Terminal positions override the material count: the fifty-move draw
    /// and stalemate score 0, checkmate scores `MATE_SCORE` for the winner.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        if self.plies_since_capture >= FIFTY_MOVE_PLIES {
            return 0;
        }

        let mover = self.side_to_move;
        let in_check = self.is_in_check(mover);
        if !self.has_legal_move() {
            return if in_check {
                -mover.sign() * MATE_SCORE
            } else {
                0
            };
        }

        self.static_score(in_check)
    }

    /// Non-terminal part of `evaluate`: material plus the check penalty
    pub(crate) fn static_score(&self, in_check: bool) -> i32 {
        let mut score = self.material_score();
        if in_check {
            score -= self.side_to_move.sign() * CHECK_PENALTY;
        }
        score
    }

    /// Material weighted by piece-square percentage, White-positive
    #[must_use]
    pub fn material_score(&self) -> i32 {
        self.board
            .pieces()
            .map(|(sq, piece)| {
                let oriented = match piece.color {
                    Color::White => sq,
                    Color::Black => sq.flip_vertical(),
                };
                let kind = piece.kind.index();
                piece.color.sign() * MATERIAL[kind] * BONUS[kind][oriented.index()] / 100
            })
            .sum()
    }
}
