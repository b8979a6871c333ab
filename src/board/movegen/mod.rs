//! Move legality.
//!
//! A move is a plain (from, to) pair. It is legal when the piece on `from`
//! belongs to the side to move, its movement rules allow `to`, and applying
//! it to a copy of the position does not leave the mover's king attacked.

mod kings;
mod pawns;

use super::attack_tables::piece_attacks;
use super::{Bitboard, GameState, Move, Piece, PieceKind, Square};

impl GameState {
    /// Movement rules for `piece` on `from`, before the self-check filter
    fn follows_pattern(&self, from: Square, to: Square, piece: Piece) -> bool {
        match piece.kind {
            PieceKind::Pawn => self.pawn_pattern(from, to, piece.color),
            PieceKind::King => self.king_pattern(from, to, piece.color),
            _ => piece_attacks(&self.board, from, piece).contains(to),
        }
    }

    /// Superset of the squares `piece` could move to, own pieces excluded.
    fn candidate_targets(&self, from: Square, piece: Piece) -> Bitboard {
        let reach = match piece.kind {
            PieceKind::Pawn => self.pawn_targets(from, piece.color),
            PieceKind::King => self.king_targets(from, piece.color),
            _ => piece_attacks(&self.board, from, piece),
        };
        reach & !self.board.occupied_by(piece.color)
    }

    /// Full legality check for moving whatever stands on `from` to `to`.
    ///
    /// The self-check test runs on a copy, so `self` is never modified.
    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self.board.get(from) else {
            return false;
        };
        if piece.color != self.side_to_move || self.board.color_on(to) == Some(piece.color) {
            return false;
        }
        if !self.follows_pattern(from, to, piece) {
            return false;
        }

        let mut trial = *self;
        trial.apply(from, to);
        !trial.is_in_check(piece.color)
    }

    /// All legal moves for the side to move, ordered by `from` then `to`
    /// square index.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for (from, piece) in self.board.pieces() {
            if piece.color != self.side_to_move {
                continue;
            }
            for to in self.candidate_targets(from, piece).iter() {
                if self.is_legal(from, to) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// Stops at the first legal move found
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.color == self.side_to_move)
            .any(|(from, piece)| {
                self.candidate_targets(from, piece)
                    .iter()
                    .any(|to| self.is_legal(from, to))
            })
    }

    /// Checkmate: side to move is in check with no legal reply
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && !self.has_legal_move()
    }

    /// Stalemate: side to move is not in check but has no legal move
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && !self.has_legal_move()
    }
}
