//! Attack generation.
//!
//! Leapers (knight, king, pawn) read precomputed tables. Sliders walk each of
//! their rays square by square from the origin, include the first occupied
//! square they meet and stop there. Attacks ignore whose turn it is and
//! whether the attacker's own king would be exposed.

mod tables;

pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use super::{Bitboard, Board, Color, GameState, Piece, PieceKind, Square};

const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const QUEEN_RAYS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Walk every ray from `from`, stopping on (and including) the first blocker.
fn ray_attacks(board: &Board, from: Square, rays: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(dr, df) in rays {
        let mut cursor = from.offset(dr, df);
        while let Some(sq) = cursor {
            attacks = attacks.with(sq);
            if !board.is_empty(sq) {
                break;
            }
            cursor = sq.offset(dr, df);
        }
    }
    attacks
}

/// Squares a pawn of `color` on `sq` attacks
#[inline]
#[must_use]
pub(crate) fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Attack mask of `piece` standing on `from`, blockers taken from `board`
#[must_use]
pub(crate) fn piece_attacks(board: &Board, from: Square, piece: Piece) -> Bitboard {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from),
        PieceKind::Knight => KNIGHT_ATTACKS[from.index()],
        PieceKind::King => KING_ATTACKS[from.index()],
        PieceKind::Bishop => ray_attacks(board, from, &BISHOP_RAYS),
        PieceKind::Rook => ray_attacks(board, from, &ROOK_RAYS),
        PieceKind::Queen => ray_attacks(board, from, &QUEEN_RAYS),
    }
}

impl GameState {
    /// Squares threatened by whatever stands on `sq`; empty for an empty square.
    #[must_use]
    pub fn attacks_from(&self, sq: Square) -> Bitboard {
        self.board
            .get(sq)
            .map_or(Bitboard::EMPTY, |piece| piece_attacks(&self.board, sq, piece))
    }

    /// Union of the attack masks of every piece of `color`
    #[must_use]
    pub fn threatmap(&self, color: Color) -> Bitboard {
        let mut threats = Bitboard::EMPTY;
        for (sq, piece) in self.board.pieces() {
            if piece.color == color {
                threats |= piece_attacks(&self.board, sq, piece);
            }
        }
        threats
    }

    /// True if any piece of `attacker` threatens `sq`
    #[must_use]
    pub fn is_attacked(&self, sq: Square, attacker: Color) -> bool {
        self.board.pieces().any(|(from, piece)| {
            piece.color == attacker && piece_attacks(&self.board, from, piece).contains(sq)
        })
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_attacked(self.king_square(color), color.opponent())
    }
}
