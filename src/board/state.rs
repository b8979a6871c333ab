use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::BoardDecodeError;
use super::{Bitboard, Color, Piece, PieceKind, SideState, Square};

/// Piece placement: one optional piece per square, indexed by `Square`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "Vec<i8>", try_from = "Vec<i8>")
)]
pub struct Board([Option<Piece>; 64]);

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Board([None; 64])
    }

    /// Standard starting placement
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in (0u8..).zip(back_rank) {
            for color in Color::BOTH {
                let pawn_rank = color.pawn_start_rank();
                if let (Some(home), Some(pawn)) = (
                    Square::new(color.back_rank(), file),
                    Square::new(pawn_rank, file),
                ) {
                    board.set(home, Some(Piece::new(color, kind)));
                    board.set(pawn, Some(Piece::new(color, PieceKind::Pawn)));
                }
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.0[sq.index()]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.0[sq.index()] = piece;
    }

    /// Remove and return whatever stands on `sq`
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.0[sq.index()].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.0[sq.index()].is_none()
    }

    /// Color of the piece on `sq`, if any
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.0[sq.index()].map(|p| p.color)
    }

    /// Occupied squares with their pieces, in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    #[must_use]
    pub fn occupancy(&self) -> Bitboard {
        self.pieces().map(|(sq, _)| sq).collect()
    }

    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces()
            .filter(|(_, p)| p.color == color)
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Squares holding a king of `color`
    #[must_use]
    pub fn kings(&self, color: Color) -> Bitboard {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .filter(|(_, p)| *p == king)
            .map(|(sq, _)| sq)
            .collect()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.index()]
    }
}

impl From<Board> for Vec<i8> {
    fn from(board: Board) -> Self {
        board
            .0
            .iter()
            .map(|tile| tile.map_or(0, Piece::to_signed))
            .collect()
    }
}

impl TryFrom<Vec<i8>> for Board {
    type Error = BoardDecodeError;

    fn try_from(codes: Vec<i8>) -> Result<Self, Self::Error> {
        if codes.len() != 64 {
            return Err(BoardDecodeError::WrongLength { found: codes.len() });
        }
        let mut board = Board::empty();
        for (sq, code) in Square::all().zip(codes) {
            let tile = Piece::from_signed(code)
                .map_err(|code| BoardDecodeError::InvalidTile { square: sq, code })?;
            board.set(sq, tile);
        }
        Ok(board)
    }
}

/// Complete game position. `Copy` so that trial moves and search nodes work
/// on value snapshots instead of undoing moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) sides: [SideState; 2],
    pub(crate) en_passant_file: Option<u8>,
    pub(crate) plies_since_capture: u32,
    pub(crate) side_to_move: Color,
}

impl GameState {
    /// Standard starting position, White to move, no rights used
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::standard(),
            sides: [SideState::new(Color::White), SideState::new(Color::Black)],
            en_passant_file: None,
            plies_since_capture: 0,
            side_to_move: Color::White,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.get(sq)
    }

    #[inline]
    #[must_use]
    pub fn side(&self, color: Color) -> &SideState {
        &self.sides[color.index()]
    }

    #[inline]
    pub(crate) fn side_mut(&mut self, color: Color) -> &mut SideState {
        &mut self.sides[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// File of the pawn that double-stepped on the previous ply
    #[inline]
    #[must_use]
    pub fn en_passant_file(&self) -> Option<u8> {
        self.en_passant_file
    }

    #[inline]
    #[must_use]
    pub fn plies_since_capture(&self) -> u32 {
        self.plies_since_capture
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.side(color).king_square()
    }

    /// Both colors hold exactly one king, standing where the side record says.
    #[must_use]
    pub fn kings_present(&self) -> bool {
        Color::BOTH.into_iter().all(|color| {
            let kings = self.board.kings(color);
            kings.popcount() == 1 && kings.contains(self.king_square(color))
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

/// Plain text grid, rank 8 at the top, FEN letters for pieces.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let tile = Square::new(rank, file).and_then(|sq| self.board.get(sq));
                let c = tile.map_or('.', Piece::to_fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
