//! Per-color king location and castling "touched" flags.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// King square plus the monotone flags that gate castling for one color.
///
/// The touched flags can only ever be set. Once the king has moved, or a
/// rook's home square has been moved from or captured on, castling on that
/// side is gone for the rest of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SideState {
    king_square: Square,
    king_moved: bool,
    queenside_rook_touched: bool,
    kingside_rook_touched: bool,
}

impl SideState {
    /// Untouched side state with the king on its standard home square
    #[must_use]
    pub const fn new(color: Color) -> Self {
        SideState {
            king_square: home_king_square(color),
            king_moved: false,
            queenside_rook_touched: false,
            kingside_rook_touched: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king_square(&self) -> Square {
        self.king_square
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(&self) -> bool {
        self.king_moved
    }

    #[inline]
    #[must_use]
    pub const fn rook_touched(&self, kingside: bool) -> bool {
        if kingside {
            self.kingside_rook_touched
        } else {
            self.queenside_rook_touched
        }
    }

    /// True while neither the king nor the rook on that wing has been touched
    #[inline]
    #[must_use]
    pub const fn can_castle(&self, kingside: bool) -> bool {
        !self.king_moved && !self.rook_touched(kingside)
    }

    /// Record a king move to `to`. Marks the king as moved for good.
    #[inline]
    pub(crate) fn move_king(&mut self, to: Square) {
        self.king_square = to;
        self.king_moved = true;
    }

    /// Relocate the king without touching any flag (position setup only)
    #[inline]
    pub(crate) fn place_king(&mut self, sq: Square) {
        self.king_square = sq;
    }

    #[inline]
    pub(crate) fn touch_king(&mut self) {
        self.king_moved = true;
    }

    #[inline]
    pub(crate) fn touch_rook(&mut self, kingside: bool) {
        if kingside {
            self.kingside_rook_touched = true;
        } else {
            self.queenside_rook_touched = true;
        }
    }
}

/// Standard home square of a color's king (e1 / e8)
#[inline]
#[must_use]
pub const fn home_king_square(color: Color) -> Square {
    match color {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    }
}

/// Home square of a color's rook on the given wing (a1, h1, a8, h8)
#[inline]
#[must_use]
pub const fn home_rook_square(color: Color, kingside: bool) -> Square {
    match (color, kingside) {
        (Color::White, false) => Square::A1,
        (Color::White, true) => Square::H1,
        (Color::Black, false) => Square::A8,
        (Color::Black, true) => Square::H8,
    }
}

/// Which color and wing a rook home square belongs to, if any
#[inline]
#[must_use]
pub(crate) fn rook_home_owner(sq: Square) -> Option<(Color, bool)> {
    match sq {
        Square::A1 => Some((Color::White, false)),
        Square::H1 => Some((Color::White, true)),
        Square::A8 => Some((Color::Black, false)),
        Square::H8 => Some((Color::Black, true)),
        _ => None,
    }
}
