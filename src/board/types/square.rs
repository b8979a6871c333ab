//! Square type and text parsing.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, indexed 0-63 with `file = idx % 8` and `rank = idx / 8`
/// (a1 = 0, h1 = 7, a8 = 56, h8 = 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "u8", try_from = "u8")
)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);

    /// Create a square from rank and file (both 0-7)
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Square at signed rank/file coordinates, `None` when off the board
    #[inline]
    #[must_use]
    pub(crate) const fn from_coords(rank: i8, file: i8) -> Option<Self> {
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Step by a rank/file delta without wrapping across board edges
    #[inline]
    #[must_use]
    pub(crate) const fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        Self::from_coords(self.rank() as i8 + d_rank, self.file() as i8 + d_file)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank 0-7 (0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// File 0-7 (0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Mirror across the board's horizontal midline (a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(self.0 ^ 56)
    }

    /// Iterate all squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        Square::try_from(usize::from(idx))
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        Square::from_index(idx).ok_or(SquareError::IndexOutOfBounds { index: idx })
    }
}

/// Accepts a file letter and a rank digit in either order, case-insensitive
/// ("e2", "E2" and "2e" all name the same square).
impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let mut file = None;
        let mut rank = None;
        for c in chars {
            match c.to_ascii_lowercase() {
                f @ 'a'..='h' if file.is_none() => file = Some(f as u8 - b'a'),
                r @ '1'..='8' if rank.is_none() => rank = Some(r as u8 - b'1'),
                _ => return Err(invalid()),
            }
        }

        match (file, rank) {
            (Some(file), Some(rank)) => Square::new(rank, file).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}
