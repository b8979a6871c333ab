//! Move representation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::SquareError;

/// A (from, to) square pair. Special-move side effects (castling rook,
/// en-passant victim, promotion) are derived from the position when applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Two squares, either run together ("e2e4") or separated by whitespace
/// ("E2 E4"). Each square accepts the forms `Square::from_str` accepts.
impl FromStr for Move {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let parts: Vec<&str> = s.split_whitespace().collect();
        let (from, to) = match parts.as_slice() {
            [from, to] => (*from, *to),
            [joined] if joined.len() == 4 && joined.is_ascii() => joined.split_at(2),
            _ => return Err(invalid()),
        };
        Ok(Move::new(from.parse()?, to.parse()?))
    }
}
