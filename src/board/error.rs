//! Error types for board operations.

use std::fmt;

use super::{Move, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Invalid half-move clock
    InvalidClock { found: String },
    /// Wrong number of ranks in position string
    InvalidRank { rank: usize },
    /// Wrong number of files in a rank
    BadFileCount { rank: usize, files: usize },
    /// Position does not hold exactly one king of this color
    KingCount { color: super::Color, found: usize },
    /// The side that just moved is left in check
    OpponentInCheck { color: super::Color },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidClock { found } => {
                write!(f, "Invalid half-move clock '{found}'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::BadFileCount { rank, files } => {
                write!(f, "Rank {rank} covers {files} files, expected 8")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            FenError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not their move")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Text is not a file letter a-h plus a rank digit 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for moves rejected by the game driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move is not legal in the current position
    Illegal { mv: Move },
    /// The game has already ended
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Illegal { mv } => write!(f, "Illegal move '{mv}'"),
            MoveError::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for decoding a stored 64-tile board record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardDecodeError {
    /// Record does not hold exactly 64 tiles
    WrongLength { found: usize },
    /// Tile code outside -6..=6
    InvalidTile { square: Square, code: i8 },
}

impl fmt::Display for BoardDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardDecodeError::WrongLength { found } => {
                write!(f, "Board record must hold 64 tiles, found {found}")
            }
            BoardDecodeError::InvalidTile { square, code } => {
                write!(f, "Invalid tile code {code} on {square}")
            }
        }
    }
}

impl std::error::Error for BoardDecodeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn test_fen_error_too_few_parts() {
        let err = FenError::TooFewParts { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_fen_error_king_count() {
        let err = FenError::KingCount {
            color: Color::Black,
            found: 0,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }

    #[test]
    fn test_move_error_illegal_move() {
        let mv = Move::new("e2".parse().unwrap(), "e5".parse().unwrap());
        let err = MoveError::Illegal { mv };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_board_decode_error_names_square() {
        let err = BoardDecodeError::InvalidTile {
            square: Square::H8,
            code: 9,
        };
        let text = err.to_string();
        assert!(text.contains("h8") && text.contains('9'));
    }
}
