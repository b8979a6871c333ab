use super::error::FenError;
use super::{
    home_king_square, home_rook_square, Board, Color, GameState, Piece, PieceKind, SideState,
    Square,
};

/// Standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl GameState {
    /// Parse a position from FEN notation.
    ///
    /// Castling letters map onto the touched flags: a missing right marks that
    /// rook as touched, and a side with no right at all has its king marked as
    /// moved. The half-move clock becomes the plies-since-capture counter and
    /// the en passant square only contributes its file.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut sides = [SideState::new(Color::White), SideState::new(Color::Black)];
        for color in Color::BOTH {
            let kings = board.kings(color);
            let king_sq = match kings.iter().next() {
                Some(sq) if kings.popcount() == 1 => sq,
                _ => {
                    return Err(FenError::KingCount {
                        color,
                        found: kings.popcount() as usize,
                    })
                }
            };
            sides[color.index()].place_king(king_sq);
        }

        let mut rights = [[false; 2]; 2];
        for c in parts[2].chars() {
            match c {
                'K' => rights[Color::White.index()][1] = true,
                'Q' => rights[Color::White.index()][0] = true,
                'k' => rights[Color::Black.index()][1] = true,
                'q' => rights[Color::Black.index()][0] = true,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        for color in Color::BOTH {
            let side = &mut sides[color.index()];
            let [queenside, kingside] = rights[color.index()];
            if (!queenside && !kingside) || side.king_square() != home_king_square(color) {
                side.touch_king();
            }
            for (kingside, allowed) in [(false, queenside), (true, kingside)] {
                let rook = Piece::new(color, PieceKind::Rook);
                if !allowed || board.get(home_rook_square(color, kingside)) != Some(rook) {
                    side.touch_rook(kingside);
                }
            }
        }

        let en_passant_file = match parts[3] {
            "-" => None,
            text => {
                let invalid = || FenError::InvalidEnPassant {
                    found: text.to_string(),
                };
                let sq: Square = text.parse().map_err(|_| invalid())?;
                let expected_rank = match side_to_move {
                    Color::White => 5,
                    Color::Black => 2,
                };
                if sq.rank() != expected_rank {
                    return Err(invalid());
                }
                Some(sq.file())
            }
        };

        let plies_since_capture = match parts.get(4) {
            Some(text) => text.parse().map_err(|_| FenError::InvalidClock {
                found: (*text).to_string(),
            })?,
            None => 0,
        };

        let state = GameState {
            board,
            sides,
            en_passant_file,
            plies_since_capture,
            side_to_move,
        };
        let waiting = side_to_move.opponent();
        if state.is_in_check(waiting) {
            return Err(FenError::OpponentInCheck { color: waiting });
        }
        Ok(state)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation. The full-move number is not
    /// tracked and is always written as 1.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                match Square::new(rank, file).and_then(|sq| self.board.get(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (color, kingside, letter) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.side(color).can_castle(kingside) {
                castling.push(letter);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = self
            .en_passant_file
            .and_then(|file| {
                let rank = match self.side_to_move {
                    Color::White => 5,
                    Color::Black => 2,
                };
                Square::new(rank, file)
            })
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {side} {castling} {en_passant} {} 1",
            rows.join("/"),
            self.plies_since_capture
        )
    }
}

fn parse_placement(text: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = text.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRank { rank: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.into_iter().enumerate() {
        let rank = 7 - rank_idx as u8;
        let mut file: u8 = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file = file.saturating_add(skip as u8);
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let sq = Square::new(rank, file).ok_or(FenError::BadFileCount {
                rank: rank_idx,
                files: usize::from(file) + 1,
            })?;
            board.set(sq, Some(piece));
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadFileCount {
                rank: rank_idx,
                files: usize::from(file),
            });
        }
    }
    Ok(board)
}
