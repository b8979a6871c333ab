//! Chess position, rules and search.
//!
//! A `GameState` is a plain `Copy` value: a 64-tile mailbox board, one
//! `SideState` per color, the en-passant file and the capture counter.
//! Legality checks and search nodes work on copies instead of undoing moves.
//! Attack masks are `Bitboard`s.
//!
//! # Example
//! ```
//! use chess_rules_engine::board::{find_best_move, GameState, SearchConfig};
//!
//! let state = GameState::new();
//! assert_eq!(state.legal_moves().len(), 20);
//! let result = find_best_move(&state, &SearchConfig::with_depth(2));
//! assert!(result.best_move.is_some());
//! ```

mod attack_tables;
mod error;
mod eval;
mod fen;
mod make_move;
mod movegen;
mod perft;
pub mod prelude;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{BoardDecodeError, FenError, MoveError, SquareError};
pub use eval::{FIFTY_MOVE_PLIES, MATE_SCORE};
pub use fen::STARTING_FEN;
pub use state::{Board, GameState};
pub use types::{
    home_king_square, home_rook_square, Bitboard, BitboardIter, Color, Move, Piece, PieceKind,
    SideState, Square,
};

pub use search::{find_best_move, SearchConfig, SearchResult, DEFAULT_DEPTH, INFINITY};

pub(crate) use types::rook_home_owner;
