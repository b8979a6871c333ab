//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules_engine::board::prelude::*;
//!
//! let state = GameState::new();
//! let e2: Square = "e2".parse().unwrap();
//! assert!(state.is_legal(e2, "e4".parse().unwrap()));
//! ```

pub use super::{
    find_best_move, Bitboard, Color, FenError, GameState, Move, MoveError, Piece, PieceKind,
    SearchConfig, SearchResult, Square, SquareError,
};
