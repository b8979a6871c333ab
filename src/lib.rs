//! Chess rules engine with a fixed-depth alpha-beta player.
//!
//! - [`board`] holds the position, attack masks, legality, move application,
//!   evaluation and search.
//! - [`game`] drives a game: validates moves, runs the engine and reports
//!   the result to observers.
//! - [`config`] and [`logger`] serve the terminal binary.

pub mod board;
pub mod config;
pub mod game;
pub mod logger;

pub use board::{
    find_best_move, Color, GameState, Move, Piece, PieceKind, SearchConfig, SearchResult, Square,
};
pub use game::{DrawReason, Game, GameObserver, GameStatus, SnapshotObserver};
