//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `legality.rs` - Legal move filter, castling and en passant gating
//! - `make_move.rs` - Move application side effects
//! - `draw.rs` - Checkmate, stalemate and fifty-move detection
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Negamax search and root move selection
//! - `perft.rs` - Move generation node counts
//! - `proptest.rs` - Property-based tests

mod eval;
mod legality;

use crate::board::{GameState, Move, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn mv(text: &str) -> Move {
    text.parse().expect("valid move")
}

/// Play a sequence of moves, asserting each one is legal.
pub(super) fn play(state: &mut GameState, moves: &[&str]) {
    for text in moves {
        let m = mv(text);
        assert!(state.is_legal(m.from, m.to), "{text} should be legal in {}", state.to_fen());
        state.apply(m.from, m.to);
    }
}
