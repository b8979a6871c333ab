//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! Every node works on its own value copy of the position, so sibling
//! branches never share state. Root moves are tried in `legal_moves` order
//! and the first move reaching the best value is kept.

mod constants;
mod params;
mod smp;

use log::{debug, info, trace};

use super::eval::FIFTY_MOVE_PLIES;
use super::{GameState, Move, MATE_SCORE};

pub use constants::{DEFAULT_DEPTH, INFINITY};
pub use params::SearchConfig;

/// Outcome of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move` from the mover's point of view
    pub score: i32,
    /// Nodes visited, root included
    pub nodes: u64,
    pub depth: u32,
}

impl SearchResult {
    /// True when the score announces a forced mate for either side
    #[must_use]
    pub fn is_mate(&self) -> bool {
        self.score.abs() >= MATE_SCORE
    }
}

/// Score of a node without legal moves: mated, or stalemate.
///
/// Mates found with more depth left are worse for the mated side, so the
/// winner prefers the shortest mate.
#[inline]
fn terminal_score(in_check: bool, depth: u32) -> i32 {
    if in_check {
        -(MATE_SCORE + depth as i32)
    } else {
        0
    }
}

/// Negamax with a fail-hard alpha-beta window. Returns the score from the
/// point of view of the side to move in `state`.
pub(crate) fn alphabeta(
    state: &GameState,
    alpha: i32,
    beta: i32,
    depth: u32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    let in_check = state.is_in_check(state.side_to_move());

    if depth == 0 {
        if !state.has_legal_move() {
            return terminal_score(in_check, depth);
        }
        if state.plies_since_capture() >= FIFTY_MOVE_PLIES {
            return 0;
        }
        return state.side_to_move().sign() * state.static_score(in_check);
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        return terminal_score(in_check, depth);
    }
    if state.plies_since_capture() >= FIFTY_MOVE_PLIES {
        return 0;
    }

    let mut best = alpha;
    for mv in moves {
        let child = state.after(mv.from, mv.to);
        let value = -alphabeta(&child, -beta, -best, depth - 1, nodes);
        if value > best {
            best = value;
        }
        if best >= beta {
            return best;
        }
    }
    best
}

/// Search `state` to the configured depth and return the move to play.
#[must_use]
pub fn find_best_move(state: &GameState, config: &SearchConfig) -> SearchResult {
    let depth = config.effective_depth();
    let moves = state.legal_moves();
    debug!(
        "search start: depth {depth}, {} root moves, {} threads",
        moves.len(),
        config.effective_threads()
    );

    if moves.is_empty() {
        let in_check = state.is_in_check(state.side_to_move());
        return SearchResult {
            best_move: None,
            score: terminal_score(in_check, depth),
            nodes: 1,
            depth,
        };
    }

    let result = if config.effective_threads() > 1 && moves.len() > 1 {
        smp::search_root_parallel(state, &moves, depth, config.effective_threads())
    } else {
        search_root(state, &moves, depth)
    };

    info!(
        "depth {} best {} score {} nodes {}",
        result.depth,
        result
            .best_move
            .map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        result.score,
        result.nodes
    );
    result
}

/// Root value at or above which a root move mates on the spot
#[inline]
fn immediate_mate(depth: u32) -> i32 {
    MATE_SCORE + depth as i32 - 1
}

fn search_root(state: &GameState, moves: &[Move], depth: u32) -> SearchResult {
    let mut nodes = 1;
    let mut best = -INFINITY;
    let mut best_move = None;

    for &mv in moves {
        let child = state.after(mv.from, mv.to);
        let value = -alphabeta(&child, -INFINITY, -best, depth - 1, &mut nodes);
        trace!("root {mv}: {value}");
        if value > best {
            best = value;
            best_move = Some(mv);
            if value >= immediate_mate(depth) {
                break;
            }
        }
    }

    SearchResult {
        best_move,
        score: best,
        nodes,
        depth,
    }
}
