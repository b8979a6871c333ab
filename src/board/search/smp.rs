//! Parallel root search.
//!
//! Worker threads pull root move indices from a shared counter and score
//! each move with a full window on their own copy of the position. Scores
//! land in a table indexed like the root move list, so the final pick is the
//! same first-maximal rule the sequential driver applies.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;

use log::trace;
use parking_lot::Mutex;

use super::{alphabeta, immediate_mate, SearchResult, INFINITY};
use crate::board::{GameState, Move};

pub(super) fn search_root_parallel(
    state: &GameState,
    moves: &[Move],
    depth: u32,
    threads: usize,
) -> SearchResult {
    let next = AtomicUsize::new(0);
    let total_nodes = AtomicU64::new(1);
    let scores: Mutex<Vec<Option<i32>>> = Mutex::new(vec![None; moves.len()]);

    thread::scope(|scope| {
        for worker in 0..threads.min(moves.len()) {
            let next = &next;
            let total_nodes = &total_nodes;
            let scores = &scores;
            scope.spawn(move || {
                let mut nodes = 0;
                loop {
                    let idx = next.fetch_add(1, Ordering::Relaxed);
                    let Some(&mv) = moves.get(idx) else {
                        break;
                    };
                    let child = state.after(mv.from, mv.to);
                    let value = -alphabeta(&child, -INFINITY, INFINITY, depth - 1, &mut nodes);
                    trace!("worker {worker} root {mv}: {value}");
                    scores.lock()[idx] = Some(value);
                }
                total_nodes.fetch_add(nodes, Ordering::Relaxed);
            });
        }
    });

    let scores = scores.into_inner();
    let mut best = -INFINITY;
    let mut best_move = None;
    for (&mv, score) in moves.iter().zip(scores) {
        let Some(value) = score else { continue };
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
        nodes: total_nodes.into_inner(),
        depth,
    }
}
