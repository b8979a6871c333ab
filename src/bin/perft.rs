//! Perft binary to verify move generation against published node counts.
use std::env;
use std::time::Instant;

use chess_rules_engine::board::{GameState, STARTING_FEN};

fn main() {
    let mut args = env::args().skip(1);
    let depth: u32 = args.next().and_then(|d| d.parse().ok()).unwrap_or(4);
    let fen = args.collect::<Vec<_>>().join(" ");
    let fen = if fen.is_empty() { STARTING_FEN.to_string() } else { fen };

    let state = match GameState::try_from_fen(&fen) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    println!("{state}\n");
    for (mv, nodes) in state.perft_divide(depth) {
        println!("{mv}: {nodes}");
    }

    for d in 1..=depth {
        let start = Instant::now();
        let nodes = state.perft(d);
        println!("perft({d}) = {nodes} ({:.2?})", start.elapsed());
    }
}
