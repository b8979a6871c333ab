use std::env;
use std::process::ExitCode;

use chess_rules_engine::board::{GameState, Move};
use chess_rules_engine::game::Game;

fn main() -> ExitCode {
    let mut args = env::args().skip(1).peekable();
    if args.peek().is_none() {
        eprintln!("usage: position_status [--fen <fen>] <move1> <move2> ...");
        return ExitCode::from(2);
    }

    let mut state = GameState::new();
    if args.peek().map(String::as_str) == Some("--fen") {
        args.next();
        let Some(fen) = args.next() else {
            eprintln!("--fen needs a position");
            return ExitCode::from(2);
        };
        match GameState::try_from_fen(&fen) {
            Ok(parsed) => state = parsed,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::from(2);
            }
        }
    }

    let mut game = Game::from_state(state);
    for text in args {
        let played = text
            .parse::<Move>()
            .map_err(|err| err.to_string())
            .and_then(|mv| game.play(mv).map_err(|err| err.to_string()));
        if let Err(err) = played {
            eprintln!("{text}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let state = game.state();
    let legal_moves = state.legal_moves();
    println!("fen: {}", state.to_fen());
    println!("side_to_move: {}", state.side_to_move());
    println!("status: {}", game.status());
    println!("evaluation: {}", state.evaluate());
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
