//! Driving whole games through `Game`: move validation, end states and observers.

use std::sync::Arc;

use parking_lot::Mutex;

use chess_rules_engine::board::{Color, GameState, Move, MoveError, SearchConfig};
use chess_rules_engine::game::{DrawReason, Game, GameObserver, GameStatus, SnapshotObserver};

fn mv(text: &str) -> Move {
    text.parse().expect("valid move text")
}

fn play_all(game: &mut Game, moves: &[&str]) -> GameStatus {
    let mut status = game.status();
    for text in moves {
        status = game
            .play(mv(text))
            .unwrap_or_else(|err| panic!("{text}: {err}"));
    }
    status
}

/// Collects every move it is told about
#[derive(Clone, Default)]
struct MoveLog {
    moves: Arc<Mutex<Vec<Move>>>,
    attached: Arc<Mutex<bool>>,
}

impl GameObserver for MoveLog {
    fn on_attach(&mut self, _state: &GameState) {
        *self.attached.lock() = true;
    }

    fn on_move(&mut self, mv: Move, _state: &GameState) {
        self.moves.lock().push(mv);
    }
}

#[test]
fn new_game_is_in_progress() {
    let game = Game::new();
    assert_eq!(
        game.status(),
        GameStatus::InProgress {
            side_to_move: Color::White,
            in_check: false
        }
    );
    assert!(game.history().is_empty());
    assert_eq!(game.state(), &GameState::new());
}

#[test]
fn illegal_move_is_rejected_without_side_effects() {
    let mut game = Game::new();
    let before = *game.state();
    assert_eq!(
        game.play(mv("e2e5")),
        Err(MoveError::Illegal { mv: mv("e2e5") })
    );
    assert_eq!(game.play(mv("e7e5")), Err(MoveError::Illegal { mv: mv("e7e5") }));
    assert_eq!(*game.state(), before);
    assert!(game.history().is_empty());
}

#[test]
fn fools_mate_ends_the_game() {
    let mut game = Game::new();
    let status = play_all(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(
        status,
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert!(status.is_over());
    assert_eq!(status.to_string(), "Checkmate, Black wins");
    assert_eq!(game.history().len(), 4);

    assert_eq!(game.play(mv("e1f2")), Err(MoveError::GameOver));
    assert!(matches!(
        game.play_engine(&SearchConfig::with_depth(1)),
        Err(MoveError::GameOver)
    ));
}

#[test]
fn check_is_reported_while_in_progress() {
    let mut game = Game::new();
    let status = play_all(&mut game, &["e2e4", "f7f6", "d1h5"]);
    assert_eq!(
        status,
        GameStatus::InProgress {
            side_to_move: Color::Black,
            in_check: true
        }
    );
    assert_eq!(status.to_string(), "Black to move, in check");
}

#[test]
fn stalemate_is_a_draw() {
    let mut game = Game::from_state(GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"));
    assert_eq!(game.status(), GameStatus::Draw(DrawReason::Stalemate));
    assert_eq!(game.play(mv("h8g8")), Err(MoveError::GameOver));
}

#[test]
fn fifty_quiet_moves_draw_the_game() {
    let mut game = Game::from_state(GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 98 1"));
    let status = play_all(&mut game, &["a1a2"]);
    assert!(!status.is_over());
    let status = play_all(&mut game, &["e8d8"]);
    assert_eq!(status, GameStatus::Draw(DrawReason::FiftyMoveRule));
    assert_eq!(game.play(mv("a2a3")), Err(MoveError::GameOver));
}

#[test]
fn capture_restarts_the_fifty_move_count() {
    let mut game = Game::from_state(GameState::from_fen("4k3/8/8/8/8/8/r7/R3K3 w - - 99 1"));
    let status = play_all(&mut game, &["a1a2"]);
    assert!(!status.is_over());
    assert_eq!(game.state().plies_since_capture(), 0);
}

#[test]
fn observers_follow_every_move() {
    let mut game = Game::new();
    let snapshot = SnapshotObserver::new();
    let log = MoveLog::default();
    game.add_observer(Box::new(snapshot.clone()));
    game.add_observer(Box::new(log.clone()));

    assert!(*log.attached.lock());
    assert_eq!(snapshot.latest(), Some(GameState::new()));

    play_all(&mut game, &["e2e4", "c7c5", "g1f3"]);
    assert_eq!(snapshot.latest(), Some(*game.state()));
    assert_eq!(snapshot.try_latest(), Some(*game.state()));
    assert_eq!(*log.moves.lock(), game.history().to_vec());

    // Rejected moves are not broadcast.
    let _ = game.play(mv("a1a5"));
    assert_eq!(log.moves.lock().len(), 3);
}

#[test]
fn engine_moves_are_legal_and_recorded() {
    let mut game = Game::new();
    let log = MoveLog::default();
    game.add_observer(Box::new(log.clone()));
    let config = SearchConfig::with_depth(2);

    for _ in 0..4 {
        let before = *game.state();
        let (played, result) = game.play_engine(&config).expect("game continues");
        assert!(before.is_legal(played.from, played.to), "{played}");
        assert_eq!(result.best_move, Some(played));
        assert_eq!(*game.state(), before.after(played.from, played.to));
    }
    assert_eq!(game.history().len(), 4);
    assert_eq!(*log.moves.lock(), game.history().to_vec());
    assert!(game.state().kings_present());
}

#[test]
fn engine_delivers_mate_when_available() {
    let mut game = Game::from_state(GameState::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1"));
    let (played, result) = game
        .play_engine(&SearchConfig::with_depth(2))
        .expect("White has moves");
    assert_eq!(played, mv("e1e8"));
    assert!(result.is_mate());
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}
