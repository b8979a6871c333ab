//! Game driver.
//!
//! `Game` owns the authoritative position. It is the only place a real move
//! is applied: human moves go through `play`, engine moves through
//! `play_engine`. Registered observers see every confirmed move.

use std::fmt;
use std::sync::Arc;

use log::{debug, info};
use parking_lot::Mutex;

use crate::board::{
    find_best_move, Color, GameState, Move, MoveError, SearchConfig, SearchResult,
    FIFTY_MOVE_PLIES,
};

/// Why a game ended without a winner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawReason {
    /// Side to move has no legal move and is not in check
    Stalemate,
    /// `FIFTY_MOVE_PLIES` plies without a capture
    FiftyMoveRule,
}

/// Plain-data view of where the game stands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress { side_to_move: Color, in_check: bool },
    Checkmate { winner: Color },
    Draw(DrawReason),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress {
                side_to_move,
                in_check: true,
            } => write!(f, "{side_to_move} to move, in check"),
            GameStatus::InProgress { side_to_move, .. } => write!(f, "{side_to_move} to move"),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate, {winner} wins"),
            GameStatus::Draw(DrawReason::Stalemate) => write!(f, "Draw by stalemate"),
            GameStatus::Draw(DrawReason::FiftyMoveRule) => write!(f, "Draw by the fifty-move rule"),
        }
    }
}

/// Notified by `Game` after every confirmed move.
pub trait GameObserver: Send {
    /// Called once when the observer is registered
    fn on_attach(&mut self, _state: &GameState) {}

    fn on_move(&mut self, mv: Move, state: &GameState);
}

/// Keeps a copy of the latest position in shared storage, so that a panic
/// hook or another thread can dump it.
#[derive(Clone, Debug, Default)]
pub struct SnapshotObserver {
    latest: Arc<Mutex<Option<GameState>>>,
}

impl SnapshotObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn latest(&self) -> Option<GameState> {
        *self.latest.lock()
    }

    /// Like `latest`, but gives up instead of blocking when the lock is held
    #[must_use]
    pub fn try_latest(&self) -> Option<GameState> {
        self.latest.try_lock().and_then(|slot| *slot)
    }

    fn record(&self, state: &GameState) {
        *self.latest.lock() = Some(*state);
    }
}

impl GameObserver for SnapshotObserver {
    fn on_attach(&mut self, state: &GameState) {
        self.record(state);
    }

    fn on_move(&mut self, _mv: Move, state: &GameState) {
        self.record(state);
    }
}

/// One game in progress
pub struct Game {
    state: GameState,
    history: Vec<Move>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// New game from the standard starting position
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Game {
            state,
            history: Vec::new(),
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Moves confirmed so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn add_observer(&mut self, mut observer: Box<dyn GameObserver>) {
        observer.on_attach(&self.state);
        self.observers.push(observer);
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        let side_to_move = self.state.side_to_move();
        let in_check = self.state.is_in_check(side_to_move);
        if !self.state.has_legal_move() {
            return if in_check {
                GameStatus::Checkmate {
                    winner: side_to_move.opponent(),
                }
            } else {
                GameStatus::Draw(DrawReason::Stalemate)
            };
        }
        if self.state.plies_since_capture() >= FIFTY_MOVE_PLIES {
            return GameStatus::Draw(DrawReason::FiftyMoveRule);
        }
        GameStatus::InProgress {
            side_to_move,
            in_check,
        }
    }

    /// Validate and play a move for the side to move.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.state.is_legal(mv.from, mv.to) {
            debug!("rejected {mv}");
            return Err(MoveError::Illegal { mv });
        }
        self.commit(mv);
        Ok(self.status())
    }

    /// Let the engine pick and play a move for the side to move.
    pub fn play_engine(&mut self, config: &SearchConfig) -> Result<(Move, SearchResult), MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }
        let result = find_best_move(&self.state, config);
        let mv = result.best_move.ok_or(MoveError::GameOver)?;
        self.commit(mv);
        Ok((mv, result))
    }

    fn commit(&mut self, mv: Move) {
        let mover = self.state.side_to_move();
        self.state.apply(mv.from, mv.to);
        assert!(
            self.state.kings_present(),
            "king missing after {mover} played {mv}"
        );
        self.history.push(mv);
        info!("{mover} played {mv}");
        for observer in &mut self.observers {
            observer.on_move(mv, &self.state);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
