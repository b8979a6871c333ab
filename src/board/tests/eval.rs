//! Static evaluation tests.

use super::play;
use crate::board::eval::CHECK_PENALTY;
use crate::board::{GameState, MATE_SCORE};

#[test]
fn test_starting_position_is_balanced() {
    assert_eq!(GameState::new().evaluate(), 0);
    assert_eq!(GameState::new().material_score(), 0);
}

#[test]
fn test_mirrored_positions_negate() {
    let white = GameState::from_fen("4k3/8/8/8/3N4/8/1P6/4K3 w - - 0 1");
    let black = GameState::from_fen("4k3/1p6/8/3n4/8/8/8/4K3 w - - 0 1");
    assert!(white.material_score() > 0);
    assert_eq!(white.material_score(), -black.material_score());
}

#[test]
fn test_material_dominates() {
    let up_a_rook = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    let up_a_knight = GameState::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
    assert!(up_a_rook.evaluate() > up_a_knight.evaluate());
    assert!(up_a_knight.evaluate() > 0);
}

#[test]
fn test_central_knight_beats_rim_knight() {
    let center = GameState::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
    let rim = GameState::from_fen("4k3/8/8/8/N7/8/8/4K3 w - - 0 1");
    assert!(center.evaluate() > rim.evaluate());
}

#[test]
fn test_check_penalty_applies_to_side_to_move() {
    let white_checked = GameState::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
    assert_eq!(
        white_checked.evaluate(),
        white_checked.material_score() - CHECK_PENALTY
    );

    let black_checked = GameState::from_fen("4k3/4R3/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(
        black_checked.evaluate(),
        black_checked.material_score() + CHECK_PENALTY
    );
}

#[test]
fn test_checkmate_scores_for_winner() {
    let mut white_wins = GameState::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    play(&mut white_wins, &["e1e8"]);
    assert_eq!(white_wins.evaluate(), MATE_SCORE);

    let mut black_wins = GameState::new();
    play(&mut black_wins, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(black_wins.evaluate(), -MATE_SCORE);
}
