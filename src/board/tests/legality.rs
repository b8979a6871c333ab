//! Legality filter tests.

use super::{play, sq};
use crate::board::{Color, GameState, Move, PieceKind};

fn legal(state: &GameState, from: &str, to: &str) -> bool {
    state.is_legal(sq(from), sq(to))
}

#[test]
fn test_starting_position_has_twenty_moves() {
    let state = GameState::new();
    let moves = state.legal_moves();
    assert_eq!(moves.len(), 20);

    let pawn_moves = moves
        .iter()
        .filter(|m| state.piece_at(m.from).map(|p| p.kind) == Some(PieceKind::Pawn))
        .count();
    assert_eq!(pawn_moves, 16);

    let mut sorted = moves.clone();
    sorted.sort_by_key(|m| (m.from.index(), m.to.index()));
    assert_eq!(moves, sorted);
    assert_eq!(moves[0], Move::new(sq("b1"), sq("a3")));
}

#[test]
fn test_legal_moves_match_exhaustive_enumeration() {
    let state = GameState::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    );
    let mut exhaustive = Vec::new();
    for from in crate::board::Square::all() {
        for to in crate::board::Square::all() {
            if state.is_legal(from, to) {
                exhaustive.push(Move::new(from, to));
            }
        }
    }
    assert_eq!(state.legal_moves(), exhaustive);
    assert_eq!(exhaustive.len(), 48);
}

#[test]
fn test_basic_rejections() {
    let state = GameState::new();
    assert!(!legal(&state, "e4", "e5"), "empty origin");
    assert!(!legal(&state, "e7", "e5"), "opponent's piece");
    assert!(!legal(&state, "a1", "a2"), "own piece on target");
    assert!(!legal(&state, "e2", "e2"), "null move");
    assert!(!legal(&state, "e2", "e5"), "pawn triple step");
    assert!(!legal(&state, "c1", "e3"), "bishop through own pawn");
}

#[test]
fn test_pinned_piece_cannot_expose_king() {
    let state = GameState::from_fen("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1");
    assert!(state.attacks_from(sq("e2")).contains(sq("c3")));
    assert!(!legal(&state, "e2", "c3"));
    assert!(!legal(&state, "e2", "g1"));
    assert!(legal(&state, "e1", "d1"));
    assert!(state
        .legal_moves()
        .iter()
        .all(|m| m.from != sq("e2")));
}

#[test]
fn test_king_cannot_step_into_attack() {
    let state = GameState::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1");
    assert!(!legal(&state, "e1", "d1"));
    assert!(!legal(&state, "e1", "e2"));
    assert!(!legal(&state, "e1", "f2"));
    assert!(legal(&state, "e1", "f1"));
    assert!(legal(&state, "e1", "d2"), "undefended rook can be taken");
}

#[test]
fn test_king_cannot_retreat_along_checking_ray() {
    let state = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
    assert!(state.is_in_check(Color::White));
    assert!(!legal(&state, "e1", "f1"));
    assert!(!legal(&state, "e1", "d1"));
    assert!(legal(&state, "e1", "e2"));
    assert!(legal(&state, "e1", "f2"));
}

#[test]
fn test_check_must_be_answered() {
    let state = GameState::from_fen("4k3/8/8/8/8/8/PPP5/K3r3 w - - 0 1");
    // Back-rank check from e1: only blocking or capturing helps, and nothing can.
    assert!(state.is_in_check(Color::White));
    assert!(state.legal_moves().is_empty());
    assert!(state.is_checkmate());
}

#[test]
fn test_castling_both_wings() {
    let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert!(legal(&state, "e1", "g1"));
    assert!(legal(&state, "e1", "c1"));
    assert!(!legal(&state, "e1", "b1"), "only two-file castles");

    let black = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    assert!(legal(&black, "e8", "g8"));
    assert!(legal(&black, "e8", "c8"));
}

#[test]
fn test_castling_blocked_by_pieces() {
    let state = GameState::new();
    assert!(!legal(&state, "e1", "g1"));
    assert!(!legal(&state, "e1", "c1"));

    let knight_on_b1 = GameState::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
    assert!(!legal(&knight_on_b1, "e1", "c1"));
    assert!(legal(&knight_on_b1, "e1", "g1"));
}

#[test]
fn test_castling_through_attacked_square() {
    let state = GameState::from_fen("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1");
    assert!(!legal(&state, "e1", "g1"), "f1 is attacked");
    assert!(legal(&state, "e1", "c1"));

    let b1_attacked = GameState::from_fen("r3k2r/8/8/8/8/8/1r6/R3K2R w KQkq - 0 1");
    assert!(legal(&b1_attacked, "e1", "c1"), "b1 is not crossed by the king");
}

#[test]
fn test_castling_out_of_check() {
    let state = GameState::from_fen("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1");
    assert!(!legal(&state, "e1", "g1"));
    assert!(!legal(&state, "e1", "c1"));
}

#[test]
fn test_castling_gone_after_king_returns_home() {
    let mut state = GameState::from_fen("r3k2r/p7/8/8/8/8/P7/R3K2R w KQkq - 0 1");
    play(&mut state, &["e1f1", "a7a6", "f1e1", "a6a5"]);
    assert!(state.side(Color::White).king_moved());
    assert!(!legal(&state, "e1", "g1"));
    assert!(!legal(&state, "e1", "c1"));
}

#[test]
fn test_castling_gone_after_rook_captured_at_home() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play(&mut state, &["a1a8"]);
    assert!(state.side(Color::Black).rook_touched(false));
    assert!(state.side(Color::White).rook_touched(false));
    assert!(!state.side(Color::Black).can_castle(false));
    assert!(state.side(Color::Black).can_castle(true));
}

#[test]
fn test_trial_moves_leave_flags_untouched() {
    let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let before = state;
    for (from, to) in [("e1", "f1"), ("h1", "h5"), ("e1", "g1"), ("a1", "a8")] {
        assert!(legal(&state, from, to));
    }
    assert_eq!(state, before);
    assert!(!state.side(Color::White).king_moved());
}

#[test]
fn test_en_passant_window() {
    let mut state = GameState::from_fen("4k3/8/8/8/5p2/8/4P3/4K3 w - - 0 1");
    play(&mut state, &["e2e4"]);
    assert_eq!(state.en_passant_file(), Some(4));
    assert!(legal(&state, "f4", "e3"));

    let mut late = state;
    play(&mut late, &["e8d8", "e1d1"]);
    assert_eq!(late.en_passant_file(), None);
    assert!(!legal(&late, "f4", "e3"));
}

#[test]
fn test_en_passant_only_for_adjacent_double_step() {
    let mut state = GameState::from_fen("4k3/8/8/8/5p2/8/6P1/4K3 w - - 0 1");
    play(&mut state, &["g2g3"]);
    assert_eq!(state.en_passant_file(), None);
    assert!(!legal(&state, "f4", "e3"));

    let mut far = GameState::from_fen("4k3/8/8/8/5p2/8/P7/4K3 w - - 0 1");
    play(&mut far, &["a2a4"]);
    assert!(!legal(&far, "f4", "e3"));
    assert!(!legal(&far, "f4", "g3"));
}

#[test]
fn test_en_passant_rejected_when_it_exposes_king() {
    // Both pawns leave the fifth rank and open it for the rook.
    let mut state = GameState::from_fen("8/8/8/8/k4p1R/8/4P3/4K3 w - - 0 1");
    play(&mut state, &["e2e4"]);
    assert!(!legal(&state, "f4", "e3"));
}

#[test]
fn test_pawn_pushes_need_empty_squares() {
    let state = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/K7 w - - 0 1");
    assert!(!legal(&state, "e2", "e3"), "pawns do not capture forward");
    assert!(!legal(&state, "e2", "e4"), "double step jumps the blocker");

    let moved = GameState::from_fen("4k3/8/8/8/8/4P3/8/K7 w - - 0 1");
    assert!(legal(&moved, "e3", "e4"));
    assert!(!legal(&moved, "e3", "e5"), "double step only from the start rank");
}

#[test]
fn test_pawn_diagonal_needs_enemy() {
    let state = GameState::from_fen("4k3/8/8/8/8/3p1P2/4P3/K7 w - - 0 1");
    assert!(legal(&state, "e2", "d3"));
    assert!(!legal(&state, "e2", "f3"));
    assert!(!legal(&state, "f3", "g4"));
}

#[test]
fn test_promotion_moves_are_legal() {
    let state = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    assert!(legal(&state, "a7", "a8"));
    assert!(legal(&state, "a7", "b8"));
}
