//! Invariant checks over every position reachable within a few plies.
//!
//! Each position reached by legal play must keep one king per color on its
//! recorded square, never leave the mover in check, and only ever shrink the
//! castling rights.

use roque_core::{CastleSide, Color, GameState, Move, is_in_check, perft};

const CASTLING_FEN: &str = "r3k2r/pppq1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPQ1PPP/R3K2R w KQkq - 0 1";

const PROMOTION_FEN: &str = "4k3/1P4P1/8/8/8/8/1p4p1/4K3 w - - 0 1";

fn rights_subset(after: &GameState, before: &GameState) -> bool {
    Color::ALL.into_iter().all(|color| {
        CastleSide::ALL
            .into_iter()
            .all(|side| !after.castling().has(color, side) || before.castling().has(color, side))
    })
}

fn check_move(state: &GameState, mv: Move) -> GameState {
    let mover = state.side_to_move();
    assert_ne!(
        state.board().color_at(mv.to()),
        Some(mover),
        "{mv:?} lands on its own piece in {state:?}"
    );

    let next = state
        .make_move(mv)
        .unwrap_or_else(|err| panic!("generated move {mv:?} rejected in {state:?}: {err}"));

    next.validate()
        .unwrap_or_else(|err| panic!("{mv:?} from {state:?} broke the position: {err}"));

    let king = next.king_square(mover).expect("validated");
    assert!(
        !is_in_check(next.board(), king, mover),
        "{mv:?} leaves {mover} in check in {next:?}"
    );
    assert!(!next.in_check(mover));

    let them = next.side_to_move();
    assert_eq!(them, !mover);
    let their_king = next.king_square(them).expect("validated");
    assert_eq!(
        next.in_check(them),
        is_in_check(next.board(), their_king, them),
        "stale check flag after {mv:?} in {next:?}"
    );

    assert!(
        rights_subset(&next, state),
        "{mv:?} granted castling rights in {next:?}"
    );
    next
}

fn walk(state: &GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for mv in state.all_legal_moves() {
        let next = check_move(state, mv);
        nodes += walk(&next, depth - 1);
    }
    nodes
}

// ── Walks ─────────────────────────────────────────────────────────────────────

#[test]
fn walk_from_starting_position() {
    let state = GameState::starting_position();
    let nodes = walk(&state, 3);
    assert_eq!(nodes, perft(&state, 3));
}

#[test]
fn walk_through_castling_middlegame() {
    let state: GameState = CASTLING_FEN.parse().unwrap();
    let nodes = walk(&state, 2);
    assert_eq!(nodes, perft(&state, 2));
}

#[test]
fn walk_through_promotions() {
    let state: GameState = PROMOTION_FEN.parse().unwrap();
    let nodes = walk(&state, 3);
    assert_eq!(nodes, perft(&state, 3));
}

// ── Move list properties ─────────────────────────────────────────────────────

#[test]
fn promotions_are_always_flagged_on_the_last_row() {
    let state: GameState = PROMOTION_FEN.parse().unwrap();
    for mv in state.all_legal_moves() {
        let is_pawn_to_last_row = state
            .board()
            .piece_at(mv.from())
            .is_some_and(|piece| piece.kind() == roque_core::PieceKind::Pawn)
            && mv.to().row() == 0;
        assert_eq!(mv.is_promotion(), is_pawn_to_last_row, "{mv:?}");
    }
}

#[test]
fn castle_moves_only_from_home_square() {
    let state: GameState = CASTLING_FEN.parse().unwrap();
    let castles: Vec<Move> = state
        .all_legal_moves()
        .into_iter()
        .filter(|mv| mv.is_castle())
        .collect();
    assert_eq!(castles.len(), 2);
    for mv in castles {
        assert_eq!(mv.from().row(), 7);
        assert_eq!(mv.from().col(), 4);
    }
}
