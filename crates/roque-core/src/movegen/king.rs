//! King steps and castling.

use crate::attacks::{KING_OFFSETS, is_square_attacked};
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::game_state::GameState;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{MoveList, step_to};

/// Generate pseudo-legal king moves: the eight steps plus any permitted castles.
pub(super) fn gen_king(state: &GameState, from: Square, color: Color, list: &mut MoveList) {
    let board = state.board();
    for &(dr, dc) in &KING_OFFSETS {
        if let Some(mv) = from
            .offset(dr, dc)
            .and_then(|to| step_to(board, from, to, color))
        {
            list.push(mv);
        }
    }

    for side in CastleSide::ALL {
        if can_castle(state, from, color, side) {
            list.push(Move::castle(from, from.with_col(side.king_target_col()), side));
        }
    }
}

/// Return `true` if the `color` king on `king_sq` may castle toward `side`.
///
/// Requires the castling flag, the king on its home square and not in check,
/// the own rook on its corner, empty squares between them, and no attacked
/// square on the king's path including its destination.
pub fn can_castle(state: &GameState, king_sq: Square, color: Color, side: CastleSide) -> bool {
    if !state.castling().has(color, side) {
        return false;
    }

    let row = color.back_row();
    if king_sq.row() != row || king_sq.col() != CastleSide::KING_COL {
        return false;
    }

    let board = state.board();
    if is_square_attacked(board, king_sq, color) {
        return false;
    }

    let rook_home = king_sq.with_col(side.rook_col());
    if !board
        .piece_at(rook_home)
        .is_some_and(|piece| piece.is(PieceKind::Rook, color))
    {
        return false;
    }

    if !side
        .between_cols()
        .iter()
        .all(|&col| board.is_empty(king_sq.with_col(col)))
    {
        return false;
    }

    side.transit_cols()
        .iter()
        .all(|&col| !is_square_attacked(board, king_sq.with_col(col), color))
}

#[cfg(test)]
mod tests {
    use super::can_castle;
    use crate::castle_rights::CastleSide;
    use crate::color::Color;
    use crate::game_state::GameState;
    use crate::movegen::pseudo_legal_moves;
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn state(fen: &str) -> GameState {
        fen.parse().unwrap()
    }

    #[test]
    fn both_sides_open() {
        let s = state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert!(can_castle(&s, sq(7, 4), Color::White, CastleSide::KingSide));
        assert!(can_castle(&s, sq(7, 4), Color::White, CastleSide::QueenSide));
        assert!(can_castle(&s, sq(0, 4), Color::Black, CastleSide::KingSide));
        assert!(can_castle(&s, sq(0, 4), Color::Black, CastleSide::QueenSide));

        let moves = pseudo_legal_moves(&s, sq(7, 4));
        assert_eq!(moves.len(), 7);
        assert!(moves.find_to(sq(7, 6)).is_some_and(|mv| mv.is_castle()));
        assert!(moves.find_to(sq(7, 2)).is_some_and(|mv| mv.is_castle()));
    }

    #[test]
    fn flag_required() {
        let s = state("r3k2r/8/8/8/8/8/8/R3K2R w Qk - 0 1");
        assert!(!can_castle(&s, sq(7, 4), Color::White, CastleSide::KingSide));
        assert!(can_castle(&s, sq(7, 4), Color::White, CastleSide::QueenSide));
        assert!(!can_castle(&s, sq(0, 4), Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn not_out_of_check() {
        let s = state("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1");
        assert!(!can_castle(&s, sq(7, 4), Color::White, CastleSide::KingSide));
        assert!(!can_castle(&s, sq(7, 4), Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn not_through_attacked_square() {
        // Bishop on (2, 0) covers (7, 5) along the diagonal.
        let s = state("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!can_castle(&s, sq(7, 4), Color::White, CastleSide::KingSide));
        assert!(can_castle(&s, sq(7, 4), Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn not_onto_attacked_square() {
        // Rook on the g-file covers the king-side destination.
        let s = state("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!can_castle(&s, sq(7, 4), Color::White, CastleSide::KingSide));
    }

    #[test]
    fn queen_side_b_square_may_be_attacked_but_not_occupied() {
        // Rook on the b-file attacks (7, 1), which the king never crosses.
        let s = state("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(can_castle(&s, sq(7, 4), Color::White, CastleSide::QueenSide));

        let s = state("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
        assert!(!can_castle(&s, sq(7, 4), Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn rook_must_be_home_and_own() {
        let s = state("4k3/8/8/8/8/8/8/4K2r w K - 0 1");
        assert!(!can_castle(&s, sq(7, 4), Color::White, CastleSide::KingSide));

        let s = state("4k3/8/8/8/8/8/8/4K3 w K - 0 1");
        assert!(!can_castle(&s, sq(7, 4), Color::White, CastleSide::KingSide));
    }

    #[test]
    fn king_must_be_home() {
        let s = state("4k3/8/8/8/8/8/8/R4K1R w KQ - 0 1");
        assert!(!can_castle(&s, sq(7, 5), Color::White, CastleSide::KingSide));
    }
}
