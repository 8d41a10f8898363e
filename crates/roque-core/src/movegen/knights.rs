//! Knight move generation.

use crate::attacks::KNIGHT_OFFSETS;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::{MoveList, step_to};

/// Generate pseudo-legal knight jumps for a `color` knight on `from`.
pub(super) fn gen_knights(board: &Board, from: Square, color: Color, list: &mut MoveList) {
    for &(dr, dc) in &KNIGHT_OFFSETS {
        if let Some(mv) = from
            .offset(dr, dc)
            .and_then(|to| step_to(board, from, to, color))
        {
            list.push(mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gen_knights;
    use crate::board::Board;
    use crate::color::Color;
    use crate::movegen::MoveList;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn center_knight_has_eight_jumps() {
        let mut board = Board::empty();
        board.put(sq(4, 4), Piece::WHITE_KNIGHT);
        let mut list = MoveList::new();
        gen_knights(&board, sq(4, 4), Color::White, &mut list);
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn corner_knight_has_two_jumps() {
        let mut board = Board::empty();
        board.put(sq(0, 0), Piece::BLACK_KNIGHT);
        let mut list = MoveList::new();
        gen_knights(&board, sq(0, 0), Color::Black, &mut list);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn skips_own_pieces_and_captures_opponents() {
        let mut board = Board::empty();
        board.put(sq(4, 4), Piece::WHITE_KNIGHT);
        board.put(sq(2, 3), Piece::WHITE_PAWN);
        board.put(sq(2, 5), Piece::BLACK_PAWN);
        let mut list = MoveList::new();
        gen_knights(&board, sq(4, 4), Color::White, &mut list);
        assert_eq!(list.len(), 7);
        assert!(list.find_to(sq(2, 3)).is_none());
        assert_eq!(
            list.find_to(sq(2, 5)).and_then(|mv| mv.captured()),
            Some(Piece::BLACK_PAWN)
        );
    }
}
