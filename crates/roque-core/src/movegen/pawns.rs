//! Pawn pushes and diagonal captures.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{MoveList, promotes};

/// Generate pseudo-legal pawn moves for a `color` pawn on `from`.
///
/// One step forward onto an empty square, two steps from the pawn row when
/// both squares are empty, and one step diagonally forward only onto an
/// opponent piece. Moves onto the last row are flagged as promotions.
pub(super) fn gen_pawns(board: &Board, from: Square, color: Color, list: &mut MoveList) {
    let pawn = Piece::new(PieceKind::Pawn, color);
    let dir = color.forward();
    let mut push = |mv: Move| {
        if promotes(pawn, mv.to()) {
            list.push(mv.with_promotion());
        } else {
            list.push(mv);
        }
    };

    if let Some(one) = from.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
        push(Move::quiet(from, one));
        if from.row() == color.pawn_row()
            && let Some(two) = one.offset(dir, 0).filter(|&sq| board.is_empty(sq))
        {
            push(Move::quiet(from, two));
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(dir, d_col) else {
            continue;
        };
        if let Some(victim) = board.piece_at(target)
            && victim.color() != color
        {
            push(Move::capture(from, target, victim));
        }
    }
}
