//! Self-check filter: keeps only moves that leave the mover's king safe.

use crate::attacks::is_square_attacked;
use crate::chess_move::Move;
use crate::game_state::GameState;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{MoveList, pseudo_legal_moves};

/// Generate the legal moves of the piece on `from`, regardless of whose turn it is.
///
/// A move is legal iff, once played, the mover's own king is not attacked.
/// Empty squares yield an empty list.
pub fn legal_moves(state: &GameState, from: Square) -> MoveList {
    let mut list = pseudo_legal_moves(state, from);
    list.retain(|mv| is_legal(state, mv));
    list
}

/// Play `mv` on a scratch copy of the board and test the mover's king square.
///
/// Only placement matters here: the castling rook is left in its corner
/// because the king's own destination is what gets tested. A side without a
/// king on the board is never in check.
pub fn is_legal(state: &GameState, mv: &Move) -> bool {
    let Some(mover) = state.board().piece_at(mv.from()) else {
        return false;
    };
    let color = mover.color();

    let king_sq = if mover.kind() == PieceKind::King {
        mv.to()
    } else {
        match state.king_square(color) {
            Some(sq) => sq,
            None => return true,
        }
    };

    let mut scratch = *state.board();
    scratch.relocate(mv.from(), mv.to());
    !is_square_attacked(&scratch, king_sq, color)
}
