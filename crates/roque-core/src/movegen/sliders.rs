//! Bishop, rook, and queen move generation by ray casting.

use crate::attacks::{DIAGONAL, ORTHOGONAL};
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::MoveList;

pub(super) fn gen_bishop(board: &Board, from: Square, color: Color, list: &mut MoveList) {
    gen_rays(board, from, color, &DIAGONAL, list);
}

pub(super) fn gen_rook(board: &Board, from: Square, color: Color, list: &mut MoveList) {
    gen_rays(board, from, color, &ORTHOGONAL, list);
}

pub(super) fn gen_queen(board: &Board, from: Square, color: Color, list: &mut MoveList) {
    gen_rays(board, from, color, &ORTHOGONAL, list);
    gen_rays(board, from, color, &DIAGONAL, list);
}

/// Walk each direction until the board edge or the first piece.
///
/// An opponent piece ends the ray as a capture; an own piece ends it without a move.
fn gen_rays(board: &Board, from: Square, color: Color, dirs: &[(i8, i8)], list: &mut MoveList) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.piece_at(to) {
                None => list.push(Move::quiet(from, to)),
                Some(target) => {
                    if target.color() != color {
                        list.push(Move::capture(from, to, target));
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}
