//! Move generation: per-kind pseudo-legal rules and the self-check filter.

mod king;
mod knights;
mod legal;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub use self::king::can_castle;
pub use self::legal::{is_legal, legal_moves};

use self::king::gen_king;
use self::knights::gen_knights;
use self::pawns::gen_pawns;
use self::sliders::{gen_bishop, gen_queen, gen_rook};

/// Most moves a single piece can have: a queen in the open has 27, a king 8 + 2 castles.
const CAPACITY: usize = 32;

/// Stack-allocated buffer for the moves of one piece.
#[derive(Clone, Copy)]
pub struct MoveList {
    moves: [Move; CAPACITY],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        let filler = Move::quiet(Square::at(0, 0), Square::at(0, 0));
        MoveList {
            moves: [filler; CAPACITY],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < CAPACITY);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Keep only the moves for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len as usize {
            let mv = self.moves[read];
            if keep(&mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write as u8;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Return `true` if the list holds exactly `mv`.
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }

    /// Find the move landing on `to`.
    pub fn find_to(&self, to: Square) -> Option<Move> {
        self.as_slice().iter().copied().find(|mv| mv.to() == to)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate the pseudo-legal moves of the piece on `from`.
///
/// Moves follow each kind's movement pattern and never land on a piece of the
/// mover's color, but may leave the mover's own king attacked. An empty
/// square yields an empty list. Whose turn it is is ignored.
pub fn pseudo_legal_moves(state: &GameState, from: Square) -> MoveList {
    let mut list = MoveList::new();
    let Some(piece) = state.board().piece_at(from) else {
        return list;
    };
    let board = state.board();
    match piece.kind() {
        PieceKind::Pawn => gen_pawns(board, from, piece.color(), &mut list),
        PieceKind::Knight => gen_knights(board, from, piece.color(), &mut list),
        PieceKind::Bishop => gen_bishop(board, from, piece.color(), &mut list),
        PieceKind::Rook => gen_rook(board, from, piece.color(), &mut list),
        PieceKind::Queen => gen_queen(board, from, piece.color(), &mut list),
        PieceKind::King => gen_king(state, from, piece.color(), &mut list),
    }
    list
}

/// Build the move landing on `to`, capturing whatever opponent piece stands there.
///
/// Returns `None` if `to` holds a piece of `color`.
#[inline]
fn step_to(board: &Board, from: Square, to: Square, color: Color) -> Option<Move> {
    match board.piece_at(to) {
        None => Some(Move::quiet(from, to)),
        Some(target) if target.color() != color => Some(Move::capture(from, to, target)),
        Some(_) => None,
    }
}

/// Return `true` if `piece` is a pawn about to land on its promotion row at `to`.
#[inline]
fn promotes(piece: Piece, to: Square) -> bool {
    piece.kind() == PieceKind::Pawn && to.row() == piece.color().promotion_row()
}
