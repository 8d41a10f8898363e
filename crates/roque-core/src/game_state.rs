//! The authoritative position: placement, side to move, castling, king squares, checks, captures.

use std::fmt;

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::movegen::{MoveList, legal_moves};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Complete game position.
///
/// Created from the starting position or a set-up board, then advanced only
/// through [`GameState::make_move`], which returns a new value.
#[derive(Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    castling: CastleRights,
    /// King square per color, kept in step with `board` on every king move.
    kings: [Option<Square>; Color::COUNT],
    side_to_move: Color,
    in_check: [bool; Color::COUNT],
    /// Captured pieces, keyed by the color of the piece taken, in capture order.
    captured: [Vec<Piece>; Color::COUNT],
}

impl GameState {
    /// Return the standard starting position with White to move.
    pub fn starting_position() -> GameState {
        let board = Board::starting_position();
        GameState {
            board,
            castling: CastleRights::ALL,
            kings: [Square::new(7, 4), Square::new(0, 4)],
            side_to_move: Color::White,
            in_check: [false; Color::COUNT],
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// Build a position from a set-up board.
    ///
    /// A color may lack a king (such a color is never in check), but may not
    /// have more than one. Pawns may not stand on row 0 or row 7.
    pub fn from_parts(
        board: Board,
        castling: CastleRights,
        side_to_move: Color,
    ) -> Result<GameState, BoardError> {
        let mut kings = [None; Color::COUNT];
        for color in Color::ALL {
            let found: Vec<Square> = board.kings(color).collect();
            if found.len() > 1 {
                return Err(BoardError::TooManyKings {
                    color,
                    count: found.len(),
                });
            }
            kings[color.index()] = found.first().copied();
        }

        let pawn_on_back_row = board.pieces().any(|(sq, piece)| {
            piece.kind() == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7)
        });
        if pawn_on_back_row {
            return Err(BoardError::PawnsOnBackRank);
        }

        let mut state = GameState {
            board,
            castling,
            kings,
            side_to_move,
            in_check: [false; Color::COUNT],
            captured: [Vec::new(), Vec::new()],
        };
        for color in Color::ALL {
            state.in_check[color.index()] = state.compute_check(color);
        }
        Ok(state)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the recorded square of `color`'s king, or `None` if it has no king.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// Return whether `color` was in check after the last move.
    #[inline]
    pub fn in_check(&self, color: Color) -> bool {
        self.in_check[color.index()]
    }

    /// Pieces of `color` captured so far, oldest first.
    #[inline]
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// Legal moves of the piece on `sq`, whichever side it belongs to.
    pub fn legal_moves(&self, sq: Square) -> MoveList {
        legal_moves(self, sq)
    }

    /// Every legal move of the side to move.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces_of(self.side_to_move)
            .flat_map(|(sq, _)| self.legal_moves(sq).as_slice().to_vec())
            .collect()
    }

    /// Return `true` if any piece of `color` has at least one legal move.
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(sq, _)| !self.legal_moves(sq).is_empty())
    }

    /// Check the invariants every position reached by play must satisfy.
    ///
    /// Each color has exactly one king, it stands on the recorded square,
    /// and the side that just moved is not in check.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.board.kings(color).count();
            if count == 0 {
                return Err(BoardError::MissingKing { color });
            }
            if count > 1 {
                return Err(BoardError::TooManyKings { color, count });
            }
            let recorded = self.kings[color.index()].ok_or(BoardError::MissingKing { color })?;
            if !self
                .board
                .piece_at(recorded)
                .is_some_and(|piece| piece.is(PieceKind::King, color))
            {
                return Err(BoardError::KingOutOfSync {
                    color,
                    square: recorded,
                });
            }
        }
        Ok(())
    }

    /// Compute from scratch whether `color`'s king is attacked.
    pub(crate) fn compute_check(&self, color: Color) -> bool {
        self.kings[color.index()].is_some_and(|sq| is_in_check(&self.board, sq, color))
    }

    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        self.kings[color.index()] = Some(sq);
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_in_check(&mut self, color: Color, in_check: bool) {
        self.in_check[color.index()] = in_check;
    }

    #[inline]
    pub(crate) fn record_capture(&mut self, piece: Piece) {
        self.captured[piece.color().index()].push(piece);
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::starting_position()
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameState(\"{}\")", self.to_fen())
    }
}
