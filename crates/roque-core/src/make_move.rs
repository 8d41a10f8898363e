//! Move application via copy-make.

use tracing::debug;

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::GameError;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl GameState {
    /// Validate `mv` against the side to move and return the position after it.
    ///
    /// Copy-make: `self` is never modified, so a rejected move leaves the game
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidSelection`] if `mv.from()` is empty or holds an
    /// opponent piece; [`GameError::IllegalMove`] if `mv` is not one of the
    /// legal moves from that square.
    pub fn make_move(&self, mv: Move) -> Result<GameState, GameError> {
        let us = self.side_to_move();
        if self.board().color_at(mv.from()) != Some(us) {
            return Err(GameError::InvalidSelection { square: mv.from() });
        }
        if !self.legal_moves(mv.from()).contains(&mv) {
            return Err(GameError::IllegalMove {
                from: mv.from(),
                to: mv.to(),
            });
        }

        let mut next = self.clone();
        next.commit(mv);
        Ok(next)
    }

    /// Commit an already-validated move.
    fn commit(&mut self, mv: Move) {
        let us = self.side_to_move();
        let them = us.flip();
        let (from, to) = (mv.from(), mv.to());

        let board = self.board_mut();
        let Some(mover) = board.piece_at(from) else {
            return;
        };
        let taken = board.relocate(from, to);

        let mut castling = self.castling();
        match mover.kind() {
            PieceKind::King => {
                self.set_king_square(us, to);
                castling = castling.revoke_color(us);
                if let Some(side) = mv.castling() {
                    let rook_from = to.with_col(side.rook_col());
                    let rook_to = to.with_col(side.rook_target_col());
                    self.board_mut().relocate(rook_from, rook_to);
                }
            }
            PieceKind::Rook => {
                if let Some(side) = home_corner_side(from, us) {
                    castling = castling.revoke(us, side);
                }
            }
            PieceKind::Pawn if to.row() == us.promotion_row() => {
                self.board_mut().put(to, Piece::new(PieceKind::Queen, us));
            }
            _ => {}
        }

        if let Some(victim) = taken {
            self.record_capture(victim);
            if victim.kind() == PieceKind::Rook
                && let Some(side) = home_corner_side(to, them)
            {
                castling = castling.revoke(them, side);
            }
        }
        self.set_castling(castling);

        self.set_side_to_move(them);
        self.set_in_check(us, false);
        let check = self.compute_check(them);
        self.set_in_check(them, check);

        debug!(%mv, mover = ?mover, captured = ?taken, check, "move committed");
    }
}

/// Castle side whose rook starts on `sq` for `color`, if `sq` is one of its corners.
fn home_corner_side(sq: Square, color: Color) -> Option<CastleSide> {
    if sq.row() == color.back_row() {
        CastleSide::from_rook_col(sq.col())
    } else {
        None
    }
}
