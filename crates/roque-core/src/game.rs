//! A single game session: the state of play plus its latest status.

use tracing::info;

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::GameError;
use crate::game_state::GameState;
use crate::movegen::MoveList;
use crate::piece::Piece;
use crate::square::Square;
use crate::status::GameStatus;

/// One game in progress.
///
/// Moves are applied one at a time through `&mut self`, so submissions are
/// serialized by the borrow checker. A rejected move never changes the game.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    status: GameStatus,
}

impl Game {
    /// Start a game from the standard initial position.
    pub fn new() -> Game {
        Game::from_state(GameState::starting_position())
    }

    /// Start a game from a set-up position, evaluating its status at once.
    pub fn from_state(state: GameState) -> Game {
        let status = GameStatus::evaluate(&state);
        Game { state, status }
    }

    /// Throw the current game away and return to the initial position.
    pub fn reset(&mut self) {
        *self = Game::new();
        info!("game reset");
    }

    /// Legal moves of the piece on `sq`.
    ///
    /// Empty if the square is empty, holds a piece of the side not to move,
    /// or the game has ended in checkmate.
    pub fn legal_moves(&self, sq: Square) -> MoveList {
        if self.status.checkmate || self.state.board().color_at(sq) != Some(self.side_to_move()) {
            return MoveList::new();
        }
        self.state.legal_moves(sq)
    }

    /// Like [`Game::legal_moves`], but rejects a square the side to move cannot select.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] after checkmate; [`GameError::InvalidSelection`]
    /// if `sq` does not hold a piece of the side to move.
    pub fn select(&self, sq: Square) -> Result<MoveList, GameError> {
        self.ensure_live()?;
        if self.state.board().color_at(sq) != Some(self.side_to_move()) {
            return Err(GameError::InvalidSelection { square: sq });
        }
        Ok(self.state.legal_moves(sq))
    }

    /// Apply `mv` and return the status of the side now to move.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] after checkmate, otherwise whatever
    /// [`GameState::make_move`] rejects the move with.
    pub fn apply_move(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        self.ensure_live()?;
        let next = self.state.make_move(mv)?;
        self.status = GameStatus::evaluate(&next);
        self.state = next;

        if let Some(winner) = self.status.winner() {
            info!(%mv, %winner, "checkmate");
        }
        Ok(self.status)
    }

    /// Apply the legal move from `from` to `to`.
    ///
    /// # Errors
    ///
    /// As [`Game::select`] for `from`, and [`GameError::IllegalMove`] if no
    /// legal move of that piece lands on `to`.
    pub fn play(&mut self, from: Square, to: Square) -> Result<GameStatus, GameError> {
        let mv = self
            .select(from)?
            .find_to(to)
            .ok_or(GameError::IllegalMove { from, to })?;
        self.apply_move(mv)
    }

    /// Pieces of `color` captured so far, in capture order.
    #[inline]
    pub fn captured(&self, color: Color) -> &[Piece] {
        self.state.captured(color)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    fn ensure_live(&self) -> Result<(), GameError> {
        if self.status.checkmate {
            return Err(GameError::GameOver {
                loser: self.status.side_to_move,
            });
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
