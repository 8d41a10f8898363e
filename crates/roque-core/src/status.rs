//! Check and checkmate reporting for the side to move.

use std::fmt;

use crate::color::Color;
use crate::game_state::GameState;

/// What the side to move faces after the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    /// The side to move's king is attacked.
    pub check: bool,
    /// The side to move is in check and has no legal move.
    pub checkmate: bool,
    /// Whose turn it is.
    pub side_to_move: Color,
}

impl GameStatus {
    /// Evaluate the status of `state` for its side to move.
    ///
    /// Checkmate is only searched for when the side is in check; a side
    /// without legal moves but not in check is reported as neither.
    pub fn evaluate(state: &GameState) -> GameStatus {
        let side_to_move = state.side_to_move();
        let check = state.in_check(side_to_move);
        let checkmate = check && !state.has_legal_move(side_to_move);
        GameStatus {
            check,
            checkmate,
            side_to_move,
        }
    }

    /// The winner, if the game has ended in checkmate.
    pub fn winner(&self) -> Option<Color> {
        self.checkmate.then(|| self.side_to_move.flip())
    }
}

/// Return `true` if `color` is in check and none of its pieces has a legal move.
pub fn is_checkmate(state: &GameState, color: Color) -> bool {
    state.compute_check(color) && !state.has_legal_move(color)
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.checkmate {
            write!(f, "checkmate, {} wins", self.side_to_move.flip())
        } else if self.check {
            write!(f, "{} to move, in check", self.side_to_move)
        } else {
            write!(f, "{} to move", self.side_to_move)
        }
    }
}
