//! Core chess rules: board representation, move generation, move application, and game status.
//!
//! Coordinates are `(row, col)` with row 0 on Black's back rank; White moves
//! toward row 0.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod game_state;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;
mod status;

pub use attacks::{is_in_check, is_square_attacked};
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError, GameError};
pub use fen::STARTING_FEN;
pub use game::Game;
pub use game_state::GameState;
pub use movegen::{MoveList, can_castle, is_legal, legal_moves, pseudo_legal_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
pub use status::{GameStatus, is_checkmate};
