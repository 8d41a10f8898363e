//! FEN parsing and serialization for [`GameState`].
//!
//! The first FEN rank is row 0. En passant and the move counters are checked
//! for syntax and otherwise ignored.

use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<GameState, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(3..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        if let Some(&ep) = fields.get(3)
            && ep != "-"
            && !is_square_name(ep)
        {
            return Err(FenError::InvalidEnPassant {
                found: ep.to_string(),
            });
        }

        for (index, field) in [(4, "halfmove clock"), (5, "fullmove number")] {
            if let Some(&value) = fields.get(index)
                && value.parse::<u32>().is_err()
            {
                return Err(FenError::InvalidMoveCounter {
                    field,
                    found: value.to_string(),
                });
            }
        }

        Ok(GameState::from_parts(board, castling, side_to_move)?)
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col: usize = 0;
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                col += digit as usize;
            } else {
                let piece = Piece::from_fen_char(c)
                    .ok_or(FenError::InvalidPieceChar { character: c })?;
                if let Ok(sq) = Square::try_from((row, col)) {
                    board.put(sq, piece);
                }
                col += 1;
            }
        }
        if col != 8 {
            return Err(FenError::BadRankLength { row, length: col });
        }
    }
    Ok(board)
}

fn is_square_name(s: &str) -> bool {
    matches!(s.as_bytes(), [file, rank] if (b'a'..=b'h').contains(file) && (b'1'..=b'8').contains(rank))
}

impl GameState {
    /// Serialize the position to FEN. Move counters are always written as `0 1`.
    pub fn to_fen(&self) -> String {
        let mut placement = String::with_capacity(72);
        for row in 0u8..8 {
            let mut empty = 0;
            for col in 0u8..8 {
                match self.board().piece_at(Square::at(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if row < 7 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{placement} {side} {} - 0 1", self.castling().to_fen())
    }
}
