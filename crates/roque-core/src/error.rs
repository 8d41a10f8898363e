//! Error types for move submission, FEN parsing, and board validation.

use std::fmt;

use crate::color::Color;
use crate::square::Square;

/// Errors returned when a caller selects or submits a move.
///
/// All of these leave the game untouched; the caller is expected to clear its
/// selection and prompt again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The origin square is empty or holds a piece of the side not to move.
    #[error("{square} does not hold a piece of the side to move")]
    InvalidSelection {
        /// The selected origin.
        square: Square,
    },
    /// The move is not among the legal moves of its origin square.
    #[error("{from} to {to} is not a legal move")]
    IllegalMove {
        /// Origin of the rejected move.
        from: Square,
        /// Destination of the rejected move.
        to: Square,
    },
    /// Coordinates outside the 8x8 board.
    #[error("coordinates ({row}, {col}) are off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The side to move has been checkmated; only a reset continues play.
    #[error("game over: {loser} is checkmated")]
    GameOver {
        /// The checkmated side.
        loser: Color,
    },
}

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The FEN string has fewer than 3 or more than 6 fields.
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    BadRankLength {
        /// Row the rank describes (0 = first FEN rank).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a square name.
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a valid number.
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed board fails structural validation.
    InvalidBoard {
        /// The underlying board validation error.
        source: BoardError,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 3 to 6 FEN fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "expected 8 ranks in piece placement, found {found}")
            }
            FenError::BadRankLength { row, length } => {
                write!(f, "row {row} describes {length} squares, expected 8")
            }
            FenError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
            FenError::InvalidColor { found } => {
                write!(f, "invalid active color: \"{found}\"")
            }
            FenError::InvalidCastlingChar { character } => {
                write!(f, "invalid castling character: '{character}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square: \"{found}\"")
            }
            FenError::InvalidMoveCounter { field, found } => {
                write!(f, "invalid {field}: \"{found}\"")
            }
            FenError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(source: BoardError) -> Self {
        FenError::InvalidBoard { source }
    }
}

/// Errors from structural validation of a set-up position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side has more than one king.
    #[error("expected at most 1 king for {color}, found {count}")]
    TooManyKings {
        /// Which side has the extra kings.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A side has no king where one is required.
    #[error("no king found for {color}")]
    MissingKing {
        /// Which side lacks a king.
        color: Color,
    },
    /// Pawns occupy row 0 or row 7.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// The recorded king square does not hold that side's king.
    #[error("recorded {color} king square {square} does not hold the {color} king")]
    KingOutOfSync {
        /// Side whose record is stale.
        color: Color,
        /// The recorded square.
        square: Square,
    },
}
