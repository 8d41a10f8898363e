//! Board squares addressed by (row, col).

use std::fmt;

use crate::error::GameError;

/// A square on the 8x8 board, stored as `row * 8 + col`.
///
/// Row 0 is Black's back rank and row 7 is White's. Column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and column, returning `None` if either is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Create a square whose coordinates are known to be in range.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square(row * 8 + col)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a (row, col) delta, returning `None` if the result leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Return the square on the same row at column `col`.
    #[inline]
    pub(crate) const fn with_col(self, col: u8) -> Square {
        Square::at(self.row(), col)
    }

    /// Iterate over all 64 squares, row by row from (0, 0).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = GameError;

    fn try_from((row, col): (usize, usize)) -> Result<Square, GameError> {
        if row < 8 && col < 8 {
            Ok(Square::at(row as u8, col as u8))
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let rank = 8 - self.row();
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}
