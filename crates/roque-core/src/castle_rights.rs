//! Castling rights stored as a 4-bit field within a `u8`.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column the king starts on for either side.
    pub const KING_COL: u8 = 4;

    /// Column of this side's rook before castling.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook lands on, adjacent to the king on the inside.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Columns strictly between king and rook; all must be empty.
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Columns the king crosses or lands on; none may be attacked.
    pub const fn transit_cols(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[3, 2],
        }
    }

    /// Side whose rook stands on `col`, if `col` is a rook home column.
    #[inline]
    pub const fn from_rook_col(col: u8) -> Option<CastleSide> {
        match col {
            7 => Some(CastleSide::KingSide),
            0 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::KingSide => f.write_str("king-side"),
            CastleSide::QueenSide => f.write_str("queen-side"),
        }
    }
}

/// Castling rights encoded as a 4-bit field: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
///
/// During play bits are only ever removed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether a specific color and side may still castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side) != 0
    }

    /// Return the rights with one color/side flag set.
    #[inline]
    pub const fn grant(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 | Self::flag(color, side))
    }

    /// Return the rights with one color/side flag cleared.
    #[inline]
    pub const fn revoke(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 & !Self::flag(color, side))
    }

    /// Return the rights with both flags of `color` cleared.
    #[inline]
    pub const fn revoke_color(self, color: Color) -> CastleRights {
        self.revoke(color, CastleSide::KingSide)
            .revoke(color, CastleSide::QueenSide)
    }

    #[inline]
    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => 0b0001,
            (Color::White, CastleSide::QueenSide) => 0b0010,
            (Color::Black, CastleSide::KingSide) => 0b0100,
            (Color::Black, CastleSide::QueenSide) => 0b1000,
        }
    }

    /// Parse castling rights from the FEN castling field (e.g. "KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastleSide::KingSide),
                'Q' => (Color::White, CastleSide::QueenSide),
                'k' => (Color::Black, CastleSide::KingSide),
                'q' => (Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            rights = rights.grant(color, side);
        }
        Ok(rights)
    }

    /// Serialize castling rights to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        let mut s = String::with_capacity(4);
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.has(color, side) {
                s.push(c);
            }
        }
        s
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        CastleRights::ALL
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
