//! Move representation.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece::Piece;
use crate::square::Square;

/// A move from one square to another, annotated with what it does.
///
/// Moves are produced by the generator; two moves compare equal only if all
/// annotations agree, so a caller cannot smuggle a castle or a capture past
/// the legality check by tweaking fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Option<Piece>,
    castling: Option<CastleSide>,
    promotion: bool,
}

impl Move {
    /// A move to an empty square.
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            captured: None,
            castling: None,
            promotion: false,
        }
    }

    /// A move taking `captured` on the destination square.
    #[inline]
    pub const fn capture(from: Square, to: Square, captured: Piece) -> Move {
        Move {
            from,
            to,
            captured: Some(captured),
            castling: None,
            promotion: false,
        }
    }

    /// The king's half of a castle; the rook is relocated when applied.
    #[inline]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Move {
        Move {
            from,
            to,
            captured: None,
            castling: Some(side),
            promotion: false,
        }
    }

    /// Mark this move as a pawn reaching its last row.
    #[inline]
    pub const fn with_promotion(self) -> Move {
        Move {
            promotion: true,
            ..self
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The opponent piece standing on the destination, if any.
    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub const fn castling(self) -> Option<CastleSide> {
        self.castling
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        self.castling.is_some()
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}", self)?;
        if let Some(piece) = self.captured {
            write!(f, " x{piece}")?;
        }
        if let Some(side) = self.castling {
            write!(f, " castle {side}")?;
        }
        if self.promotion {
            write!(f, " =Q")?;
        }
        write!(f, ")")
    }
}
