//! Piece placement: 64 cells, each empty or holding one piece.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank layout shared by both sides, column 0 to 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Mailbox board: one optional piece per square.
///
/// `Board` is `Copy`, so a legality test works on its own scratch copy and
/// never touches the authoritative position.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// The standard starting placement.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in (0u8..).zip(BACK_RANK) {
                board.put(Square::at(color.back_row(), col), Piece::new(kind, color));
                board.put(
                    Square::at(color.pawn_row(), col),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Return the color of the piece on `sq`, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Place `piece` on `sq`, replacing whatever was there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.cells[sq.index()].replace(piece)
    }

    /// Clear `sq`, returning the piece that stood there.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    /// Move whatever stands on `from` to `to`, overwriting `to` and clearing `from`.
    ///
    /// Returns the piece that previously stood on `to`.
    #[inline]
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mover = self.remove(from);
        std::mem::replace(&mut self.cells[to.index()], mover)
    }

    /// Iterate over occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Squares holding a king of `color`.
    pub fn kings(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Return a pretty-printable wrapper using FEN letters.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            glyphs: false,
        }
    }

    /// Return a pretty-printable wrapper using Unicode chess glyphs.
    pub fn pretty_glyphs(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            glyphs: true,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{}\n)", self.pretty())
    }
}

/// Wrapper for printing a board as an 8x8 grid, row 0 at the top.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    glyphs: bool,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            write!(f, "{row}  ")?;
            for col in 0u8..8 {
                let c = match self.board.piece_at(Square::at(row, col)) {
                    Some(piece) if self.glyphs => piece.glyph(),
                    Some(piece) => piece.fen_char(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   0 1 2 3 4 5 6 7")
    }
}
