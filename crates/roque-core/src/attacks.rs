//! Square attack detection by ray casting from the target square.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Knight jumps as (row, col) deltas.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps as (row, col) deltas.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rook directions.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop directions.
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Return `true` if any piece of the opponent of `color` attacks `sq` on `board`.
///
/// Capture patterns are cast outward from `sq`: a pawn, knight, or king hit
/// at the matching offset counts, and along each slider ray only the first
/// occupied square is inspected. Whose turn it is does not matter.
pub fn is_square_attacked(board: &Board, sq: Square, color: Color) -> bool {
    let them = color.flip();

    // Enemy pawns capture toward `color`'s side, so they sit one step
    // "ahead" of `sq` from `color`'s point of view.
    let pawn_row = color.forward();
    if [-1, 1]
        .into_iter()
        .any(|d_col| holds(board, sq.offset(pawn_row, d_col), PieceKind::Pawn, them))
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(board, sq.offset(dr, dc), PieceKind::Knight, them))
    {
        return true;
    }

    if ORTHOGONAL
        .iter()
        .any(|&dir| first_hit_is(board, sq, dir, them, PieceKind::Rook))
    {
        return true;
    }

    if DIAGONAL
        .iter()
        .any(|&dir| first_hit_is(board, sq, dir, them, PieceKind::Bishop))
    {
        return true;
    }

    KING_OFFSETS
        .iter()
        .any(|&(dr, dc)| holds(board, sq.offset(dr, dc), PieceKind::King, them))
}

/// Return `true` if the king of `color` standing on `king_sq` is attacked.
#[inline]
pub fn is_in_check(board: &Board, king_sq: Square, color: Color) -> bool {
    is_square_attacked(board, king_sq, color)
}

fn holds(board: &Board, sq: Option<Square>, kind: PieceKind, color: Color) -> bool {
    sq.and_then(|sq| board.piece_at(sq))
        .is_some_and(|piece| piece.is(kind, color))
}

/// Walk from `from` along `dir`; the first piece met must be a `slider` or a
/// queen of `color` for the ray to count.
fn first_hit_is(board: &Board, from: Square, dir: (i8, i8), color: Color, slider: PieceKind) -> bool {
    let mut cur = from;
    while let Some(next) = cur.offset(dir.0, dir.1) {
        if let Some(piece) = board.piece_at(next) {
            return piece.color() == color
                && (piece.kind() == slider || piece.kind() == PieceKind::Queen);
        }
        cur = next;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{is_in_check, is_square_attacked};
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board_with(pieces: &[(u8, u8, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(row, col, piece) in pieces {
            board.put(sq(row, col), piece);
        }
        board
    }

    #[test]
    fn starting_position_middle_is_quiet() {
        let board = Board::starting_position();
        assert!(!is_square_attacked(&board, sq(4, 4), Color::White));
        assert!(!is_square_attacked(&board, sq(3, 4), Color::Black));
    }

    #[test]
    fn starting_position_pawn_and_knight_cover() {
        let board = Board::starting_position();
        // Black pawns and knights cover row 2.
        assert!(is_square_attacked(&board, sq(2, 5), Color::White));
        // White pawns and knights cover row 5.
        assert!(is_square_attacked(&board, sq(5, 2), Color::Black));
    }

    #[test]
    fn pawn_attacks_only_forward_diagonals() {
        // Black pawn on (3, 3) attacks (4, 2) and (4, 4), never backward.
        let board = board_with(&[(3, 3, Piece::BLACK_PAWN)]);
        assert!(is_square_attacked(&board, sq(4, 2), Color::White));
        assert!(is_square_attacked(&board, sq(4, 4), Color::White));
        assert!(!is_square_attacked(&board, sq(4, 3), Color::White));
        assert!(!is_square_attacked(&board, sq(2, 2), Color::White));

        // White pawn on (5, 5) attacks (4, 4) and (4, 6).
        let board = board_with(&[(5, 5, Piece::WHITE_PAWN)]);
        assert!(is_square_attacked(&board, sq(4, 6), Color::Black));
        assert!(!is_square_attacked(&board, sq(6, 6), Color::Black));
    }

    #[test]
    fn own_pieces_do_not_attack() {
        let board = board_with(&[(0, 0, Piece::WHITE_ROOK)]);
        assert!(!is_square_attacked(&board, sq(0, 5), Color::White));
        assert!(is_square_attacked(&board, sq(0, 5), Color::Black));
    }

    #[test]
    fn slider_rays_stop_at_first_piece() {
        let board = board_with(&[
            (0, 4, Piece::BLACK_ROOK),
            (3, 4, Piece::WHITE_KNIGHT),
        ]);
        assert!(is_square_attacked(&board, sq(2, 4), Color::White));
        assert!(!is_square_attacked(&board, sq(5, 4), Color::White));
    }

    #[test]
    fn ray_blocked_by_attackers_own_piece() {
        let board = board_with(&[
            (0, 0, Piece::BLACK_BISHOP),
            (2, 2, Piece::BLACK_PAWN),
        ]);
        assert!(!is_square_attacked(&board, sq(4, 4), Color::White));
    }

    #[test]
    fn queen_attacks_both_ways() {
        let board = board_with(&[(4, 4, Piece::BLACK_QUEEN)]);
        assert!(is_square_attacked(&board, sq(4, 0), Color::White));
        assert!(is_square_attacked(&board, sq(7, 7), Color::White));
        assert!(!is_square_attacked(&board, sq(6, 5), Color::White));
    }

    #[test]
    fn bishop_does_not_attack_orthogonally() {
        let board = board_with(&[(4, 4, Piece::WHITE_BISHOP)]);
        assert!(!is_square_attacked(&board, sq(4, 7), Color::Black));
        assert!(is_square_attacked(&board, sq(1, 7), Color::Black));
    }

    #[test]
    fn knight_and_king_offsets() {
        let board = board_with(&[
            (4, 4, Piece::BLACK_KNIGHT),
            (0, 0, Piece::BLACK_KING),
        ]);
        assert!(is_square_attacked(&board, sq(6, 5), Color::White));
        assert!(is_square_attacked(&board, sq(2, 3), Color::White));
        assert!(!is_square_attacked(&board, sq(5, 5), Color::White));
        assert!(is_square_attacked(&board, sq(1, 1), Color::White));
        assert!(!is_square_attacked(&board, sq(2, 2), Color::White));
    }

    #[test]
    fn in_check_matches_attack() {
        let board = board_with(&[
            (7, 4, Piece::WHITE_KING),
            (0, 4, Piece::BLACK_ROOK),
        ]);
        assert!(is_in_check(&board, sq(7, 4), Color::White));
    }
}
