//! The 8x8 board value.

use crate::{Color, Piece, PieceKind, Square};
use std::fmt;

/// Piece order on both back rows, from column 0 to column 7.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// `Board` is `Copy`: every copy owns its own grid and piece values, so a
/// board handed out earlier is never affected by later moves. The builders
/// take `self` and return the new board; [`Board::set`] edits only the
/// caller's own copy.
///
/// At most one king per color is expected but not enforced.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    ///
    /// Black's back row is row 0 and its pawns row 1; White's pawns are on
    /// row 6 and its back row is row 7. No piece has moved.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_ROW.into_iter().enumerate() {
                board.cells[color.back_row() as usize][col] = Some(Piece::new(kind, color));
                board.cells[color.pawn_row() as usize][col] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Returns a new board with `piece` placed on `square`.
    #[must_use]
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.set(square, Some(piece));
        self
    }

    /// Returns a new board with `square` cleared.
    #[must_use]
    pub fn without_piece(mut self, square: Square) -> Self {
        self.set(square, None);
        self
    }

    /// Overwrites one cell of this board value.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|p| (square, p)))
    }

    /// Finds the king of `color`, if one is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(square, _)| square)
    }

    /// Returns the rows of the grid, row 0 first.
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.map_or('.', Piece::to_fen_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn initial_back_rows() {
        let board = Board::initial();
        assert_eq!(
            board.piece_at(Square::E1),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(Square::E8),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(
            board.piece_at(sq("d1")),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(
            board.piece_at(Square::A8),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert_eq!(
            board.piece_at(sq("g8")),
            Some(Piece::new(PieceKind::Knight, Color::Black))
        );
    }

    #[test]
    fn initial_pawns_and_empty_middle() {
        let board = Board::initial();
        for col in 0..8 {
            let black_pawn = Square::new(1, col).unwrap();
            let white_pawn = Square::new(6, col).unwrap();
            assert_eq!(
                board.piece_at(black_pawn),
                Some(Piece::new(PieceKind::Pawn, Color::Black))
            );
            assert_eq!(
                board.piece_at(white_pawn),
                Some(Piece::new(PieceKind::Pawn, Color::White))
            );
            for row in 2..6 {
                assert!(board.is_empty(Square::new(row, col).unwrap()));
            }
        }
        assert_eq!(board.pieces().count(), 32);
        assert!(board.pieces().all(|(_, p)| !p.has_moved));
    }

    #[test]
    fn builders_do_not_touch_the_original() {
        let board = Board::initial();
        let changed = board.without_piece(Square::E1);
        assert!(changed.is_empty(Square::E1));
        assert!(!board.is_empty(Square::E1));
    }

    #[test]
    fn set_only_changes_the_copy() {
        let board = Board::initial();
        let mut copy = board;
        copy.set(sq("e4"), board.piece_at(sq("e2")));
        copy.set(sq("e2"), None);
        assert!(board.is_empty(sq("e4")));
        assert!(!board.is_empty(sq("e2")));
        assert!(copy.is_empty(sq("e2")));
    }

    #[test]
    fn king_square() {
        let board = Board::initial();
        assert_eq!(board.king_square(Color::White), Some(Square::E1));
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn display_diagram() {
        let text = Board::initial().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
