//! Legal-destination enumeration.
//!
//! Destinations are found by probing [`validate`] with every square on the
//! board, so the hint set can never disagree with what validation accepts
//! for the same history.

use chess_core::{Board, MoveRecord, Square};
use tracing::trace;

use crate::validate;

/// Returns every square the piece on `from` can legally move to, probing
/// with an empty history.
///
/// Because no previous move is known, en passant captures never appear
/// here. Use [`moves_from_with_history`] to include them.
pub fn moves_from(board: &Board, from: Square) -> Vec<Square> {
    moves_from_with_history(board, from, &[])
}

/// Returns every square the piece on `from` can legally move to given the
/// real move history, in row-major order. Empty when `from` is empty.
pub fn moves_from_with_history(board: &Board, from: Square, history: &[MoveRecord]) -> Vec<Square> {
    if board.is_empty(from) {
        return Vec::new();
    }

    let moves: Vec<Square> = Square::all()
        .filter(|&to| validate(board, from, to, history).valid)
        .collect();
    trace!(%from, count = moves.len(), "enumerated destinations");
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, Piece, PieceKind};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn names(squares: &[Square]) -> Vec<String> {
        squares.iter().map(|s| s.to_algebraic()).collect()
    }

    #[test]
    fn empty_square_has_no_moves() {
        assert!(moves_from(&Board::initial(), sq("e4")).is_empty());
    }

    #[test]
    fn starting_pawn_and_knight() {
        let board = Board::initial();
        assert_eq!(names(&moves_from(&board, sq("e2"))), ["e4", "e3"]);
        assert_eq!(names(&moves_from(&board, sq("g1"))), ["f3", "h3"]);
        assert_eq!(names(&moves_from(&board, sq("b8"))), ["a6", "c6"]);
        assert!(moves_from(&board, sq("a1")).is_empty());
        assert!(moves_from(&board, sq("e1")).is_empty());
    }

    #[test]
    fn twenty_moves_for_each_side_at_start() {
        let board = Board::initial();
        for color in [Color::White, Color::Black] {
            let total: usize = board
                .pieces()
                .filter(|(_, p)| p.color == color)
                .map(|(square, _)| moves_from(&board, square).len())
                .sum();
            assert_eq!(total, 20, "{}", color);
        }
    }

    #[test]
    fn rook_in_open_board() {
        let board = Board::empty().with_piece(sq("d4"), Piece::new(PieceKind::Rook, Color::White));
        assert_eq!(moves_from(&board, sq("d4")).len(), 14);
    }

    #[test]
    fn castling_destinations_are_listed() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/R3K2R").unwrap();
        let moves = moves_from(&board, Square::E1);
        assert!(moves.contains(&sq("g1")));
        assert!(moves.contains(&sq("c1")));
    }

    #[test]
    fn en_passant_needs_history_for_hints() {
        let board = Board::from_placement("4k3/8/8/3pP3/8/8/8/4K3").unwrap();
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let history = [MoveRecord::new(sq("d7"), sq("d5"), black_pawn)];

        assert_eq!(names(&moves_from(&board, sq("e5"))), ["e6"]);
        assert_eq!(
            names(&moves_from_with_history(&board, sq("e5"), &history)),
            ["d6", "e6"]
        );
    }
}
