//! Standard chess movement rules.

use super::RuleSet;
use crate::{execute, movegen, validate, MoveVerdict};
use chess_core::{Board, Color, MoveRecord, PieceKind, Square};

/// Standard chess movement rules.
///
/// Covers:
/// - Standard piece movement with blocking for sliders
/// - Castling (both sides, unmoved king and rook, clear path)
/// - En passant (immediately after the double step only)
/// - Promotion triggers on the last row
///
/// Check, checkmate and stalemate are not considered.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl RuleSet for StandardRules {
    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn validate(
        &self,
        board: &Board,
        from: Square,
        to: Square,
        history: &[MoveRecord],
    ) -> MoveVerdict {
        validate(board, from, to, history)
    }

    fn apply(&self, board: &Board, from: Square, to: Square, verdict: &MoveVerdict) -> Board {
        execute::apply(board, from, to, verdict)
    }

    fn promote(
        &self,
        board: &Board,
        from: Square,
        to: Square,
        kind: PieceKind,
        color: Color,
    ) -> Board {
        execute::promote(board, from, to, kind, color)
    }

    fn moves_from(&self, board: &Board, from: Square, history: &[MoveRecord]) -> Vec<Square> {
        movegen::moves_from_with_history(board, from, history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn initial_board() {
        assert_eq!(StandardRules.initial_board(), Board::initial());
    }

    #[test]
    fn try_apply_plays_legal_moves() {
        let board = StandardRules.initial_board();
        let next = StandardRules
            .try_apply(&board, sq("e2"), sq("e4"), &[])
            .unwrap();
        assert!(next.is_empty(sq("e2")));
        assert!(StandardRules
            .try_apply(&board, sq("e2"), sq("e5"), &[])
            .is_none());
    }

    #[test]
    fn try_apply_refuses_pending_promotion() {
        let board = Board::from_placement("4k3/P7/8/8/8/8/8/4K3").unwrap();
        assert!(StandardRules
            .try_apply(&board, sq("a7"), sq("a8"), &[])
            .is_none());
    }
}
