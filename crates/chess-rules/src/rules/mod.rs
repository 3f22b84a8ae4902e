//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, the seam between the
//! session layer and the movement rules. [`Game`](crate::Game) only talks
//! to the rules through it, so a variant with different movement rules
//! can be dropped in without touching the session code.

mod standard;

pub use standard::StandardRules;

use chess_core::{Board, Color, MoveRecord, PieceKind, Square};

use crate::MoveVerdict;

/// Trait for implementing a set of movement rules.
///
/// All methods are pure: they read the board and history they are given
/// and return new values.
///
/// # Example
///
/// ```
/// use chess_core::Square;
/// use chess_rules::rules::{RuleSet, StandardRules};
///
/// let board = StandardRules.initial_board();
/// let e2 = Square::from_algebraic("e2").unwrap();
/// let e4 = Square::from_algebraic("e4").unwrap();
/// let verdict = StandardRules.validate(&board, e2, e4, &[]);
/// assert!(verdict.valid);
/// let board = StandardRules.apply(&board, e2, e4, &verdict);
/// assert!(board.is_empty(e2));
/// ```
pub trait RuleSet {
    /// Returns the starting board for these rules.
    fn initial_board(&self) -> Board;

    /// Returns the verdict for moving the piece on `from` to `to`.
    fn validate(&self, board: &Board, from: Square, to: Square, history: &[MoveRecord])
        -> MoveVerdict;

    /// Applies a move already accepted by [`validate`](RuleSet::validate).
    fn apply(&self, board: &Board, from: Square, to: Square, verdict: &MoveVerdict) -> Board;

    /// Completes a promotion by writing the chosen piece on `to`.
    fn promote(
        &self,
        board: &Board,
        from: Square,
        to: Square,
        kind: PieceKind,
        color: Color,
    ) -> Board;

    /// Returns the squares the piece on `from` may move to.
    fn moves_from(&self, board: &Board, from: Square, history: &[MoveRecord]) -> Vec<Square> {
        if board.is_empty(from) {
            return Vec::new();
        }
        Square::all()
            .filter(|&to| self.validate(board, from, to, history).valid)
            .collect()
    }

    /// Validates and applies a non-promoting move in one step, returning
    /// `None` if the move is illegal or still needs a promotion choice.
    fn try_apply(
        &self,
        board: &Board,
        from: Square,
        to: Square,
        history: &[MoveRecord],
    ) -> Option<Board> {
        let verdict = self.validate(board, from, to, history);
        if verdict.valid && !verdict.promotion {
            Some(self.apply(board, from, to, &verdict))
        } else {
            None
        }
    }
}
