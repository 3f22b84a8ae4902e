//! Game session with turn order, history and pending promotions.
//!
//! The movement rules are stateless; [`Game`] is the caller-side
//! bookkeeping around them:
//! - whose turn it is
//! - the append-only move history the rules read en passant from
//! - the boards before each move, for undo
//! - a promotion waiting for its replacement piece

use crate::rules::{RuleSet, StandardRules};
use crate::MoveVerdict;
use chess_core::{Board, Color, Move, MoveRecord, Piece, PieceKind, PlacementError, Square};
use thiserror::Error;
use tracing::debug;

/// A pawn move onto the last row that is waiting for the player to pick
/// the replacement piece. The board does not change until it is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
    /// The pawn as it stood before moving.
    pub piece: Piece,
}

/// What happened after a move was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied; the verdict tells which special rule applied.
    Moved(MoveVerdict),
    /// The move is legal but waits for [`Game::promote`].
    AwaitingPromotion(PendingPromotion),
    /// A promotion was completed with the given piece.
    Promoted(PieceKind),
}

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A promotion must be completed or cancelled first.
    #[error("a promotion on {0} is waiting for a piece choice")]
    PromotionPending(Square),
    /// There is no piece on the origin square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The piece belongs to the side not on move.
    #[error("it is not {0}'s turn")]
    NotYourTurn(Color),
    /// The rules reject the move.
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },
    /// The move names a promotion piece but does not reach the last row.
    #[error("move {0} does not promote")]
    UnexpectedPromotion(Move),
    /// [`Game::promote`] was called with nothing to promote.
    #[error("no promotion is pending")]
    NoPendingPromotion,
    /// Pawns cannot become pawns or kings.
    #[error("cannot promote to {0}")]
    InvalidPromotion(PieceKind),
    /// No move has been played yet.
    #[error("no move to undo")]
    NothingToUndo,
}

/// A game in progress.
///
/// Unlike [`Board`], which is a single position, `Game` tracks the full
/// history and the side to move, and enforces the two-phase promotion
/// protocol: while a promotion is pending every other move is refused.
#[derive(Debug, Clone)]
pub struct Game<R = StandardRules> {
    rules: R,
    board: Board,
    side_to_move: Color,
    history: Vec<MoveRecord>,
    /// Board before each recorded move, parallel to `history`.
    previous: Vec<Board>,
    pending: Option<PendingPromotion>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_rules(StandardRules)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self::from_board_with_rules(StandardRules, board, side_to_move)
    }

    /// Creates a game from a piece-placement string.
    pub fn from_placement(placement: &str, side_to_move: Color) -> Result<Self, PlacementError> {
        Ok(Self::from_board(Board::from_placement(placement)?, side_to_move))
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a game using `rules`, starting from their initial board.
    pub fn with_rules(rules: R) -> Self {
        let board = rules.initial_board();
        Self::from_board_with_rules(rules, board, Color::White)
    }

    pub fn from_board_with_rules(rules: R, board: Board, side_to_move: Color) -> Self {
        Game {
            rules,
            board,
            side_to_move,
            history: Vec::new(),
            previous: Vec::new(),
            pending: None,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        self.pending.as_ref()
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Returns the verdict the rules give a move in the current position,
    /// without playing it.
    pub fn verdict(&self, from: Square, to: Square) -> MoveVerdict {
        self.rules.validate(&self.board, from, to, &self.history)
    }

    /// Returns the squares the piece on `from` may move to.
    ///
    /// Uses the real history, so an available en passant capture is
    /// included. Empty when `from` does not hold a piece of the side to
    /// move, or while a promotion is pending.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        if self.pending.is_some() {
            return Vec::new();
        }
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => {
                self.rules.moves_from(&self.board, from, &self.history)
            }
            _ => Vec::new(),
        }
    }

    /// Plays the piece on `from` to `to`.
    ///
    /// A pawn reaching the last row is not moved yet: the move is parked as
    /// a [`PendingPromotion`] and the turn stays with the mover until
    /// [`promote`](Game::promote) or [`cancel_promotion`](Game::cancel_promotion).
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        let (piece, verdict) = self.check_move(from, to)?;

        if verdict.promotion {
            let pending = PendingPromotion { from, to, piece };
            self.pending = Some(pending);
            debug!(%from, %to, "promotion pending");
            return Ok(MoveOutcome::AwaitingPromotion(pending));
        }

        let next = self.rules.apply(&self.board, from, to, &verdict);
        self.commit(next, MoveRecord::new(from, to, piece));
        Ok(MoveOutcome::Moved(verdict))
    }

    /// Plays a coordinate move, completing the promotion in the same call
    /// when the move names a piece.
    ///
    /// A move naming a piece that does not reach the last row is refused
    /// before anything changes. If the promotion piece itself is refused,
    /// the pending promotion is dropped again.
    pub fn play_move(&mut self, m: Move) -> Result<MoveOutcome, GameError> {
        if let Some(kind) = m.promotion {
            let (_, verdict) = self.check_move(m.from, m.to)?;
            if !verdict.promotion {
                return Err(GameError::UnexpectedPromotion(m));
            }
            if !kind.is_promotion_target() {
                return Err(GameError::InvalidPromotion(kind));
            }
            self.play(m.from, m.to)?;
            self.promote(kind)?;
            return Ok(MoveOutcome::Promoted(kind));
        }
        self.play(m.from, m.to)
    }

    /// Completes the pending promotion with `kind`.
    pub fn promote(&mut self, kind: PieceKind) -> Result<(), GameError> {
        let pending = self.pending.ok_or(GameError::NoPendingPromotion)?;
        if !kind.is_promotion_target() {
            return Err(GameError::InvalidPromotion(kind));
        }

        self.pending = None;
        let next = self.rules.promote(
            &self.board,
            pending.from,
            pending.to,
            kind,
            pending.piece.color,
        );
        self.commit(
            next,
            MoveRecord::promoted(pending.from, pending.to, pending.piece, kind),
        );
        Ok(())
    }

    /// Drops the pending promotion, leaving the board and turn unchanged.
    /// Returns the move that was pending, if any.
    pub fn cancel_promotion(&mut self) -> Option<PendingPromotion> {
        self.pending.take()
    }

    /// Takes back the last move.
    ///
    /// While a promotion is pending, undo only cancels it.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.pending.take().is_some() {
            return Ok(());
        }
        let (Some(board), Some(record)) = (self.previous.pop(), self.history.pop()) else {
            return Err(GameError::NothingToUndo);
        };
        self.board = board;
        self.side_to_move = self.side_to_move.opposite();
        debug!(%record, "move taken back");
        Ok(())
    }

    fn check_move(&self, from: Square, to: Square) -> Result<(Piece, MoveVerdict), GameError> {
        if let Some(pending) = self.pending {
            return Err(GameError::PromotionPending(pending.to));
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            return Err(GameError::NotYourTurn(piece.color));
        }

        let verdict = self.verdict(from, to);
        if !verdict.valid {
            debug!(%from, %to, "illegal move refused");
            return Err(GameError::IllegalMove { from, to });
        }
        Ok((piece, verdict))
    }

    fn commit(&mut self, next: Board, record: MoveRecord) {
        debug!(%record, color = %self.side_to_move, "move played");
        self.previous.push(self.board);
        self.history.push(record);
        self.board = next;
        self.side_to_move = self.side_to_move.opposite();
    }
}
