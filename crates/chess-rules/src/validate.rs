//! Move legality validation.
//!
//! Validation runs in a fixed order:
//! 1. a destination holding a piece of the mover's color is rejected;
//! 2. the piece's movement shape is checked, including path emptiness for
//!    sliders;
//! 3. shapes that can only be special moves (a king stepping two columns,
//!    a pawn stepping diagonally onto an empty square) go through the
//!    castling or en passant checks;
//! 4. a pawn arriving on row 0 or row 7 is flagged as a promotion.
//!
//! Legality is purely positional: nothing here looks at whether a king is
//! attacked.

use chess_core::{Board, MoveRecord, Piece, PieceKind, Square};
use tracing::trace;

use crate::MoveVerdict;

/// What the movement rules make of a `from -> to` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// The piece cannot move that way.
    Invalid,
    /// An ordinary move or capture.
    Basic,
    /// A king moving two columns along its row.
    CastlingCandidate,
    /// A pawn stepping diagonally forward onto an empty square.
    EnPassantCandidate,
}

/// Decides whether moving the piece on `from` to `to` is legal.
///
/// Only the last entry of `history` is consulted, and only for en passant:
/// the capture must answer the double step made immediately before it.
/// An empty `from` square yields [`MoveVerdict::ILLEGAL`].
pub fn validate(board: &Board, from: Square, to: Square, history: &[MoveRecord]) -> MoveVerdict {
    let Some(piece) = board.piece_at(from) else {
        return MoveVerdict::ILLEGAL;
    };

    if board
        .piece_at(to)
        .is_some_and(|target| target.color == piece.color)
    {
        return MoveVerdict::ILLEGAL;
    }

    let verdict = match shape(board, from, to, piece) {
        Shape::Invalid => MoveVerdict::ILLEGAL,
        Shape::CastlingCandidate => validate_castling(board, from, to, piece),
        Shape::EnPassantCandidate => validate_en_passant(board, from, to, piece, history),
        Shape::Basic if piece.kind == PieceKind::Pawn && is_last_row(to) => MoveVerdict::PROMOTION,
        Shape::Basic => MoveVerdict::LEGAL,
    };

    if !verdict.valid {
        trace!(%from, %to, kind = %piece.kind, "move rejected");
    }
    verdict
}

#[inline]
fn is_last_row(square: Square) -> bool {
    square.row() == 0 || square.row() == 7
}

fn shape(board: &Board, from: Square, to: Square, piece: Piece) -> Shape {
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;

    let basic = |ok: bool| if ok { Shape::Basic } else { Shape::Invalid };

    match piece.kind {
        PieceKind::Pawn => pawn_shape(board, from, to, piece),
        PieceKind::Knight => basic(matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))),
        PieceKind::Bishop => basic(is_clear_diagonal(board, from, to)),
        PieceKind::Rook => basic(is_clear_line(board, from, to)),
        PieceKind::Queen => {
            basic(is_clear_diagonal(board, from, to) || is_clear_line(board, from, to))
        }
        PieceKind::King => {
            if dr == 0 && dc.abs() == 2 {
                Shape::CastlingCandidate
            } else {
                basic(dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0))
            }
        }
    }
}

fn pawn_shape(board: &Board, from: Square, to: Square, piece: Piece) -> Shape {
    let direction = piece.color.pawn_direction();
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;

    if dc == 0 {
        if dr == direction && board.is_empty(to) {
            return Shape::Basic;
        }
        if dr == 2 * direction && from.row() == piece.color.pawn_row() && board.is_empty(to) {
            let passes_empty = from
                .offset(direction, 0)
                .is_some_and(|between| board.is_empty(between));
            if passes_empty {
                return Shape::Basic;
            }
        }
        return Shape::Invalid;
    }

    if dc.abs() == 1 && dr == direction {
        return match board.piece_at(to) {
            Some(target) if target.color != piece.color => Shape::Basic,
            Some(_) => Shape::Invalid,
            None => Shape::EnPassantCandidate,
        };
    }

    Shape::Invalid
}

/// Returns true if every square strictly between `from` and `to` is empty.
/// `from` and `to` must share a row, a column, or a diagonal.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let dr = to.row() as i8 - from.row() as i8;
    let dc = to.col() as i8 - from.col() as i8;
    let steps = dr.abs().max(dc.abs());
    let (step_r, step_c) = (dr.signum(), dc.signum());

    (1..steps).all(|i| {
        from.offset(i * step_r, i * step_c)
            .is_some_and(|square| board.is_empty(square))
    })
}

fn is_clear_diagonal(board: &Board, from: Square, to: Square) -> bool {
    let dr = from.row().abs_diff(to.row());
    let dc = from.col().abs_diff(to.col());
    dr == dc && dr > 0 && path_is_clear(board, from, to)
}

fn is_clear_line(board: &Board, from: Square, to: Square) -> bool {
    (from.row() == to.row()) != (from.col() == to.col()) && path_is_clear(board, from, to)
}

/// The king must not have moved; the rook in the corner on the side it is
/// heading must be an unmoved rook of the same color; every square between
/// king and rook must be empty. Whether the king passes through an attacked
/// square is not checked.
fn validate_castling(board: &Board, from: Square, to: Square, king: Piece) -> MoveVerdict {
    if king.has_moved {
        return MoveVerdict::ILLEGAL;
    }

    let Some(rook_square) = castling_rook_square(from, to) else {
        return MoveVerdict::ILLEGAL;
    };
    let rook_ok = board.piece_at(rook_square).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
    });
    if !rook_ok || !path_is_clear(board, from, rook_square) {
        return MoveVerdict::ILLEGAL;
    }

    MoveVerdict::CASTLING
}

/// The corner square of the rook a king castling from `from` to `to` pairs
/// with: column 7 when moving right, column 0 when moving left.
pub(crate) fn castling_rook_square(from: Square, to: Square) -> Option<Square> {
    let rook_col = if to.col() > from.col() { 7 } else { 0 };
    Square::new(from.row(), rook_col)
}

/// En passant answers only the move made immediately before: that move must
/// be a pawn double step landing beside the capturing pawn, in the column
/// the capture moves into, and the enemy pawn must still stand there.
fn validate_en_passant(
    board: &Board,
    from: Square,
    to: Square,
    pawn: Piece,
    history: &[MoveRecord],
) -> MoveVerdict {
    let Some(last) = history.last() else {
        return MoveVerdict::ILLEGAL;
    };

    let beside = last.to.row() == from.row() && last.to.col() == to.col();
    let victim_ok = board.piece_at(last.to).is_some_and(|victim| {
        victim.kind == PieceKind::Pawn && victim.color != pawn.color
    });

    if last.is_double_step() && beside && victim_ok {
        MoveVerdict::EN_PASSANT
    } else {
        MoveVerdict::ILLEGAL
    }
}
