//! Move execution.
//!
//! The executor trusts the verdict it is given and does not re-validate.
//! Every function works on a copy and returns the new board; the board
//! passed in is left as it was.

use chess_core::{Board, Color, Piece, PieceKind, Square};
use tracing::debug;

use crate::validate::castling_rook_square;
use crate::MoveVerdict;

/// Applies a move that [`validate`](crate::validate) accepted with `verdict`.
///
/// The moving piece is marked as moved. Castling also brings the corner
/// rook to the square next to the king's destination, on the side it came
/// from. En passant removes the captured pawn from `(from.row, to.col)`.
///
/// Promotions are not applied here: finish them with [`promote`].
pub fn apply(board: &Board, from: Square, to: Square, verdict: &MoveVerdict) -> Board {
    let mut next = *board;
    let Some(piece) = next.piece_at(from) else {
        return next;
    };

    if verdict.castling {
        if let Some((rook_from, rook_to)) = castling_rook_move(from, to) {
            let rook = next.piece_at(rook_from).map(Piece::moved);
            next.set(rook_from, None);
            next.set(rook_to, rook);
            debug!(king = %to, rook = %rook_to, "castled");
        }
    }

    if verdict.en_passant {
        if let Some(captured) = Square::new(from.row(), to.col()) {
            next.set(captured, None);
            debug!(%captured, "en passant capture");
        }
    }

    next.set(to, Some(piece.moved()));
    next.set(from, None);
    next
}

/// Finishes a pending promotion: `to` receives a new `kind` piece of
/// `color`, already marked as moved, and `from` is cleared.
pub fn promote(board: &Board, from: Square, to: Square, kind: PieceKind, color: Color) -> Board {
    let mut next = *board;
    next.set(to, Some(Piece::new(kind, color).moved()));
    next.set(from, None);
    debug!(%from, %to, %kind, "promoted");
    next
}

/// Returns `(rook_from, rook_to)` for a king castling from `from` to `to`.
fn castling_rook_move(from: Square, to: Square) -> Option<(Square, Square)> {
    let rook_from = castling_rook_square(from, to)?;
    let step: i8 = if rook_from.col() > from.col() { -1 } else { 1 };
    let rook_to = to.offset(0, step)?;
    Some((rook_from, rook_to))
}
