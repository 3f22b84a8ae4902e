//! Piece-placement strings (the first field of FEN).
//!
//! A placement lists eight row groups separated by `/`, row 0 first, so the
//! standard start reads `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.

use crate::{Board, Piece, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCharacter { ch: char, rank: u8 },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidRankLength { rank: u8, squares: u32 },
}

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parses a placement string into a board.
    ///
    /// The string carries no move history, so `has_moved` is inferred:
    /// pawns away from their starting row are marked as moved, every other
    /// piece is taken as unmoved.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::InvalidRankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let rank_number = 8 - row as u8;
            let mut col = 0u32;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(PlacementError::InvalidCharacter {
                    ch: c,
                    rank: rank_number,
                })?;
                if col < 8 {
                    if let Some(square) = Square::new(row as u8, col as u8) {
                        board.set(square, Some(infer_moved(piece, square)));
                    }
                }
                col += 1;
            }
            if col != 8 {
                return Err(PlacementError::InvalidRankLength {
                    rank: rank_number,
                    squares: col,
                });
            }
        }
        Ok(board)
    }

    /// Serializes the board as a placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for (row, cells) in self.rows().iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut gap = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
        }
        out
    }
}

fn infer_moved(piece: Piece, square: Square) -> Piece {
    if piece.kind == PieceKind::Pawn && square.row() != piece.color.pawn_row() {
        piece.moved()
    } else {
        piece
    }
}
