//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the rules and the
//! command-line driver:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for `(row, col)` board coordinates
//! - [`Board`], the 8x8 grid value
//! - [`Move`] and [`MoveRecord`] for requested moves and move history
//! - Piece-placement parsing and serialization
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on the
//! value types.

mod board;
mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use board::Board;
pub use color::Color;
pub use mov::{Move, MoveParseError, MoveRecord};
pub use piece::{Piece, PieceKind};
pub use placement::{PlacementError, STARTING_PLACEMENT};
pub use square::{Square, SquareParseError};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn square_serializes_as_algebraic() {
        let json = serde_json::to_string(&Square::E1).unwrap();
        assert_eq!(json, "\"e1\"");
        let back: Square = serde_json::from_str("\"h8\"").unwrap();
        assert_eq!(back, Square::H8);
        assert!(serde_json::from_str::<Square>("\"j9\"").is_err());
    }

    #[test]
    fn record_json_shape() {
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let record = MoveRecord::new(
            Square::from_algebraic("d7").unwrap(),
            Square::from_algebraic("d5").unwrap(),
            pawn,
        );
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value["from"], "d7");
        assert_eq!(value["to"], "d5");
        assert_eq!(value["piece"]["kind"], "pawn");
        assert_eq!(value["piece"]["color"], "black");
        assert_eq!(value["piece"]["has_moved"], false);
        assert!(value["promotion"].is_null());
    }
}
