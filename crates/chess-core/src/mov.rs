//! Move representation: coordinate moves and history records.

use crate::{Piece, PieceKind, Square};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a coordinate move.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move '{0}': expected 4 or 5 characters")]
    InvalidLength(String),

    #[error("invalid square in move '{0}'")]
    InvalidSquare(String),

    #[error("invalid promotion piece '{0}'")]
    InvalidPromotion(char),
}

/// A requested move in coordinate form, e.g. `e2e4` or `e7e8q`.
///
/// Carries no legality information; the rules decide what it means.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a move without a promotion choice.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a move that promotes to `kind` on arrival.
    #[inline]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength(s.to_string()));
        }
        let from = Square::from_algebraic(&s[0..2])
            .ok_or_else(|| MoveParseError::InvalidSquare(s.to_string()))?;
        let to = Square::from_algebraic(&s[2..4])
            .ok_or_else(|| MoveParseError::InvalidSquare(s.to_string()))?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(MoveParseError::InvalidPromotion(c)),
            },
        };
        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

/// One entry of the move history.
///
/// `piece` is the moving piece as it stood before the move. History is
/// append-only; the rules only ever look at its last entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub promotion: Option<PieceKind>,
}

impl MoveRecord {
    /// Records an ordinary move.
    pub const fn new(from: Square, to: Square, piece: Piece) -> Self {
        MoveRecord {
            from,
            to,
            piece,
            promotion: None,
        }
    }

    /// Records a promotion to `kind`.
    pub const fn promoted(from: Square, to: Square, piece: Piece, kind: PieceKind) -> Self {
        MoveRecord {
            from,
            to,
            piece,
            promotion: Some(kind),
        }
    }

    /// Returns true if this was a pawn advancing two rows at once.
    pub const fn is_double_step(&self) -> bool {
        matches!(self.piece.kind, PieceKind::Pawn) && self.from.row().abs_diff(self.to.row()) == 2
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, " (={})", kind.to_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn move_from_str() {
        let m: Move = "e2e4".parse().unwrap();
        assert_eq!(m.from, sq("e2"));
        assert_eq!(m.to, sq("e4"));
        assert_eq!(m.promotion, None);

        let promo: Move = "e7e8q".parse().unwrap();
        assert_eq!(promo.promotion, Some(PieceKind::Queen));
        let under: Move = "b2b1N".parse().unwrap();
        assert_eq!(under.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn move_from_str_errors() {
        assert_eq!(
            "e2".parse::<Move>(),
            Err(MoveParseError::InvalidLength("e2".to_string()))
        );
        assert_eq!(
            "e2e4qq".parse::<Move>(),
            Err(MoveParseError::InvalidLength("e2e4qq".to_string()))
        );
        assert_eq!(
            "e2e9".parse::<Move>(),
            Err(MoveParseError::InvalidSquare("e2e9".to_string()))
        );
        assert_eq!(
            "e7e8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion('k'))
        );
        assert_eq!(
            "e7e8x".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion('x'))
        );
        assert!("é2e4".parse::<Move>().is_err());
    }

    #[test]
    fn move_display() {
        let m = Move::new(sq("g1"), sq("f3"));
        assert_eq!(m.to_string(), "g1f3");
        assert_eq!(format!("{:?}", m), "Move(g1f3)");
        let promo = Move::with_promotion(sq("a7"), sq("a8"), PieceKind::Rook);
        assert_eq!(promo.to_string(), "a7a8r");
    }

    #[test]
    fn record_double_step() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert!(MoveRecord::new(sq("e2"), sq("e4"), pawn).is_double_step());
        assert!(!MoveRecord::new(sq("e2"), sq("e3"), pawn).is_double_step());

        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert!(!MoveRecord::new(sq("a1"), sq("a3"), rook).is_double_step());
    }

    #[test]
    fn record_display() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(
            MoveRecord::new(sq("e2"), sq("e4"), pawn).to_string(),
            "e2 → e4"
        );
        assert_eq!(
            MoveRecord::promoted(sq("e7"), sq("e8"), pawn.moved(), PieceKind::Queen).to_string(),
            "e7 → e8 (=Q)"
        );
    }
}
