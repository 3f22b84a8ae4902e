//! The result of validating a move.

/// Legality verdict for one proposed move.
///
/// Besides the yes/no answer it says which special rule the move falls
/// under, so the executor can apply the side effects without re-deriving
/// them. At most one of `castling` and `en_passant` is set, and
/// `promotion` never combines with either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveVerdict {
    pub valid: bool,
    pub castling: bool,
    pub en_passant: bool,
    pub promotion: bool,
}

impl MoveVerdict {
    /// The move is rejected.
    pub const ILLEGAL: MoveVerdict = MoveVerdict {
        valid: false,
        castling: false,
        en_passant: false,
        promotion: false,
    };

    /// An ordinary legal move.
    pub const LEGAL: MoveVerdict = MoveVerdict {
        valid: true,
        ..MoveVerdict::ILLEGAL
    };

    /// A legal castling move.
    pub const CASTLING: MoveVerdict = MoveVerdict {
        castling: true,
        ..MoveVerdict::LEGAL
    };

    /// A legal en passant capture.
    pub const EN_PASSANT: MoveVerdict = MoveVerdict {
        en_passant: true,
        ..MoveVerdict::LEGAL
    };

    /// A legal pawn move onto the last row; the replacement piece is still
    /// to be chosen.
    pub const PROMOTION: MoveVerdict = MoveVerdict {
        promotion: true,
        ..MoveVerdict::LEGAL
    };

    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns true for a legal move with no special side effects.
    #[inline]
    pub const fn is_plain(&self) -> bool {
        self.valid && !self.castling && !self.en_passant && !self.promotion
    }
}

impl From<bool> for MoveVerdict {
    fn from(valid: bool) -> Self {
        if valid {
            MoveVerdict::LEGAL
        } else {
            MoveVerdict::ILLEGAL
        }
    }
}
