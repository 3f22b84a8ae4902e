//! Board square representation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a square name cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid square: '{0}'")]
pub struct SquareParseError(pub String);

/// A square on the board, addressed by `(row, col)` with both in `0..8`.
///
/// Row 0 is Black's back row and row 7 is White's, so in algebraic
/// terms `col` maps to the file `a..h` and `row` to the rank `8 - row`:
/// - `(0, 0)` = a8, `(0, 7)` = h8
/// - `(7, 0)` = a1, `(6, 4)` = e2
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column, or `None` if either is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Creates a square from a row-major index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square {
                row: index / 8,
                col: index % 8,
            })
        } else {
            None
        }
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|index| Square {
            row: index / 8,
            col: index % 8,
        })
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square {
            row: b'8' - rank,
            col: file - b'a',
        })
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Returns the square `(row + dr, col + dc)`, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Returns the file letter (`a`-`h`).
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank digit (`1`-`8`).
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    // Corners and king squares
    pub const A8: Square = Square { row: 0, col: 0 };
    pub const E8: Square = Square { row: 0, col: 4 };
    pub const H8: Square = Square { row: 0, col: 7 };
    pub const A1: Square = Square { row: 7, col: 0 };
    pub const E1: Square = Square { row: 7, col: 4 };
    pub const H1: Square = Square { row: 7, col: 7 };
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| SquareParseError(s.to_string()))
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> String {
        square.to_algebraic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn square_new() {
        let e2 = sq(6, 4);
        assert_eq!(e2.row(), 6);
        assert_eq!(e2.col(), 4);
        assert_eq!(e2.index(), 52);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a8"), Some(Square::A8));
        assert_eq!(Square::from_algebraic("e2"), Some(sq(6, 4)));
        assert_eq!(Square::from_algebraic("E4"), Some(sq(4, 4)));
        assert_eq!(Square::from_algebraic("h1"), Some(Square::H1));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::A1.to_algebraic(), "a1");
        assert_eq!(Square::H8.to_algebraic(), "h8");
        assert_eq!(sq(4, 4).to_algebraic(), "e4");
        assert_eq!(format!("{}", Square::E1), "e1");
        assert_eq!(format!("{:?}", Square::E8), "Square(e8)");
    }

    #[test]
    fn square_from_str() {
        assert_eq!("d7".parse::<Square>(), Ok(sq(1, 3)));
        assert_eq!(
            "z9".parse::<Square>(),
            Err(SquareParseError("z9".to_string()))
        );
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::A8.offset(-1, 0), None);
        assert_eq!(Square::A8.offset(0, -1), None);
        assert_eq!(Square::H1.offset(1, 0), None);
        assert_eq!(Square::H1.offset(0, 1), None);
        assert_eq!(Square::E1.offset(-2, 1), Some(sq(5, 5)));
    }

    #[test]
    fn all_is_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        for (i, square) in squares.iter().enumerate() {
            assert_eq!(square.index(), i);
            assert_eq!(Square::from_index(i as u8), Some(*square));
        }
        assert_eq!(Square::from_index(64), None);
    }
}
