//! Grid coordinates and the algebraic notation codec.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::MatchError;

/// Rows and columns of a chess board
pub const BOARD_SIZE: usize = 8;

/// Zero-based (row, column) grid coordinates.
///
/// Row 0 is rank 8 and column 0 is file a, so `Position::new(0, 0)` is a8
/// and `Position::new(7, 7)` is h1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    /// Shift by a signed delta. Returns `None` below row or column zero;
    /// the upper bound is the grid's business.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_column: isize) -> Option<Position> {
        let row = self.row.checked_add_signed(d_row)?;
        let column = self.column.checked_add_signed(d_column)?;
        Some(Position { row, column })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.row, self.column)
    }
}

/// A square in algebraic notation: file letter `a`-`h` and rank `1`-`8`.
///
/// With the `serde` feature the square travels as a `(column, row)` pair and
/// is bounds checked on the way in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(char, u8)", into = "(char, u8)"))]
pub struct AlgebraicPosition {
    column: char,
    row: u8,
}

impl AlgebraicPosition {
    /// Create a square with bounds checking
    pub fn new(column: char, row: u8) -> Result<Self, MatchError> {
        if !('a'..='h').contains(&column) || !(1..=8).contains(&row) {
            return Err(MatchError::InvalidAlgebraicPosition {
                notation: format!("{column}{row}"),
            });
        }
        Ok(AlgebraicPosition { column, row })
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> char {
        self.column
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Internal grid coordinates of this square
    #[must_use]
    pub fn to_position(self) -> Position {
        Position::new(
            BOARD_SIZE - self.row as usize,
            (self.column as u8 - b'a') as usize,
        )
    }

    /// Algebraic form of a grid position; fails for positions off the board.
    pub fn from_position(position: Position) -> Result<Self, MatchError> {
        if position.row >= BOARD_SIZE || position.column >= BOARD_SIZE {
            return Err(MatchError::InvalidAlgebraicPosition {
                notation: position.to_string(),
            });
        }
        Ok(AlgebraicPosition {
            column: (b'a' + position.column as u8) as char,
            row: (BOARD_SIZE - position.row) as u8,
        })
    }
}

impl fmt::Display for AlgebraicPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl TryFrom<(char, u8)> for AlgebraicPosition {
    type Error = MatchError;

    fn try_from((column, row): (char, u8)) -> Result<Self, Self::Error> {
        AlgebraicPosition::new(column, row)
    }
}

impl From<AlgebraicPosition> for (char, u8) {
    fn from(square: AlgebraicPosition) -> Self {
        (square.column, square.row)
    }
}

impl TryFrom<Position> for AlgebraicPosition {
    type Error = MatchError;

    fn try_from(position: Position) -> Result<Self, Self::Error> {
        AlgebraicPosition::from_position(position)
    }
}

impl From<AlgebraicPosition> for Position {
    fn from(square: AlgebraicPosition) -> Self {
        square.to_position()
    }
}

impl FromStr for AlgebraicPosition {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MatchError::InvalidAlgebraicPosition {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(column), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let row = row.to_digit(10).ok_or_else(invalid)?;

        AlgebraicPosition::new(column, row as u8).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_squares() {
        let a8: AlgebraicPosition = "a8".parse().unwrap();
        assert_eq!(a8.to_position(), Position::new(0, 0));
        let h1: AlgebraicPosition = "h1".parse().unwrap();
        assert_eq!(h1.to_position(), Position::new(7, 7));
        let e2: AlgebraicPosition = "e2".parse().unwrap();
        assert_eq!(e2.to_position(), Position::new(6, 4));
    }

    #[test]
    fn test_round_trip_all_squares() {
        for column in 'a'..='h' {
            for row in 1..=8u8 {
                let square = AlgebraicPosition::new(column, row).unwrap();
                let decoded = AlgebraicPosition::from_position(square.to_position()).unwrap();
                assert_eq!(decoded, square);
                assert_eq!(decoded.to_string().parse::<AlgebraicPosition>().unwrap(), square);
            }
        }
        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let position = Position::new(row, column);
                let square = AlgebraicPosition::from_position(position).unwrap();
                assert_eq!(square.to_position(), position);
            }
        }
    }

    #[test]
    fn test_rejects_malformed_notation() {
        for bad in ["", "e", "e22", "i1", "a0", "a9", "E2", "2e", "ex", "e 2"] {
            assert!(
                matches!(
                    bad.parse::<AlgebraicPosition>(),
                    Err(MatchError::InvalidAlgebraicPosition { .. })
                ),
                "'{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn test_from_position_off_board() {
        assert!(AlgebraicPosition::from_position(Position::new(8, 0)).is_err());
        assert!(AlgebraicPosition::from_position(Position::new(0, 8)).is_err());
    }

    #[test]
    fn test_offset_underflow() {
        let a8 = Position::new(0, 0);
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(0, -1), None);
        assert_eq!(a8.offset(2, 1), Some(Position::new(2, 1)));
    }

    #[test]
    fn test_try_from_tuple() {
        let square = AlgebraicPosition::try_from(('c', 5)).unwrap();
        assert_eq!(square.to_string(), "c5");
        assert!(AlgebraicPosition::try_from(('z', 5)).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_bounds() {
        let e4: AlgebraicPosition = serde_json::from_str(r#"["e",4]"#).unwrap();
        assert_eq!(e4.to_position(), Position::new(4, 4));
        assert_eq!(serde_json::to_string(&e4).unwrap(), r#"["e",4]"#);

        assert!(serde_json::from_str::<AlgebraicPosition>(r#"["Z",9]"#).is_err());
        assert!(serde_json::from_str::<AlgebraicPosition>(r#"{"column":"Z","row":9}"#).is_err());
    }
}
