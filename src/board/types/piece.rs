//! Piece, piece kind and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Position;
use crate::board::grid::Occupant;

/// The six chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase letter used on boards and in promotion prompts
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a promotion choice. Only `B`, `N`, `R` and `Q` are accepted.
    #[must_use]
    pub fn from_promotion_letter(letter: &str) -> Option<PieceKind> {
        match letter {
            "B" => Some(PieceKind::Bishop),
            "N" => Some(PieceKind::Knight),
            "R" => Some(PieceKind::Rook),
            "Q" => Some(PieceKind::Queen),
            _ => None,
        }
    }
}

/// Kinds a pawn may be promoted to, default first
pub(crate) const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a pawn advance. Rank 8 is row 0, so White moves up
    /// the grid towards smaller rows.
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row a pawn promotes on (rank 8 for White, rank 1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Stable identity of a piece within one match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub u16);

/// A chess piece.
///
/// The piece records where it stands; the grid keeps that record in sync
/// through [`Occupant`]. A captured piece has no position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) kind: PieceKind,
    pub(crate) color: Color,
    pub(crate) position: Option<Position>,
    pub(crate) move_count: u32,
}

impl Piece {
    #[must_use]
    pub(crate) const fn new(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Piece {
            id,
            kind,
            color,
            position: None,
            move_count: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Current square, or `None` once captured
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    /// Number of times this piece has moved (castling rook relocations count)
    #[inline]
    #[must_use]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Board character: uppercase for White, lowercase for Black
    #[must_use]
    pub fn symbol(&self) -> char {
        let c = self.kind.letter();
        if self.color == Color::White {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }
}

impl Occupant for Piece {
    fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        let white = Piece::new(PieceId(0), PieceKind::Knight, Color::White);
        let black = Piece::new(PieceId(1), PieceKind::Knight, Color::Black);
        assert_eq!(white.symbol(), 'N');
        assert_eq!(black.symbol(), 'n');
        assert_eq!(black.to_string(), "n");
    }

    #[test]
    fn test_promotion_letters() {
        for kind in PROMOTION_KINDS {
            let letter = kind.letter().to_string();
            assert_eq!(PieceKind::from_promotion_letter(&letter), Some(kind));
        }
        assert_eq!(PieceKind::from_promotion_letter("K"), None);
        assert_eq!(PieceKind::from_promotion_letter("P"), None);
        assert_eq!(PieceKind::from_promotion_letter("n"), None);
        assert_eq!(PieceKind::from_promotion_letter("QQ"), None);
    }

    #[test]
    fn test_pawns_advance_towards_promotion_row() {
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.pawn_direction(), 1);
        assert_eq!(Color::Black.promotion_row(), 7);
        assert_eq!(Color::White.opponent(), Color::Black);
    }
}
