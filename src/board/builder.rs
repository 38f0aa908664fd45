//! Fluent builder for constructing match positions.
//!
//! Allows setting up a match piece by piece instead of playing moves from
//! the starting position.
//!
//! # Example
//! ```
//! use chess_match::board::{Color, MatchBuilder, PieceKind};
//!
//! let game = MatchBuilder::new()
//!     .piece("e1", Color::White, PieceKind::King)
//!     .piece("e8", Color::Black, PieceKind::King)
//!     .piece("a2", Color::White, PieceKind::Pawn)
//!     .current_player(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.active_pieces().count(), 3);
//! ```

use super::{AlgebraicPosition, ChessMatch, Color, MatchError, MatchOptions, PieceKind};

#[derive(Clone, Debug)]
struct Placement {
    square: String,
    color: Color,
    kind: PieceKind,
    moved: bool,
}

/// A fluent builder for constructing `ChessMatch` positions.
#[derive(Clone, Debug)]
pub struct MatchBuilder {
    placements: Vec<Placement>,
    current_player: Color,
    options: MatchOptions,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        MatchBuilder {
            placements: Vec::new(),
            current_player: Color::White,
            options: MatchOptions::default(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut builder = Self::new();
        for (file, &kind) in ('a'..='h').zip(back_rank.iter()) {
            builder = builder
                .piece(&format!("{file}1"), Color::White, kind)
                .piece(&format!("{file}2"), Color::White, PieceKind::Pawn)
                .piece(&format!("{file}7"), Color::Black, PieceKind::Pawn)
                .piece(&format!("{file}8"), Color::Black, kind);
        }
        builder
    }

    /// Place a piece, replacing whatever the builder had on that square.
    #[must_use]
    pub fn piece(mut self, square: &str, color: Color, kind: PieceKind) -> Self {
        self.placements.retain(|p| p.square != square);
        self.placements.push(Placement {
            square: square.to_string(),
            color,
            kind,
            moved: false,
        });
        self
    }

    /// Mark the piece on `square` as having moved once, which rules out
    /// castling with it and a pawn's double step.
    #[must_use]
    pub fn moved(mut self, square: &str) -> Self {
        for placement in self.placements.iter_mut().filter(|p| p.square == square) {
            placement.moved = true;
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: &str) -> Self {
        self.placements.retain(|p| p.square != square);
        self
    }

    /// Set the player to move.
    #[must_use]
    pub const fn current_player(mut self, color: Color) -> Self {
        self.current_player = color;
        self
    }

    /// Set the match options.
    #[must_use]
    pub const fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the match.
    ///
    /// Fails with `InvalidAlgebraicPosition` if a square does not parse.
    /// Check and checkmate flags start cleared; they are computed after the
    /// first move.
    pub fn build(self) -> Result<ChessMatch, MatchError> {
        let mut game = ChessMatch::empty(self.options)?;

        for placement in self.placements {
            let square: AlgebraicPosition = placement.square.parse()?;
            let position = square.to_position();
            game.spawn(placement.kind, placement.color, position)?;
            if placement.moved {
                if let Some(mut piece) = game.grid.remove(position)? {
                    piece.move_count = 1;
                    game.grid.place(piece, position)?;
                }
            }
        }

        game.current_player = self.current_player;
        Ok(game)
    }
}
