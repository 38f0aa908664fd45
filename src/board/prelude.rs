//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_match::board::prelude::*;
//!
//! let game = ChessMatch::new();
//! assert_eq!(game.current_player(), Color::White);
//! ```

pub use super::{
    AlgebraicPosition, ChessMatch, Color, MatchBuilder, MatchError, MatchOptions, MoveMatrix,
    Piece, PieceKind, Position,
};
