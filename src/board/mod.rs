//! Chess match state and rules.
//!
//! Pieces live on a generic [`Grid`]; each piece works out its own
//! legality matrix, and [`ChessMatch`] layers turn order, king safety,
//! castling, en passant and promotion on top.
//!
//! # Example
//! ```
//! use chess_match::board::{AlgebraicPosition, ChessMatch, Color};
//!
//! let mut game = ChessMatch::new();
//! let e2: AlgebraicPosition = "e2".parse().unwrap();
//! let e4: AlgebraicPosition = "e4".parse().unwrap();
//! assert!(game.legal_moves_from(e2).unwrap().get(e4.to_position()));
//! game.perform_move(e2, e4).unwrap();
//! assert_eq!(game.current_player(), Color::Black);
//! ```

mod builder;
mod check;
mod error;
mod grid;
mod make_unmake;
mod movegen;
mod options;
pub mod prelude;
mod state;
mod turn;
mod types;

#[cfg(test)]
mod tests;

pub use builder::MatchBuilder;
pub use error::{ErrorClass, GridError, MatchError};
pub use grid::{Grid, Occupant};
pub use movegen::{Castling, MoveContext};
pub use options::{CastlingRule, MatchOptions};
pub use state::ChessMatch;
pub use types::{AlgebraicPosition, Color, MoveMatrix, Piece, PieceId, PieceKind, Position, BOARD_SIZE};

pub(crate) use types::PROMOTION_KINDS;
