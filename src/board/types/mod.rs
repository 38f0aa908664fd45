//! Core chess types.
//!
//! This module contains the value types shared by the grid, the piece
//! catalog and the match engine:
//! - `Piece`, `PieceKind`, `PieceId` and `Color`
//! - `Position` (internal grid coordinates) and `AlgebraicPosition`
//! - `MoveMatrix` - per-square legality flags

mod matrix;
mod piece;
mod square;

pub use matrix::MoveMatrix;
pub use piece::{Color, Piece, PieceId, PieceKind};
pub use square::{AlgebraicPosition, Position, BOARD_SIZE};

pub(crate) use piece::PROMOTION_KINDS;
