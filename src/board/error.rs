//! Error types for grid and match operations.

use std::fmt;

use super::types::{AlgebraicPosition, Color, Position};

/// Error type for grid bookkeeping failures.
///
/// These indicate a programming fault in whoever drives the grid; correct
/// use of the match engine never produces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column
    InvalidDimensions { rows: usize, columns: usize },
    /// Position lies outside the grid
    OutOfBounds { position: Position },
    /// A piece already sits on the target cell
    OccupiedCell { position: Position },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, columns } => {
                write!(
                    f,
                    "Grid of {rows}x{columns} is invalid: there must be at least 1 row and 1 column"
                )
            }
            GridError::OutOfBounds { position } => {
                write!(f, "Position ({position}) is not on the board")
            }
            GridError::OccupiedCell { position } => {
                write!(f, "There is already a piece on position ({position})")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Broad classification of a [`MatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Grid bookkeeping fault
    Structural,
    /// Bad caller input; re-prompt
    Input,
    /// Structurally legal move rejected by the king-safety rule
    RuleViolation,
    /// Broken invariant; the match cannot continue
    FatalInvariant,
}

/// Error type for match engine operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Grid bookkeeping failure
    Grid(GridError),
    /// Malformed square notation
    InvalidAlgebraicPosition { notation: String },
    /// Source square is empty
    NoPieceAtSource { square: AlgebraicPosition },
    /// Source piece belongs to the player not on move
    OpponentPieceSelected { square: AlgebraicPosition },
    /// Source piece cannot move anywhere
    NoLegalMoves { square: AlgebraicPosition },
    /// Source piece cannot reach the target
    IllegalTarget {
        from: AlgebraicPosition,
        to: AlgebraicPosition,
    },
    /// Move would leave the mover's own king in check
    SelfCheck {
        from: AlgebraicPosition,
        to: AlgebraicPosition,
    },
    /// `promote` called with no pawn awaiting promotion
    NoPendingPromotion,
    /// Move attempted after checkmate
    GameOver { winner: Color },
    /// No king of this color on the board
    MissingKing { color: Color },
}

impl MatchError {
    /// Classify the error
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            MatchError::Grid(_) => ErrorClass::Structural,
            MatchError::InvalidAlgebraicPosition { .. }
            | MatchError::NoPieceAtSource { .. }
            | MatchError::OpponentPieceSelected { .. }
            | MatchError::NoLegalMoves { .. }
            | MatchError::IllegalTarget { .. }
            | MatchError::NoPendingPromotion
            | MatchError::GameOver { .. } => ErrorClass::Input,
            MatchError::SelfCheck { .. } => ErrorClass::RuleViolation,
            MatchError::MissingKing { .. } => ErrorClass::FatalInvariant,
        }
    }

    /// Returns true if the caller can simply re-prompt and carry on.
    /// The match state is unchanged after any recoverable error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self.class(), ErrorClass::Input | ErrorClass::RuleViolation)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Grid(e) => write!(f, "Board error: {e}"),
            MatchError::InvalidAlgebraicPosition { notation } => {
                write!(
                    f,
                    "Invalid position '{notation}'. Valid values are from a1 to h8"
                )
            }
            MatchError::NoPieceAtSource { square } => {
                write!(f, "There is no piece on source position {square}")
            }
            MatchError::OpponentPieceSelected { square } => {
                write!(f, "The piece on {square} is not yours")
            }
            MatchError::NoLegalMoves { square } => {
                write!(f, "There are no possible moves for the piece on {square}")
            }
            MatchError::IllegalTarget { from, to } => {
                write!(f, "The piece on {from} can't move to {to}")
            }
            MatchError::SelfCheck { from, to } => {
                write!(f, "Moving {from} to {to} would put your own king in check")
            }
            MatchError::NoPendingPromotion => write!(f, "There is no piece to be promoted"),
            MatchError::GameOver { winner } => {
                write!(f, "The match is over, {winner} won by checkmate")
            }
            MatchError::MissingKing { color } => {
                write!(f, "There is no {color} king on the board")
            }
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for MatchError {
    fn from(e: GridError) -> Self {
        MatchError::Grid(e)
    }
}
