//! Rule options for a match.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How strictly castling is validated when generating king moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingRule {
    /// Standard chess: the king may not castle out of, through, or into
    /// an attacked square.
    #[default]
    Strict,
    /// Only unmoved king and rook and empty squares between them are
    /// required. Landing in check is still rejected as a self-check.
    Lenient,
}

/// Options fixed at the start of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchOptions {
    pub castling: CastlingRule,
    /// Reject moves once checkmate is reached. When false the checkmate
    /// flag is advisory and the caller must stop play.
    pub enforce_game_over: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            castling: CastlingRule::Strict,
            enforce_game_over: true,
        }
    }
}

impl MatchOptions {
    /// Set the castling rule.
    #[must_use]
    pub const fn castling(mut self, rule: CastlingRule) -> Self {
        self.castling = rule;
        self
    }

    /// Enable or disable hard enforcement of checkmate.
    #[must_use]
    pub const fn enforce_game_over(mut self, enforce: bool) -> Self {
        self.enforce_game_over = enforce;
        self
    }
}
