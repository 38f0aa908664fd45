//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legality matrices for each piece kind
//! - `make_unmake.rs` - Make/undo correctness and roster bookkeeping
//! - `rules.rs` - Turn order, check, checkmate and error handling
//! - `promotion.rs` - Automatic promotion and piece replacement
//! - `proptest.rs` - Property-based tests

mod rules;

use crate::board::{AlgebraicPosition, ChessMatch, MatchError, Piece};

pub(super) fn sq(s: &str) -> AlgebraicPosition {
    s.parse().unwrap()
}

/// Play a list of "e2e4"-style moves, panicking on the first failure.
pub(super) fn play(game: &mut ChessMatch, moves: &[&str]) {
    for mv in moves {
        let (from, to) = mv.split_at(2);
        if let Err(e) = game.perform_move(sq(from), sq(to)) {
            panic!("{mv} failed: {e}");
        }
    }
}

pub(super) fn try_move(
    game: &mut ChessMatch,
    from: &str,
    to: &str,
) -> Result<Option<Piece>, MatchError> {
    game.perform_move(sq(from), sq(to))
}
