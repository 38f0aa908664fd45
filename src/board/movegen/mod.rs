//! Per-piece legality matrices.
//!
//! A legality matrix marks every square a piece could move to ignoring
//! whether the move leaves its own king in check; king safety is enforced
//! by the match engine.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::grid::Grid;
use super::types::{Color, MoveMatrix, Piece, PieceId, PieceKind, Position};

use sliders::{BISHOP_DIRS, ROOK_DIRS};

/// How castling moves are validated.
#[derive(Clone, Copy, Debug)]
pub enum Castling<'a> {
    /// Only unmoved pieces and empty squares between them are required
    Unchecked,
    /// Additionally the king's square, the square it crosses and its
    /// destination must not be marked in the given threat map
    AvoidThreats(&'a MoveMatrix),
}

/// Match state a piece needs to work out its moves.
#[derive(Clone, Copy, Debug)]
pub struct MoveContext<'a> {
    /// Pawn that just advanced two squares and may be taken en passant
    pub en_passant_vulnerable: Option<PieceId>,
    pub castling: Castling<'a>,
}

impl MoveContext<'_> {
    /// Context with unchecked castling
    #[must_use]
    pub const fn new(en_passant_vulnerable: Option<PieceId>) -> Self {
        MoveContext {
            en_passant_vulnerable,
            castling: Castling::Unchecked,
        }
    }
}

impl Piece {
    /// Squares this piece could move to, ignoring self-check.
    /// A captured piece has no moves.
    #[must_use]
    pub fn legal_moves(&self, grid: &Grid<Piece>, ctx: &MoveContext<'_>) -> MoveMatrix {
        let mut moves = MoveMatrix::new(grid.rows(), grid.columns());
        let Some(from) = self.position else {
            return moves;
        };

        match self.kind {
            PieceKind::Pawn => pawns::pawn_moves(self, from, grid, ctx, &mut moves),
            PieceKind::Knight => knights::knight_moves(self, from, grid, &mut moves),
            PieceKind::Bishop => sliders::ray_moves(self, from, grid, &BISHOP_DIRS, &mut moves),
            PieceKind::Rook => sliders::ray_moves(self, from, grid, &ROOK_DIRS, &mut moves),
            PieceKind::Queen => {
                sliders::ray_moves(self, from, grid, &ROOK_DIRS, &mut moves);
                sliders::ray_moves(self, from, grid, &BISHOP_DIRS, &mut moves);
            }
            PieceKind::King => {
                kings::king_steps(self, from, grid, &mut moves);
                kings::castling_moves(self, from, grid, ctx, &mut moves);
            }
        }

        moves
    }

    /// Returns true if the piece could move to `position`
    #[must_use]
    pub fn possible_move(
        &self,
        position: Position,
        grid: &Grid<Piece>,
        ctx: &MoveContext<'_>,
    ) -> bool {
        self.legal_moves(grid, ctx).get(position)
    }

    /// Returns true if the piece has at least one move
    #[must_use]
    pub fn has_any_legal_move(&self, grid: &Grid<Piece>, ctx: &MoveContext<'_>) -> bool {
        self.legal_moves(grid, ctx).any()
    }

    /// Squares this piece threatens: pawn diagonals whatever stands there,
    /// king steps without castling, everything else as its legal moves.
    #[must_use]
    pub fn attacks(&self, grid: &Grid<Piece>) -> MoveMatrix {
        let mut threats = MoveMatrix::new(grid.rows(), grid.columns());
        let Some(from) = self.position else {
            return threats;
        };

        match self.kind {
            PieceKind::Pawn => pawns::pawn_attacks(self, from, grid, &mut threats),
            PieceKind::King => kings::king_steps(self, from, grid, &mut threats),
            _ => threats = self.legal_moves(grid, &MoveContext::new(None)),
        }

        threats
    }
}

/// `from` shifted by a delta, if the result is on the grid
#[inline]
pub(crate) fn on_grid(
    grid: &Grid<Piece>,
    from: Position,
    d_row: isize,
    d_column: isize,
) -> Option<Position> {
    from.offset(d_row, d_column)
        .filter(|&position| grid.contains(position))
}

#[inline]
pub(crate) fn occupant(grid: &Grid<Piece>, position: Position) -> Option<&Piece> {
    grid.get(position).ok().flatten()
}

/// Empty, or held by a piece of the other color
#[inline]
pub(crate) fn can_land(grid: &Grid<Piece>, position: Position, color: Color) -> bool {
    occupant(grid, position).map_or(true, |other| other.color != color)
}
