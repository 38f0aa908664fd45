use once_cell::sync::Lazy;

use super::super::grid::Grid;
use super::super::types::{MoveMatrix, Piece, PieceKind, Position};
use super::knights::{step_moves, step_table};
use super::{occupant, Castling, MoveContext};

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

static KING_TARGETS: Lazy<Vec<Vec<Position>>> = Lazy::new(|| step_table(&KING_DELTAS));

pub(super) fn king_steps(piece: &Piece, from: Position, grid: &Grid<Piece>, moves: &mut MoveMatrix) {
    step_moves(piece, from, grid, &KING_TARGETS, &KING_DELTAS, moves);
}

/// Two-column king moves towards an unmoved rook of the same color standing
/// on the edge of the king's row, with every square between them empty.
pub(super) fn castling_moves(
    king: &Piece,
    from: Position,
    grid: &Grid<Piece>,
    ctx: &MoveContext<'_>,
    moves: &mut MoveMatrix,
) {
    if king.move_count != 0 {
        return;
    }
    if let Castling::AvoidThreats(threats) = ctx.castling {
        if threats.get(from) {
            return;
        }
    }

    let row = from.row();
    let last_column = grid.columns() - 1;

    // King side: rook on the last column
    if from.column() + 2 < last_column {
        let rook = Position::new(row, last_column);
        let between = (from.column() + 1..last_column).map(|c| Position::new(row, c));
        let transit = [
            Position::new(row, from.column() + 1),
            Position::new(row, from.column() + 2),
        ];
        if castling_rook_ready(king, grid, rook)
            && path_clear(grid, between)
            && transit_safe(ctx, &transit)
        {
            moves.set(transit[1]);
        }
    }

    // Queen side: rook on column zero
    if from.column() > 2 {
        let rook = Position::new(row, 0);
        let between = (1..from.column()).map(|c| Position::new(row, c));
        let transit = [
            Position::new(row, from.column() - 1),
            Position::new(row, from.column() - 2),
        ];
        if castling_rook_ready(king, grid, rook)
            && path_clear(grid, between)
            && transit_safe(ctx, &transit)
        {
            moves.set(transit[1]);
        }
    }
}

fn castling_rook_ready(king: &Piece, grid: &Grid<Piece>, square: Position) -> bool {
    occupant(grid, square).map_or(false, |rook| {
        rook.kind == PieceKind::Rook && rook.color == king.color && rook.move_count == 0
    })
}

fn path_clear(grid: &Grid<Piece>, mut squares: impl Iterator<Item = Position>) -> bool {
    squares.all(|square| occupant(grid, square).is_none())
}

fn transit_safe(ctx: &MoveContext<'_>, squares: &[Position]) -> bool {
    match ctx.castling {
        Castling::Unchecked => true,
        Castling::AvoidThreats(threats) => squares.iter().all(|&square| !threats.get(square)),
    }
}
