use super::super::grid::Grid;
use super::super::types::{Color, MoveMatrix, Piece, PieceKind, Position};
use super::{occupant, on_grid, MoveContext};

/// Row an unmoved pawn starts on, measured from the color's own edge
fn start_row(grid: &Grid<Piece>, color: Color) -> usize {
    match color {
        Color::White => grid.rows().saturating_sub(2),
        Color::Black => 1,
    }
}

pub(super) fn pawn_moves(
    pawn: &Piece,
    from: Position,
    grid: &Grid<Piece>,
    ctx: &MoveContext<'_>,
    moves: &mut MoveMatrix,
) {
    let dir = pawn.color.pawn_direction();

    if let Some(one) = on_grid(grid, from, dir, 0) {
        if occupant(grid, one).is_none() {
            moves.set(one);

            if pawn.move_count == 0 && from.row() == start_row(grid, pawn.color) {
                if let Some(two) = on_grid(grid, from, 2 * dir, 0) {
                    if occupant(grid, two).is_none() {
                        moves.set(two);
                    }
                }
            }
        }
    }

    for d_column in [-1, 1] {
        let Some(diagonal) = on_grid(grid, from, dir, d_column) else {
            continue;
        };

        match occupant(grid, diagonal) {
            Some(other) if other.color != pawn.color => moves.set(diagonal),
            Some(_) => {}
            None => {
                // En passant: the pawn beside us just stepped over `diagonal`
                let beside = on_grid(grid, from, 0, d_column).and_then(|sq| occupant(grid, sq));
                if let Some(victim) = beside {
                    if victim.kind == PieceKind::Pawn
                        && victim.color != pawn.color
                        && Some(victim.id) == ctx.en_passant_vulnerable
                    {
                        moves.set(diagonal);
                    }
                }
            }
        }
    }
}

pub(super) fn pawn_attacks(
    pawn: &Piece,
    from: Position,
    grid: &Grid<Piece>,
    threats: &mut MoveMatrix,
) {
    let dir = pawn.color.pawn_direction();
    for d_column in [-1, 1] {
        if let Some(diagonal) = on_grid(grid, from, dir, d_column) {
            threats.set(diagonal);
        }
    }
}
