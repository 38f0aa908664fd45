use once_cell::sync::Lazy;

use super::super::grid::Grid;
use super::super::types::{MoveMatrix, Piece, Position, BOARD_SIZE};
use super::{can_land, on_grid};

pub(super) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// On-board knight targets for every square of a chess board, row-major
pub(super) static KNIGHT_TARGETS: Lazy<Vec<Vec<Position>>> =
    Lazy::new(|| step_table(&KNIGHT_DELTAS));

/// Target lists for a fixed set of single-step deltas on the 8x8 board
pub(super) fn step_table(deltas: &[(isize, isize)]) -> Vec<Vec<Position>> {
    let mut table = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        for column in 0..BOARD_SIZE {
            let from = Position::new(row, column);
            let targets = deltas
                .iter()
                .filter_map(|&(dr, dc)| from.offset(dr, dc))
                .filter(|to| to.row() < BOARD_SIZE && to.column() < BOARD_SIZE)
                .collect();
            table.push(targets);
        }
    }
    table
}

/// Land on each target that is empty or held by an opponent. Chess-sized
/// grids use the precomputed table; any other grid computes the offsets.
pub(super) fn step_moves(
    piece: &Piece,
    from: Position,
    grid: &Grid<Piece>,
    table: &[Vec<Position>],
    deltas: &[(isize, isize)],
    moves: &mut MoveMatrix,
) {
    if grid.rows() == BOARD_SIZE && grid.columns() == BOARD_SIZE {
        let targets = &table[from.row() * BOARD_SIZE + from.column()];
        for &to in targets {
            if can_land(grid, to, piece.color) {
                moves.set(to);
            }
        }
    } else {
        for &(dr, dc) in deltas {
            if let Some(to) = on_grid(grid, from, dr, dc) {
                if can_land(grid, to, piece.color) {
                    moves.set(to);
                }
            }
        }
    }
}

pub(super) fn knight_moves(
    piece: &Piece,
    from: Position,
    grid: &Grid<Piece>,
    moves: &mut MoveMatrix,
) {
    step_moves(piece, from, grid, &KNIGHT_TARGETS, &KNIGHT_DELTAS, moves);
}
