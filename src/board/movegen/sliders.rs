use super::super::grid::Grid;
use super::super::types::{MoveMatrix, Piece, Position};
use super::{occupant, on_grid};

pub(crate) const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each ray until the edge or the first occupant. An opponent's
/// square is included, an own piece's square is not.
pub(super) fn ray_moves(
    piece: &Piece,
    from: Position,
    grid: &Grid<Piece>,
    dirs: &[(isize, isize)],
    moves: &mut MoveMatrix,
) {
    for &(d_row, d_column) in dirs {
        let mut current = from;
        while let Some(next) = on_grid(grid, current, d_row, d_column) {
            match occupant(grid, next) {
                None => moves.set(next),
                Some(other) => {
                    if other.color != piece.color {
                        moves.set(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
