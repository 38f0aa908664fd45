//! Legality matrix: one flag per board square.

use std::ops::{BitOr, BitOrAssign, Index};

use super::square::Position;

/// Boolean grid with one cell per board square, true where a piece may go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl MoveMatrix {
    /// All-false matrix of the given dimensions
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        MoveMatrix {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Flag at `position`; false for anything off the matrix
    #[inline]
    #[must_use]
    pub fn get(&self, position: Position) -> bool {
        self.index_of(position)
            .map_or(false, |idx| self.cells[idx])
    }

    /// Mark `position`. Positions off the matrix are ignored.
    #[inline]
    pub fn set(&mut self, position: Position) {
        if let Some(idx) = self.index_of(position) {
            self.cells[idx] = true;
        }
    }

    /// Returns true if any square is marked
    #[must_use]
    pub fn any(&self) -> bool {
        self.cells.iter().any(|&c| c)
    }

    /// Number of marked squares
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Marked squares in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(move |(idx, _)| Position::new(idx / columns, idx % columns))
    }

    /// Row-major view as nested vectors, the shape a display layer expects
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.columns.max(1))
            .map(<[bool]>::to_vec)
            .collect()
    }

    #[inline]
    fn index_of(&self, position: Position) -> Option<usize> {
        if position.row() < self.rows && position.column() < self.columns {
            Some(position.row() * self.columns + position.column())
        } else {
            None
        }
    }
}

impl Index<Position> for MoveMatrix {
    type Output = bool;

    fn index(&self, position: Position) -> &bool {
        if self.get(position) {
            &true
        } else {
            &false
        }
    }
}

impl BitOrAssign<&MoveMatrix> for MoveMatrix {
    fn bitor_assign(&mut self, rhs: &MoveMatrix) {
        for position in rhs.positions() {
            self.set(position);
        }
    }
}

impl BitOr<&MoveMatrix> for MoveMatrix {
    type Output = MoveMatrix;

    fn bitor(mut self, rhs: &MoveMatrix) -> MoveMatrix {
        self |= rhs;
        self
    }
}
