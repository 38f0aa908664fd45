//! Generic rectangular container of optional occupants.

use super::error::GridError;
use super::types::Position;

/// Something that can stand on a [`Grid`] and remembers where it stands.
pub trait Occupant {
    /// Record the cell now holding this occupant, or `None` once removed
    fn set_position(&mut self, position: Option<Position>);
}

/// A `rows × columns` grid holding at most one occupant per cell.
///
/// The grid owns its occupants; `place` and `remove` keep each occupant's
/// recorded position equal to the cell that holds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<Option<T>>,
}

impl<T: Occupant> Grid<T> {
    /// Create an empty grid
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimensions { rows, columns });
        }
        let mut cells = Vec::with_capacity(rows * columns);
        cells.resize_with(rows * columns, || None);
        Ok(Grid {
            rows,
            columns,
            cells,
        })
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

    /// Returns true if `position` lies on the grid
    #[inline]
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.row() < self.rows && position.column() < self.columns
    }

    /// Occupant of `position`, if any
    pub fn get(&self, position: Position) -> Result<Option<&T>, GridError> {
        let idx = self.index_of(position)?;
        Ok(self.cells[idx].as_ref())
    }

    /// Returns true if a piece stands on `position`
    pub fn occupied(&self, position: Position) -> Result<bool, GridError> {
        Ok(self.get(position)?.is_some())
    }

    /// Put `piece` on an empty cell and record the cell on the piece
    pub fn place(&mut self, mut piece: T, position: Position) -> Result<(), GridError> {
        let idx = self.index_of(position)?;
        if self.cells[idx].is_some() {
            return Err(GridError::OccupiedCell { position });
        }
        piece.set_position(Some(position));
        self.cells[idx] = Some(piece);
        Ok(())
    }

    /// Take the occupant off `position`, clearing its recorded position.
    /// An empty cell yields `Ok(None)`.
    pub fn remove(&mut self, position: Position) -> Result<Option<T>, GridError> {
        let idx = self.index_of(position)?;
        Ok(self.cells[idx].take().map(|mut piece| {
            piece.set_position(None);
            piece
        }))
    }

    /// Occupants with their cells, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.as_ref()
                .map(|piece| (Position::new(idx / columns, idx % columns), piece))
        })
    }

    #[inline]
    fn index_of(&self, position: Position) -> Result<usize, GridError> {
        if self.contains(position) {
            Ok(position.row() * self.columns + position.column())
        } else {
            Err(GridError::OutOfBounds { position })
        }
    }
}
