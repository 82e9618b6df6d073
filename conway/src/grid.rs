// grid.rs - Flat row-major cell buffer for the toroidal board

use crate::LifeError;

/// Liveness of every cell in the current generation.
///
/// Cell `(row, column)` lives at `row * columns + column`. The buffer is
/// allocated once and never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl GridState {
    /// All cells start dead.
    pub fn new(rows: usize, columns: usize) -> Result<Self, LifeError> {
        if rows == 0 || columns == 0 {
            return Err(LifeError::ZeroDimension { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.rows, "row {row} outside 0..{}", self.rows);
        debug_assert!(column < self.columns, "column {column} outside 0..{}", self.columns);
        row * self.columns + column
    }

    /// Panics (in debug builds) when `(row, column)` is off the board.
    pub fn get(&self, row: usize, column: usize) -> bool {
        self.cells[self.index(row, column)]
    }

    pub fn set(&mut self, row: usize, column: usize, alive: bool) {
        let index = self.index(row, column);
        self.cells[index] = alive;
    }

    /// Number of cells, `rows * columns`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed board.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Kills every cell, one `set` per cell.
    pub fn clear(&mut self) {
        for row in 0..self.rows {
            for column in 0..self.columns {
                self.set(row, column, false);
            }
        }
    }

    /// Row-major view of the whole board.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(index, _)| (index / columns, index % columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = GridState::new(4, 6).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.columns(), 6);
        assert_eq!(grid.len(), 24);
        assert!(!grid.is_empty());
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn clear_kills_every_cell_and_keeps_size() {
        let mut grid = GridState::new(3, 4).unwrap();
        grid.set(0, 0, true);
        grid.set(1, 3, true);
        grid.set(2, 2, true);

        grid.clear();
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid, GridState::new(3, 4).unwrap());
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        assert_eq!(
            GridState::new(0, 3),
            Err(LifeError::ZeroDimension { rows: 0, columns: 3 })
        );
    }

    #[test]
    fn set_uses_row_major_index() {
        let mut grid = GridState::new(3, 5).unwrap();
        grid.set(2, 1, true);
        assert!(grid.get(2, 1));
        assert!(grid.cells()[2 * 5 + 1]);
        assert!(!grid.get(1, 2));

        grid.set(2, 1, false);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn live_cells_reports_coordinates() {
        let mut grid = GridState::new(3, 4).unwrap();
        grid.set(0, 3, true);
        grid.set(2, 0, true);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 3), (2, 0)]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_row_panics() {
        let grid = GridState::new(3, 3).unwrap();
        grid.get(3, 0);
    }
}
