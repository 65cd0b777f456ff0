//! Grid module - the playfield that holds locked blocks
//!
//! The grid is a 22x10 matrix where each cell is empty or holds the kind of the
//! piece that locked there. Storage is a flat row-major array (no allocation).
//! Coordinates: (row, col) where row ranges 0..21 (top to bottom) and col
//! ranges 0..9 (left to right). Rows 0 and 1 form the spawn area.
//!
//! Line clearing is two passes: [`Grid::erase_full_rows`] blanks every full
//! row, then [`Grid::pull_rows`] lets the remaining rows fall into the gaps.

use arrayvec::ArrayVec;

use crate::types::{cell_value, Cell, COLUMNS, ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = ROWS * COLUMNS;

/// The playfield - 22 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * COLUMNS + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= ROWS as i32 || col < 0 || col >= COLUMNS as i32 {
            return None;
        }
        Some((row as usize) * COLUMNS + (col as usize))
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn columns(&self) -> usize {
        COLUMNS
    }

    /// Cell at (row, col), or `None` when out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Integer cell value at (row, col): 0 when empty or out of bounds, else 1..=7
    pub fn value(&self, row: i32, col: i32) -> u8 {
        self.get(row, col).map_or(0, cell_value)
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_inside(&self, row: i32, col: i32) -> bool {
        Self::index(row, col).is_some()
    }

    /// Inside the grid and unoccupied. Out of bounds is never empty.
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Cells of one row. Panics if `row >= ROWS`.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * COLUMNS;
        &self.cells[start..start + COLUMNS]
    }

    fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        let start = row * COLUMNS;
        &mut self.cells[start..start + COLUMNS]
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        row < ROWS && self.row(row).iter().all(|cell| cell.is_some())
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        row < ROWS && self.row(row).iter().all(|cell| cell.is_none())
    }

    fn clear_row(&mut self, row: usize) {
        self.row_mut(row).fill(None);
    }

    /// Copy row `from` onto row `to`, then blank `from`.
    fn move_row_down(&mut self, from: usize, to: usize) {
        let src = from * COLUMNS;
        self.cells.copy_within(src..src + COLUMNS, to * COLUMNS);
        self.clear_row(from);
    }

    /// Indices of all full rows, bottom to top
    pub fn full_rows(&self) -> ArrayVec<usize, ROWS> {
        (0..ROWS).rev().filter(|&row| self.is_row_full(row)).collect()
    }

    /// Blank every full row (scanning bottom to top) without compacting.
    /// Returns the number of rows erased.
    pub fn erase_full_rows(&mut self) -> usize {
        let mut erased = 0;
        for row in (0..ROWS).rev() {
            if self.is_row_full(row) {
                self.clear_row(row);
                erased += 1;
            }
        }
        erased
    }

    /// Let non-empty rows fall into the empty rows below them.
    ///
    /// Scans bottom to top counting empty rows seen so far; every non-empty row
    /// found while that count is positive drops by exactly that many rows.
    pub fn pull_rows(&mut self) {
        let mut empty_count = 0;
        for row in (0..ROWS).rev() {
            if self.is_row_empty(row) {
                empty_count += 1;
            } else if empty_count > 0 {
                self.move_row_down(row, row + empty_count);
            }
        }
    }

    /// Erase all full rows and compact the rest. Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        let erased = self.erase_full_rows();
        self.pull_rows();
        erased
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Blank the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Write the integer view of the grid into `out`.
    pub fn write_u8_grid(&self, out: &mut [[u8; COLUMNS]; ROWS]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            for (dst, cell) in out_row.iter_mut().zip(self.row(row)) {
                *dst = cell_value(*cell);
            }
        }
    }

    /// Create from a 2D vector for testing
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), ROWS);
        assert!(cells_2d.iter().all(|row| row.len() == COLUMNS));

        let mut grid = Self::new();
        for (row, cells) in cells_2d.iter().enumerate() {
            grid.row_mut(row).copy_from_slice(cells);
        }
        grid
    }

    /// Convert to 2D vector for testing
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        (0..ROWS).map(|row| self.row(row).to_vec()).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn fill_row(grid: &mut Grid, row: i32, kind: PieceKind) {
        for col in 0..COLUMNS as i32 {
            grid.set(row, col, Some(kind));
        }
    }

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 9), Some(9));
        assert_eq!(Grid::index(1, 0), Some(10));
        assert_eq!(Grid::index(21, 9), Some(219));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(0, 10), None);
        assert_eq!(Grid::index(22, 0), None);
    }

    #[test]
    fn test_out_of_bounds_is_not_empty() {
        let grid = Grid::new();
        assert!(grid.is_empty(0, 0));
        assert!(!grid.is_empty(-1, 0));
        assert!(!grid.is_empty(0, -1));
        assert!(!grid.is_empty(22, 0));
        assert!(!grid.is_empty(0, 10));
    }

    #[test]
    fn test_erase_does_not_compact() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 21, PieceKind::I);
        grid.set(20, 4, Some(PieceKind::T));

        assert_eq!(grid.erase_full_rows(), 1);
        assert!(grid.is_row_empty(21));
        // The block above stays put until pull_rows runs.
        assert_eq!(grid.get(20, 4), Some(Some(PieceKind::T)));

        grid.pull_rows();
        assert_eq!(grid.get(21, 4), Some(Some(PieceKind::T)));
        assert!(grid.is_row_empty(20));
    }

    #[test]
    fn test_clear_non_contiguous_rows() {
        let mut cells = vec![vec![None; COLUMNS]; ROWS];
        cells[21] = vec![Some(PieceKind::I); COLUMNS];
        cells[20][0] = Some(PieceKind::J);
        cells[19] = vec![Some(PieceKind::L); COLUMNS];
        cells[18][9] = Some(PieceKind::S);
        cells[17][5] = Some(PieceKind::Z);
        let mut grid = Grid::from_cells(cells);

        assert_eq!(grid.full_rows().as_slice(), &[21, 19]);
        assert_eq!(grid.clear_full_rows(), 2);

        let after = grid.to_cells();
        // Row 20 had one full row below it: drops by 1.
        assert_eq!(after[21][0], Some(PieceKind::J));
        // Rows 18 and 17 had two full rows below: drop by 2.
        assert_eq!(after[20][9], Some(PieceKind::S));
        assert_eq!(after[19][5], Some(PieceKind::Z));
        for row in 0..19 {
            assert!(grid.is_row_empty(row), "row {} should be empty", row);
        }
    }

    #[test]
    fn test_write_u8_grid() {
        let mut grid = Grid::new();
        grid.set(3, 7, Some(PieceKind::O));
        grid.set(21, 0, Some(PieceKind::Z));

        let mut out = [[0u8; COLUMNS]; ROWS];
        grid.write_u8_grid(&mut out);
        assert_eq!(out[3][7], 4);
        assert_eq!(out[21][0], 7);
        assert_eq!(out.iter().flatten().filter(|v| **v != 0).count(), 2);
        assert_eq!(grid.value(3, 7), 4);
        assert_eq!(grid.value(-1, 7), 0);
    }
}
