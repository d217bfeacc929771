//! Bounds-checked 2-D placement grid.
//!
//! Cells own their values outright, so removal cannot leave a dangling
//! reference behind. Every access validates its coordinates and signals
//! out-of-range instead of panicking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("grid dimensions must be at least 1x1")]
    ZeroDimension,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Create an empty `rows x cols` grid. Either dimension being zero is
    /// rejected.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension);
        }
        let mut cells = Vec::with_capacity(rows * cols);
        cells.resize_with(rows * cols, || None);
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Place a value in a cell, returning the previous occupant if any.
    pub fn place(&mut self, row: usize, col: usize, value: T) -> Result<Option<T>, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx].replace(value))
    }

    /// Take a cell's value out, leaving it empty.
    pub fn take(&mut self, row: usize, col: usize) -> Result<Option<T>, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx].take())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Option<&T>, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx].as_ref())
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<Option<&mut T>, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx].as_mut())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
