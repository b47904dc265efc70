//! The bordered cell grid.

use blife_core::{CellPos, GridError};

/// Largest cell count a grid may hold: one byte per cell, and no
/// allocation may exceed `isize::MAX` bytes.
pub const MAX_CELLS: usize = isize::MAX as usize;

/// A `width x height` grid of alive/dead cells.
///
/// Cells are stored row-major in a flat `Vec<bool>`. The outermost ring
/// (row `0`, row `height - 1`, column `0`, column `width - 1`) is the
/// border. The buffer itself does not forbid writes to the border; the
/// simulation controller rejects border seeds and the step engine never
/// visits border cells, so a grid produced by a run keeps it dead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridBuffer {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl GridBuffer {
    /// Allocate an all-dead grid.
    ///
    /// Returns `Err(GridError::Empty)` if either dimension is 0,
    /// `Err(GridError::CellCountOverflow)` if `width * height` exceeds
    /// [`MAX_CELLS`], or `Err(GridError::AllocationFailed)` if the
    /// allocator refuses the storage.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(GridError::CellCountOverflow { width, height })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::AllocationFailed { cells: len })?;
        cells.resize(len, false);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells, border included.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `pos` addresses a cell of this grid.
    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Whether `pos` lies on the border ring.
    ///
    /// Positions outside the grid are not border cells.
    pub fn is_border(&self, pos: CellPos) -> bool {
        self.contains(pos)
            && (pos.row == 0
                || pos.col == 0
                || pos.row == self.height - 1
                || pos.col == self.width - 1)
    }

    /// Whether `pos` lies strictly inside the border.
    pub fn is_interior(&self, pos: CellPos) -> bool {
        self.contains(pos) && !self.is_border(pos)
    }

    fn index(&self, pos: CellPos) -> Result<usize, GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfRange {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        Ok(pos.row * self.width + pos.col)
    }

    /// Read one cell.
    pub fn get(&self, pos: CellPos) -> Result<bool, GridError> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Write one cell.
    pub fn set(&mut self, pos: CellPos, alive: bool) -> Result<(), GridError> {
        let i = self.index(pos)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Reset every cell to dead.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Borrow one row as a slice of `width` cells.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Mutably borrow one row as a slice of `width` cells.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row_mut(&mut self, row: usize) -> &mut [bool] {
        let start = row * self.width;
        &mut self.cells[start..start + self.width]
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Whether no cell is alive.
    pub fn is_extinct(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Positions of all live cells in row-major order.
    pub fn live_cells(&self) -> Vec<CellPos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| CellPos::new(i / self.width, i % self.width))
            .collect()
    }

    /// Whether every border cell is dead.
    pub fn border_is_dead(&self) -> bool {
        let last_row = self.height - 1;
        let last_col = self.width - 1;
        !self.row(0).contains(&true)
            && !self.row(last_row).contains(&true)
            && (0..self.height).all(|r| {
                let row = self.row(r);
                !row[0] && !row[last_col]
            })
    }

    /// Raw cell states, row-major.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }
}
