//! Strongly-typed identifiers: [`CellPos`] and [`Generation`].

use std::fmt;

/// A `(row, col)` position on a grid, 0-based.
///
/// The derived ordering compares `row` first, then `col`, so sorting a
/// list of positions yields row-major order. Every live-cell listing in
/// the workspace is reported in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    /// Row index, counted from the top edge.
    pub row: usize,
    /// Column index, counted from the left edge.
    pub col: usize,
}

impl CellPos {
    /// Create a position from a row and a column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed offset on each axis.
    ///
    /// Returns `None` if either coordinate would become negative or
    /// overflow `usize`.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for CellPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Monotonically increasing generation counter.
///
/// Starts at 0 for the seed state and is incremented by exactly one per
/// completed step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The seed state, before any step has run.
    pub const ZERO: Self = Self(0);

    /// The generation after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
