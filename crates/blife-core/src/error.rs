//! Grid-level error type.
//!
//! Every variant of [`GridError`] is an internal contract violation: the
//! controller validates its input before touching a grid, so none of
//! these should surface from a well-formed run.

use std::error::Error;
use std::fmt;

use crate::id::CellPos;

/// Errors from grid construction and cell addressing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A position lies outside `[0, height) x [0, width)`.
    OutOfRange {
        /// The offending position.
        pos: CellPos,
        /// Grid width in cells.
        width: usize,
        /// Grid height in cells.
        height: usize,
    },
    /// Two grids that must share dimensions do not.
    DimensionMismatch {
        /// `(width, height)` of the grid being read.
        source: (usize, usize),
        /// `(width, height)` of the grid being written.
        destination: (usize, usize),
    },
    /// Attempted to construct a grid with zero cells.
    Empty,
    /// `width * height` does not fit in `usize` or exceeds the largest
    /// allocatable cell count.
    CellCountOverflow {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The allocator could not provide storage for the cells.
    AllocationFailed {
        /// Requested cell count.
        cells: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pos, width, height } => {
                write!(f, "position {pos} out of range for {width}x{height} grid")
            }
            Self::DimensionMismatch {
                source,
                destination,
            } => write!(
                f,
                "grid dimensions differ: source {}x{}, destination {}x{}",
                source.0, source.1, destination.0, destination.1
            ),
            Self::Empty => write!(f, "grid must have at least one cell"),
            Self::CellCountOverflow { width, height } => {
                write!(f, "cell count of {width}x{height} grid is too large")
            }
            Self::AllocationFailed { cells } => {
                write!(f, "failed to allocate a grid of {cells} cells")
            }
        }
    }
}

impl Error for GridError {}
