//! The Life update rule.
//!
//! [`StepEngine`] reads one grid and writes the next generation's interior
//! into another. Border cells of the destination are never visited, so a
//! destination whose border starts dead keeps it dead.

use blife_core::{CellPos, GridError};
use blife_grid::GridBuffer;

/// Population changes produced by one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Live cells in the new generation.
    pub population: usize,
    /// Cells dead in the source and alive in the destination.
    pub births: usize,
    /// Cells alive in the source and dead in the destination.
    pub deaths: usize,
}

/// Computes one generation of the standard B3/S23 rule.
///
/// Stateless and deterministic: the same source always produces the same
/// destination interior.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepEngine;

impl StepEngine {
    /// Create a step engine.
    pub fn new() -> Self {
        Self
    }

    /// Write the generation after `source` into `destination`.
    ///
    /// Every interior cell of `destination` is overwritten; its border is
    /// left untouched. Grids smaller than 3x3 have no interior and are a
    /// no-op.
    ///
    /// Returns `Err(GridError::DimensionMismatch)` if the grids differ in
    /// size.
    pub fn step(
        &self,
        source: &GridBuffer,
        destination: &mut GridBuffer,
    ) -> Result<StepStats, GridError> {
        if source.dims() != destination.dims() {
            return Err(GridError::DimensionMismatch {
                source: source.dims(),
                destination: destination.dims(),
            });
        }

        let (width, height) = source.dims();
        let mut stats = StepStats::default();
        if width < 3 || height < 3 {
            return Ok(stats);
        }

        for row in 1..height - 1 {
            let was = source.row(row);
            let out = destination.row_mut(row);
            for col in 1..width - 1 {
                let count = neighbour_count(source, CellPos::new(row, col));
                let alive = next_state(was[col], count);
                match (was[col], alive) {
                    (false, true) => stats.births += 1,
                    (true, false) => stats.deaths += 1,
                    _ => {}
                }
                if alive {
                    stats.population += 1;
                }
                out[col] = alive;
            }
        }
        Ok(stats)
    }
}

/// The rule itself: birth on exactly 3 neighbours, survival on 2 or 3.
pub fn next_state(alive: bool, neighbours: usize) -> bool {
    matches!((alive, neighbours), (_, 3) | (true, 2))
}

/// Live cells among the 8 neighbours of an interior cell.
///
/// # Panics
///
/// Panics if `pos` is not strictly inside the grid's border.
pub(crate) fn neighbour_count(grid: &GridBuffer, pos: CellPos) -> usize {
    let CellPos { row, col } = pos;
    let mut count = 0;
    for r in row - 1..=row + 1 {
        count += grid.row(r)[col - 1..=col + 1]
            .iter()
            .filter(|&&alive| alive)
            .count();
    }
    if grid.row(row)[col] {
        count -= 1;
    }
    count
}
