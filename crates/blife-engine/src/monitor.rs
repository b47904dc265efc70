//! Edge-overflow heuristic.
//!
//! The border is fixed dead, so a pattern that grows into it is silently
//! clipped. [`BoundaryMonitor`] looks one cell further in: a run of three
//! consecutive live cells on a boundary-adjacent ring means the next
//! generation would give birth on the border itself.

use blife_core::CellPos;
use blife_grid::{Edge, GridBuffer};
use smallvec::SmallVec;

/// Consecutive live ring cells that signal an imminent overflow.
pub const OVERFLOW_RUN: usize = 3;

/// A run of [`OVERFLOW_RUN`] live cells found on one edge's ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breach {
    /// The ring the run lies on.
    pub edge: Edge,
    /// First cell of the run, in ring order.
    pub start: CellPos,
}

/// Inspects the four rings one cell inside the border.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundaryMonitor;

impl BoundaryMonitor {
    /// Create a boundary monitor.
    pub fn new() -> Self {
        Self
    }

    /// Every breached edge, with the first run found on each.
    ///
    /// Edges are reported in [`Edge::ALL`] order; an edge appears at most
    /// once.
    pub fn scan(&self, grid: &GridBuffer) -> SmallVec<[Breach; 4]> {
        let (width, height) = grid.dims();
        Edge::ALL
            .into_iter()
            .filter_map(|edge| {
                first_run(grid, edge.ring(width, height)).map(|start| Breach { edge, start })
            })
            .collect()
    }

    /// Whether any ring holds a run of [`OVERFLOW_RUN`] live cells.
    pub fn overflow_imminent(&self, grid: &GridBuffer) -> bool {
        let (width, height) = grid.dims();
        Edge::ALL
            .into_iter()
            .any(|edge| first_run(grid, edge.ring(width, height)).is_some())
    }
}

fn first_run(grid: &GridBuffer, ring: impl Iterator<Item = CellPos>) -> Option<CellPos> {
    let mut run = 0;
    let mut start = None;
    for pos in ring {
        if !grid.row(pos.row)[pos.col] {
            run = 0;
            continue;
        }
        if run == 0 {
            start = Some(pos);
        }
        run += 1;
        if run == OVERFLOW_RUN {
            return start;
        }
    }
    None
}
