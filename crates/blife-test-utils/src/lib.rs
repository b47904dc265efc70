//! Test utilities for blife development.
//!
//! Grids are usually easier to read as ASCII art than as coordinate
//! lists, so most engine tests build them with [`grid_from_ascii`] and
//! compare results with [`positions`]. Shared seeds live in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use blife_core::CellPos;
use blife_grid::GridBuffer;

/// Characters read as a live cell by [`grid_from_ascii`].
pub const ALIVE: [char; 3] = ['O', '#', '*'];

/// Build a grid from rows of ASCII art.
///
/// `O`, `#` and `*` are alive; anything else is dead. Every row must have
/// the same length.
///
/// # Panics
///
/// Panics on ragged or empty input.
pub fn grid_from_ascii(rows: &[&str]) -> GridBuffer {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut grid = GridBuffer::new(width, height).expect("ascii grid must not be empty");
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(
            line.chars().count(),
            width,
            "ascii row {row} has a different width"
        );
        for (col, ch) in line.chars().enumerate() {
            if ALIVE.contains(&ch) {
                grid.set(CellPos::new(row, col), true).unwrap();
            }
        }
    }
    grid
}

/// Render a grid as ASCII art, `O` for alive and `.` for dead.
pub fn grid_to_ascii(grid: &GridBuffer) -> Vec<String> {
    (0..grid.height())
        .map(|r| {
            grid.row(r)
                .iter()
                .map(|&alive| if alive { 'O' } else { '.' })
                .collect()
        })
        .collect()
}

/// `(row, col)` pairs as [`CellPos`] values, in the given order.
pub fn positions(cells: &[(usize, usize)]) -> Vec<CellPos> {
    cells.iter().map(|&(row, col)| CellPos::new(row, col)).collect()
}

/// Shift every cell by `(d_row, d_col)` and sort row-major.
///
/// # Panics
///
/// Panics if a cell would move to a negative coordinate.
pub fn translate(cells: &[CellPos], d_row: isize, d_col: isize) -> Vec<CellPos> {
    let mut moved: Vec<CellPos> = cells
        .iter()
        .map(|p| {
            p.offset(d_row, d_col)
                .unwrap_or_else(|| panic!("{p} shifted by ({d_row}, {d_col}) leaves the grid"))
        })
        .collect();
    moved.sort();
    moved
}

/// Assert that every border cell of `grid` is dead.
#[track_caller]
pub fn assert_border_dead(grid: &GridBuffer) {
    let (width, height) = grid.dims();
    for row in 0..height {
        for col in 0..width {
            let pos = CellPos::new(row, col);
            if grid.is_border(pos) {
                assert!(
                    !grid.get(pos).unwrap(),
                    "border cell {pos} is alive in:\n{}",
                    grid_to_ascii(grid).join("\n")
                );
            }
        }
    }
}
