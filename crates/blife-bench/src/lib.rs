//! Benchmark profiles for the blife engine.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), random soup
//! - [`stress_profile`]: 316x316 grid (~100K cells), same density
//! - [`soup_grid`]: a seeded grid for stepping without a controller

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use blife_core::CellPos;
use blife_engine::{SimConfig, Target};
use blife_grid::GridBuffer;
use blife_patterns::Soup;

/// Live-cell density used by every profile.
pub const PROFILE_DENSITY: f64 = 0.35;

/// Generations run by every profile.
pub const PROFILE_GENERATIONS: u64 = 100;

/// Build a reference benchmark profile: 100x100 grid (10K cells).
///
/// Fixed generation target; the run may still stop early on overflow.
pub fn reference_profile(seed: u64) -> SimConfig {
    soup_profile(100, 100, seed)
}

/// Build a stress benchmark profile: 316x316 grid (~100K cells).
pub fn stress_profile(seed: u64) -> SimConfig {
    soup_profile(316, 316, seed)
}

fn soup_profile(width: usize, height: usize, seed: u64) -> SimConfig {
    SimConfig::new(width, height, Target::from_count(PROFILE_GENERATIONS))
        .with_seed(soup_cells(width, height, seed))
}

fn soup_cells(width: usize, height: usize, seed: u64) -> Vec<CellPos> {
    Soup::new(PROFILE_DENSITY, seed).unwrap().cells(width, height)
}

/// A `width x height` grid filled with the profile soup.
pub fn soup_grid(width: usize, height: usize, seed: u64) -> GridBuffer {
    let mut grid = GridBuffer::new(width, height).unwrap();
    for pos in soup_cells(width, height, seed) {
        grid.set(pos, true).unwrap();
    }
    grid
}
