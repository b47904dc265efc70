//! Deterministic random soups.
//!
//! The same seed, density and grid size always produce the same cells:
//! the fill draws from a ChaCha8 stream seeded with [`Soup::seed`], one
//! Bernoulli sample per interior cell in row-major order.

use std::error::Error;
use std::fmt;

use blife_core::CellPos;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Error constructing a [`Soup`].
#[derive(Clone, Debug, PartialEq)]
pub enum SoupError {
    /// Density outside `[0, 1]` or not a number.
    InvalidDensity {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for SoupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity { value } => {
                write!(f, "density {value} is outside [0, 1]")
            }
        }
    }
}

impl Error for SoupError {}

/// A random interior fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Soup {
    density: f64,
    seed: u64,
}

impl Soup {
    /// Default fraction of live interior cells.
    pub const DEFAULT_DENSITY: f64 = 0.35;

    /// A soup where each interior cell is alive with probability `density`.
    pub fn new(density: f64, seed: u64) -> Result<Self, SoupError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(SoupError::InvalidDensity { value: density });
        }
        Ok(Self { density, seed })
    }

    /// Probability of a live cell.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Live cells for a `width x height` grid, row-major. Border cells are
    /// never chosen; grids with no interior yield nothing.
    pub fn cells(&self, width: usize, height: usize) -> Vec<CellPos> {
        if width < 3 || height < 3 {
            return Vec::new();
        }
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut cells = Vec::new();
        for row in 1..height - 1 {
            for col in 1..width - 1 {
                if rng.random_bool(self.density) {
                    cells.push(CellPos::new(row, col));
                }
            }
        }
        cells
    }
}
