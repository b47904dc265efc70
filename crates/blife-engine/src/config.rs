//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the builder-input for constructing a
//! [`SimulationController`](crate::SimulationController).
//! [`validate()`](SimConfig::validate) checks every input invariant before
//! any grid is allocated, so a rejected configuration never steps.

use std::error::Error;
use std::fmt;
use std::num::NonZeroU64;

use blife_core::{CellPos, Generation, GridError};
use blife_grid::MAX_CELLS;

/// Smallest legal grid width and height: one interior cell plus border.
pub const MIN_DIMENSION: usize = 3;

/// Default number of past states kept for repeated-state detection.
pub const DEFAULT_CYCLE_WINDOW: usize = 64;

// ── Target ─────────────────────────────────────────────────────────

/// When a run stops, apart from overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Stop after exactly this many completed generations, unless the
    /// boundary monitor stops the run first.
    Generations(NonZeroU64),
    /// No generation limit: run until the boundary monitor reports an
    /// imminent overflow (or the pattern dies out or repeats).
    UntilOverflow,
}

impl Target {
    /// Interpret a generation count where 0 means "until overflow".
    pub fn from_count(count: u64) -> Self {
        NonZeroU64::new(count).map_or(Self::UntilOverflow, Self::Generations)
    }

    /// The generation count, 0 for [`Target::UntilOverflow`].
    pub fn count(&self) -> u64 {
        match self {
            Self::Generations(n) => n.get(),
            Self::UntilOverflow => 0,
        }
    }

    /// Whether `generation` is the final one for this target.
    pub fn is_reached(&self, generation: Generation) -> bool {
        match self {
            Self::Generations(n) => generation.0 == n.get(),
            Self::UntilOverflow => false,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generations(n) => write!(f, "{n} generations"),
            Self::UntilOverflow => write!(f, "until overflow"),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
///
/// These are the caller-facing input errors: a run that fails validation
/// aborts before any generation is computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height below [`MIN_DIMENSION`].
    DimensionTooSmall {
        /// `"width"` or `"height"`.
        name: &'static str,
        /// The configured value.
        value: usize,
        /// The minimum accepted value.
        min: usize,
    },
    /// `width * height` exceeds [`MAX_CELLS`].
    CellCountOverflow {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },
    /// A seed cell lies outside the grid.
    SeedOutOfBounds {
        /// The offending position.
        pos: CellPos,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// A seed cell lies on the permanently dead border.
    SeedOnBorder {
        /// The offending position.
        pos: CellPos,
    },
    /// `cycle_window` is zero.
    InvalidCycleWindow,
    /// Grid allocation failed.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionTooSmall { name, value, min } => {
                write!(f, "{name} {value} is below minimum of {min}")
            }
            Self::CellCountOverflow { width, height } => {
                write!(f, "cell count of {width}x{height} grid is too large")
            }
            Self::SeedOutOfBounds { pos, width, height } => {
                write!(f, "seed cell {pos} lies outside the {width}x{height} grid")
            }
            Self::SeedOnBorder { pos } => write!(f, "seed cell {pos} lies on the border"),
            Self::InvalidCycleWindow => write!(f, "cycle_window must be at least 1"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Everything needed to start a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Grid width in cells, border included.
    pub width: usize,
    /// Grid height in cells, border included.
    pub height: usize,
    /// Generation limit.
    pub target: Target,
    /// Initially live cells. Duplicates are harmless.
    pub seed: Vec<CellPos>,
    /// States remembered for repeated-state detection in
    /// [`Target::UntilOverflow`] mode.
    pub cycle_window: usize,
}

impl SimConfig {
    /// A configuration with an empty seed and the default cycle window.
    pub fn new(width: usize, height: usize, target: Target) -> Self {
        Self {
            width,
            height,
            target,
            seed: Vec::new(),
            cycle_window: DEFAULT_CYCLE_WINDOW,
        }
    }

    /// Replace the seed.
    pub fn with_seed(mut self, seed: impl IntoIterator<Item = CellPos>) -> Self {
        self.seed = seed.into_iter().collect();
        self
    }

    /// Set the repeated-state history length.
    pub fn with_cycle_window(mut self, window: usize) -> Self {
        self.cycle_window = window;
        self
    }

    /// Check dimensions, seed placement and the cycle window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_DIMENSION {
            return Err(ConfigError::DimensionTooSmall {
                name: "width",
                value: self.width,
                min: MIN_DIMENSION,
            });
        }
        if self.height < MIN_DIMENSION {
            return Err(ConfigError::DimensionTooSmall {
                name: "height",
                value: self.height,
                min: MIN_DIMENSION,
            });
        }
        if self
            .width
            .checked_mul(self.height)
            .is_none_or(|cells| cells > MAX_CELLS)
        {
            return Err(ConfigError::CellCountOverflow {
                width: self.width,
                height: self.height,
            });
        }
        if self.cycle_window == 0 {
            return Err(ConfigError::InvalidCycleWindow);
        }
        for &pos in &self.seed {
            if pos.row >= self.height || pos.col >= self.width {
                return Err(ConfigError::SeedOutOfBounds {
                    pos,
                    width: self.width,
                    height: self.height,
                });
            }
            if pos.row == 0
                || pos.col == 0
                || pos.row == self.height - 1
                || pos.col == self.width - 1
            {
                return Err(ConfigError::SeedOnBorder { pos });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> CellPos {
        CellPos::new(row, col)
    }

    #[test]
    fn target_from_count() {
        assert_eq!(Target::from_count(0), Target::UntilOverflow);
        assert_eq!(Target::from_count(7).count(), 7);
        assert!(Target::from_count(7).is_reached(Generation(7)));
        assert!(!Target::from_count(7).is_reached(Generation(6)));
        assert!(!Target::UntilOverflow.is_reached(Generation(0)));
    }

    #[test]
    fn target_display() {
        assert_eq!(Target::from_count(10).to_string(), "10 generations");
        assert_eq!(Target::UntilOverflow.to_string(), "until overflow");
    }

    #[test]
    fn minimal_grid_is_valid() {
        let cfg = SimConfig::new(3, 3, Target::UntilOverflow).with_seed([p(1, 1)]);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn small_dimensions_rejected() {
        let cfg = SimConfig::new(2, 9, Target::UntilOverflow);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::DimensionTooSmall {
                name: "width",
                value: 2,
                min: 3
            })
        );
        let cfg = SimConfig::new(9, 0, Target::UntilOverflow);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DimensionTooSmall { name: "height", .. })
        ));
    }

    #[test]
    fn overflowing_cell_count_rejected() {
        let cfg = SimConfig::new(usize::MAX, 3, Target::UntilOverflow);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::CellCountOverflow { .. })
        ));
    }

    #[test]
    fn cell_count_above_allocation_limit_rejected() {
        // The product fits in a 64-bit usize but exceeds isize::MAX.
        let side = 4_000_000_001usize;
        let cfg = SimConfig::new(side, side, Target::from_count(1));
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::CellCountOverflow {
                width: side,
                height: side
            })
        );
    }

    #[test]
    fn border_seeds_rejected_on_every_side() {
        for pos in [p(0, 3), p(6, 3), p(3, 0), p(3, 6), p(0, 0), p(6, 6)] {
            let cfg = SimConfig::new(7, 7, Target::from_count(1)).with_seed([p(3, 3), pos]);
            assert_eq!(cfg.validate(), Err(ConfigError::SeedOnBorder { pos }), "{pos}");
        }
    }

    #[test]
    fn seeds_outside_grid_rejected() {
        let cfg = SimConfig::new(7, 5, Target::from_count(1)).with_seed([p(5, 2)]);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::SeedOutOfBounds {
                pos: p(5, 2),
                width: 7,
                height: 5
            })
        );
    }

    #[test]
    fn zero_cycle_window_rejected() {
        let cfg = SimConfig::new(5, 5, Target::UntilOverflow).with_cycle_window(0);
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidCycleWindow));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ConfigError::SeedOnBorder { pos: p(0, 4) }.to_string(),
            "seed cell (0, 4) lies on the border"
        );
        assert_eq!(
            ConfigError::DimensionTooSmall {
                name: "height",
                value: 1,
                min: 3
            }
            .to_string(),
            "height 1 is below minimum of 3"
        );
    }
}
