//! blife: Conway's Game of Life on a bounded grid with a dead border.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all blife sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use blife::prelude::*;
//!
//! // A glider in a 10x10 grid, run until it is about to hit the border.
//! let glider = Pattern::find("glider").unwrap();
//! let config = SimConfig::new(10, 10, Target::UntilOverflow)
//!     .with_seed(glider.place(CellPos::new(2, 2)));
//! let result = simulate(config).unwrap();
//! assert!(matches!(result.termination, Termination::Overflow { .. }));
//! assert!(result.grid.border_is_dead());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `blife-core` | Positions, generation counter, grid errors |
//! | [`grid`] | `blife-grid` | Bordered grid, double buffer, edge rings |
//! | [`engine`] | `blife-engine` | Step rule, boundary monitor, controller |
//! | [`codec`] | `blife-codec` | Numeral-encoded input and output |
//! | [`patterns`] | `blife-patterns` | Pattern library and random soups |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Positions, generation counter and grid errors (`blife-core`).
pub use blife_core as types;

/// Grid storage (`blife-grid`).
///
/// [`grid::GridBuffer`] holds one generation; [`grid::DoubleBuffer`] pairs
/// two of them for stepping.
pub use blife_grid as grid;

/// The simulation engine (`blife-engine`).
///
/// [`engine::SimulationController`] for step-by-step control,
/// [`engine::simulate`] for a whole run in one call.
pub use blife_engine as engine;

/// Numeral-encoded run input and output (`blife-codec`).
pub use blife_codec as codec;

/// Named patterns and random soups (`blife-patterns`).
pub use blife_patterns as patterns;

/// Common imports for typical blife usage.
///
/// ```rust
/// use blife::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use blife_core::{CellPos, Generation, GridError};

    // Grid
    pub use blife_grid::{Edge, GridBuffer};

    // Engine
    pub use blife_engine::{
        simulate, ConfigError, RunMetrics, RunResult, SimConfig, SimError, SimulationController,
        Target, Termination,
    };

    // Codec
    pub use blife_codec::{write_output, CodecError, Format, NumeralFormat, RunInput};

    // Patterns
    pub use blife_patterns::{Pattern, Soup};
}
