//! Simulation engine for bounded Game of Life runs.
//!
//! [`SimulationController`] owns a [`DoubleBuffer`](blife_grid::DoubleBuffer)
//! and drives the generation loop: [`StepEngine`] computes each new
//! generation into the idle buffer, the buffers swap, and
//! [`BoundaryMonitor`] decides whether the pattern is about to run into
//! the permanently dead border.
//!
//! ```
//! use blife_core::CellPos;
//! use blife_engine::{SimConfig, SimulationController, Target, Termination};
//!
//! // A blinker in the middle of a 9x9 grid, stepped for 4 generations.
//! let config = SimConfig::new(9, 9, Target::from_count(4))
//!     .with_seed([CellPos::new(4, 3), CellPos::new(4, 4), CellPos::new(4, 5)]);
//! let mut sim = SimulationController::new(config).unwrap();
//! assert_eq!(sim.run().unwrap(), Termination::ReachedTarget);
//! assert_eq!(sim.generation().0, 4);
//! assert_eq!(sim.live_cells().len(), 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod cycle;
pub mod metrics;
pub mod monitor;
pub mod step;

pub use config::{ConfigError, SimConfig, Target};
pub use controller::{simulate, Phase, RunResult, SimError, SimulationController, Termination};
pub use cycle::CycleDetector;
pub use metrics::RunMetrics;
pub use monitor::{BoundaryMonitor, Breach};
pub use step::{StepEngine, StepStats};
