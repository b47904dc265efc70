//! The stepping controller: the single-threaded generation loop.
//!
//! [`SimulationController`] wires the double buffer, step engine, boundary
//! monitor and repeated-state detector into a deterministic run with
//! three phases:
//!
//! - **Initializing**: [`SimulationController::new`] validates the
//!   [`SimConfig`] and seeds the current grid. Nothing steps on failure.
//! - **Stepping**: each [`step()`](SimulationController::step) computes
//!   one generation into the idle buffer, swaps, increments the counter,
//!   then applies the stop rules in order: target reached, overflow
//!   imminent, and (without a target only) extinction and repetition.
//! - **Done**: terminal. The generation that triggered the stop is kept;
//!   nothing is rolled back.
//!
//! # Ownership model
//!
//! Both grids live inside the controller. The step engine receives a
//! shared borrow of the current grid and an exclusive borrow of the next
//! one, split from the same [`DoubleBuffer`], so they cannot alias.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use blife_core::{CellPos, Generation, GridError};
use blife_grid::{DoubleBuffer, GridBuffer};
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::config::{ConfigError, SimConfig, Target};
use crate::cycle::CycleDetector;
use crate::metrics::RunMetrics;
use crate::monitor::{BoundaryMonitor, Breach};
use crate::step::{StepEngine, StepStats};

// ── Termination ──────────────────────────────────────────────────

/// Why a run stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The generation counter reached the configured target.
    ReachedTarget,
    /// A boundary-adjacent ring holds a run of live cells; the next
    /// generation would spill onto the border.
    Overflow {
        /// Every breached edge.
        breaches: SmallVec<[Breach; 4]>,
    },
    /// No live cells remain (run-until-overflow mode only).
    Extinct,
    /// The grid repeated an earlier state (run-until-overflow mode only).
    Cycle {
        /// Generations between the two occurrences.
        period: u64,
    },
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReachedTarget => write!(f, "reached target"),
            Self::Overflow { breaches } => {
                write!(f, "stopped on overflow")?;
                for (i, b) in breaches.iter().enumerate() {
                    let sep = if i == 0 { " at " } else { ", " };
                    write!(f, "{sep}{} edge {}", b.edge, b.start)?;
                }
                Ok(())
            }
            Self::Extinct => write!(f, "pattern died out"),
            Self::Cycle { period } => write!(f, "pattern repeats with period {period}"),
        }
    }
}

// ── Phase ────────────────────────────────────────────────────────

/// Controller state after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// More generations may follow.
    Stepping,
    /// Terminal.
    Done(Termination),
}

// ── RunResult ────────────────────────────────────────────────────

/// Everything a finished run reports.
#[derive(Clone, Debug)]
pub struct RunResult {
    /// Live cells of the final grid, row-major.
    pub live_cells: Vec<CellPos>,
    /// Completed generations.
    pub generation: Generation,
    /// Why the run stopped.
    pub termination: Termination,
    /// Timing and population totals.
    pub metrics: RunMetrics,
    /// The final grid.
    pub grid: GridBuffer,
}

// ── SimError ─────────────────────────────────────────────────────

/// Error returned from [`simulate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// The configuration was rejected before any step ran.
    Config(ConfigError),
    /// An internal grid contract was violated while stepping.
    Grid(GridError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid input: {e}"),
            Self::Grid(e) => write!(f, "internal grid error: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for SimError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimulationController ─────────────────────────────────────────

/// Owns both grids and drives a run to completion.
///
/// Created from a [`SimConfig`] via [`new()`](SimulationController::new).
///
/// # Example
///
/// ```ignore
/// let mut sim = SimulationController::new(config)?;
/// while let Phase::Stepping = sim.step()? {
///     render(sim.current());
/// }
/// let result = sim.finish()?;
/// ```
#[derive(Debug)]
pub struct SimulationController {
    buffers: DoubleBuffer,
    engine: StepEngine,
    monitor: BoundaryMonitor,
    cycles: CycleDetector,
    target: Target,
    generation: Generation,
    phase: Phase,
    metrics: RunMetrics,
}

impl SimulationController {
    /// Validate `config`, allocate both grids and seed the current one.
    ///
    /// In [`Target::UntilOverflow`] mode an empty seed is already
    /// terminal: the controller starts in `Done(Extinct)` at generation 0.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut buffers = DoubleBuffer::new(config.width, config.height)?;
        let grid = buffers.current_mut();
        for &pos in &config.seed {
            grid.set(pos, true)?;
        }

        let seed_population = buffers.current().population();
        let mut cycles = CycleDetector::new(config.cycle_window);
        let phase = match config.target {
            Target::UntilOverflow if seed_population == 0 => Phase::Done(Termination::Extinct),
            Target::UntilOverflow => {
                cycles.observe(buffers.current(), Generation::ZERO);
                Phase::Stepping
            }
            Target::Generations(_) => Phase::Stepping,
        };

        debug!(
            width = config.width,
            height = config.height,
            target = %config.target,
            population = seed_population,
            "simulation initialized"
        );

        Ok(Self {
            buffers,
            engine: StepEngine::new(),
            monitor: BoundaryMonitor::new(),
            cycles,
            target: config.target,
            generation: Generation::ZERO,
            phase,
            metrics: RunMetrics::with_initial_population(seed_population),
        })
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether the run has reached a terminal state.
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done(_))
    }

    /// Why the run stopped, once it has.
    pub fn termination(&self) -> Option<&Termination> {
        match &self.phase {
            Phase::Done(t) => Some(t),
            Phase::Stepping => None,
        }
    }

    /// Completed generations so far.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The configured generation limit.
    pub fn target(&self) -> Target {
        self.target
    }

    /// The most recently completed generation.
    pub fn current(&self) -> &GridBuffer {
        self.buffers.current()
    }

    /// Live cells of the current grid, row-major.
    pub fn live_cells(&self) -> Vec<CellPos> {
        self.buffers.current().live_cells()
    }

    /// Metrics accumulated so far.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Execute one generation.
    ///
    /// A no-op once the run is done. Returns the phase after the step.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] only if an internal grid contract is broken.
    pub fn step(&mut self) -> Result<&Phase, GridError> {
        if self.is_done() {
            return Ok(&self.phase);
        }

        let step_start = Instant::now();
        let stats = {
            let (current, next) = self.buffers.split();
            self.engine.step(current, next)?
        };
        self.buffers.swap();
        self.generation = self.generation.next();
        self.metrics
            .record(&stats, step_start.elapsed().as_micros() as u64);

        trace!(
            generation = self.generation.0,
            population = stats.population,
            births = stats.births,
            deaths = stats.deaths,
            "generation complete"
        );

        if let Some(termination) = self.check_termination(&stats) {
            debug!(generation = self.generation.0, %termination, "simulation done");
            self.phase = Phase::Done(termination);
        }
        Ok(&self.phase)
    }

    /// Stop rules, in priority order.
    fn check_termination(&mut self, stats: &StepStats) -> Option<Termination> {
        if self.target.is_reached(self.generation) {
            return Some(Termination::ReachedTarget);
        }
        let breaches = self.monitor.scan(self.buffers.current());
        if !breaches.is_empty() {
            return Some(Termination::Overflow { breaches });
        }
        if self.target == Target::UntilOverflow {
            if stats.population == 0 {
                return Some(Termination::Extinct);
            }
            if let Some(period) = self.cycles.observe(self.buffers.current(), self.generation) {
                return Some(Termination::Cycle { period });
            }
        }
        None
    }

    /// Step until the run is done and return why it stopped.
    pub fn run(&mut self) -> Result<Termination, GridError> {
        let run_start = Instant::now();
        let from = self.generation;
        loop {
            if let Phase::Done(termination) = &self.phase {
                info!(
                    generations = self.generation.0,
                    stepped = self.generation.0 - from.0,
                    population = self.buffers.current().population(),
                    elapsed_us = run_start.elapsed().as_micros() as u64,
                    %termination,
                    "run complete"
                );
                return Ok(termination.clone());
            }
            self.step()?;
        }
    }

    /// Run to completion and hand back the final state.
    ///
    /// Consumes the controller; the idle buffer is dropped here.
    pub fn finish(mut self) -> Result<RunResult, GridError> {
        let termination = self.run()?;
        let grid = self.buffers.into_current();
        Ok(RunResult {
            live_cells: grid.live_cells(),
            generation: self.generation,
            termination,
            metrics: self.metrics,
            grid,
        })
    }
}

/// Validate, run and collect a whole simulation in one call.
pub fn simulate(config: SimConfig) -> Result<RunResult, SimError> {
    Ok(SimulationController::new(config)?.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blife_grid::Edge;
    use blife_test_utils::{assert_border_dead, positions};

    fn config(width: usize, height: usize, target: u64, seed: &[(usize, usize)]) -> SimConfig {
        SimConfig::new(width, height, Target::from_count(target)).with_seed(positions(seed))
    }

    #[test]
    fn invalid_config_never_steps() {
        let err = SimulationController::new(config(7, 7, 3, &[(0, 3)])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::SeedOnBorder {
                pos: CellPos::new(0, 3)
            }
        );
        assert!(matches!(
            simulate(config(2, 7, 3, &[])),
            Err(SimError::Config(ConfigError::DimensionTooSmall { .. }))
        ));
    }

    #[test]
    fn oversized_grid_is_rejected_without_allocating() {
        let side = 4_000_000_001;
        let err = SimulationController::new(SimConfig::new(side, side, Target::from_count(1)))
            .unwrap_err();
        assert!(matches!(err, ConfigError::CellCountOverflow { .. }));
    }

    #[test]
    fn seed_is_visible_before_stepping() {
        let sim = SimulationController::new(config(7, 7, 3, &[(3, 2), (3, 3), (3, 4)])).unwrap();
        assert_eq!(sim.generation(), Generation::ZERO);
        assert_eq!(sim.phase(), &Phase::Stepping);
        assert_eq!(sim.live_cells(), positions(&[(3, 2), (3, 3), (3, 4)]));
        assert_eq!(sim.metrics().initial_population, 3);
    }

    #[test]
    fn single_step_increments_generation_by_one() {
        let mut sim = SimulationController::new(config(7, 7, 3, &[(3, 2), (3, 3), (3, 4)])).unwrap();
        assert_eq!(sim.step().unwrap(), &Phase::Stepping);
        assert_eq!(sim.generation(), Generation(1));
        assert_eq!(sim.live_cells(), positions(&[(2, 3), (3, 3), (4, 3)]));
    }

    #[test]
    fn target_reached_exactly() {
        let result = simulate(config(7, 7, 5, &[(3, 2), (3, 3), (3, 4)])).unwrap();
        assert_eq!(result.termination, Termination::ReachedTarget);
        assert_eq!(result.generation, Generation(5));
        assert_eq!(result.metrics.steps, 5);
        // Odd generation of a blinker: vertical phase.
        assert_eq!(result.live_cells, positions(&[(2, 3), (3, 3), (4, 3)]));
    }

    #[test]
    fn target_takes_precedence_over_overflow() {
        // T-tetromino in 7x7 overflows at generation 2; a target of 2
        // wins the tie.
        let seed = [(2, 2), (2, 3), (2, 4), (3, 3)];
        let result = simulate(config(7, 7, 2, &seed)).unwrap();
        assert_eq!(result.termination, Termination::ReachedTarget);
        assert_eq!(result.generation, Generation(2));
    }

    #[test]
    fn overflow_keeps_the_triggering_generation() {
        let seed = [(2, 2), (2, 3), (2, 4), (3, 3)];
        let result = simulate(config(7, 7, 5, &seed)).unwrap();
        assert_eq!(result.generation, Generation(2));
        assert_eq!(
            result.termination,
            Termination::Overflow {
                breaches: [Breach {
                    edge: Edge::Top,
                    start: CellPos::new(1, 2)
                }]
                .into_iter()
                .collect()
            }
        );
        assert_eq!(
            result.live_cells,
            positions(&[(1, 2), (1, 3), (1, 4), (3, 2), (3, 4), (4, 3)])
        );
        assert_border_dead(&result.grid);
    }

    #[test]
    fn overflow_is_not_checked_against_the_seed() {
        // The seed already has three live cells on the top ring, but the
        // first check happens after generation 1.
        let seed = [(1, 2), (1, 3), (1, 4)];
        let mut sim = SimulationController::new(config(7, 7, 0, &seed)).unwrap();
        assert_eq!(sim.phase(), &Phase::Stepping);
        sim.step().unwrap();
        assert_eq!(sim.generation(), Generation(1));
        assert_eq!(sim.live_cells(), positions(&[(1, 3), (2, 3)]));
        assert_eq!(sim.phase(), &Phase::Stepping);
    }

    #[test]
    fn empty_seed_without_target_finishes_at_zero() {
        let result = simulate(config(9, 9, 0, &[])).unwrap();
        assert_eq!(result.generation, Generation::ZERO);
        assert_eq!(result.termination, Termination::Extinct);
        assert!(result.live_cells.is_empty());
        assert_eq!(result.metrics.steps, 0);
    }

    #[test]
    fn empty_seed_with_target_runs_to_target() {
        let result = simulate(config(9, 9, 12, &[])).unwrap();
        assert_eq!(result.generation, Generation(12));
        assert_eq!(result.termination, Termination::ReachedTarget);
        assert!(result.live_cells.is_empty());
    }

    #[test]
    fn dying_pattern_without_target_is_extinct() {
        let result = simulate(config(9, 9, 0, &[(4, 4), (4, 5)])).unwrap();
        assert_eq!(result.generation, Generation(1));
        assert_eq!(result.termination, Termination::Extinct);
    }

    #[test]
    fn still_life_without_target_cycles() {
        let seed = [(3, 3), (3, 4), (4, 3), (4, 4)];
        let result = simulate(config(8, 8, 0, &seed)).unwrap();
        assert_eq!(result.termination, Termination::Cycle { period: 1 });
        assert_eq!(result.generation, Generation(1));
        assert_eq!(result.live_cells, positions(&seed));
    }

    #[test]
    fn oscillator_without_target_cycles() {
        let seed = [(4, 3), (4, 4), (4, 5)];
        let result = simulate(config(9, 9, 0, &seed)).unwrap();
        assert_eq!(result.termination, Termination::Cycle { period: 2 });
        assert_eq!(result.generation, Generation(2));
        assert_eq!(result.live_cells, positions(&seed));
    }

    #[test]
    fn step_after_done_is_a_no_op() {
        let mut sim = SimulationController::new(config(7, 7, 1, &[(3, 3)])).unwrap();
        assert_eq!(sim.run().unwrap(), Termination::ReachedTarget);
        assert_eq!(sim.generation(), Generation(1));
        assert!(sim.step().unwrap() != &Phase::Stepping);
        assert_eq!(sim.generation(), Generation(1));
        assert_eq!(sim.termination(), Some(&Termination::ReachedTarget));
    }

    #[test]
    fn termination_display() {
        assert_eq!(Termination::ReachedTarget.to_string(), "reached target");
        assert_eq!(
            Termination::Cycle { period: 2 }.to_string(),
            "pattern repeats with period 2"
        );
        let overflow = Termination::Overflow {
            breaches: [
                Breach {
                    edge: Edge::Top,
                    start: CellPos::new(1, 2),
                },
                Breach {
                    edge: Edge::Left,
                    start: CellPos::new(1, 1),
                },
            ]
            .into_iter()
            .collect(),
        };
        assert_eq!(
            overflow.to_string(),
            "stopped on overflow at top edge (1, 2), left edge (1, 1)"
        );
    }
}
