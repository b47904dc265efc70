//! Per-run performance and population metrics.
//!
//! [`RunMetrics`] accumulates over every step of a run and is handed back
//! in the [`RunResult`](crate::RunResult).

use crate::step::StepStats;

/// Timing and population metrics accumulated over a run.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Number of steps executed.
    pub steps: u64,
    /// Wall-clock time spent inside the step engine, in microseconds.
    pub total_step_us: u64,
    /// Slowest single step, in microseconds.
    pub slowest_step_us: u64,
    /// Population of the seed state.
    pub initial_population: usize,
    /// Largest population seen, seed included.
    pub peak_population: usize,
    /// Cumulative births across all steps.
    pub births: u64,
    /// Cumulative deaths across all steps.
    pub deaths: u64,
}

impl RunMetrics {
    /// Metrics for a run seeded with `population` live cells.
    pub fn with_initial_population(population: usize) -> Self {
        Self {
            initial_population: population,
            peak_population: population,
            ..Self::default()
        }
    }

    /// Fold one step into the totals.
    pub fn record(&mut self, stats: &StepStats, elapsed_us: u64) {
        self.steps += 1;
        self.total_step_us += elapsed_us;
        self.slowest_step_us = self.slowest_step_us.max(elapsed_us);
        self.peak_population = self.peak_population.max(stats.population);
        self.births += stats.births as u64;
        self.deaths += stats.deaths as u64;
    }

    /// Mean step time in microseconds, 0 before the first step.
    pub fn mean_step_us(&self) -> u64 {
        self.total_step_us.checked_div(self.steps).unwrap_or(0)
    }
}
