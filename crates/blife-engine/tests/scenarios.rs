//! End-to-end runs through the public controller API.

use blife_core::{CellPos, Generation};
use blife_engine::{simulate, SimConfig, SimulationController, Target, Termination};
use blife_grid::Edge;
use blife_test_utils::fixtures::*;
use blife_test_utils::{assert_border_dead, positions, translate};
use proptest::prelude::*;

fn config(size: usize, generations: u64, seed: &[(usize, usize)]) -> SimConfig {
    SimConfig::new(size, size, Target::from_count(generations)).with_seed(positions(seed))
}

#[test]
fn t_tetromino_reaches_target_in_12x12() {
    let result = simulate(config(12, 10, &T_TETROMINO_12)).unwrap();
    assert_eq!(result.termination, Termination::ReachedTarget);
    assert_eq!(result.generation, Generation(10));
    assert_eq!(result.live_cells, positions(&T_TETROMINO_12_GEN10));
}

#[test]
fn t_tetromino_overflows_in_11x11() {
    let result = simulate(config(11, 10, &T_TETROMINO_12)).unwrap();
    assert!(matches!(result.termination, Termination::Overflow { .. }));
    assert_eq!(result.generation, Generation(9));
}

#[test]
fn glider_overflows_at_generation_16() {
    let result = simulate(config(10, 0, &GLIDER_10)).unwrap();
    assert_eq!(result.generation, Generation(16));
    assert_eq!(result.live_cells, positions(&GLIDER_10_GEN16));
    assert_eq!(result.live_cells, translate(&positions(&GLIDER_10), 4, 4));
    match &result.termination {
        Termination::Overflow { breaches } => {
            assert!(breaches
                .iter()
                .any(|b| b.edge == Edge::Bottom || b.edge == Edge::Right));
        }
        other => panic!("expected overflow, got {other}"),
    }
}

#[test]
fn glider_with_target_stops_one_short_of_overflow() {
    let result = simulate(config(10, 15, &GLIDER_10)).unwrap();
    assert_eq!(result.termination, Termination::ReachedTarget);
    assert_eq!(result.generation, Generation(15));
    assert_eq!(result.live_cells, positions(&GLIDER_10_GEN15));
}

#[test]
fn overflow_stops_exactly_where_first_detected() {
    for generations in [0, 5] {
        let result = simulate(config(7, generations, &T_TETROMINO_7)).unwrap();
        assert_eq!(result.generation, Generation(2), "G={generations}");
        assert_eq!(result.live_cells, positions(&T_TETROMINO_7_GEN2));
        assert!(matches!(result.termination, Termination::Overflow { .. }));
    }
    let result = simulate(config(7, 1, &T_TETROMINO_7)).unwrap();
    assert_eq!(result.termination, Termination::ReachedTarget);
    assert_eq!(result.live_cells, positions(&T_TETROMINO_7_GEN1));
}

#[test]
fn still_life_is_unchanged_at_target() {
    let result = simulate(config(6, 4, &BLOCK_6)).unwrap();
    assert_eq!(result.termination, Termination::ReachedTarget);
    assert_eq!(result.generation, Generation(4));
    assert_eq!(result.live_cells, positions(&BLOCK_6));
}

#[test]
fn t_tetromino_without_target_settles_into_a_cycle() {
    // Grows into four blinkers that never reach the 12x12 ring.
    let result = simulate(config(12, 0, &T_TETROMINO_12)).unwrap();
    assert!(matches!(result.termination, Termination::Cycle { period: 2 }));
}

#[test]
fn manual_stepping_matches_run() {
    let mut sim = SimulationController::new(config(10, 0, &GLIDER_10)).unwrap();
    let mut generations = 0;
    while !sim.is_done() {
        sim.step().unwrap();
        generations += 1;
        assert_border_dead(sim.current());
    }
    assert_eq!(generations, 16);
    let result = sim.finish().unwrap();
    assert_eq!(result.generation, Generation(16));
    assert_eq!(result.metrics.steps, 16);
}

#[test]
fn library_patterns_run_inside_their_grid() {
    for pattern in blife_patterns::LIBRARY {
        let (rows, cols) = pattern.extent();
        let config = SimConfig::new(cols + 6, rows + 6, Target::from_count(8))
            .with_seed(pattern.place(CellPos::new(3, 3)));
        let result = simulate(config).unwrap();
        assert!(result.generation.0 <= 8, "{}", pattern.name);
        assert_border_dead(&result.grid);
    }
}

proptest! {
    #[test]
    fn border_stays_dead_for_random_seeds(
        size in 5usize..12,
        cells in proptest::collection::vec((1usize..11, 1usize..11), 0..40),
        generations in 1u64..20,
    ) {
        let seed: Vec<CellPos> = cells
            .into_iter()
            .filter(|&(r, c)| r < size - 1 && c < size - 1)
            .map(CellPos::from)
            .collect();
        let config = SimConfig::new(size, size, Target::from_count(generations)).with_seed(seed);
        let mut sim = SimulationController::new(config).unwrap();
        while !sim.is_done() {
            sim.step().unwrap();
            assert_border_dead(sim.current());
        }
        prop_assert!(sim.generation().0 <= generations);
    }
}
