//! Repeated-state detection for run-until-overflow mode.
//!
//! A run without a generation target only stops on overflow. Still lifes
//! and oscillators never reach the ring, so the controller keeps a bounded
//! history of grid states and stops once a state repeats: the run is
//! periodic from then on, and every state of the period has already been
//! checked by the boundary monitor.

use std::hash::{BuildHasher, BuildHasherDefault, Hasher};

use blife_core::Generation;
use blife_grid::GridBuffer;
use indexmap::IndexMap;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Streaming 64-bit FNV-1a.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1aHasher(u64);

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self(FNV_OFFSET)
    }
}

impl Hasher for Fnv1aHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 ^ b as u64).wrapping_mul(FNV_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// [`BuildHasher`] for [`Fnv1aHasher`].
pub type FnvBuildHasher = BuildHasherDefault<Fnv1aHasher>;

/// A grid's dimensions and cell states as bytes.
///
/// Width and height come first as little-endian `u64`s, then the cells
/// packed eight to a byte in row-major order. Two grids pack equal iff
/// they are equal.
pub fn pack(grid: &GridBuffer) -> Box<[u8]> {
    let (width, height) = grid.dims();
    let mut bytes = Vec::with_capacity(16 + grid.cell_count().div_ceil(8));
    bytes.extend_from_slice(&(width as u64).to_le_bytes());
    bytes.extend_from_slice(&(height as u64).to_le_bytes());
    bytes.extend(grid.as_slice().chunks(8).map(|chunk| {
        chunk
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &alive)| acc | (u8::from(alive) << i))
    }));
    bytes.into_boxed_slice()
}

/// Deterministic 64-bit FNV-1a hash of [`pack`]ed grid state.
///
/// Not cryptographic.
pub fn grid_hash(grid: &GridBuffer) -> u64 {
    let mut hasher = Fnv1aHasher::default();
    hasher.write(&pack(grid));
    hasher.finish()
}

/// Bounded history of recently seen grid states.
///
/// Holds at most `window` states in insertion order; the oldest is evicted
/// first. A cycle longer than `window` generations is not detected. States
/// are stored packed and compared in full, so a hash collision never
/// reports a cycle.
#[derive(Clone, Debug)]
pub struct CycleDetector<S = FnvBuildHasher> {
    window: usize,
    history: IndexMap<Box<[u8]>, Generation, S>,
}

impl CycleDetector {
    /// Create a detector remembering up to `window` states.
    pub fn new(window: usize) -> Self {
        Self::with_hasher(window, FnvBuildHasher::default())
    }
}

impl<S: BuildHasher> CycleDetector<S> {
    /// Create a detector whose history is indexed with `hasher`.
    pub fn with_hasher(window: usize, hasher: S) -> Self {
        Self {
            window,
            history: IndexMap::with_capacity_and_hasher(window, hasher),
        }
    }

    /// Number of states remembered.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Record `grid` as the state at `generation`.
    ///
    /// Returns the period if the same state was recorded earlier and is
    /// still within the window.
    pub fn observe(&mut self, grid: &GridBuffer, generation: Generation) -> Option<u64> {
        if self.window == 0 {
            return None;
        }
        let state = pack(grid);
        if let Some(seen) = self.history.get(&state) {
            return Some(generation.0 - seen.0);
        }
        if self.history.len() == self.window {
            self.history.shift_remove_index(0);
        }
        self.history.insert(state, generation);
        None
    }

    /// Forget every recorded state.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blife_core::CellPos;
    use blife_test_utils::grid_from_ascii;

    #[test]
    fn hash_distinguishes_dimensions() {
        let a = GridBuffer::new(4, 6).unwrap();
        let b = GridBuffer::new(6, 4).unwrap();
        assert_ne!(grid_hash(&a), grid_hash(&b));
    }

    #[test]
    fn hash_tracks_cell_state() {
        let mut g = GridBuffer::new(5, 5).unwrap();
        let empty = grid_hash(&g);
        g.set(CellPos::new(2, 2), true).unwrap();
        assert_ne!(grid_hash(&g), empty);
        g.set(CellPos::new(2, 2), false).unwrap();
        assert_eq!(grid_hash(&g), empty);
    }

    #[test]
    fn detects_period_two() {
        let h = grid_from_ascii(&[".....", ".....", ".OOO.", ".....", "....."]);
        let v = grid_from_ascii(&[".....", "..O..", "..O..", "..O..", "....."]);
        let mut d = CycleDetector::new(8);
        assert_eq!(d.observe(&h, Generation(0)), None);
        assert_eq!(d.observe(&v, Generation(1)), None);
        assert_eq!(d.observe(&h, Generation(2)), Some(2));
    }

    #[test]
    fn window_evicts_oldest() {
        let grids: Vec<GridBuffer> = (1..4)
            .map(|col| {
                let mut g = GridBuffer::new(5, 5).unwrap();
                g.set(CellPos::new(2, col), true).unwrap();
                g
            })
            .collect();
        let mut d = CycleDetector::new(2);
        assert_eq!(d.observe(&grids[0], Generation(0)), None);
        assert_eq!(d.observe(&grids[1], Generation(1)), None);
        assert_eq!(d.observe(&grids[2], Generation(2)), None);
        // grids[0] was evicted when grids[2] arrived.
        assert_eq!(d.observe(&grids[0], Generation(3)), None);
        assert_eq!(d.observe(&grids[2], Generation(4)), Some(2));
    }

    /// Sends every key to the same bucket.
    #[derive(Default)]
    struct CollidingHasher;

    impl Hasher for CollidingHasher {
        fn write(&mut self, _bytes: &[u8]) {}

        fn finish(&self) -> u64 {
            0
        }
    }

    #[test]
    fn colliding_hashes_are_not_cycles() {
        let blinker = grid_from_ascii(&[".....", ".....", ".OOO.", ".....", "....."]);
        let block = grid_from_ascii(&[".....", ".OO..", ".OO..", ".....", "....."]);
        let mut d =
            CycleDetector::with_hasher(8, BuildHasherDefault::<CollidingHasher>::default());
        assert_eq!(d.observe(&blinker, Generation(0)), None);
        assert_eq!(d.observe(&block, Generation(1)), None);
        assert_eq!(d.observe(&blinker, Generation(2)), Some(2));
    }

    #[test]
    fn pack_distinguishes_dimensions() {
        let a = GridBuffer::new(4, 6).unwrap();
        let b = GridBuffer::new(6, 4).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
        assert_ne!(pack(&a), pack(&b));
    }

    #[test]
    fn zero_window_never_reports() {
        let g = GridBuffer::new(3, 3).unwrap();
        let mut d = CycleDetector::new(0);
        assert_eq!(d.observe(&g, Generation(0)), None);
        assert_eq!(d.observe(&g, Generation(1)), None);
    }

    #[test]
    fn clear_forgets_history() {
        let g = GridBuffer::new(3, 3).unwrap();
        let mut d = CycleDetector::new(4);
        d.observe(&g, Generation(0));
        d.clear();
        assert_eq!(d.observe(&g, Generation(1)), None);
        assert_eq!(d.window(), 4);
    }
}
