//! Double-buffered grid pair with ping-pong swap.
//!
//! [`DoubleBuffer`] holds two grids of identical dimensions that alternate
//! between the "current" role (the most recently completed generation)
//! and the "next" role (the generation being written). The lifecycle per
//! step is:
//! 1. `split()`: borrow current for reading and next for writing
//! 2. the step engine fills next from current
//! 3. `swap()`: next becomes current; the old current is reused as the
//!    next write target
//!
//! No data is copied on swap; only the role flag flips.

use blife_core::GridError;

use crate::grid::GridBuffer;

/// Two equally sized grids with alternating roles.
///
/// # Buffer layout
///
/// ```text
/// buffer_a: GridBuffer  ←─── current (even swaps) / next (odd)
/// buffer_b: GridBuffer  ←─── next (even swaps) / current (odd)
/// ```
#[derive(Clone, Debug)]
pub struct DoubleBuffer {
    buffer_a: GridBuffer,
    buffer_b: GridBuffer,
    /// Which buffer currently holds the latest generation
    /// (false = A current, true = B current).
    b_is_current: bool,
}

impl DoubleBuffer {
    /// Allocate both grids, all dead.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let buffer_a = GridBuffer::new(width, height)?;
        let buffer_b = buffer_a.clone();
        Ok(Self {
            buffer_a,
            buffer_b,
            b_is_current: false,
        })
    }

    /// The most recently completed generation.
    pub fn current(&self) -> &GridBuffer {
        if self.b_is_current {
            &self.buffer_b
        } else {
            &self.buffer_a
        }
    }

    /// Mutable access to the current grid, for seeding before the first step.
    pub fn current_mut(&mut self) -> &mut GridBuffer {
        if self.b_is_current {
            &mut self.buffer_b
        } else {
            &mut self.buffer_a
        }
    }

    /// Borrow the current grid for reading and the next grid for writing.
    ///
    /// The two borrows are disjoint fields, so the borrow checker
    /// guarantees they never alias.
    pub fn split(&mut self) -> (&GridBuffer, &mut GridBuffer) {
        if self.b_is_current {
            (&self.buffer_b, &mut self.buffer_a)
        } else {
            (&self.buffer_a, &mut self.buffer_b)
        }
    }

    /// Exchange roles: next becomes current.
    pub fn swap(&mut self) {
        self.b_is_current = !self.b_is_current;
    }

    /// Consume the pair, keeping only the current grid.
    pub fn into_current(self) -> GridBuffer {
        if self.b_is_current {
            self.buffer_b
        } else {
            self.buffer_a
        }
    }
}
