//! Grid storage for the blife engine.
//!
//! - [`GridBuffer`]: a `width x height` array of cell states whose outer
//!   ring is the permanently dead border.
//! - [`DoubleBuffer`]: two equally sized grids alternating between the
//!   "current" (readable) and "next" (writable) roles.
//! - [`Edge`]: the four boundary-adjacent rings, one cell inside the border.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod pingpong;
pub mod ring;

pub use grid::{GridBuffer, MAX_CELLS};
pub use pingpong::DoubleBuffer;
pub use ring::Edge;
