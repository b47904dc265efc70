//! Core types for the blife Game of Life engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers shared by every other crate in the workspace (cell
//! positions, generation counters) and the grid-level error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::GridError;
pub use id::{CellPos, Generation};
