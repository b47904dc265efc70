//! Seed sources for blife runs.
//!
//! - [`Pattern`] / [`LIBRARY`]: well-known shapes placed by their
//!   top-left corner.
//! - [`Soup`]: a deterministic random fill of a grid's interior.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod library;
pub mod soup;

pub use library::{Pattern, LIBRARY};
pub use soup::{Soup, SoupError};
