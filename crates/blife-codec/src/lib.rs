//! Numeral-encoded input and output for blife runs.
//!
//! A run is described by a flat sequence of non-negative integers:
//!
//! ```text
//! W H G  row col  row col  ...  0 [col]
//! ```
//!
//! `W` and `H` are the indices of the far border column and row, so the
//! grid has `W + 1` columns and `H + 1` rows. `G` is the generation target
//! (0 runs until overflow). Seed pairs end at the first row of 0.
//!
//! The result is written back as one numeral per line: each live cell's
//! row and column in row-major order, then the generation count.
//!
//! Numerals are pluggable through [`NumeralFormat`]: plain decimal,
//! spelled-out English digits, and (output only) Roman numerals with
//! overbars.
//!
//! # Example
//!
//! ```
//! use blife_codec::{write_output, Decimal, RunInput};
//! use blife_engine::simulate;
//!
//! // 7x7 grid, 4 generations, a blinker at row 3.
//! let input = RunInput::parse("6 6 4  3 2  3 3  3 4  0", &Decimal).unwrap();
//! let result = simulate(input.to_config()).unwrap();
//!
//! let mut out = Vec::new();
//! write_output(&mut out, &result.live_cells, result.generation, &Decimal).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "3\n2\n3\n3\n3\n4\n4\n");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod english;
pub mod error;
pub mod input;
pub mod numeral;
pub mod output;
pub mod roman;

pub use english::English;
pub use error::CodecError;
pub use input::{read_values, RunInput};
pub use numeral::{Decimal, Format, NumeralFormat, Tokenization};
pub use output::write_output;
pub use roman::Roman;
