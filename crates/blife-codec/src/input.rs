//! Run-input parsing.

use std::io::Read;

use blife_core::CellPos;
use blife_engine::{SimConfig, Target};
use tracing::debug;

use crate::error::CodecError;
use crate::numeral::{NumeralFormat, Tokenization};

/// Split `text` into numerals and decode each one.
pub fn read_values<F>(text: &str, format: &F) -> Result<Vec<u64>, CodecError>
where
    F: NumeralFormat + ?Sized,
{
    match format.tokenization() {
        Tokenization::Whitespace => text.split_whitespace().map(|t| format.decode(t)).collect(),
        Tokenization::Line => text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| format.decode(line))
            .collect(),
    }
}

/// A decoded run description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunInput {
    /// Grid width in cells, border included.
    pub width: usize,
    /// Grid height in cells, border included.
    pub height: usize,
    /// Generation target; 0 runs until overflow.
    pub generations: u64,
    /// Seed cells in input order.
    pub seed: Vec<CellPos>,
}

impl RunInput {
    /// Interpret a decoded value sequence.
    ///
    /// The header's width and height values are far-border indices and
    /// are converted to cell counts here. Values after the sentinel row
    /// are ignored. Seed positions are not range-checked; that happens in
    /// [`SimConfig::validate`].
    pub fn from_values(values: &[u64]) -> Result<Self, CodecError> {
        let mut values = values.iter().copied();
        let width = cell_count(values.next(), "grid width")?;
        let height = cell_count(values.next(), "grid height")?;
        let generations = values.next().ok_or(CodecError::UnexpectedEnd {
            expected: "generation count",
        })?;

        let mut seed = Vec::new();
        loop {
            let row = values.next().ok_or(CodecError::MissingSentinel)?;
            if row == 0 {
                break;
            }
            let col = values.next().ok_or(CodecError::UnexpectedEnd {
                expected: "seed column",
            })?;
            seed.push(CellPos::new(index(row, "seed row")?, index(col, "seed column")?));
        }

        debug!(width, height, generations, seed = seed.len(), "run input decoded");
        Ok(Self {
            width,
            height,
            generations,
            seed,
        })
    }

    /// Decode `text` in `format` and interpret it.
    pub fn parse<F>(text: &str, format: &F) -> Result<Self, CodecError>
    where
        F: NumeralFormat + ?Sized,
    {
        Self::from_values(&read_values(text, format)?)
    }

    /// Read all of `reader` and [`parse`](Self::parse) it.
    pub fn read<R, F>(mut reader: R, format: &F) -> Result<Self, CodecError>
    where
        R: Read,
        F: NumeralFormat + ?Sized,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text, format)
    }

    /// The engine configuration for this run.
    pub fn to_config(&self) -> SimConfig {
        SimConfig::new(self.width, self.height, Target::from_count(self.generations))
            .with_seed(self.seed.iter().copied())
    }
}

fn cell_count(value: Option<u64>, what: &'static str) -> Result<usize, CodecError> {
    let far_index = value.ok_or(CodecError::UnexpectedEnd { expected: what })?;
    usize::try_from(far_index)
        .ok()
        .and_then(|v| v.checked_add(1))
        .ok_or(CodecError::TooLarge { what })
}

fn index(value: u64, what: &'static str) -> Result<usize, CodecError> {
    usize::try_from(value).map_err(|_| CodecError::TooLarge { what })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decimal, English};
    use blife_test_utils::positions;

    #[test]
    fn header_is_far_border_index() {
        let input = RunInput::from_values(&[11, 9, 10, 0]).unwrap();
        assert_eq!((input.width, input.height), (12, 10));
        assert_eq!(input.generations, 10);
        assert!(input.seed.is_empty());
    }

    #[test]
    fn sentinel_column_is_optional() {
        let a = RunInput::from_values(&[6, 6, 2, 3, 3, 0]).unwrap();
        let b = RunInput::from_values(&[6, 6, 2, 3, 3, 0, 99, 5, 5]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, positions(&[(3, 3)]));
    }

    #[test]
    fn truncated_header() {
        let cases: [&[u64]; 3] = [&[], &[6], &[6, 6]];
        for values in cases {
            assert!(matches!(
                RunInput::from_values(values),
                Err(CodecError::UnexpectedEnd { .. })
            ));
        }
    }

    #[test]
    fn missing_sentinel() {
        assert!(matches!(
            RunInput::from_values(&[6, 6, 2]),
            Err(CodecError::MissingSentinel)
        ));
        assert!(matches!(
            RunInput::from_values(&[6, 6, 2, 3, 3]),
            Err(CodecError::MissingSentinel)
        ));
    }

    #[test]
    fn seed_row_without_column() {
        assert!(matches!(
            RunInput::from_values(&[6, 6, 2, 3]),
            Err(CodecError::UnexpectedEnd {
                expected: "seed column"
            })
        ));
    }

    #[test]
    fn header_overflow() {
        assert!(matches!(
            RunInput::from_values(&[u64::MAX, 6, 2, 0]),
            Err(CodecError::TooLarge { what: "grid width" })
        ));
    }

    #[test]
    fn english_is_line_based() {
        let text = "SIX\nSIX\n\nTWO\nTHREE\nTHREE\nZERO\n";
        assert_eq!(read_values(text, &English).unwrap(), vec![6, 6, 2, 3, 3, 0]);
        let input = RunInput::parse(text, &English).unwrap();
        assert_eq!(input, RunInput::parse("6 6 2 3 3 0", &Decimal).unwrap());
    }

    #[test]
    fn read_from_reader() {
        let input = RunInput::read("4 4 1\n2 2\n0\n".as_bytes(), &Decimal).unwrap();
        assert_eq!(input.to_config().width, 5);
        assert_eq!(input.to_config().target, Target::from_count(1));
        assert_eq!(input.to_config().seed, positions(&[(2, 2)]));
    }

    #[test]
    fn decode_errors_propagate() {
        assert!(matches!(
            RunInput::parse("6 six 2 0", &Decimal),
            Err(CodecError::InvalidToken { .. })
        ));
    }
}
