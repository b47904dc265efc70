//! The numeral-format abstraction and the decimal format.

use std::fmt;
use std::str::FromStr;

use crate::english::English;
use crate::error::CodecError;
use crate::roman::Roman;

/// How a text stream is split into numerals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tokenization {
    /// Each whitespace-separated token is one numeral.
    Whitespace,
    /// Each non-blank line is one numeral.
    Line,
}

/// A textual encoding of non-negative integers.
pub trait NumeralFormat {
    /// Lower-case format name, for messages.
    fn name(&self) -> &'static str;

    /// How input text is split before [`decode`](Self::decode).
    fn tokenization(&self) -> Tokenization {
        Tokenization::Whitespace
    }

    /// Parse one numeral.
    fn decode(&self, token: &str) -> Result<u64, CodecError>;

    /// Render one numeral, without a trailing newline. The result may span
    /// several lines.
    fn encode(&self, value: u64) -> Result<String, CodecError>;
}

/// Plain base-10 numerals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decimal;

impl NumeralFormat for Decimal {
    fn name(&self) -> &'static str {
        "decimal"
    }

    fn decode(&self, token: &str) -> Result<u64, CodecError> {
        token.parse().map_err(|_| CodecError::InvalidToken {
            token: token.to_string(),
        })
    }

    fn encode(&self, value: u64) -> Result<String, CodecError> {
        Ok(value.to_string())
    }
}

/// Runtime choice of numeral format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// [`Decimal`].
    #[default]
    Decimal,
    /// [`English`].
    English,
    /// [`Roman`]; output only.
    Roman,
}

impl Format {
    /// Every format, in display order.
    pub const ALL: [Format; 3] = [Format::Decimal, Format::English, Format::Roman];

    fn as_dyn(&self) -> &'static dyn NumeralFormat {
        match self {
            Self::Decimal => &Decimal,
            Self::English => &English,
            Self::Roman => &Roman,
        }
    }
}

impl NumeralFormat for Format {
    fn name(&self) -> &'static str {
        self.as_dyn().name()
    }

    fn tokenization(&self) -> Tokenization {
        self.as_dyn().tokenization()
    }

    fn decode(&self, token: &str) -> Result<u64, CodecError> {
        self.as_dyn().decode(token)
    }

    fn encode(&self, value: u64) -> Result<String, CodecError> {
        self.as_dyn().encode(value)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown numeral format {s:?} (expected decimal, english or roman)"))
    }
}
