//! Error types for numeral decoding and run-input parsing.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors from reading or writing numeral-encoded runs.
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// A spelled-out digit word is not recognised.
    UnknownDigit {
        /// The offending word.
        word: String,
    },
    /// A token is not a numeral in the selected format.
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// A value does not fit the range the format or field allows.
    TooLarge {
        /// Where the value was used.
        what: &'static str,
    },
    /// The format can only encode, not decode.
    DecodeUnsupported {
        /// Format name.
        format: &'static str,
    },
    /// The input ended in the middle of the header or a seed pair.
    UnexpectedEnd {
        /// What was being read.
        expected: &'static str,
    },
    /// The input ended without a seed pair whose row is 0.
    MissingSentinel,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnknownDigit { word } => write!(f, "unknown digit word {word:?}"),
            Self::InvalidToken { token } => write!(f, "invalid numeral {token:?}"),
            Self::TooLarge { what } => write!(f, "{what} is too large"),
            Self::DecodeUnsupported { format } => {
                write!(f, "{format} numerals cannot be used for input")
            }
            Self::UnexpectedEnd { expected } => {
                write!(f, "input ended while reading {expected}")
            }
            Self::MissingSentinel => write!(f, "seed list is not terminated by a row of 0"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
