//! Spelled-out English digits.
//!
//! A numeral is a line of digit words, most significant first:
//! `ONE OH FOUR` is 104. Both `ZERO` and `OH` mean 0; `NINER` is accepted
//! for 9. Values above `u32::MAX` are rejected.

use crate::error::CodecError;
use crate::numeral::{NumeralFormat, Tokenization};

const WORDS: [(&str, u64); 12] = [
    ("ZERO", 0),
    ("OH", 0),
    ("ONE", 1),
    ("TWO", 2),
    ("THREE", 3),
    ("FOUR", 4),
    ("FIVE", 5),
    ("SIX", 6),
    ("SEVEN", 7),
    ("EIGHT", 8),
    ("NINE", 9),
    ("NINER", 9),
];

/// Canonical word for each digit when encoding.
const DIGIT_NAMES: [&str; 10] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

/// Spelled-out digit numerals, one per line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct English;

impl NumeralFormat for English {
    fn name(&self) -> &'static str {
        "english"
    }

    fn tokenization(&self) -> Tokenization {
        Tokenization::Line
    }

    fn decode(&self, token: &str) -> Result<u64, CodecError> {
        let mut value: u64 = 0;
        let mut digits = 0;
        for word in token.split_whitespace() {
            let digit = WORDS
                .iter()
                .find(|(w, _)| *w == word)
                .map(|&(_, d)| d)
                .ok_or_else(|| CodecError::UnknownDigit {
                    word: word.to_string(),
                })?;
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .filter(|&v| v <= u64::from(u32::MAX))
                .ok_or(CodecError::TooLarge {
                    what: "english numeral",
                })?;
            digits += 1;
        }
        if digits == 0 {
            return Err(CodecError::InvalidToken {
                token: token.to_string(),
            });
        }
        Ok(value)
    }

    fn encode(&self, value: u64) -> Result<String, CodecError> {
        Ok(value
            .to_string()
            .bytes()
            .map(|b| DIGIT_NAMES[usize::from(b - b'0')])
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decodes_digit_words() {
        assert_eq!(English.decode("ONE ONE").unwrap(), 11);
        assert_eq!(English.decode("ONE OH FOUR").unwrap(), 104);
        assert_eq!(English.decode("  NINER  ZERO\n").unwrap(), 90);
        assert_eq!(English.decode("ZERO").unwrap(), 0);
    }

    #[test]
    fn unknown_word() {
        assert!(matches!(
            English.decode("ONE ELEVEN"),
            Err(CodecError::UnknownDigit { word }) if word == "ELEVEN"
        ));
        // Digit words are upper case.
        assert!(English.decode("one").is_err());
    }

    #[test]
    fn u32_limit() {
        let max = "FOUR TWO NINE FOUR NINE SIX SEVEN TWO NINE FIVE";
        assert_eq!(English.decode(max).unwrap(), u64::from(u32::MAX));
        let over = "FOUR TWO NINE FOUR NINE SIX SEVEN TWO NINE SIX";
        assert!(matches!(
            English.decode(over),
            Err(CodecError::TooLarge { .. })
        ));
    }

    #[test]
    fn blank_line_is_not_a_numeral() {
        assert!(matches!(
            English.decode("   "),
            Err(CodecError::InvalidToken { .. })
        ));
    }

    #[test]
    fn encodes_canonical_words() {
        assert_eq!(English.encode(0).unwrap(), "ZERO");
        assert_eq!(English.encode(1090).unwrap(), "ONE ZERO NINE ZERO");
    }

    proptest! {
        #[test]
        fn encode_then_decode(v in 0u64..=u64::from(u32::MAX)) {
            prop_assert_eq!(English.decode(&English.encode(v).unwrap()).unwrap(), v);
        }
    }
}
