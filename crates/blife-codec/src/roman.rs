//! Roman numerals with overbars, for output.
//!
//! Each numeral is two lines: overbars above, letters below. An overbar
//! multiplies a letter by 1000, and lower-case letters stand for the
//! upper-case value times 1,000,000, so every `u32` is representable.
//! Zero, which has no Roman form, is written as a lone overbar above an
//! empty line.

use crate::error::CodecError;
use crate::numeral::NumeralFormat;

/// Symbols per decimal place, as `(overbar, letter)`.
///
/// Slots: `0` is the plain "one" symbol, `1` the "one" used next to a
/// five or ten, `2` five, `3` ten. The slots only differ where the
/// thousands overlap with barred letters (M versus I̅).
const PLACE_SYMBOLS: [[(char, char); 4]; 10] = [
    [(' ', 'I'), (' ', 'I'), (' ', 'V'), (' ', 'X')],
    [(' ', 'X'), (' ', 'X'), (' ', 'L'), (' ', 'C')],
    [(' ', 'C'), (' ', 'C'), (' ', 'D'), (' ', 'M')],
    [(' ', 'M'), ('_', 'I'), ('_', 'V'), ('_', 'X')],
    [('_', 'X'), ('_', 'X'), ('_', 'L'), ('_', 'C')],
    [('_', 'C'), ('_', 'C'), ('_', 'D'), ('_', 'M')],
    [('_', 'M'), (' ', 'i'), (' ', 'v'), (' ', 'x')],
    [(' ', 'x'), (' ', 'x'), (' ', 'l'), (' ', 'c')],
    [(' ', 'c'), (' ', 'c'), (' ', 'd'), (' ', 'm')],
    [(' ', 'm'), ('_', 'i'), ('_', 'v'), ('_', 'x')],
];

/// Slot sequence for each decimal digit, most significant symbol first.
const DIGIT_SLOTS: [&[usize]; 10] = [
    &[],
    &[0],
    &[0, 0],
    &[0, 0, 0],
    &[1, 2],
    &[2],
    &[2, 1],
    &[2, 1, 1],
    &[2, 1, 1, 1],
    &[1, 3],
];

/// Two-line Roman numerals. Output only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Roman;

impl NumeralFormat for Roman {
    fn name(&self) -> &'static str {
        "roman"
    }

    fn decode(&self, _token: &str) -> Result<u64, CodecError> {
        Err(CodecError::DecodeUnsupported {
            format: self.name(),
        })
    }

    fn encode(&self, value: u64) -> Result<String, CodecError> {
        if value > u64::from(u32::MAX) {
            return Err(CodecError::TooLarge {
                what: "roman numeral",
            });
        }
        if value == 0 {
            return Ok("_\n".to_string());
        }
        let digits = value.to_string();
        let places = digits.len();
        let mut bars = String::new();
        let mut letters = String::new();
        for (i, b) in digits.bytes().enumerate() {
            let place = &PLACE_SYMBOLS[places - 1 - i];
            for &slot in DIGIT_SLOTS[usize::from(b - b'0')] {
                let (bar, letter) = place[slot];
                bars.push(bar);
                letters.push(letter);
            }
        }
        Ok(format!("{bars}\n{letters}"))
    }
}
