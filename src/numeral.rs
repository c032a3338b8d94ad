//! Arbitrary-base numeral decoding.
//!
//! Digits are `0`-`9` and `a`-`f` (either case), so the meaningful bases are
//! 2 through 16. Bases are not bounds-checked here: a digit is accepted as
//! long as its value is below the declared base.

use crate::error::{Error, Result};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Convert a single digit character to its value.
///
/// # Example
/// ```
/// use rootdec::numeral::digit_value;
///
/// assert_eq!(digit_value('a').unwrap(), 10);
/// assert_eq!(digit_value('F').unwrap(), 15);
/// assert!(digit_value('g').is_err());
/// ```
pub fn digit_value(c: char) -> Result<u32> {
    match c {
        '0'..='9' => Ok(c as u32 - '0' as u32),
        'a'..='f' => Ok(c as u32 - 'a' as u32 + 10),
        'A'..='F' => Ok(c as u32 - 'A' as u32 + 10),
        _ => Err(Error::InvalidDigitCharacter(c)),
    }
}

/// Decode a most-significant-digit-first numeral in `base`.
///
/// An empty string decodes to zero.
///
/// # Errors
/// * `InvalidDigitCharacter` for characters outside `0-9a-fA-F`
/// * `DigitOutOfRangeForBase` for digits not below `base`
/// * `NumeralOverflow` if the value does not fit in a `u64`
///
/// # Example
/// ```
/// use rootdec::numeral::decode;
///
/// assert_eq!(decode("1A", 16).unwrap(), 26);
/// assert_eq!(decode("111", 2).unwrap(), 7);
/// ```
pub fn decode(digits: &str, base: u32) -> Result<u64> {
    let radix = u64::from(base);
    let mut result: u64 = 0;

    for c in digits.chars() {
        let digit = digit_value(c)?;
        if digit >= base {
            return Err(Error::DigitOutOfRangeForBase { digit: c, base });
        }
        result = result
            .checked_mul(radix)
            .and_then(|r| r.checked_add(u64::from(digit)))
            .ok_or_else(|| Error::NumeralOverflow {
                value: digits.to_string(),
                base,
            })?;
    }

    Ok(result)
}

/// Encode `value` as a numeral in `base` using lowercase digits.
///
/// Returns `None` for bases outside 2..=16. Zero encodes as `"0"`.
pub fn encode(mut value: u64, base: u32) -> Option<String> {
    if !(2..=16).contains(&base) {
        return None;
    }
    if value == 0 {
        return Some("0".to_string());
    }

    let radix = u64::from(base);
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % radix) as usize]);
        value /= radix;
    }
    out.reverse();

    // DIGITS is ASCII
    Some(out.into_iter().map(char::from).collect())
}
