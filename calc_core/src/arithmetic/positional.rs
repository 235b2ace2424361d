//! # Positional Notation
//!
//! Conversion between `u64` values and digit strings in any radix 2..=36.
//!
//! - `to_base`: repeated division, remainders collected least-significant
//!   first, then reversed.
//! - `from_base`: positional-weight summation, `acc = acc × radix + digit`,
//!   with overflow checked at every step.
//!
//! Digits above 9 are rendered uppercase (`255 -> "FF"`); parsing accepts
//! either case.

use crate::errors::{CalcError, CalcResult};

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn check_radix(radix: u32) -> CalcResult<()> {
    if !(2..=36).contains(&radix) {
        return Err(CalcError::invalid_input(
            "radix",
            radix.to_string(),
            "Radix must be between 2 and 36",
        ));
    }
    Ok(())
}

/// Render `value` in the given radix.
///
/// # Example
/// ```rust
/// use calc_core::arithmetic::to_base;
///
/// assert_eq!(to_base(255, 16).unwrap(), "FF");
/// assert_eq!(to_base(5, 2).unwrap(), "101");
/// assert_eq!(to_base(0, 8).unwrap(), "0");
/// ```
pub fn to_base(value: u64, radix: u32) -> CalcResult<String> {
    check_radix(radix)?;
    if value == 0 {
        return Ok("0".to_string());
    }
    let radix = radix as u64;
    let mut n = value;
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % radix) as usize]);
        n /= radix;
    }
    out.reverse();
    // DIGITS is ASCII
    Ok(out.into_iter().map(char::from).collect())
}

/// Parse a digit string in the given radix.
///
/// Rejects empty input, digits outside the radix, and values above `u64::MAX`.
/// Underscores are not accepted; surrounding whitespace is trimmed.
///
/// # Example
/// ```rust
/// use calc_core::arithmetic::from_base;
///
/// assert_eq!(from_base("FF", 16).unwrap(), 255);
/// assert_eq!(from_base("ff", 16).unwrap(), 255);
/// assert!(from_base("102", 2).is_err());
/// ```
pub fn from_base(digits: &str, radix: u32) -> CalcResult<u64> {
    check_radix(radix)?;
    let trimmed = digits.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_field("value"));
    }
    let mut acc: u64 = 0;
    for ch in trimmed.chars() {
        let digit = ch.to_digit(radix).ok_or_else(|| {
            CalcError::not_numeric("value", trimmed, format!("base-{} number", radix))
        })?;
        acc = acc
            .checked_mul(radix as u64)
            .and_then(|v| v.checked_add(digit as u64))
            .ok_or_else(|| {
                CalcError::invalid_input("value", trimmed, "Value exceeds 18446744073709551615")
            })?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(to_base(255, 16).unwrap(), "FF");
        assert_eq!(to_base(255, 2).unwrap(), "11111111");
        assert_eq!(to_base(255, 8).unwrap(), "377");
        assert_eq!(to_base(35, 36).unwrap(), "Z");
        assert_eq!(from_base("377", 8).unwrap(), 255);
        assert_eq!(from_base("11111111", 2).unwrap(), 255);
    }

    #[test]
    fn test_round_trip() {
        let samples = [0u64, 1, 2, 7, 8, 15, 16, 255, 256, 65_535, 1 << 40, u64::MAX];
        for &x in &samples {
            for radix in [2, 8, 16] {
                assert_eq!(from_base(&to_base(x, radix).unwrap(), radix).unwrap(), x);
            }
        }
    }

    #[test]
    fn test_rejections() {
        assert_eq!(from_base("", 16).unwrap_err().error_code(), "MISSING_FIELD");
        assert_eq!(from_base("G", 16).unwrap_err().error_code(), "NOT_NUMERIC");
        assert_eq!(from_base("-1", 10).unwrap_err().error_code(), "NOT_NUMERIC");
        assert_eq!(
            from_base("10000000000000000", 16).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
        assert!(to_base(10, 1).is_err());
        assert!(to_base(10, 37).is_err());
    }
}
