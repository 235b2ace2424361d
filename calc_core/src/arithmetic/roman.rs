//! # Roman Numerals
//!
//! Standard subtractive notation over the range 1..=3999. Conversion to a
//! numeral greedily subtracts the largest table value that still fits; this
//! yields the canonical numeral for every value in range.
//!
//! Parsing is strict: a string is accepted only if it is the canonical
//! numeral of the value it sums to, so `IIII`, `VV` and `IC` are rejected.

use crate::errors::{CalcError, CalcResult};

/// Smallest representable value
pub const MIN_ROMAN: u32 = 1;

/// Largest representable value (no standard symbol exists for 5000)
pub const MAX_ROMAN: u32 = 3999;

const TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert a value in 1..=3999 to its Roman numeral.
///
/// # Example
/// ```rust
/// use calc_core::arithmetic::to_roman;
///
/// assert_eq!(to_roman(1994).unwrap(), "MCMXCIV");
/// assert!(to_roman(4000).is_err());
/// ```
pub fn to_roman(value: u32) -> CalcResult<String> {
    Ok(roman_parts(value)?.into_iter().map(|(symbol, _)| symbol).collect())
}

/// Greedy decomposition of a value into table symbols, largest first,
/// e.g. 1994 -> M, CM, XC, IV.
pub fn roman_parts(value: u32) -> CalcResult<Vec<(&'static str, u32)>> {
    if !(MIN_ROMAN..=MAX_ROMAN).contains(&value) {
        return Err(CalcError::invalid_input(
            "value",
            value.to_string(),
            format!("Roman numerals cover {} to {}", MIN_ROMAN, MAX_ROMAN),
        ));
    }
    let mut remaining = value;
    let mut parts = Vec::new();
    for &(v, symbol) in TABLE.iter() {
        while remaining >= v {
            parts.push((symbol, v));
            remaining -= v;
        }
    }
    Ok(parts)
}

/// Parse a canonical Roman numeral (case-insensitive).
///
/// # Example
/// ```rust
/// use calc_core::arithmetic::from_roman;
///
/// assert_eq!(from_roman("MCMXCIV").unwrap(), 1994);
/// assert_eq!(from_roman("xlii").unwrap(), 42);
/// assert!(from_roman("IIII").is_err());
/// ```
pub fn from_roman(numeral: &str) -> CalcResult<u32> {
    let upper = numeral.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return Err(CalcError::missing_field("numeral"));
    }

    let mut total = 0u32;
    let mut rest = upper.as_str();
    for &(v, symbol) in TABLE.iter() {
        while let Some(stripped) = rest.strip_prefix(symbol) {
            total += v;
            rest = stripped;
        }
    }

    if !rest.is_empty() || total > MAX_ROMAN {
        return Err(not_canonical(numeral));
    }
    // Greedy prefix stripping accepts repeats like "IIII"; only the
    // canonical rendering of the total is valid.
    if to_roman(total)? != upper {
        return Err(not_canonical(numeral));
    }
    Ok(total)
}

fn not_canonical(numeral: &str) -> CalcError {
    CalcError::invalid_input(
        "numeral",
        numeral.trim(),
        "Not a valid Roman numeral in standard subtractive notation",
    )
}
