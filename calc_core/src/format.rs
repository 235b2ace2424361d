//! # Number Formatting
//!
//! Display formatting for result values: a fixed number of decimal places with
//! trailing zeros trimmed, and optional thousands separators on the integer
//! part. Raw `f64` values stay in the result records; this is presentation only.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::format::NumberFormat;
//!
//! let fmt = NumberFormat::new(2, true);
//! assert_eq!(fmt.number(1234567.891), "1,234,567.89");
//! assert_eq!(fmt.number(2.5), "2.5");
//! assert_eq!(fmt.money(3.0, "$"), "$3.00");
//! ```

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// How numbers are rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Maximum decimal places shown
    pub decimal_places: usize,
    /// Group the integer part with commas
    pub thousands_separator: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            decimal_places: 4,
            thousands_separator: true,
        }
    }
}

impl From<&Settings> for NumberFormat {
    fn from(settings: &Settings) -> Self {
        NumberFormat {
            decimal_places: settings.decimal_places,
            thousands_separator: settings.thousands_separator,
        }
    }
}

impl NumberFormat {
    pub fn new(decimal_places: usize, thousands_separator: bool) -> Self {
        NumberFormat {
            decimal_places,
            thousands_separator,
        }
    }

    /// Format with up to `decimal_places` decimals, trailing zeros trimmed.
    pub fn number(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let fixed = format!("{:.*}", self.decimal_places, value);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };
        // "-0" after rounding a tiny negative value
        let trimmed = if trimmed == "-0" { "0" } else { trimmed };
        self.group(trimmed)
    }

    /// Format an integer, grouping digits when enabled.
    pub fn integer(&self, value: impl ToString) -> String {
        self.group(&value.to_string())
    }

    /// Currency amount with exactly two decimals.
    pub fn money(&self, value: f64, symbol: &str) -> String {
        let fixed = format!("{:.2}", value.abs());
        let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
        format!("{}{}{}", sign, symbol, self.group(&fixed))
    }

    /// Insert thousands separators into the integer part of a numeric string.
    fn group(&self, s: &str) -> String {
        if !self.thousands_separator {
            return s.to_string();
        }
        let (sign, unsigned) = match s.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", s),
        };
        let (int_part, frac_part) = match unsigned.find('.') {
            Some(pos) => unsigned.split_at(pos),
            None => (unsigned, ""),
        };
        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("{}{}{}", sign, grouped, frac_part)
    }
}
