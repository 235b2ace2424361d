//! # GCD, LCM and LCD Calculations
//!
//! Three calculators over the shared [`crate::arithmetic::integer`] helpers:
//!
//! - **GCD** (a.k.a. GCF, HCF): greatest common divisor of two or more
//!   non-negative integers, with the LCM alongside.
//! - **LCM**: least common multiple of two or more positive integers.
//! - **LCD**: least common denominator of a list of fractions, with every
//!   fraction rewritten over it.
//!
//! An all-zero GCD input is rejected: gcd(0, 0) has no meaningful value.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::divisors::{calculate_gcd, GcdInput};
//!
//! let result = calculate_gcd(&GcdInput { values: vec![48, 18] }).unwrap();
//! assert_eq!(result.gcd, 6);
//! assert_eq!(result.lcm, Some(144));
//! ```

use serde::{Deserialize, Serialize};

use crate::arithmetic::{common_denominator, gcd_all, lcm_all, Fraction};
use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::settings::Settings;

/// Largest number of values accepted in one list
pub const MAX_VALUES: usize = 100;

fn check_count(field: &str, count: usize, min: usize) -> CalcResult<()> {
    if count < min || count > MAX_VALUES {
        return Err(CalcError::invalid_input(
            field,
            format!("{} value(s)", count),
            format!("Between {} and {} values are required", min, MAX_VALUES),
        ));
    }
    Ok(())
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// GCD
// ============================================================================

/// Input for the GCD calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcdInput {
    /// Two or more non-negative integers, not all zero
    pub values: Vec<u64>,
}

impl GcdInput {
    pub fn validate(&self) -> CalcResult<()> {
        check_count("values", self.values.len(), 2)?;
        if self.values.iter().all(|v| *v == 0) {
            return Err(CalcError::invalid_input(
                "values",
                join(&self.values),
                "GCD is undefined when every value is zero",
            ));
        }
        Ok(())
    }
}

impl FromFields for GcdInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(GcdInput {
            values: fields.require_u64_list("values")?,
        })
    }
}

/// One step of the Euclidean reduction: `dividend = quotient × divisor + remainder`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EuclidStep {
    pub dividend: u64,
    pub divisor: u64,
    pub quotient: u64,
    pub remainder: u64,
}

/// Results from the GCD calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcdResult {
    pub values: Vec<u64>,
    pub gcd: u64,

    /// LCM of the same values; `None` when it exceeds the 64-bit range
    pub lcm: Option<u64>,

    /// Euclidean steps for the first two values
    pub steps: Vec<EuclidStep>,
}

impl GcdResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        let mut lines = vec![format!("GCD({}) = {}", join(&self.values), fmt.integer(self.gcd))];
        match self.lcm {
            Some(l) => lines.push(format!("LCM({}) = {}", join(&self.values), fmt.integer(l))),
            None => lines.push("LCM exceeds 18,446,744,073,709,551,615".to_string()),
        }
        for step in &self.steps {
            lines.push(format!(
                "  {} = {} × {} + {}",
                step.dividend, step.quotient, step.divisor, step.remainder
            ));
        }
        lines
    }
}

/// Euclidean reduction trace of `gcd(a, b)`.
pub fn euclid_steps(a: u64, b: u64) -> Vec<EuclidStep> {
    let (mut a, mut b) = (a.max(b), a.min(b));
    let mut steps = Vec::new();
    while b != 0 {
        let step = EuclidStep {
            dividend: a,
            divisor: b,
            quotient: a / b,
            remainder: a % b,
        };
        a = b;
        b = step.remainder;
        steps.push(step);
    }
    steps
}

/// Greatest common divisor of a list of integers.
pub fn calculate_gcd(input: &GcdInput) -> CalcResult<GcdResult> {
    input.validate()?;
    Ok(GcdResult {
        values: input.values.clone(),
        gcd: gcd_all(&input.values),
        lcm: lcm_all(&input.values),
        steps: euclid_steps(input.values[0], input.values[1]),
    })
}

// ============================================================================
// LCM
// ============================================================================

/// Input for the LCM calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LcmInput {
    /// Two or more positive integers
    pub values: Vec<u64>,
}

impl LcmInput {
    pub fn validate(&self) -> CalcResult<()> {
        check_count("values", self.values.len(), 2)?;
        if self.values.contains(&0) {
            return Err(CalcError::invalid_input(
                "values",
                join(&self.values),
                "LCM requires positive integers",
            ));
        }
        Ok(())
    }
}

impl FromFields for LcmInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(LcmInput {
            values: fields.require_u64_list("values")?,
        })
    }
}

/// Results from the LCM calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LcmResult {
    pub values: Vec<u64>,
    pub lcm: u64,
    pub gcd: u64,
}

impl LcmResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("LCM({}) = {}", join(&self.values), fmt.integer(self.lcm)),
            format!("GCD({}) = {}", join(&self.values), fmt.integer(self.gcd)),
        ]
    }
}

/// Least common multiple of a list of positive integers.
pub fn calculate_lcm(input: &LcmInput) -> CalcResult<LcmResult> {
    input.validate()?;
    let lcm = lcm_all(&input.values).ok_or_else(|| {
        CalcError::invalid_input(
            "values",
            join(&input.values),
            "LCM exceeds the 64-bit integer range",
        )
    })?;
    Ok(LcmResult {
        values: input.values.clone(),
        lcm,
        gcd: gcd_all(&input.values),
    })
}

// ============================================================================
// LCD
// ============================================================================

/// Input for the least common denominator calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LcdInput {
    /// Two or more fractions
    pub fractions: Vec<Fraction>,
}

impl LcdInput {
    pub fn validate(&self) -> CalcResult<()> {
        check_count("fractions", self.fractions.len(), 2)?;
        self.fractions.iter().try_for_each(|f| f.check("fractions"))
    }
}

impl FromFields for LcdInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        let fractions = fields
            .require_list("fractions")?
            .into_iter()
            .map(|item| Fraction::parse("fractions", item))
            .collect::<CalcResult<Vec<_>>>()?;
        Ok(LcdInput { fractions })
    }
}

/// Results from the LCD calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LcdResult {
    pub fractions: Vec<Fraction>,
    pub lcd: i64,

    /// Each input fraction (in lowest terms) rewritten over the LCD
    pub equivalents: Vec<Fraction>,
}

impl LcdResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        let mut lines = vec![format!("LCD = {}", fmt.integer(self.lcd))];
        for (original, equivalent) in self.fractions.iter().zip(&self.equivalents) {
            lines.push(format!("  {} = {}", original, equivalent));
        }
        lines
    }
}

/// Least common denominator of a list of fractions.
pub fn calculate_lcd(input: &LcdInput) -> CalcResult<LcdResult> {
    input.validate()?;
    let overflow = || {
        CalcError::invalid_input(
            "fractions",
            join(&input.fractions),
            "Common denominator exceeds the 64-bit integer range",
        )
    };
    let lcd = common_denominator(&input.fractions).ok_or_else(overflow)?;
    let equivalents = input
        .fractions
        .iter()
        .map(|f| f.with_denominator(lcd).ok_or_else(overflow))
        .collect::<CalcResult<Vec<_>>>()?;
    Ok(LcdResult {
        fractions: input.fractions.clone(),
        lcd,
        equivalents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_scenario() {
        let result = calculate_gcd(&GcdInput { values: vec![48, 18] }).unwrap();
        assert_eq!(result.gcd, 6);
        assert_eq!(result.lcm, Some(144));
        assert_eq!(result.steps.len(), 3);
        assert_eq!(result.steps[0], EuclidStep { dividend: 48, divisor: 18, quotient: 2, remainder: 12 });
        assert_eq!(result.steps.last().unwrap().remainder, 0);
    }

    #[test]
    fn test_gcd_with_zero_and_all_zero() {
        let result = calculate_gcd(&GcdInput { values: vec![0, 12] }).unwrap();
        assert_eq!(result.gcd, 12);
        assert_eq!(result.lcm, Some(0));
        assert!(calculate_gcd(&GcdInput { values: vec![0, 0] }).is_err());
        assert!(calculate_gcd(&GcdInput { values: vec![5] }).is_err());
    }

    #[test]
    fn test_lcm() {
        let result = calculate_lcm(&LcmInput { values: vec![4, 6, 10] }).unwrap();
        assert_eq!(result.lcm, 60);
        assert_eq!(result.gcd, 2);
        assert!(calculate_lcm(&LcmInput { values: vec![4, 0] }).is_err());
        assert!(calculate_lcm(&LcmInput { values: vec![u64::MAX, u64::MAX - 1] }).is_err());
    }

    #[test]
    fn test_lcd() {
        let fields = FieldMap::new().with("fractions", "1/4, 5/6, 2/9");
        let input = LcdInput::from_fields(&fields).unwrap();
        let result = calculate_lcd(&input).unwrap();
        assert_eq!(result.lcd, 36);
        assert_eq!(result.equivalents[0], Fraction { numerator: 9, denominator: 36 });
        assert_eq!(result.equivalents[1], Fraction { numerator: 30, denominator: 36 });
        assert_eq!(result.equivalents[2], Fraction { numerator: 8, denominator: 36 });
    }

    #[test]
    fn test_lcd_rejects_zero_denominator_from_json() {
        let input: LcdInput =
            serde_json::from_str(r#"{"fractions":[{"numerator":1,"denominator":0},{"numerator":1,"denominator":2}]}"#)
                .unwrap();
        assert!(calculate_lcd(&input).is_err());
    }

    #[test]
    fn test_lcd_rejects_min_denominator() {
        let input = LcdInput {
            fractions: vec![
                Fraction { numerator: 1, denominator: 2 },
                Fraction { numerator: 1, denominator: i64::MIN },
            ],
        };
        let err = calculate_lcd(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("fractions"));
    }
}
