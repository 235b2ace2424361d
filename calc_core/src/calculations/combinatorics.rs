//! # Combinations and Permutations
//!
//! ```text
//! nCr = n! / (r! (n − r)!)
//! nPr = n! / (n − r)!
//! ```
//!
//! Counts are exact arbitrary-precision integers; `n` is capped at
//! [`MAX_N`](crate::arithmetic::MAX_N).

use serde::{Deserialize, Serialize};

use crate::arithmetic::{n_choose_r, n_permute_r, ExactCount, MAX_N};
use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::settings::Settings;

/// Longest count printed in full by the summary; longer ones are abbreviated.
const SUMMARY_DIGITS: usize = 60;

/// Input for the combinatorics calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinatoricsInput {
    /// Set size
    pub n: u64,

    /// Selection size, `r <= n`
    pub r: u64,
}

impl CombinatoricsInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.n > MAX_N {
            return Err(CalcError::invalid_input(
                "n",
                self.n.to_string(),
                format!("n must be at most {}", MAX_N),
            ));
        }
        if self.r > self.n {
            return Err(CalcError::invalid_input(
                "r",
                self.r.to_string(),
                format!("r cannot exceed n ({})", self.n),
            ));
        }
        Ok(())
    }
}

impl FromFields for CombinatoricsInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(CombinatoricsInput {
            n: fields.require_u64("n")?,
            r: fields.require_u64("r")?,
        })
    }
}

/// Results from the combinatorics calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinatoricsResult {
    pub n: u64,
    pub r: u64,

    /// nCr, unordered selections
    pub combinations: ExactCount,

    /// nPr, ordered selections
    pub permutations: ExactCount,
}

fn abbreviate(count: &ExactCount, fmt: &NumberFormat) -> String {
    let digits = count.digits();
    if digits <= SUMMARY_DIGITS {
        return fmt.integer(count);
    }
    let text = count.to_string();
    format!("{}…{} ({} digits)", &text[..12], &text[digits - 12..], digits)
}

impl CombinatoricsResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("C({}, {}) = {}", self.n, self.r, abbreviate(&self.combinations, &fmt)),
            format!("P({}, {}) = {}", self.n, self.r, abbreviate(&self.permutations, &fmt)),
        ]
    }
}

/// Count combinations and permutations of `r` items from `n`.
pub fn calculate(input: &CombinatoricsInput) -> CalcResult<CombinatoricsResult> {
    input.validate()?;
    Ok(CombinatoricsResult {
        n: input.n,
        r: input.r,
        combinations: n_choose_r(input.n, input.r)?,
        permutations: n_permute_r(input.n, input.r)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_choose_two() {
        let result = calculate(&CombinatoricsInput { n: 5, r: 2 }).unwrap();
        assert_eq!(result.combinations.to_u64(), Some(10));
        assert_eq!(result.permutations.to_u64(), Some(20));
    }

    #[test]
    fn test_edges() {
        let result = calculate(&CombinatoricsInput { n: 0, r: 0 }).unwrap();
        assert_eq!(result.combinations.to_u64(), Some(1));
        assert_eq!(result.permutations.to_u64(), Some(1));

        let err = calculate(&CombinatoricsInput { n: 3, r: 4 }).unwrap_err();
        assert_eq!(err.field(), Some("r"));
        let err = calculate(&CombinatoricsInput { n: MAX_N + 1, r: 1 }).unwrap_err();
        assert_eq!(err.field(), Some("n"));
    }

    #[test]
    fn test_large_counts_are_exact_and_abbreviated() {
        let result = calculate(&CombinatoricsInput { n: 100, r: 50 }).unwrap();
        assert_eq!(
            result.combinations.to_string(),
            "100891344545564193334812497256"
        );
        let big = calculate(&CombinatoricsInput { n: 500, r: 250 }).unwrap();
        let lines = big.summary(&Settings::default());
        assert!(lines[1].contains("digits"));
    }

    #[test]
    fn test_counts_serialize_as_strings() {
        let result = calculate(&CombinatoricsInput { n: 5, r: 2 }).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["combinations"], "10");
        assert_eq!(json["permutations"], "20");
    }
}
