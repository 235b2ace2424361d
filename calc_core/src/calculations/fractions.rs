//! # Fraction Calculations
//!
//! - **Simplify**: lowest terms, mixed-number form and decimal value.
//! - **Compare**: exact ordering of two fractions by cross-multiplication, with
//!   both rewritten over their least common denominator.
//! - **Arithmetic**: add, subtract, multiply or divide two fractions.
//!
//! Fractions are entered as `a/b` (or a bare integer) in field form, and as
//! `{"numerator": a, "denominator": b}` in JSON.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::arithmetic::Fraction;
//! use calc_core::calculations::fractions::{compare, CompareFractionsInput, Relation};
//!
//! let input = CompareFractionsInput {
//!     first: Fraction { numerator: 3, denominator: 4 },
//!     second: Fraction { numerator: 5, denominator: 7 },
//! };
//! let result = compare(&input).unwrap();
//! assert_eq!(result.relation, Relation::GreaterThan);
//! assert_eq!(result.common_denominator, 28);
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::arithmetic::{common_denominator, gcd, Fraction, FractionOp};
use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::settings::Settings;

fn mixed_text(fraction: &Fraction) -> CalcResult<String> {
    let (whole, rest) = fraction.mixed()?;
    if rest.numerator == 0 {
        return Ok(whole.to_string());
    }
    if whole == 0 {
        // Keep the sign on a proper negative fraction: -1/3, not 0 1/3
        return Ok(fraction.simplified()?.to_string());
    }
    Ok(format!("{} {}", whole, rest))
}

// ============================================================================
// Simplify
// ============================================================================

/// Input for the simplify calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifyFractionInput {
    pub fraction: Fraction,
}

impl SimplifyFractionInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.fraction.check("fraction")
    }
}

impl FromFields for SimplifyFractionInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        let fraction = match fields.raw("fraction") {
            Some(raw) => Fraction::parse("fraction", raw)?,
            None => Fraction {
                numerator: fields.require_i64("numerator")?,
                denominator: fields.require_i64("denominator")?,
            },
        };
        Ok(SimplifyFractionInput { fraction })
    }
}

/// Results from the simplify calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifyFractionResult {
    pub original: Fraction,
    pub simplified: Fraction,

    /// Common factor divided out
    pub gcd: u64,

    /// Mixed-number rendering, e.g. "2 1/3"
    pub mixed: String,

    pub decimal: f64,
}

impl SimplifyFractionResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("{} = {}", self.original, self.simplified),
            format!("Common factor: {}", self.gcd),
            format!("Mixed number:  {}", self.mixed),
            format!("Decimal:       {}", fmt.number(self.decimal)),
        ]
    }
}

/// Reduce a fraction to lowest terms.
pub fn simplify(input: &SimplifyFractionInput) -> CalcResult<SimplifyFractionResult> {
    input.validate()?;
    let f = input.fraction;
    let simplified = f.simplified()?;
    Ok(SimplifyFractionResult {
        original: f,
        simplified,
        gcd: gcd(f.numerator.unsigned_abs(), f.denominator.unsigned_abs()),
        mixed: mixed_text(&simplified)?,
        decimal: simplified.to_f64(),
    })
}

// ============================================================================
// Compare
// ============================================================================

/// Ordering between two values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    LessThan,
    Equal,
    GreaterThan,
}

impl Relation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::LessThan => "<",
            Relation::Equal => "=",
            Relation::GreaterThan => ">",
        }
    }
}

impl From<Ordering> for Relation {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Relation::LessThan,
            Ordering::Equal => Relation::Equal,
            Ordering::Greater => Relation::GreaterThan,
        }
    }
}

/// Input for the compare calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareFractionsInput {
    pub first: Fraction,
    pub second: Fraction,
}

impl CompareFractionsInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.first.check("first")?;
        self.second.check("second")
    }
}

impl FromFields for CompareFractionsInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(CompareFractionsInput {
            first: Fraction::parse("first", fields.require_str("first")?)?,
            second: Fraction::parse("second", fields.require_str("second")?)?,
        })
    }
}

/// Results from the compare calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareFractionsResult {
    pub first: Fraction,
    pub second: Fraction,

    /// `first <relation> second`
    pub relation: Relation,

    pub common_denominator: i64,
    pub first_equivalent: Fraction,
    pub second_equivalent: Fraction,
    pub first_decimal: f64,
    pub second_decimal: f64,
}

impl CompareFractionsResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("{} {} {}", self.first, self.relation.symbol(), self.second),
            format!(
                "Over a common denominator: {} {} {}",
                self.first_equivalent,
                self.relation.symbol(),
                self.second_equivalent
            ),
            format!(
                "Decimal: {} vs {}",
                fmt.number(self.first_decimal),
                fmt.number(self.second_decimal)
            ),
        ]
    }
}

/// Compare two fractions exactly.
pub fn compare(input: &CompareFractionsInput) -> CalcResult<CompareFractionsResult> {
    input.validate()?;
    let overflow = || {
        CalcError::calculation_failed(
            "FractionCompare",
            "Common denominator exceeds the 64-bit integer range",
        )
    };
    let lcd = common_denominator(&[input.first, input.second]).ok_or_else(overflow)?;
    Ok(CompareFractionsResult {
        first: input.first,
        second: input.second,
        relation: input.first.compare(&input.second).into(),
        common_denominator: lcd,
        first_equivalent: input.first.with_denominator(lcd).ok_or_else(overflow)?,
        second_equivalent: input.second.with_denominator(lcd).ok_or_else(overflow)?,
        first_decimal: input.first.to_f64(),
        second_decimal: input.second.to_f64(),
    })
}

// ============================================================================
// Arithmetic
// ============================================================================

/// Input for the fraction arithmetic calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionArithmeticInput {
    pub first: Fraction,
    pub op: FractionOp,
    pub second: Fraction,
}

impl FractionArithmeticInput {
    pub fn validate(&self) -> CalcResult<()> {
        self.first.check("first")?;
        self.second.check("second")
    }
}

impl FromFields for FractionArithmeticInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(FractionArithmeticInput {
            first: Fraction::parse("first", fields.require_str("first")?)?,
            op: fields.require_choice("op", FractionOp::parse, "add, subtract, multiply, divide")?,
            second: Fraction::parse("second", fields.require_str("second")?)?,
        })
    }
}

/// Results from the fraction arithmetic calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionArithmeticResult {
    pub first: Fraction,
    pub op: FractionOp,
    pub second: Fraction,

    /// Simplified result
    pub result: Fraction,
    pub mixed: String,
    pub decimal: f64,
}

impl FractionArithmeticResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("{} {} {} = {}", self.first, self.op.symbol(), self.second, self.result),
            format!("Mixed number: {}", self.mixed),
            format!("Decimal:      {}", fmt.number(self.decimal)),
        ]
    }
}

/// Add, subtract, multiply or divide two fractions.
pub fn arithmetic(input: &FractionArithmeticInput) -> CalcResult<FractionArithmeticResult> {
    input.validate()?;
    let result = input.first.apply(input.op, &input.second)?;
    Ok(FractionArithmeticResult {
        first: input.first,
        op: input.op,
        second: input.second,
        result,
        mixed: mixed_text(&result)?,
        decimal: result.to_f64(),
    })
}
