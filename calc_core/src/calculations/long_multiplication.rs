//! # Long Multiplication Steps
//!
//! Works a multiplication the way it is done on paper: the multiplicand is
//! multiplied by each digit of the multiplier (right to left), each partial
//! product is shifted by its place value, and the shifted partials are added.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::long_multiplication::{calculate, LongMultiplicationInput};
//!
//! let result = calculate(&LongMultiplicationInput { multiplicand: 123, multiplier: 45 }).unwrap();
//! assert_eq!(result.product, 5535);
//! assert_eq!(result.steps[0].partial_product, 615);
//! assert_eq!(result.steps[1].shifted, 4920);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::settings::Settings;

/// Input for the long multiplication calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongMultiplicationInput {
    pub multiplicand: u64,
    pub multiplier: u64,
}

impl LongMultiplicationInput {
    // Any pair of u64 values has a product that fits in u128
    pub fn validate(&self) -> CalcResult<()> {
        Ok(())
    }
}

impl FromFields for LongMultiplicationInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(LongMultiplicationInput {
            multiplicand: fields.require_u64("multiplicand")?,
            multiplier: fields.require_u64("multiplier")?,
        })
    }
}

/// One row of the working: multiplicand × one multiplier digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialStep {
    /// Multiplier digit used in this row
    pub digit: u8,

    /// Power of ten of the digit's position (0 = ones)
    pub place: u32,

    /// multiplicand × digit
    pub partial_product: u128,

    /// partial_product × 10^place
    pub shifted: u128,

    /// Carry produced at each multiplicand digit, ones digit first
    pub carries: Vec<u8>,
}

/// Results from the long multiplication calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongMultiplicationResult {
    pub multiplicand: u64,
    pub multiplier: u64,

    /// One step per multiplier digit, ones digit first
    pub steps: Vec<PartialStep>,

    pub product: u128,

    /// Right-aligned paper layout
    pub layout: Vec<String>,
}

impl LongMultiplicationResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        let mut lines = self.layout.clone();
        lines.push(format!(
            "{} × {} = {}",
            fmt.integer(self.multiplicand),
            fmt.integer(self.multiplier),
            fmt.integer(self.product)
        ));
        lines
    }
}

fn decimal_digits(value: u64) -> Vec<u8> {
    // Ones digit first
    value
        .to_string()
        .bytes()
        .rev()
        .map(|b| b - b'0')
        .collect()
}

fn partial_step(multiplicand: u64, digit: u8, place: u32) -> CalcResult<PartialStep> {
    let mut carries = Vec::new();
    let mut carry: u32 = 0;
    for d in decimal_digits(multiplicand) {
        let cell = d as u32 * digit as u32 + carry;
        carry = cell / 10;
        carries.push(carry as u8);
    }
    let partial_product = multiplicand as u128 * digit as u128;
    let shifted = 10u128
        .checked_pow(place)
        .and_then(|scale| partial_product.checked_mul(scale))
        .ok_or_else(|| {
            CalcError::calculation_failed("LongMultiplication", "Shifted partial product overflow")
        })?;
    Ok(PartialStep {
        digit,
        place,
        partial_product,
        shifted,
        carries,
    })
}

fn layout(input: &LongMultiplicationInput, steps: &[PartialStep], product: u128) -> Vec<String> {
    let top = input.multiplicand.to_string();
    let bottom = format!("× {}", input.multiplier);
    let width = [top.len(), bottom.chars().count(), product.to_string().len()]
        .into_iter()
        .chain(steps.iter().map(|s| s.shifted.to_string().len()))
        .max()
        .unwrap_or(1);
    let rule = "-".repeat(width);

    let mut lines = vec![format!("{:>width$}", top), format!("{:>width$}", bottom), rule.clone()];
    if steps.len() > 1 {
        lines.extend(steps.iter().map(|s| format!("{:>width$}", s.shifted)));
        lines.push(rule);
    }
    lines.push(format!("{:>width$}", product));
    lines
}

/// Multiply two non-negative integers showing every partial product.
pub fn calculate(input: &LongMultiplicationInput) -> CalcResult<LongMultiplicationResult> {
    input.validate()?;
    let steps = decimal_digits(input.multiplier)
        .into_iter()
        .enumerate()
        .map(|(place, digit)| partial_step(input.multiplicand, digit, place as u32))
        .collect::<CalcResult<Vec<_>>>()?;
    let product = input.multiplicand as u128 * input.multiplier as u128;
    let layout = layout(input, &steps, product);
    Ok(LongMultiplicationResult {
        multiplicand: input.multiplicand,
        multiplier: input.multiplier,
        steps,
        product,
        layout,
    })
}
