//! # Inverse Trigonometric Functions
//!
//! arcsin, arccos and arctan of a value, in radians and degrees.
//!
//! | Function | Domain      | Range (radians) |
//! |----------|-------------|-----------------|
//! | asin     | [-1, 1]     | [-π/2, π/2]     |
//! | acos     | [-1, 1]     | [0, π]          |
//! | atan     | all reals   | (-π/2, π/2)     |

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InverseTrigFunction {
    Asin,
    Acos,
    Atan,
}

impl InverseTrigFunction {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asin" | "arcsin" | "sin-1" => Some(InverseTrigFunction::Asin),
            "acos" | "arccos" | "cos-1" => Some(InverseTrigFunction::Acos),
            "atan" | "arctan" | "tan-1" => Some(InverseTrigFunction::Atan),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InverseTrigFunction::Asin => "arcsin",
            InverseTrigFunction::Acos => "arccos",
            InverseTrigFunction::Atan => "arctan",
        }
    }

    fn apply(&self, x: f64) -> f64 {
        match self {
            InverseTrigFunction::Asin => x.asin(),
            InverseTrigFunction::Acos => x.acos(),
            InverseTrigFunction::Atan => x.atan(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InverseTrigInput {
    pub function: InverseTrigFunction,
    pub value: f64,
}

impl InverseTrigInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.value.is_finite() {
            return Err(CalcError::invalid_input("value", self.value.to_string(), "Value must be finite"));
        }
        let bounded = matches!(self.function, InverseTrigFunction::Asin | InverseTrigFunction::Acos);
        if bounded && !(-1.0..=1.0).contains(&self.value) {
            return Err(CalcError::invalid_input(
                "value",
                self.value.to_string(),
                format!("{} is only defined for values between -1 and 1", self.function.name()),
            ));
        }
        Ok(())
    }
}

impl FromFields for InverseTrigInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(InverseTrigInput {
            function: fields.require_choice("function", InverseTrigFunction::parse, "asin, acos, atan")?,
            value: fields.require_f64("value")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InverseTrigResult {
    pub function: InverseTrigFunction,
    pub value: f64,
    pub radians: f64,
    pub degrees: f64,
}

impl InverseTrigResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("{}({}) = {} rad", self.function.name(), fmt.number(self.value), fmt.number(self.radians)),
            format!("          = {}°", fmt.number(self.degrees)),
        ]
    }
}

pub fn calculate(input: &InverseTrigInput) -> CalcResult<InverseTrigResult> {
    input.validate()?;
    let radians = input.function.apply(input.value);
    Ok(InverseTrigResult {
        function: input.function,
        value: input.value,
        radians,
        degrees: radians.to_degrees(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(function: InverseTrigFunction, value: f64) -> CalcResult<InverseTrigResult> {
        calculate(&InverseTrigInput { function, value })
    }

    #[test]
    fn test_known_angles() {
        assert!((eval(InverseTrigFunction::Asin, 0.5).unwrap().degrees - 30.0).abs() < 1e-9);
        assert!((eval(InverseTrigFunction::Acos, 0.0).unwrap().degrees - 90.0).abs() < 1e-9);
        assert!((eval(InverseTrigFunction::Atan, 1.0).unwrap().degrees - 45.0).abs() < 1e-9);
        assert!((eval(InverseTrigFunction::Acos, -1.0).unwrap().radians - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_domain() {
        assert_eq!(eval(InverseTrigFunction::Asin, 1.5).unwrap_err().field(), Some("value"));
        assert!(eval(InverseTrigFunction::Acos, -1.0001).is_err());
        assert!(eval(InverseTrigFunction::Atan, 1e6).is_ok());
    }
}
