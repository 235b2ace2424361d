//! # Roman Numeral Converter
//!
//! Converts in whichever direction the input calls for: a decimal number
//! becomes a numeral, a numeral becomes a decimal number. The breakdown lists
//! the symbols the numeral is built from, largest first.

use serde::{Deserialize, Serialize};

use crate::arithmetic::{from_roman, roman_parts, MAX_ROMAN, MIN_ROMAN};
use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::settings::Settings;

/// Input for the Roman numeral converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RomanInput {
    /// Either decimal digits (`1994`) or a numeral (`MCMXCIV`)
    pub value: String,
}

impl RomanInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.value.trim().is_empty() {
            return Err(CalcError::missing_field("value"));
        }
        Ok(())
    }

    fn is_decimal(&self) -> bool {
        self.value.trim().chars().all(|c| c.is_ascii_digit())
    }
}

impl FromFields for RomanInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(RomanInput {
            value: fields.require_str("value")?.to_string(),
        })
    }
}

/// Which way the conversion went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RomanDirection {
    ToRoman,
    FromRoman,
}

/// One symbol of the numeral and the value it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomanPart {
    pub symbol: String,
    pub value: u32,
}

/// Results from the Roman numeral converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RomanResult {
    pub direction: RomanDirection,
    pub arabic: u32,
    pub numeral: String,
    pub breakdown: Vec<RomanPart>,
}

impl RomanResult {
    pub fn summary(&self, _settings: &Settings) -> Vec<String> {
        let head = match self.direction {
            RomanDirection::ToRoman => format!("{} = {}", self.arabic, self.numeral),
            RomanDirection::FromRoman => format!("{} = {}", self.numeral, self.arabic),
        };
        let parts: Vec<String> = self
            .breakdown
            .iter()
            .map(|p| format!("{} ({})", p.symbol, p.value))
            .collect();
        vec![head, format!("Breakdown: {}", parts.join(" + "))]
    }
}

/// Convert between decimal and Roman numerals.
pub fn calculate(input: &RomanInput) -> CalcResult<RomanResult> {
    input.validate()?;
    let raw = input.value.trim();

    let (direction, arabic) = if input.is_decimal() {
        let arabic = raw.parse::<u32>().map_err(|_| {
            CalcError::invalid_input(
                "value",
                raw,
                format!("Roman numerals cover {} to {}", MIN_ROMAN, MAX_ROMAN),
            )
        })?;
        (RomanDirection::ToRoman, arabic)
    } else {
        (RomanDirection::FromRoman, from_roman(raw)?)
    };

    let parts = roman_parts(arabic)?;
    Ok(RomanResult {
        direction,
        arabic,
        numeral: parts.iter().map(|(symbol, _)| *symbol).collect(),
        breakdown: parts
            .into_iter()
            .map(|(symbol, value)| RomanPart {
                symbol: symbol.to_string(),
                value,
            })
            .collect(),
    })
}
