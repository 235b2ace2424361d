//! # Number Base Converter
//!
//! Reads a value written in binary, octal, decimal or hexadecimal and renders
//! it in all four. A `0b`, `0o` or `0x` prefix is accepted when it agrees with
//! the stated input base.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::number_base::{calculate, Base, NumberBaseInput};
//!
//! let input = NumberBaseInput { value: "255".to_string(), from: Base::Decimal };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.number.hexadecimal, "FF");
//! assert_eq!(result.number.binary, "11111111");
//! ```

use serde::{Deserialize, Serialize};

use crate::arithmetic::{from_base, to_base};
use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::settings::Settings;

/// Supported input bases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

impl Base {
    pub fn radix(&self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    /// Literal prefix, if the base has one
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Base::Binary => Some("0b"),
            Base::Octal => Some("0o"),
            Base::Decimal => None,
            Base::Hexadecimal => Some("0x"),
        }
    }

    /// Parse a base name or radix ("hex", "16", "binary", "2", ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "2" => Some(Base::Binary),
            "octal" | "oct" | "8" => Some(Base::Octal),
            "decimal" | "dec" | "10" => Some(Base::Decimal),
            "hexadecimal" | "hex" | "16" => Some(Base::Hexadecimal),
            _ => None,
        }
    }
}

/// Input for the number base converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberBaseInput {
    pub value: String,

    #[serde(default)]
    pub from: Base,
}

impl NumberBaseInput {
    pub fn validate(&self) -> CalcResult<()> {
        if self.value.trim().is_empty() {
            return Err(CalcError::missing_field("value"));
        }
        Ok(())
    }

    /// Digits with any matching prefix removed.
    fn digits(&self) -> CalcResult<&str> {
        let trimmed = self.value.trim();
        let lower = trimmed.to_ascii_lowercase();
        if let Some(prefix) = self.from.prefix() {
            if lower.starts_with(prefix) {
                return Ok(&trimmed[prefix.len()..]);
            }
        }
        // "0b1" is itself a hexadecimal number
        if self.from == Base::Hexadecimal {
            return Ok(trimmed);
        }
        for other in ["0b", "0o", "0x"] {
            if lower.starts_with(other) {
                return Err(CalcError::invalid_input(
                    "value",
                    trimmed,
                    format!("Prefix {} does not match base {}", other, self.from.radix()),
                ));
            }
        }
        Ok(trimmed)
    }
}

impl FromFields for NumberBaseInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(NumberBaseInput {
            value: fields.require_str("value")?.to_string(),
            from: fields.choice_or("from", Base::parse, "binary, octal, decimal, hexadecimal", Base::Decimal)?,
        })
    }
}

/// One value rendered in the four common bases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseNumber {
    pub decimal: u64,
    pub hexadecimal: String,
    pub binary: String,
    pub octal: String,
}

impl BaseNumber {
    pub fn new(value: u64) -> CalcResult<Self> {
        Ok(BaseNumber {
            decimal: value,
            hexadecimal: to_base(value, 16)?,
            binary: to_base(value, 2)?,
            octal: to_base(value, 8)?,
        })
    }
}

/// Results from the number base converter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberBaseResult {
    pub from: Base,
    pub number: BaseNumber,
}

impl NumberBaseResult {
    pub fn summary(&self, _settings: &Settings) -> Vec<String> {
        vec![
            format!("Decimal:     {}", self.number.decimal),
            format!("Hexadecimal: {}", self.number.hexadecimal),
            format!("Binary:      {}", self.number.binary),
            format!("Octal:       {}", self.number.octal),
        ]
    }
}

/// Convert a value to decimal, hexadecimal, binary and octal.
pub fn calculate(input: &NumberBaseInput) -> CalcResult<NumberBaseResult> {
    input.validate()?;
    let value = from_base(input.digits()?, input.from.radix())?;
    Ok(NumberBaseResult {
        from: input.from,
        number: BaseNumber::new(value)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(value: &str, from: Base) -> CalcResult<NumberBaseResult> {
        calculate(&NumberBaseInput { value: value.to_string(), from })
    }

    #[test]
    fn test_hex_round_trip() {
        let result = convert("FF", Base::Hexadecimal).unwrap();
        assert_eq!(result.number.decimal, 255);
        assert_eq!(result.number.octal, "377");
        assert_eq!(convert("0xff", Base::Hexadecimal).unwrap().number.decimal, 255);
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(convert("0b1010", Base::Binary).unwrap().number.decimal, 10);
        assert_eq!(convert("0o17", Base::Octal).unwrap().number.decimal, 15);
        assert!(convert("0x10", Base::Decimal).is_err());
        assert!(convert("0b10", Base::Octal).is_err());
        // "0b1" is a valid hexadecimal number on its own
        assert_eq!(convert("0b1", Base::Hexadecimal).unwrap().number.decimal, 0xB1);
    }

    #[test]
    fn test_invalid_digits_and_overflow() {
        assert_eq!(convert("12", Base::Binary).unwrap_err().error_code(), "NOT_NUMERIC");
        assert!(convert("18446744073709551616", Base::Decimal).is_err());
        assert_eq!(
            convert("18446744073709551615", Base::Decimal).unwrap().number.hexadecimal,
            "FFFFFFFFFFFFFFFF"
        );
    }

    #[test]
    fn test_from_fields_parses_base_names() {
        let fields = FieldMap::parse_pairs(["value=777", "from=8"]).unwrap();
        let input = NumberBaseInput::from_fields(&fields).unwrap();
        assert_eq!(input.from, Base::Octal);
        assert_eq!(calculate(&input).unwrap().number.decimal, 511);
    }
}
