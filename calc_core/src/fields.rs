//! # Form Fields
//!
//! A calculator's raw input is a flat set of named string fields, the way a
//! form or a `key=value` command line delivers it. [`FieldMap`] holds those
//! strings and extracts typed values, reporting each failure with the error
//! kind that matches it:
//!
//! | Problem                             | Error                        |
//! |-------------------------------------|------------------------------|
//! | field absent or blank               | [`CalcError::MissingField`]  |
//! | present but not a number            | [`CalcError::NotNumeric`]    |
//! | number outside the calculator domain| [`CalcError::InvalidInput`]  |
//!
//! Domain checks belong to each calculator's `validate()`; this module only
//! handles presence and parseability (plus choice fields, whose domain is the
//! set of accepted words).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::fields::FieldMap;
//!
//! let fields = FieldMap::parse_pairs(["n=5", "r=2"]).unwrap();
//! assert_eq!(fields.require_u64("n").unwrap(), 5);
//! assert_eq!(fields.require_u64("k").unwrap_err().error_code(), "MISSING_FIELD");
//! ```

use std::collections::BTreeMap;

use crate::errors::{CalcError, CalcResult};

/// Named raw input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: BTreeMap<String, String>,
}

/// Construct a calculator input from raw fields.
pub trait FromFields: Sized {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self>;
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field (builder pattern)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a field
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Parse `key=value` pairs. Keys are trimmed and lowercased; a later pair
    /// with the same key replaces an earlier one.
    pub fn parse_pairs<I, S>(pairs: I) -> CalcResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = FieldMap::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                CalcError::invalid_input("fields", pair, "Expected key=value")
            })?;
            let key = key.trim().to_ascii_lowercase();
            if key.is_empty() {
                return Err(CalcError::invalid_input("fields", pair, "Field name is empty"));
            }
            map.insert(key, value.trim());
        }
        Ok(map)
    }

    /// Field names present
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Trimmed raw value; blank values count as absent.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn require_str(&self, name: &str) -> CalcResult<&str> {
        self.raw(name).ok_or_else(|| CalcError::missing_field(name))
    }

    pub fn require_f64(&self, name: &str) -> CalcResult<f64> {
        parse_f64(name, self.require_str(name)?)
    }

    pub fn optional_f64(&self, name: &str) -> CalcResult<Option<f64>> {
        self.raw(name).map(|v| parse_f64(name, v)).transpose()
    }

    /// Optional number with a default when absent
    pub fn f64_or(&self, name: &str, default: f64) -> CalcResult<f64> {
        Ok(self.optional_f64(name)?.unwrap_or(default))
    }

    pub fn require_u64(&self, name: &str) -> CalcResult<u64> {
        parse_u64(name, self.require_str(name)?)
    }

    pub fn optional_u64(&self, name: &str) -> CalcResult<Option<u64>> {
        self.raw(name).map(|v| parse_u64(name, v)).transpose()
    }

    pub fn require_i64(&self, name: &str) -> CalcResult<i64> {
        let raw = self.require_str(name)?;
        raw.parse::<i64>()
            .map_err(|_| CalcError::not_numeric(name, raw, "integer"))
    }

    pub fn require_u32(&self, name: &str) -> CalcResult<u32> {
        let value = self.require_u64(name)?;
        u32::try_from(value).map_err(|_| {
            CalcError::invalid_input(name, value.to_string(), "Value is too large")
        })
    }

    /// A list of numbers separated by commas, semicolons or whitespace.
    pub fn require_f64_list(&self, name: &str) -> CalcResult<Vec<f64>> {
        self.require_list(name)?
            .into_iter()
            .map(|item| parse_f64(name, item))
            .collect()
    }

    /// A list of non-negative integers separated by commas, semicolons or whitespace.
    pub fn require_u64_list(&self, name: &str) -> CalcResult<Vec<u64>> {
        self.require_list(name)?
            .into_iter()
            .map(|item| parse_u64(name, item))
            .collect()
    }

    /// Raw list items; at least one non-blank item is required.
    pub fn require_list(&self, name: &str) -> CalcResult<Vec<&str>> {
        let items: Vec<&str> = self
            .require_str(name)?
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        if items.is_empty() {
            return Err(CalcError::missing_field(name));
        }
        Ok(items)
    }

    /// Optional yes/no flag ("true", "yes", "1" / "false", "no", "0").
    pub fn optional_bool(&self, name: &str) -> CalcResult<Option<bool>> {
        self.raw(name)
            .map(|v| match v.to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "1" | "on" => Ok(true),
                "false" | "no" | "n" | "0" | "off" => Ok(false),
                _ => Err(CalcError::invalid_input(name, v, "Expected yes or no")),
            })
            .transpose()
    }

    /// A required field restricted to a set of words.
    pub fn require_choice<T>(
        &self,
        name: &str,
        parse: impl Fn(&str) -> Option<T>,
        expected: &str,
    ) -> CalcResult<T> {
        let raw = self.require_str(name)?;
        parse(raw).ok_or_else(|| {
            CalcError::invalid_input(name, raw, format!("Expected one of: {}", expected))
        })
    }

    /// An optional choice field with a default when absent.
    pub fn choice_or<T>(
        &self,
        name: &str,
        parse: impl Fn(&str) -> Option<T>,
        expected: &str,
        default: T,
    ) -> CalcResult<T> {
        match self.raw(name) {
            Some(_) => self.require_choice(name, parse, expected),
            None => Ok(default),
        }
    }
}

fn parse_f64(name: &str, raw: &str) -> CalcResult<f64> {
    // "inf" and "NaN" parse as f64 but are never meaningful form input
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CalcError::not_numeric(name, raw, "number")),
    }
}

fn parse_u64(name: &str, raw: &str) -> CalcResult<u64> {
    raw.parse::<u64>().map_err(|_| {
        if raw.parse::<i64>().is_ok() || raw.parse::<f64>().is_ok() {
            CalcError::invalid_input(name, raw, "Expected a non-negative whole number")
        } else {
            CalcError::not_numeric(name, raw, "whole number")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let fields = FieldMap::parse_pairs(["Length = 12.5", "width=3"]).unwrap();
        assert_eq!(fields.require_f64("length").unwrap(), 12.5);
        assert_eq!(fields.len(), 2);
        assert!(FieldMap::parse_pairs(["novalue"]).is_err());
        assert!(FieldMap::parse_pairs(["=3"]).is_err());
    }

    #[test]
    fn test_error_kinds() {
        let fields = FieldMap::new()
            .with("a", "abc")
            .with("b", "  ")
            .with("c", "-3")
            .with("d", "inf");
        assert_eq!(fields.require_f64("a").unwrap_err().error_code(), "NOT_NUMERIC");
        assert_eq!(fields.require_f64("b").unwrap_err().error_code(), "MISSING_FIELD");
        assert_eq!(fields.require_u64("c").unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(fields.require_f64("d").unwrap_err().error_code(), "NOT_NUMERIC");
        assert_eq!(fields.require_f64("zzz").unwrap_err().error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_lists() {
        let fields = FieldMap::new().with("values", "1, 2;3  4").with("bad", "1,x");
        assert_eq!(fields.require_f64_list("values").unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(fields.require_u64_list("values").unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(fields.require_f64_list("bad").unwrap_err().error_code(), "NOT_NUMERIC");
        let empty = FieldMap::new().with("values", ", ,");
        assert_eq!(empty.require_list("values").unwrap_err().error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_optional_and_choices() {
        let fields = FieldMap::new().with("unique", "yes").with("mode", "sideways");
        assert_eq!(fields.optional_bool("unique").unwrap(), Some(true));
        assert_eq!(fields.optional_bool("absent").unwrap(), None);
        assert_eq!(fields.f64_or("price", 0.0).unwrap(), 0.0);

        let parse = |s: &str| (s == "add").then_some(1);
        assert_eq!(fields.choice_or("absent", parse, "add", 7).unwrap(), 7);
        assert_eq!(
            fields.require_choice("mode", parse, "add").unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }
}
