//! # Error Types
//!
//! Structured error types for calc_core. Every calculator validates its inputs
//! before computing and reports problems through [`CalcError`], so callers (the
//! CLI, a web handler, a test) decide how to present them.
//!
//! The taxonomy follows what can go wrong with a form submission:
//!
//! - a required field is absent ([`CalcError::MissingField`])
//! - a field is present but does not parse as a number ([`CalcError::NotNumeric`])
//! - a value parses but is outside the calculator's domain ([`CalcError::InvalidInput`])
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_denominator(denominator: i64) -> CalcResult<()> {
//!     if denominator == 0 {
//!         return Err(CalcError::invalid_input(
//!             "denominator",
//!             denominator.to_string(),
//!             "Denominator cannot be zero",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_denominator(0).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is outside the calculator's domain
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A field could not be parsed as a number
    #[error("Field '{field}' is not a valid {expected}: '{value}'")]
    NotNumeric {
        field: String,
        value: String,
        expected: String,
    },

    /// No calculator is registered under this name
    #[error("Unknown calculator: {name}")]
    UnknownCalculator { name: String },

    /// Inputs were valid but the calculation could not produce a result
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a NotNumeric error
    pub fn not_numeric(field: impl Into<String>, value: impl Into<String>, expected: impl Into<String>) -> Self {
        CalcError::NotNumeric {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(name: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { name: name.into() }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by the caller's input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::NotNumeric { .. }
                | CalcError::UnknownCalculator { .. }
        )
    }

    /// The field this error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. }
            | CalcError::MissingField { field }
            | CalcError::NotNumeric { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::NotNumeric { .. } => "NOT_NUMERIC",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("r", "7", "r cannot exceed n");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("n").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::not_numeric("n", "abc", "integer").error_code(), "NOT_NUMERIC");
        assert_eq!(CalcError::unknown_calculator("nope").error_code(), "UNKNOWN_CALCULATOR");
    }

    #[test]
    fn test_input_errors_carry_field() {
        let error = CalcError::not_numeric("height_cm", "tall", "number");
        assert!(error.is_input_error());
        assert_eq!(error.field(), Some("height_cm"));

        let error = CalcError::file_error("open", "/tmp/x.json", "not found");
        assert!(!error.is_input_error());
        assert_eq!(error.field(), None);
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::not_numeric("value", "12a", "integer");
        assert_eq!(error.to_string(), "Field 'value' is not a valid integer: '12a'");
    }
}
