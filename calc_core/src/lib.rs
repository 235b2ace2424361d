//! # calc_core - Calculator Engine
//!
//! `calc_core` is the engine behind Reckon: a catalog of small, independent
//! calculators (construction estimates, fractions and divisors, numeral
//! systems, statistics, geometry, finance, health, converters, random
//! numbers). Every calculator takes a JSON-serializable input, validates it,
//! and returns a JSON-serializable result or a structured error.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Validate first**: No partially filled result is ever returned
//! - **JSON-First**: Inputs, results and errors implement Serialize/Deserialize
//! - **Exact where it matters**: Fractions, divisors and counts use integers
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::catalog::lookup;
//! use calc_core::fields::FieldMap;
//! use calc_core::settings::Settings;
//!
//! let settings = Settings::default();
//! let fields = FieldMap::parse_pairs(["values=48,18"]).unwrap();
//!
//! let calc = lookup("gcd").unwrap().build(&fields, &settings).unwrap();
//! let output = calc.evaluate().unwrap();
//! assert_eq!(output.summary(&settings)[0], "GCD(48, 18) = 6");
//! ```
//!
//! ## Modules
//!
//! - [`arithmetic`] - Exact integer utilities (gcd, fractions, counts, bases, Roman numerals)
//! - [`formulas`] - Closed-form geometry, finance and health expressions
//! - [`calculations`] - One module per calculator, plus the [`Calculation`] dispatch enum
//! - [`catalog`] - Calculator names, descriptions and field lists
//! - [`fields`] - Raw form fields and typed extraction
//! - [`worksheet`] - Labelled calculations evaluated into a report
//! - [`file_io`] - Atomic JSON saves and versioned loads
//! - [`settings`], [`format`] - Display preferences and number formatting
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod arithmetic;
pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod fields;
pub mod file_io;
pub mod format;
pub mod formulas;
pub mod settings;
pub mod units;
pub mod worksheet;

// Re-export commonly used types at crate root for convenience
pub use calculations::{Calculation, CalculationOutput};
pub use catalog::{lookup, CalculatorKind};
pub use errors::{CalcError, CalcResult};
pub use fields::{FieldMap, FromFields};
pub use file_io::{load_settings, load_worksheet, save_report, save_worksheet};
pub use settings::Settings;
pub use worksheet::{Report, Worksheet};
