//! # Exact Arithmetic Utilities
//!
//! The small set of pure functions every number-oriented calculator shares.
//! Each lives here once; calculators in [`crate::calculations`] only validate
//! inputs and shape results around them.
//!
//! ## Modules
//!
//! - [`integer`] - `gcd`, `lcm` and their list folds
//! - [`fraction`] - exact fractions: simplify, compare, arithmetic
//! - [`combinatorics`] - factorial, nCr, nPr with arbitrary precision
//! - [`positional`] - radix conversion (binary, octal, hex, ...)
//! - [`roman`] - Roman numerals, 1..=3999
//! - [`statistics`] - mean, median, variance, standard deviation, weighted and geometric means

pub mod combinatorics;
pub mod fraction;
pub mod integer;
pub mod positional;
pub mod roman;
pub mod statistics;

pub use combinatorics::{factorial, n_choose_r, n_permute_r, ExactCount, MAX_N};
pub use fraction::{common_denominator, Fraction, FractionOp};
pub use integer::{gcd, gcd_all, lcm, lcm_all};
pub use positional::{from_base, to_base};
pub use roman::{from_roman, roman_parts, to_roman, MAX_ROMAN, MIN_ROMAN};
pub use statistics::{
    geometric_mean, mean, median, standard_deviation, variance, weighted_average, Dispersion,
};
