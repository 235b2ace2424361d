//! # Closed-Form Formulas
//!
//! The single-expression formulas behind the geometry, finance and health
//! calculators. Functions here take already-validated numbers and never fail;
//! validation lives with the calculator inputs in [`crate::calculations`].
//!
//! ## Modules
//!
//! - [`geometry`] - rectangle, trapezoid, cylinder
//! - [`finance`] - VAT, simple and compound interest
//! - [`health`] - BMI, Mifflin-St Jeor BMR, TDEE
//!
//! ## Conventions
//!
//! - Rates are given in percent at the API boundary and converted here
//!   (`rate_percent / 100`).
//! - Angles are in radians unless a function name says otherwise.

pub mod finance;
pub mod geometry;
pub mod health;

pub use finance::{compound_interest_total, simple_interest, vat_add, vat_remove};
pub use geometry::{
    cylinder_lateral_area, cylinder_total_area, cylinder_volume, rectangle_area,
    rectangle_diagonal, rectangle_perimeter, trapezoid_area, trapezoid_median,
};
pub use health::{bmi, mifflin_st_jeor_bmr};
