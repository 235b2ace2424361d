//! # Calculators
//!
//! One module per calculator family. Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable), with `validate()` and a
//!   [`FromFields`](crate::fields::FromFields) impl for raw form fields
//! - `*Result` - Calculation results (JSON-serializable), with `summary()` for
//!   display
//! - a pure function `fn(&Input) -> CalcResult<Result>` that validates first
//!   and never returns a partially filled result
//!
//! ## Available Calculations
//!
//! - [`asphalt`], [`concrete`] - construction material estimates
//! - [`divisors`] - GCD, LCM, least common denominator
//! - [`fractions`] - simplify, compare, fraction arithmetic
//! - [`combinatorics`] - nCr and nPr
//! - [`long_multiplication`] - step-by-step multiplication
//! - [`roman`], [`number_base`] - numeral systems
//! - [`statistics`] - standard deviation, mean, weighted average
//! - [`geometry`] - rectangle, trapezoid, cylinder
//! - [`finance`] - VAT, simple and compound interest
//! - [`health`] - BMI, TDEE
//! - [`trigonometry`] - inverse trigonometric functions
//! - [`conversion`] - length, time, date difference
//! - [`random`] - random integers
//!
//! [`Calculation`] wraps every input type so that heterogeneous calculations
//! can be stored together (see [`crate::worksheet`]) and dispatched by
//! [`Calculation::evaluate`].

pub mod asphalt;
pub mod combinatorics;
pub mod concrete;
pub mod conversion;
pub mod divisors;
pub mod finance;
pub mod fractions;
pub mod geometry;
pub mod health;
pub mod long_multiplication;
pub mod number_base;
pub mod random;
pub mod roman;
pub mod statistics;
pub mod trigonometry;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::settings::Settings;

// Re-export commonly used types
pub use asphalt::{AsphaltInput, AsphaltResult};
pub use combinatorics::{CombinatoricsInput, CombinatoricsResult};
pub use concrete::{ConcreteInput, ConcreteResult};
pub use conversion::{
    DateDifferenceInput, DateDifferenceResult, LengthConversionInput, LengthConversionResult,
    TimeConversionInput, TimeConversionResult,
};
pub use divisors::{GcdInput, GcdResult, LcdInput, LcdResult, LcmInput, LcmResult};
pub use finance::{
    CompoundInterestInput, CompoundInterestResult, SimpleInterestInput, SimpleInterestResult,
    VatInput, VatResult,
};
pub use fractions::{
    CompareFractionsInput, CompareFractionsResult, FractionArithmeticInput,
    FractionArithmeticResult, SimplifyFractionInput, SimplifyFractionResult,
};
pub use geometry::{
    CylinderInput, CylinderResult, RectangleInput, RectangleResult, TrapezoidInput,
    TrapezoidResult,
};
pub use health::{BmiInput, BmiResult, TdeeInput, TdeeResult};
pub use long_multiplication::{LongMultiplicationInput, LongMultiplicationResult};
pub use number_base::{NumberBaseInput, NumberBaseResult};
pub use random::{RandomInput, RandomResult};
pub use roman::{RomanInput, RomanResult};
pub use statistics::{
    MeanInput, MeanResult, StandardDeviationInput, StandardDeviationResult, WeightedAverageInput,
    WeightedAverageResult,
};
pub use trigonometry::{InverseTrigInput, InverseTrigResult};

/// Reject zero, negative and non-finite values.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

/// Reject negative and non-finite values.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value cannot be negative"));
    }
    Ok(())
}

/// Generates [`Calculation`], [`CalculationOutput`] and their dispatch from
/// one table of `Variant(Input) => Output, function`.
macro_rules! calculations {
    ($( $(#[$doc:meta])* $variant:ident($input:ty) => $output:ty, $func:path; )*) => {
        /// Enum wrapper for all calculation inputs.
        ///
        /// Serialized with a `type` tag:
        ///
        /// ```json
        /// { "type": "Gcd", "values": [48, 18] }
        /// ```
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "type")]
        pub enum Calculation {
            $( $(#[$doc])* $variant($input), )*
        }

        /// Enum wrapper for all calculation results.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "type", content = "result")]
        pub enum CalculationOutput {
            $( $variant($output), )*
        }

        impl Calculation {
            /// Get the calculation type as a string
            pub fn calc_type(&self) -> &'static str {
                match self {
                    $( Calculation::$variant(_) => stringify!($variant), )*
                }
            }

            /// Catalog entry for this calculation
            pub fn kind(&self) -> CalculatorKind {
                match self {
                    $( Calculation::$variant(_) => CalculatorKind::$variant, )*
                }
            }

            /// Validate the wrapped input without computing anything.
            pub fn validate(&self) -> CalcResult<()> {
                match self {
                    $( Calculation::$variant(input) => input.validate(), )*
                }
            }

            fn dispatch(&self) -> CalcResult<CalculationOutput> {
                match self {
                    $( Calculation::$variant(input) => $func(input).map(CalculationOutput::$variant), )*
                }
            }
        }

        impl CalculationOutput {
            pub fn calc_type(&self) -> &'static str {
                match self {
                    $( CalculationOutput::$variant(_) => stringify!($variant), )*
                }
            }

            /// Human-readable result lines
            pub fn summary(&self, settings: &Settings) -> Vec<String> {
                match self {
                    $( CalculationOutput::$variant(result) => result.summary(settings), )*
                }
            }
        }
    };
}

calculations! {
    /// Asphalt paving estimate
    Asphalt(AsphaltInput) => AsphaltResult, asphalt::calculate;
    /// Concrete slab estimate
    Concrete(ConcreteInput) => ConcreteResult, concrete::calculate;
    /// Greatest common divisor
    Gcd(GcdInput) => GcdResult, divisors::calculate_gcd;
    /// Least common multiple
    Lcm(LcmInput) => LcmResult, divisors::calculate_lcm;
    /// Least common denominator
    Lcd(LcdInput) => LcdResult, divisors::calculate_lcd;
    SimplifyFraction(SimplifyFractionInput) => SimplifyFractionResult, fractions::simplify;
    CompareFractions(CompareFractionsInput) => CompareFractionsResult, fractions::compare;
    FractionArithmetic(FractionArithmeticInput) => FractionArithmeticResult, fractions::arithmetic;
    /// nCr and nPr
    Combinatorics(CombinatoricsInput) => CombinatoricsResult, combinatorics::calculate;
    LongMultiplication(LongMultiplicationInput) => LongMultiplicationResult, long_multiplication::calculate;
    Roman(RomanInput) => RomanResult, roman::calculate;
    NumberBase(NumberBaseInput) => NumberBaseResult, number_base::calculate;
    StandardDeviation(StandardDeviationInput) => StandardDeviationResult, statistics::standard_deviation;
    Mean(MeanInput) => MeanResult, statistics::mean;
    WeightedAverage(WeightedAverageInput) => WeightedAverageResult, statistics::weighted_average;
    Rectangle(RectangleInput) => RectangleResult, geometry::rectangle;
    Trapezoid(TrapezoidInput) => TrapezoidResult, geometry::trapezoid;
    Cylinder(CylinderInput) => CylinderResult, geometry::cylinder;
    Vat(VatInput) => VatResult, finance::vat;
    SimpleInterest(SimpleInterestInput) => SimpleInterestResult, finance::simple_interest;
    CompoundInterest(CompoundInterestInput) => CompoundInterestResult, finance::compound_interest;
    Bmi(BmiInput) => BmiResult, health::bmi;
    Tdee(TdeeInput) => TdeeResult, health::tdee;
    InverseTrig(InverseTrigInput) => InverseTrigResult, trigonometry::calculate;
    LengthConversion(LengthConversionInput) => LengthConversionResult, conversion::convert_length;
    TimeConversion(TimeConversionInput) => TimeConversionResult, conversion::convert_time;
    DateDifference(DateDifferenceInput) => DateDifferenceResult, conversion::date_difference;
    /// Random integers
    Random(RandomInput) => RandomResult, random::calculate;
}

impl Calculation {
    /// Run the calculation.
    pub fn evaluate(&self) -> CalcResult<CalculationOutput> {
        debug!(calc_type = self.calc_type(), "evaluating calculation");
        let result = self.dispatch();
        if let Err(e) = &result {
            warn!(calc_type = self.calc_type(), code = e.error_code(), "calculation rejected: {}", e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_json() {
        let calc: Calculation = serde_json::from_str(r#"{"type":"Gcd","values":[48,18]}"#).unwrap();
        assert_eq!(calc.calc_type(), "Gcd");
        assert_eq!(calc.kind(), CalculatorKind::Gcd);

        let output = calc.evaluate().unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["type"], "Gcd");
        assert_eq!(json["result"]["gcd"], 6);
    }

    #[test]
    fn test_dispatch_propagates_errors() {
        let calc = Calculation::Roman(RomanInput { value: "4000".to_string() });
        assert!(calc.validate().is_ok());
        let err = calc.evaluate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_output_summary() {
        let calc = Calculation::Combinatorics(CombinatoricsInput { n: 5, r: 2 });
        let lines = calc.evaluate().unwrap().summary(&Settings::default());
        assert_eq!(lines[0], "C(5, 2) = 10");
        assert_eq!(lines[1], "P(5, 2) = 20");
    }

    #[test]
    fn test_shared_guards() {
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", f64::NAN).is_err());
        assert!(require_non_negative("x", 0.0).is_ok());
        assert!(require_non_negative("x", -0.5).is_err());
    }
}
