//! # Calculator Catalog
//!
//! Every calculator by name: a stable slug, a one-line description, the
//! formula it applies and the fields it reads. [`CalculatorKind::build`]
//! turns raw fields into a typed [`Calculation`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::catalog::CalculatorKind;
//! use calc_core::fields::FieldMap;
//! use calc_core::settings::Settings;
//!
//! let kind = CalculatorKind::parse("gcd").unwrap();
//! let fields = FieldMap::parse_pairs(["values=48,18"]).unwrap();
//! let calc = kind.build(&fields, &Settings::default()).unwrap();
//! assert_eq!(calc.calc_type(), "Gcd");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::*;
use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::settings::Settings;
use crate::units::UnitSystem;

/// One input field of a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

const fn req(name: &'static str, description: &'static str) -> FieldSpec {
    FieldSpec { name, required: true, description }
}

const fn opt(name: &'static str, description: &'static str) -> FieldSpec {
    FieldSpec { name, required: false, description }
}

const UNITS: FieldSpec = opt("units", "imperial or metric (default from settings)");

/// Every calculator in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorKind {
    Asphalt,
    Concrete,
    Gcd,
    Lcm,
    Lcd,
    SimplifyFraction,
    CompareFractions,
    FractionArithmetic,
    Combinatorics,
    LongMultiplication,
    Roman,
    NumberBase,
    StandardDeviation,
    Mean,
    WeightedAverage,
    Rectangle,
    Trapezoid,
    Cylinder,
    Vat,
    SimpleInterest,
    CompoundInterest,
    Bmi,
    Tdee,
    InverseTrig,
    LengthConversion,
    TimeConversion,
    DateDifference,
    Random,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 28] = [
        CalculatorKind::Asphalt,
        CalculatorKind::Concrete,
        CalculatorKind::Gcd,
        CalculatorKind::Lcm,
        CalculatorKind::Lcd,
        CalculatorKind::SimplifyFraction,
        CalculatorKind::CompareFractions,
        CalculatorKind::FractionArithmetic,
        CalculatorKind::Combinatorics,
        CalculatorKind::LongMultiplication,
        CalculatorKind::Roman,
        CalculatorKind::NumberBase,
        CalculatorKind::StandardDeviation,
        CalculatorKind::Mean,
        CalculatorKind::WeightedAverage,
        CalculatorKind::Rectangle,
        CalculatorKind::Trapezoid,
        CalculatorKind::Cylinder,
        CalculatorKind::Vat,
        CalculatorKind::SimpleInterest,
        CalculatorKind::CompoundInterest,
        CalculatorKind::Bmi,
        CalculatorKind::Tdee,
        CalculatorKind::InverseTrig,
        CalculatorKind::LengthConversion,
        CalculatorKind::TimeConversion,
        CalculatorKind::DateDifference,
        CalculatorKind::Random,
    ];

    /// Command-line name
    pub fn slug(&self) -> &'static str {
        match self {
            CalculatorKind::Asphalt => "asphalt",
            CalculatorKind::Concrete => "concrete",
            CalculatorKind::Gcd => "gcd",
            CalculatorKind::Lcm => "lcm",
            CalculatorKind::Lcd => "lcd",
            CalculatorKind::SimplifyFraction => "simplify-fraction",
            CalculatorKind::CompareFractions => "compare-fractions",
            CalculatorKind::FractionArithmetic => "fraction-arithmetic",
            CalculatorKind::Combinatorics => "combinations",
            CalculatorKind::LongMultiplication => "long-multiplication",
            CalculatorKind::Roman => "roman",
            CalculatorKind::NumberBase => "number-base",
            CalculatorKind::StandardDeviation => "standard-deviation",
            CalculatorKind::Mean => "mean",
            CalculatorKind::WeightedAverage => "weighted-average",
            CalculatorKind::Rectangle => "rectangle",
            CalculatorKind::Trapezoid => "trapezoid",
            CalculatorKind::Cylinder => "cylinder",
            CalculatorKind::Vat => "vat",
            CalculatorKind::SimpleInterest => "simple-interest",
            CalculatorKind::CompoundInterest => "compound-interest",
            CalculatorKind::Bmi => "bmi",
            CalculatorKind::Tdee => "tdee",
            CalculatorKind::InverseTrig => "inverse-trig",
            CalculatorKind::LengthConversion => "length",
            CalculatorKind::TimeConversion => "time",
            CalculatorKind::DateDifference => "date-difference",
            CalculatorKind::Random => "random",
        }
    }

    /// Look up a calculator by slug or common alias (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace('_', "-");
        let alias = match name.as_str() {
            "gcf" | "hcf" => Some(CalculatorKind::Gcd),
            "permutations" | "ncr" | "npr" => Some(CalculatorKind::Combinatorics),
            "sd" | "stddev" => Some(CalculatorKind::StandardDeviation),
            "average" => Some(CalculatorKind::Mean),
            "calories" => Some(CalculatorKind::Tdee),
            _ => None,
        };
        alias.or_else(|| Self::ALL.into_iter().find(|k| k.slug() == name))
    }

    pub fn title(&self) -> &'static str {
        match self {
            CalculatorKind::Asphalt => "Asphalt Calculator",
            CalculatorKind::Concrete => "Concrete Slab Calculator",
            CalculatorKind::Gcd => "GCD / GCF / HCF Calculator",
            CalculatorKind::Lcm => "LCM Calculator",
            CalculatorKind::Lcd => "Least Common Denominator",
            CalculatorKind::SimplifyFraction => "Simplify Fractions",
            CalculatorKind::CompareFractions => "Compare Fractions",
            CalculatorKind::FractionArithmetic => "Fraction Calculator",
            CalculatorKind::Combinatorics => "Combinations and Permutations",
            CalculatorKind::LongMultiplication => "Long Multiplication",
            CalculatorKind::Roman => "Roman Numeral Converter",
            CalculatorKind::NumberBase => "Number Base Converter",
            CalculatorKind::StandardDeviation => "Standard Deviation",
            CalculatorKind::Mean => "Mean, Median and Range",
            CalculatorKind::WeightedAverage => "Weighted Average",
            CalculatorKind::Rectangle => "Rectangle Calculator",
            CalculatorKind::Trapezoid => "Trapezoid Calculator",
            CalculatorKind::Cylinder => "Cylinder Calculator",
            CalculatorKind::Vat => "VAT Calculator",
            CalculatorKind::SimpleInterest => "Simple Interest",
            CalculatorKind::CompoundInterest => "Compound Interest",
            CalculatorKind::Bmi => "BMI Calculator",
            CalculatorKind::Tdee => "Calorie (TDEE) Calculator",
            CalculatorKind::InverseTrig => "Inverse Trigonometric Functions",
            CalculatorKind::LengthConversion => "Length Converter",
            CalculatorKind::TimeConversion => "Time Converter",
            CalculatorKind::DateDifference => "Days Between Dates",
            CalculatorKind::Random => "Random Number Generator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CalculatorKind::Asphalt => "Area, compacted volume, tonnage and cost of hot-mix asphalt",
            CalculatorKind::Concrete => "Slab volume with waste allowance, premix bag count and cost",
            CalculatorKind::Gcd => "Greatest common divisor of two or more integers, with the Euclidean steps",
            CalculatorKind::Lcm => "Least common multiple of two or more positive integers",
            CalculatorKind::Lcd => "Least common denominator of fractions, each rewritten over it",
            CalculatorKind::SimplifyFraction => "Reduce a fraction to lowest terms and mixed-number form",
            CalculatorKind::CompareFractions => "Exact comparison of two fractions",
            CalculatorKind::FractionArithmetic => "Add, subtract, multiply or divide two fractions",
            CalculatorKind::Combinatorics => "Exact nCr and nPr for 0 <= r <= n",
            CalculatorKind::LongMultiplication => "Multiplication worked digit by digit with partial products",
            CalculatorKind::Roman => "Convert between decimal numbers (1-3999) and Roman numerals",
            CalculatorKind::NumberBase => "Convert between binary, octal, decimal and hexadecimal",
            CalculatorKind::StandardDeviation => "Population or sample variance and standard deviation",
            CalculatorKind::Mean => "Mean, median, geometric mean and range of a data set",
            CalculatorKind::WeightedAverage => "Average of values weighted by their weights",
            CalculatorKind::Rectangle => "Area, perimeter and diagonal of a rectangle",
            CalculatorKind::Trapezoid => "Area and median of a trapezoid",
            CalculatorKind::Cylinder => "Volume and surface areas of a right circular cylinder",
            CalculatorKind::Vat => "Add VAT to a net amount or remove it from a gross amount",
            CalculatorKind::SimpleInterest => "Interest on a principal without compounding",
            CalculatorKind::CompoundInterest => "Future value with periodic compounding and a yearly schedule",
            CalculatorKind::Bmi => "Body mass index and WHO weight category",
            CalculatorKind::Tdee => "Daily calorie needs from Mifflin-St Jeor BMR and activity level",
            CalculatorKind::InverseTrig => "arcsin, arccos or arctan in radians and degrees",
            CalculatorKind::LengthConversion => "Convert lengths between metric and imperial units",
            CalculatorKind::TimeConversion => "Express a duration in seconds, minutes, hours, days and weeks",
            CalculatorKind::DateDifference => "Days and weeks between two dates",
            CalculatorKind::Random => "Random integers in a range, optionally unique or seeded",
        }
    }

    /// Formula text shown by `describe`
    pub fn formula(&self) -> &'static str {
        match self {
            CalculatorKind::Asphalt => "tonnage = length × width × thickness × density",
            CalculatorKind::Concrete => "volume = length × width × depth × (1 + waste/100); bags = ⌈volume ÷ bag yield⌉",
            CalculatorKind::Gcd => "gcd(a, b) = gcd(b, a mod b), gcd(a, 0) = a",
            CalculatorKind::Lcm => "lcm(a, b) = a ÷ gcd(a, b) × b",
            CalculatorKind::Lcd => "LCD = lcm(d₁, d₂, …, dₙ)",
            CalculatorKind::SimplifyFraction => "a/b = (a ÷ g)/(b ÷ g), g = gcd(a, b)",
            CalculatorKind::CompareFractions => "a/b ? c/d  ⇔  a·d ? c·b  (b, d > 0)",
            CalculatorKind::FractionArithmetic => "a/b ± c/d = (ad ± cb)/bd; a/b × c/d = ac/bd; a/b ÷ c/d = ad/bc",
            CalculatorKind::Combinatorics => "nCr = n!/(r!(n−r)!), nPr = n!/(n−r)!",
            CalculatorKind::LongMultiplication => "a × b = Σ a × bᵢ × 10ⁱ",
            CalculatorKind::Roman => "M=1000 CM=900 D=500 CD=400 C=100 XC=90 L=50 XL=40 X=10 IX=9 V=5 IV=4 I=1",
            CalculatorKind::NumberBase => "n = Σ dᵢ × radixⁱ",
            CalculatorKind::StandardDeviation => "σ = √(Σ(x − μ)² / N), s = √(Σ(x − x̄)² / (N − 1))",
            CalculatorKind::Mean => "x̄ = Σx / N, G = (∏x)^(1/N)",
            CalculatorKind::WeightedAverage => "x̄w = Σ wᵢxᵢ / Σ wᵢ",
            CalculatorKind::Rectangle => "A = l × w, P = 2(l + w), d = √(l² + w²)",
            CalculatorKind::Trapezoid => "A = (a + b) / 2 × h, m = (a + b) / 2",
            CalculatorKind::Cylinder => "V = πr²h, A = 2πr(r + h)",
            CalculatorKind::Vat => "gross = net × (1 + rate/100)",
            CalculatorKind::SimpleInterest => "I = P × r × t",
            CalculatorKind::CompoundInterest => "A = P(1 + r/n)^(nt)",
            CalculatorKind::Bmi => "BMI = kg / m²",
            CalculatorKind::Tdee => "BMR = 10w + 6.25h − 5a + s (s = +5 male, −161 female); TDEE = BMR × activity",
            CalculatorKind::InverseTrig => "θ = asin(x) | acos(x) | atan(x); degrees = θ × 180/π",
            CalculatorKind::LengthConversion => "result = value × (meters per source unit) ÷ (meters per target unit)",
            CalculatorKind::TimeConversion => "1 w = 7 d, 1 d = 24 h, 1 h = 60 min, 1 min = 60 s",
            CalculatorKind::DateDifference => "days = end − start",
            CalculatorKind::Random => "uniform integers in [min, max]",
        }
    }

    /// Fields read by [`build`](Self::build)
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            CalculatorKind::Asphalt => const { &[
                req("length", "Paved length (ft or m)"),
                req("width", "Paved width (ft or m)"),
                req("thickness", "Compacted thickness (in or cm)"),
                opt("density", "lb/ft³ or kg/m³ (default 145 / 2322)"),
                opt("price", "Price per short ton or tonne"),
                UNITS,
            ] },
            CalculatorKind::Concrete => const { &[
                req("length", "Slab length (ft or m)"),
                req("width", "Slab width (ft or m)"),
                req("depth", "Slab depth (in or cm)"),
                opt("waste", "Waste allowance, percent (default 0)"),
                opt("bag_weight", "Premix bag weight, lb or kg (default 80 / 25)"),
                opt("price", "Price per cubic yard or cubic meter"),
                UNITS,
            ] },
            CalculatorKind::Gcd => const { &[req("values", "Two or more non-negative integers, e.g. 48,18")] },
            CalculatorKind::Lcm => const { &[req("values", "Two or more positive integers, e.g. 4,6,10")] },
            CalculatorKind::Lcd => const { &[req("fractions", "Two or more fractions, e.g. 1/4,5/6")] },
            CalculatorKind::SimplifyFraction => const { &[
                req("fraction", "Fraction as a/b (or give numerator and denominator)"),
                opt("numerator", "Numerator, when fraction is not given"),
                opt("denominator", "Denominator, when fraction is not given"),
            ] },
            CalculatorKind::CompareFractions => const { &[
                req("first", "First fraction, a/b"),
                req("second", "Second fraction, c/d"),
            ] },
            CalculatorKind::FractionArithmetic => const { &[
                req("first", "First fraction, a/b"),
                req("op", "add, subtract, multiply or divide (+ - * /)"),
                req("second", "Second fraction, c/d"),
            ] },
            CalculatorKind::Combinatorics => const { &[
                req("n", "Set size (at most 10000)"),
                req("r", "Selection size, 0 <= r <= n"),
            ] },
            CalculatorKind::LongMultiplication => const { &[
                req("multiplicand", "Non-negative integer"),
                req("multiplier", "Non-negative integer"),
            ] },
            CalculatorKind::Roman => const { &[req("value", "Decimal number 1-3999 or a Roman numeral")] },
            CalculatorKind::NumberBase => const { &[
                req("value", "Number to convert"),
                opt("from", "binary, octal, decimal or hexadecimal (default decimal)"),
            ] },
            CalculatorKind::StandardDeviation => const { &[
                req("values", "Data set, e.g. 1,2,3,4,5"),
                opt("type", "sample or population (default sample)"),
            ] },
            CalculatorKind::Mean => const { &[req("values", "Data set, e.g. 1,2,3,4,5")] },
            CalculatorKind::WeightedAverage => const { &[
                req("values", "Values"),
                req("weights", "One weight per value"),
            ] },
            CalculatorKind::Rectangle => const { &[req("length", "Length"), req("width", "Width")] },
            CalculatorKind::Trapezoid => const { &[
                req("base_a", "First parallel side"),
                req("base_b", "Second parallel side"),
                req("height", "Distance between the parallel sides"),
            ] },
            CalculatorKind::Cylinder => const { &[
                req("radius", "Base radius (or give diameter)"),
                opt("diameter", "Base diameter, when radius is not given"),
                req("height", "Height"),
            ] },
            CalculatorKind::Vat => const { &[
                req("amount", "Net or gross amount"),
                req("rate", "VAT rate, percent"),
                opt("mode", "add (amount is net) or remove (amount is gross); default add"),
            ] },
            CalculatorKind::SimpleInterest => const { &[
                req("principal", "Starting amount"),
                req("rate", "Annual rate, percent"),
                req("years", "Duration in years"),
            ] },
            CalculatorKind::CompoundInterest => const { &[
                req("principal", "Starting amount"),
                req("rate", "Annual rate, percent"),
                req("years", "Duration in years"),
                opt("periods", "Compounding periods per year (default 12)"),
            ] },
            CalculatorKind::Bmi => const { &[req("weight", "Weight, kg"), req("height", "Height, cm")] },
            CalculatorKind::Tdee => const { &[
                req("sex", "male or female"),
                req("age", "Age in years"),
                req("weight", "Weight, kg"),
                req("height", "Height, cm"),
                opt("activity", "sedentary, light, moderate, active, very_active (default sedentary)"),
            ] },
            CalculatorKind::InverseTrig => const { &[
                req("function", "asin, acos or atan"),
                req("value", "Argument"),
            ] },
            CalculatorKind::LengthConversion => const { &[
                req("value", "Length to convert"),
                req("from", "mm, cm, m, km, in, ft, yd or mi"),
                req("to", "mm, cm, m, km, in, ft, yd or mi"),
            ] },
            CalculatorKind::TimeConversion => const { &[
                req("value", "Duration"),
                req("unit", "seconds, minutes, hours, days or weeks"),
            ] },
            CalculatorKind::DateDifference => const { &[
                req("start", "Start date, YYYY-MM-DD"),
                req("end", "End date, YYYY-MM-DD"),
            ] },
            CalculatorKind::Random => const { &[
                req("min", "Smallest value"),
                req("max", "Largest value"),
                opt("count", "How many values (default 1, at most 10000)"),
                opt("unique", "yes to draw without repeats"),
                opt("seed", "Seed for a reproducible draw"),
            ] },
        }
    }

    fn uses_unit_system(&self) -> bool {
        matches!(self, CalculatorKind::Asphalt | CalculatorKind::Concrete)
    }

    fn check_known_fields(&self, fields: &FieldMap) -> CalcResult<()> {
        let specs = self.fields();
        match fields.names().find(|name| !specs.iter().any(|s| s.name == *name)) {
            Some(unknown) => {
                let known: Vec<&str> = specs.iter().map(|s| s.name).collect();
                Err(CalcError::invalid_input(
                    unknown,
                    fields.raw(unknown).unwrap_or_default(),
                    format!("Unknown field for {}; expected: {}", self.slug(), known.join(", ")),
                ))
            }
            None => Ok(()),
        }
    }

    /// Build a typed calculation from raw fields.
    ///
    /// Checks that every field is known, present when required and parseable.
    /// Domain validation happens when the calculation is evaluated.
    /// Estimators without a `units` field use the settings' unit system.
    pub fn build(&self, fields: &FieldMap, settings: &Settings) -> CalcResult<Calculation> {
        self.check_known_fields(fields)?;

        let mut fields = fields.clone();
        if self.uses_unit_system() && fields.raw("units").is_none() {
            let units = match settings.unit_system {
                UnitSystem::Imperial => "imperial",
                UnitSystem::Metric => "metric",
            };
            fields.insert("units", units);
        }
        debug!(calculator = self.slug(), fields = fields.len(), "building calculation");

        let fields = &fields;
        Ok(match self {
            CalculatorKind::Asphalt => Calculation::Asphalt(AsphaltInput::from_fields(fields)?),
            CalculatorKind::Concrete => Calculation::Concrete(ConcreteInput::from_fields(fields)?),
            CalculatorKind::Gcd => Calculation::Gcd(GcdInput::from_fields(fields)?),
            CalculatorKind::Lcm => Calculation::Lcm(LcmInput::from_fields(fields)?),
            CalculatorKind::Lcd => Calculation::Lcd(LcdInput::from_fields(fields)?),
            CalculatorKind::SimplifyFraction => {
                Calculation::SimplifyFraction(SimplifyFractionInput::from_fields(fields)?)
            }
            CalculatorKind::CompareFractions => {
                Calculation::CompareFractions(CompareFractionsInput::from_fields(fields)?)
            }
            CalculatorKind::FractionArithmetic => {
                Calculation::FractionArithmetic(FractionArithmeticInput::from_fields(fields)?)
            }
            CalculatorKind::Combinatorics => {
                Calculation::Combinatorics(CombinatoricsInput::from_fields(fields)?)
            }
            CalculatorKind::LongMultiplication => {
                Calculation::LongMultiplication(LongMultiplicationInput::from_fields(fields)?)
            }
            CalculatorKind::Roman => Calculation::Roman(RomanInput::from_fields(fields)?),
            CalculatorKind::NumberBase => Calculation::NumberBase(NumberBaseInput::from_fields(fields)?),
            CalculatorKind::StandardDeviation => {
                Calculation::StandardDeviation(StandardDeviationInput::from_fields(fields)?)
            }
            CalculatorKind::Mean => Calculation::Mean(MeanInput::from_fields(fields)?),
            CalculatorKind::WeightedAverage => {
                Calculation::WeightedAverage(WeightedAverageInput::from_fields(fields)?)
            }
            CalculatorKind::Rectangle => Calculation::Rectangle(RectangleInput::from_fields(fields)?),
            CalculatorKind::Trapezoid => Calculation::Trapezoid(TrapezoidInput::from_fields(fields)?),
            CalculatorKind::Cylinder => Calculation::Cylinder(CylinderInput::from_fields(fields)?),
            CalculatorKind::Vat => Calculation::Vat(VatInput::from_fields(fields)?),
            CalculatorKind::SimpleInterest => {
                Calculation::SimpleInterest(SimpleInterestInput::from_fields(fields)?)
            }
            CalculatorKind::CompoundInterest => {
                Calculation::CompoundInterest(CompoundInterestInput::from_fields(fields)?)
            }
            CalculatorKind::Bmi => Calculation::Bmi(BmiInput::from_fields(fields)?),
            CalculatorKind::Tdee => Calculation::Tdee(TdeeInput::from_fields(fields)?),
            CalculatorKind::InverseTrig => Calculation::InverseTrig(InverseTrigInput::from_fields(fields)?),
            CalculatorKind::LengthConversion => {
                Calculation::LengthConversion(LengthConversionInput::from_fields(fields)?)
            }
            CalculatorKind::TimeConversion => {
                Calculation::TimeConversion(TimeConversionInput::from_fields(fields)?)
            }
            CalculatorKind::DateDifference => {
                Calculation::DateDifference(DateDifferenceInput::from_fields(fields)?)
            }
            CalculatorKind::Random => Calculation::Random(RandomInput::from_fields(fields)?),
        })
    }
}

/// Look up a calculator by name, reporting unknown names as errors.
pub fn lookup(name: &str) -> CalcResult<CalculatorKind> {
    CalculatorKind::parse(name).ok_or_else(|| CalcError::unknown_calculator(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique_and_parse_back() {
        let slugs: HashSet<&str> = CalculatorKind::ALL.iter().map(|k| k.slug()).collect();
        assert_eq!(slugs.len(), CalculatorKind::ALL.len());
        for kind in CalculatorKind::ALL {
            assert_eq!(CalculatorKind::parse(kind.slug()), Some(kind));
            assert!(!kind.fields().is_empty());
            assert!(!kind.description().is_empty());
        }
        assert_eq!(CalculatorKind::parse("HCF"), Some(CalculatorKind::Gcd));
        assert_eq!(CalculatorKind::parse("simplify_fraction"), Some(CalculatorKind::SimplifyFraction));
    }

    #[test]
    fn test_unknown_calculator() {
        assert_eq!(lookup("flux-capacitor").unwrap_err().error_code(), "UNKNOWN_CALCULATOR");
    }

    #[test]
    fn test_build_kind_round_trip() {
        let fields = FieldMap::parse_pairs(["n=5", "r=2"]).unwrap();
        let calc = CalculatorKind::Combinatorics.build(&fields, &Settings::default()).unwrap();
        assert_eq!(calc.kind(), CalculatorKind::Combinatorics);
    }

    #[test]
    fn test_build_rejects_unknown_field() {
        let fields = FieldMap::parse_pairs(["n=5", "k=2"]).unwrap();
        let err = CalculatorKind::Combinatorics.build(&fields, &Settings::default()).unwrap_err();
        assert_eq!(err.field(), Some("k"));
    }

    #[test]
    fn test_build_reports_missing_before_domain() {
        let fields = FieldMap::parse_pairs(["length=10", "width=-2"]).unwrap();
        let err = CalculatorKind::Asphalt.build(&fields, &Settings::default()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert_eq!(err.field(), Some("thickness"));
    }

    #[test]
    fn test_units_default_from_settings() {
        let settings = Settings { unit_system: UnitSystem::Metric, ..Settings::default() };
        let fields = FieldMap::parse_pairs(["length=10", "width=5", "thickness=5"]).unwrap();
        match CalculatorKind::Asphalt.build(&fields, &settings).unwrap() {
            Calculation::Asphalt(input) => assert_eq!(input.unit_system, UnitSystem::Metric),
            other => panic!("unexpected calculation {:?}", other),
        }

        let explicit = FieldMap::parse_pairs(["length=10", "width=5", "thickness=5", "units=imperial"]).unwrap();
        match CalculatorKind::Asphalt.build(&explicit, &settings).unwrap() {
            Calculation::Asphalt(input) => assert_eq!(input.unit_system, UnitSystem::Imperial),
            other => panic!("unexpected calculation {:?}", other),
        }
    }

    #[test]
    fn test_field_lists_are_static() {
        // Field lists outlive any borrow of the kind
        let lists: Vec<&'static [FieldSpec]> = CalculatorKind::ALL.into_iter().map(|k| k.fields()).collect();
        assert_eq!(lists.len(), CalculatorKind::ALL.len());

        let asphalt = CalculatorKind::Asphalt.fields();
        let units = asphalt.iter().find(|f| f.name == "units").unwrap();
        assert!(!units.required);
        assert!(CalculatorKind::Concrete.fields().iter().any(|f| f.name == "units"));
        assert!(asphalt.iter().filter(|f| f.required).count() >= 3);
    }
}
