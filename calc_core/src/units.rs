//! # Unit Types
//!
//! Type-safe wrappers for the quantities the construction estimators and
//! converters work with. Each is a plain `f64` newtype that serializes as a
//! bare number, with `From` conversions between related units.
//!
//! Two unit systems are supported ([`UnitSystem`]):
//!
//! - Imperial: feet, inches, cubic yards, short tons, lb/ft³
//! - Metric: meters, centimeters, cubic meters, tonnes, kg/m³
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Feet, Inches, CubicFeet, CubicYards};
//!
//! let depth: Feet = Inches(6.0).into();
//! assert_eq!(depth.0, 0.5);
//!
//! let volume: CubicYards = CubicFeet(27.0).into();
//! assert!((volume.0 - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Measurement system for inputs and results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

impl UnitSystem {
    /// Parse "imperial"/"us" or "metric"/"si"
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "imperial" | "us" => Some(UnitSystem::Imperial),
            "metric" | "si" => Some(UnitSystem::Metric),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareFeet(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicFeet(pub f64);

/// Volume in cubic yards (27 ft³)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicYards(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl From<CubicFeet> for CubicYards {
    fn from(cf: CubicFeet) -> Self {
        CubicYards(cf.0 / 27.0)
    }
}

impl From<CubicYards> for CubicFeet {
    fn from(cy: CubicYards) -> Self {
        CubicFeet(cy.0 * 27.0)
    }
}

// ============================================================================
// Mass and Density Units
// ============================================================================

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Mass in US short tons (2000 lb)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortTons(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in metric tonnes (1000 kg)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

/// Density in pounds per cubic foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LbPerCuFt(pub f64);

/// Density in kilograms per cubic meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerCuM(pub f64);

impl From<Pounds> for ShortTons {
    fn from(lb: Pounds) -> Self {
        ShortTons(lb.0 / 2000.0)
    }
}

impl From<ShortTons> for Pounds {
    fn from(t: ShortTons) -> Self {
        Pounds(t.0 * 2000.0)
    }
}

impl From<Kilograms> for Tonnes {
    fn from(kg: Kilograms) -> Self {
        Tonnes(kg.0 / 1000.0)
    }
}

impl From<Tonnes> for Kilograms {
    fn from(t: Tonnes) -> Self {
        Kilograms(t.0 * 1000.0)
    }
}

// ============================================================================
// Dimensional products
// ============================================================================

impl Mul<Feet> for Feet {
    type Output = SquareFeet;
    fn mul(self, rhs: Feet) -> SquareFeet {
        SquareFeet(self.0 * rhs.0)
    }
}

impl Mul<Feet> for SquareFeet {
    type Output = CubicFeet;
    fn mul(self, rhs: Feet) -> CubicFeet {
        CubicFeet(self.0 * rhs.0)
    }
}

impl Mul<Meters> for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

impl Mul<Meters> for SquareMeters {
    type Output = CubicMeters;
    fn mul(self, rhs: Meters) -> CubicMeters {
        CubicMeters(self.0 * rhs.0)
    }
}

impl Mul<LbPerCuFt> for CubicFeet {
    type Output = Pounds;
    fn mul(self, rhs: LbPerCuFt) -> Pounds {
        Pounds(self.0 * rhs.0)
    }
}

impl Mul<KgPerCuM> for CubicMeters {
    type Output = Kilograms;
    fn mul(self, rhs: KgPerCuM) -> Kilograms {
        Kilograms(self.0 * rhs.0)
    }
}

// ============================================================================
// Length units for the converter
// ============================================================================

/// Length unit selectable by name, converted through meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    /// Exact meters per unit (international yard and pound agreement)
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
        }
    }

    /// Unit symbol (mm, cm, m, ...)
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
        }
    }

    /// Parse a symbol or name ("ft", "feet", "foot", ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => Some(LengthUnit::Millimeter),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Some(LengthUnit::Centimeter),
            "m" | "meter" | "meters" | "metre" | "metres" => Some(LengthUnit::Meter),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Some(LengthUnit::Kilometer),
            "in" | "inch" | "inches" => Some(LengthUnit::Inch),
            "ft" | "foot" | "feet" => Some(LengthUnit::Foot),
            "yd" | "yard" | "yards" => Some(LengthUnit::Yard),
            "mi" | "mile" | "miles" => Some(LengthUnit::Mile),
            _ => None,
        }
    }

    /// Convert `value` from this unit into `target`.
    pub fn convert(&self, value: f64, target: LengthUnit) -> f64 {
        value * self.meters_per_unit() / target.meters_per_unit()
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(SquareFeet);
impl_arithmetic!(SquareMeters);
impl_arithmetic!(CubicFeet);
impl_arithmetic!(CubicYards);
impl_arithmetic!(CubicMeters);
impl_arithmetic!(Pounds);
impl_arithmetic!(ShortTons);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Tonnes);
impl_arithmetic!(LbPerCuFt);
impl_arithmetic!(KgPerCuM);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_feet() {
        let ft: Feet = Inches(18.0).into();
        assert_eq!(ft.0, 1.5);
    }

    #[test]
    fn test_slab_volume_and_mass() {
        let area = Feet(10.0) * Feet(20.0);
        let volume = area * Feet(0.5);
        assert_eq!(volume, CubicFeet(100.0));
        let tons: ShortTons = (volume * LbPerCuFt(145.0)).into();
        assert!((tons.0 - 7.25).abs() < 1e-12);
    }

    #[test]
    fn test_metric_mass() {
        let volume = Meters(10.0) * Meters(5.0) * Meters(0.05);
        let tonnes: Tonnes = (volume * KgPerCuM(2400.0)).into();
        assert!((tonnes.0 - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_length_converter() {
        assert!((LengthUnit::Mile.convert(1.0, LengthUnit::Kilometer) - 1.609344).abs() < 1e-12);
        assert!((LengthUnit::Foot.convert(3.0, LengthUnit::Yard) - 1.0).abs() < 1e-12);
        assert_eq!(LengthUnit::parse("Feet"), Some(LengthUnit::Foot));
        assert_eq!(LengthUnit::parse("furlong"), None);
    }

    #[test]
    fn test_arithmetic() {
        let a = Feet(10.0);
        let b = Feet(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let t = Tonnes(12.5);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "12.5");
        assert_eq!(serde_json::to_string(&UnitSystem::Metric).unwrap(), "\"metric\"");
    }
}
