//! # Asphalt Calculation
//!
//! Estimates the hot-mix asphalt needed to pave a rectangular area.
//!
//! ## Formula
//!
//! ```text
//! area    = length × width
//! volume  = area × thickness
//! tonnage = volume × density
//! cost    = tonnage × price per ton
//! ```
//!
//! Imperial inputs are feet/feet/inches with density in lb/ft³ (default 145)
//! and results in short tons. Metric inputs are meters/meters/centimeters with
//! density in kg/m³ (default 2322) and results in tonnes.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::asphalt::{calculate, AsphaltInput};
//! use calc_core::units::UnitSystem;
//!
//! let input = AsphaltInput {
//!     length: 100.0,
//!     width: 20.0,
//!     thickness: 3.0,
//!     density: None,
//!     price_per_ton: Some(90.0),
//!     unit_system: UnitSystem::Imperial,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.tonnage - 36.25).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_positive};
use crate::errors::CalcResult;
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::settings::Settings;
use crate::units::{
    Centimeters, CubicFeet, CubicMeters, Feet, Inches, KgPerCuM, LbPerCuFt, Meters, ShortTons,
    Tonnes, UnitSystem,
};

/// Typical compacted hot-mix asphalt density, lb/ft³
pub const DEFAULT_DENSITY_LB_FT3: f64 = 145.0;

/// Typical compacted hot-mix asphalt density, kg/m³
pub const DEFAULT_DENSITY_KG_M3: f64 = 2322.0;

/// Input parameters for an asphalt estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 100.0,
///   "width": 20.0,
///   "thickness": 3.0,
///   "density": null,
///   "price_per_ton": 90.0,
///   "unit_system": "imperial"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsphaltInput {
    /// Paved length (ft or m)
    pub length: f64,

    /// Paved width (ft or m)
    pub width: f64,

    /// Compacted thickness (in or cm)
    pub thickness: f64,

    /// Density override (lb/ft³ or kg/m³)
    #[serde(default)]
    pub density: Option<f64>,

    /// Price per short ton or tonne
    #[serde(default)]
    pub price_per_ton: Option<f64>,

    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl AsphaltInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length", self.length)?;
        require_positive("width", self.width)?;
        require_positive("thickness", self.thickness)?;
        if let Some(density) = self.density {
            require_positive("density", density)?;
        }
        if let Some(price) = self.price_per_ton {
            require_non_negative("price_per_ton", price)?;
        }
        Ok(())
    }

    /// Density in effect (override or the unit system's default)
    pub fn effective_density(&self) -> f64 {
        self.density.unwrap_or(match self.unit_system {
            UnitSystem::Imperial => DEFAULT_DENSITY_LB_FT3,
            UnitSystem::Metric => DEFAULT_DENSITY_KG_M3,
        })
    }
}

impl FromFields for AsphaltInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(AsphaltInput {
            length: fields.require_f64("length")?,
            width: fields.require_f64("width")?,
            thickness: fields.require_f64("thickness")?,
            density: fields.optional_f64("density")?,
            price_per_ton: fields.optional_f64("price")?,
            unit_system: fields.choice_or("units", UnitSystem::parse, "imperial, metric", UnitSystem::Imperial)?,
        })
    }
}

/// Results from an asphalt estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsphaltResult {
    pub unit_system: UnitSystem,

    /// Paved area (ft² or m²)
    pub area: f64,

    /// Compacted volume (ft³ or m³)
    pub volume: f64,

    /// Mass of asphalt (short tons or tonnes)
    pub tonnage: f64,

    /// Density used (lb/ft³ or kg/m³)
    pub density: f64,

    /// Material cost, when a price was given
    pub cost: Option<f64>,

    /// Display-ready formula with the input values substituted
    pub formula: String,
}

impl AsphaltResult {
    /// Human-readable result lines
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        let (area_u, vol_u, mass_u) = match self.unit_system {
            UnitSystem::Imperial => ("ft²", "ft³", "short tons"),
            UnitSystem::Metric => ("m²", "m³", "tonnes"),
        };
        let mut lines = vec![
            format!("Area:    {} {}", fmt.number(self.area), area_u),
            format!("Volume:  {} {}", fmt.number(self.volume), vol_u),
            format!("Asphalt: {} {}", fmt.number(self.tonnage), mass_u),
        ];
        if let Some(cost) = self.cost {
            lines.push(format!("Cost:    {}", fmt.money(cost, &settings.currency_symbol)));
        }
        lines.push(format!("Formula: {}", self.formula));
        lines
    }
}

/// Estimate asphalt area, volume, tonnage and cost.
pub fn calculate(input: &AsphaltInput) -> CalcResult<AsphaltResult> {
    input.validate()?;

    let density = input.effective_density();
    let (area, volume, tonnage, formula) = match input.unit_system {
        UnitSystem::Imperial => {
            let thickness: Feet = Inches(input.thickness).into();
            let area = Feet(input.length) * Feet(input.width);
            let volume: CubicFeet = area * thickness;
            let tons: ShortTons = (volume * LbPerCuFt(density)).into();
            let formula = format!(
                "{} ft × {} ft × ({} in ÷ 12) × {} lb/ft³ ÷ 2000",
                input.length, input.width, input.thickness, density
            );
            (area.value(), volume.value(), tons.value(), formula)
        }
        UnitSystem::Metric => {
            let thickness: Meters = Centimeters(input.thickness).into();
            let area = Meters(input.length) * Meters(input.width);
            let volume: CubicMeters = area * thickness;
            let tonnes: Tonnes = (volume * KgPerCuM(density)).into();
            let formula = format!(
                "{} m × {} m × ({} cm ÷ 100) × {} kg/m³ ÷ 1000",
                input.length, input.width, input.thickness, density
            );
            (area.value(), volume.value(), tonnes.value(), formula)
        }
    };

    Ok(AsphaltResult {
        unit_system: input.unit_system,
        area,
        volume,
        tonnage,
        density,
        cost: input.price_per_ton.map(|price| price * tonnage),
        formula,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driveway() -> AsphaltInput {
        AsphaltInput {
            length: 100.0,
            width: 20.0,
            thickness: 3.0,
            density: None,
            price_per_ton: Some(90.0),
            unit_system: UnitSystem::Imperial,
        }
    }

    #[test]
    fn test_imperial_estimate() {
        let result = calculate(&driveway()).unwrap();
        // 2000 ft² × 0.25 ft = 500 ft³; × 145 = 72 500 lb = 36.25 tons
        assert_eq!(result.area, 2000.0);
        assert_eq!(result.volume, 500.0);
        assert!((result.tonnage - 36.25).abs() < 1e-9);
        assert!((result.cost.unwrap() - 3262.5).abs() < 1e-9);
        assert!(result.formula.contains("145 lb/ft³"));
    }

    #[test]
    fn test_metric_estimate() {
        let input = AsphaltInput {
            length: 10.0,
            width: 5.0,
            thickness: 5.0,
            density: Some(2400.0),
            price_per_ton: None,
            unit_system: UnitSystem::Metric,
        };
        let result = calculate(&input).unwrap();
        assert!((result.volume - 2.5).abs() < 1e-9);
        assert!((result.tonnage - 6.0).abs() < 1e-9);
        assert_eq!(result.cost, None);
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut input = driveway();
        input.thickness = 0.0;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("thickness"));

        let mut input = driveway();
        input.price_per_ton = Some(-1.0);
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let mut input = driveway();
        input.length = f64::NAN;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("length"));

        let mut input = driveway();
        input.width = f64::INFINITY;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("width"));

        let mut input = driveway();
        input.density = Some(f64::NAN);
        assert_eq!(calculate(&input).unwrap_err().field(), Some("density"));

        let mut input = driveway();
        input.price_per_ton = Some(f64::INFINITY);
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let fields = FieldMap::parse_pairs(["length=NaN", "width=20", "thickness=3"]).unwrap();
        let err = AsphaltInput::from_fields(&fields).unwrap_err();
        assert_eq!(err.error_code(), "NOT_NUMERIC");
    }

    #[test]
    fn test_from_fields() {
        let fields = FieldMap::parse_pairs(["length=100", "width=20", "thickness=3", "price=90"]).unwrap();
        let input = AsphaltInput::from_fields(&fields).unwrap();
        assert_eq!(input, driveway());

        let missing = FieldMap::parse_pairs(["length=100", "width=20"]).unwrap();
        assert_eq!(
            AsphaltInput::from_fields(&missing).unwrap_err().error_code(),
            "MISSING_FIELD"
        );
    }

    #[test]
    fn test_summary_mentions_cost() {
        let result = calculate(&driveway()).unwrap();
        let lines = result.summary(&Settings::default());
        assert!(lines.iter().any(|l| l.contains("$3,262.50")));
    }
}
