//! # Concrete Slab Calculation
//!
//! Volume of concrete for a rectangular slab, with a waste allowance, the
//! number of premix bags that volume represents, and an optional cost.
//!
//! ## Formula
//!
//! ```text
//! volume = length × width × depth × (1 + waste% / 100)
//! bags   = ⌈volume ÷ bag yield⌉
//! ```
//!
//! Bag yield is the bag weight divided by the mixed density of premix:
//! 133⅓ lb/ft³ imperial (an 80 lb bag yields 0.60 ft³) and 2000 kg/m³ metric
//! (a 25 kg bag yields 0.0125 m³). Imperial volumes are ordered in cubic
//! yards, metric in cubic meters.

use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_positive};
use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::settings::Settings;
use crate::units::{Centimeters, CubicFeet, CubicYards, Feet, Inches, Meters, UnitSystem};

/// Mixed premix yield density, lb/ft³
pub const PREMIX_YIELD_LB_FT3: f64 = 400.0 / 3.0;

/// Mixed premix yield density, kg/m³
pub const PREMIX_YIELD_KG_M3: f64 = 2000.0;

/// Input parameters for a concrete slab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteInput {
    /// Slab length (ft or m)
    pub length: f64,

    /// Slab width (ft or m)
    pub width: f64,

    /// Slab depth (in or cm)
    pub depth: f64,

    /// Extra material ordered for spillage and uneven subgrade, percent
    #[serde(default)]
    pub waste_percent: f64,

    /// Premix bag weight (lb or kg); defaults to 80 lb / 25 kg
    #[serde(default)]
    pub bag_weight: Option<f64>,

    /// Price per cubic yard or cubic meter
    #[serde(default)]
    pub price_per_unit_volume: Option<f64>,

    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl ConcreteInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length", self.length)?;
        require_positive("width", self.width)?;
        require_positive("depth", self.depth)?;
        if !(0.0..=100.0).contains(&self.waste_percent) {
            return Err(CalcError::invalid_input(
                "waste_percent",
                self.waste_percent.to_string(),
                "Waste allowance must be between 0 and 100 percent",
            ));
        }
        if let Some(weight) = self.bag_weight {
            require_positive("bag_weight", weight)?;
        }
        if let Some(price) = self.price_per_unit_volume {
            require_non_negative("price_per_unit_volume", price)?;
        }
        Ok(())
    }

    fn effective_bag_weight(&self) -> f64 {
        self.bag_weight.unwrap_or(match self.unit_system {
            UnitSystem::Imperial => 80.0,
            UnitSystem::Metric => 25.0,
        })
    }
}

impl FromFields for ConcreteInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(ConcreteInput {
            length: fields.require_f64("length")?,
            width: fields.require_f64("width")?,
            depth: fields.require_f64("depth")?,
            waste_percent: fields.f64_or("waste", 0.0)?,
            bag_weight: fields.optional_f64("bag_weight")?,
            price_per_unit_volume: fields.optional_f64("price")?,
            unit_system: fields.choice_or("units", UnitSystem::parse, "imperial, metric", UnitSystem::Imperial)?,
        })
    }
}

/// Results from a concrete slab estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteResult {
    pub unit_system: UnitSystem,

    /// Slab area (ft² or m²)
    pub area: f64,

    /// Net slab volume without waste (yd³ or m³)
    pub net_volume: f64,

    /// Volume to order including waste (yd³ or m³)
    pub order_volume: f64,

    /// Premix bags needed for the order volume
    pub bags: u64,

    /// Bag weight used (lb or kg)
    pub bag_weight: f64,

    /// Cost of the order volume, when a price was given
    pub cost: Option<f64>,

    /// Display-ready formula with the input values substituted
    pub formula: String,
}

impl ConcreteResult {
    /// Human-readable result lines
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        let (area_u, vol_u, bag_u) = match self.unit_system {
            UnitSystem::Imperial => ("ft²", "yd³", "lb"),
            UnitSystem::Metric => ("m²", "m³", "kg"),
        };
        let mut lines = vec![
            format!("Area:         {} {}", fmt.number(self.area), area_u),
            format!("Net volume:   {} {}", fmt.number(self.net_volume), vol_u),
            format!("Order volume: {} {}", fmt.number(self.order_volume), vol_u),
            format!("Premix bags:  {} × {} {}", fmt.integer(self.bags), fmt.number(self.bag_weight), bag_u),
        ];
        if let Some(cost) = self.cost {
            lines.push(format!("Cost:         {}", fmt.money(cost, &settings.currency_symbol)));
        }
        lines.push(format!("Formula: {}", self.formula));
        lines
    }
}

/// Estimate slab volume, premix bags and cost.
pub fn calculate(input: &ConcreteInput) -> CalcResult<ConcreteResult> {
    input.validate()?;

    let waste_factor = 1.0 + input.waste_percent / 100.0;
    let bag_weight = input.effective_bag_weight();

    let (area, net_volume, order_volume, bag_yield, formula) = match input.unit_system {
        UnitSystem::Imperial => {
            let depth: Feet = Inches(input.depth).into();
            let area = Feet(input.length) * Feet(input.width);
            let net_cf: CubicFeet = area * depth;
            let order_cf = net_cf * waste_factor;
            let net: CubicYards = net_cf.into();
            let order: CubicYards = order_cf.into();
            let formula = format!(
                "{} ft × {} ft × ({} in ÷ 12) × {} ÷ 27",
                input.length, input.width, input.depth, waste_factor
            );
            // Bags are counted against cubic feet, the unit bag yields are quoted in.
            let bag_yield_cf = bag_weight / PREMIX_YIELD_LB_FT3;
            (area.value(), net.value(), order.value(), order_cf.value() / bag_yield_cf, formula)
        }
        UnitSystem::Metric => {
            let depth: Meters = Centimeters(input.depth).into();
            let area = Meters(input.length) * Meters(input.width);
            let net = area * depth;
            let order = net * waste_factor;
            let formula = format!(
                "{} m × {} m × ({} cm ÷ 100) × {}",
                input.length, input.width, input.depth, waste_factor
            );
            let bag_yield_m3 = bag_weight / PREMIX_YIELD_KG_M3;
            (area.value(), net.value(), order.value(), order.value() / bag_yield_m3, formula)
        }
    };

    // Guard against 2.0000000001 rounding up to 3 bags.
    let bags = (bag_yield - 1e-9).ceil().max(0.0) as u64;

    Ok(ConcreteResult {
        unit_system: input.unit_system,
        area,
        net_volume,
        order_volume,
        bags,
        bag_weight,
        cost: input.price_per_unit_volume.map(|price| price * order_volume),
        formula,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patio() -> ConcreteInput {
        ConcreteInput {
            length: 10.0,
            width: 10.0,
            depth: 4.0,
            waste_percent: 0.0,
            bag_weight: None,
            price_per_unit_volume: None,
            unit_system: UnitSystem::Imperial,
        }
    }

    #[test]
    fn test_imperial_slab() {
        let result = calculate(&patio()).unwrap();
        // 100 ft² × 1/3 ft = 33.33 ft³ = 1.2346 yd³
        assert!((result.net_volume - 100.0 / 3.0 / 27.0).abs() < 1e-9);
        // 33.33 ft³ / 0.6 ft³ per bag = 55.6 -> 56 bags
        assert_eq!(result.bags, 56);
        assert_eq!(result.bag_weight, 80.0);
    }

    #[test]
    fn test_waste_and_cost() {
        let mut input = patio();
        input.waste_percent = 10.0;
        input.price_per_unit_volume = Some(150.0);
        let result = calculate(&input).unwrap();
        assert!((result.order_volume / result.net_volume - 1.1).abs() < 1e-9);
        assert!((result.cost.unwrap() - 150.0 * result.order_volume).abs() < 1e-9);
    }

    #[test]
    fn test_metric_slab_exact_bags() {
        let input = ConcreteInput {
            length: 2.0,
            width: 1.0,
            depth: 10.0,
            waste_percent: 0.0,
            bag_weight: Some(20.0),
            price_per_unit_volume: None,
            unit_system: UnitSystem::Metric,
        };
        let result = calculate(&input).unwrap();
        // 0.2 m³ / 0.01 m³ per bag = 20 bags exactly
        assert!((result.order_volume - 0.2).abs() < 1e-12);
        assert_eq!(result.bags, 20);
    }

    #[test]
    fn test_waste_out_of_range() {
        let mut input = patio();
        input.waste_percent = 150.0;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("waste_percent"));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let mut input = patio();
        input.depth = f64::NAN;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("depth"));

        let mut input = patio();
        input.length = f64::INFINITY;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("length"));

        let mut input = patio();
        input.waste_percent = f64::NAN;
        assert_eq!(calculate(&input).unwrap_err().field(), Some("waste_percent"));

        let mut input = patio();
        input.bag_weight = Some(f64::INFINITY);
        assert_eq!(calculate(&input).unwrap_err().field(), Some("bag_weight"));

        let mut input = patio();
        input.price_per_unit_volume = Some(f64::NAN);
        assert_eq!(calculate(&input).unwrap_err().field(), Some("price_per_unit_volume"));
    }
}
