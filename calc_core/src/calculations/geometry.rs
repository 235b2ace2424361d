//! # Geometry Calculations
//!
//! Rectangle, trapezoid and cylinder measurements. Dimensions are unitless:
//! results are in the square or cubic form of whatever unit the inputs share.

use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::formulas::geometry as geo;
use crate::settings::Settings;

// ============================================================================
// Rectangle
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleInput {
    pub length: f64,
    pub width: f64,
}

impl RectangleInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length", self.length)?;
        require_positive("width", self.width)
    }
}

impl FromFields for RectangleInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(RectangleInput {
            length: fields.require_f64("length")?,
            width: fields.require_f64("width")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleResult {
    pub area: f64,
    pub perimeter: f64,
    pub diagonal: f64,
}

impl RectangleResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("Area:      {}", fmt.number(self.area)),
            format!("Perimeter: {}", fmt.number(self.perimeter)),
            format!("Diagonal:  {}", fmt.number(self.diagonal)),
        ]
    }
}

pub fn rectangle(input: &RectangleInput) -> CalcResult<RectangleResult> {
    input.validate()?;
    Ok(RectangleResult {
        area: geo::rectangle_area(input.length, input.width),
        perimeter: geo::rectangle_perimeter(input.length, input.width),
        diagonal: geo::rectangle_diagonal(input.length, input.width),
    })
}

// ============================================================================
// Trapezoid
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapezoidInput {
    /// Top parallel side
    pub base_a: f64,

    /// Bottom parallel side
    pub base_b: f64,

    /// Perpendicular distance between the parallel sides
    pub height: f64,
}

impl TrapezoidInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("base_a", self.base_a)?;
        require_positive("base_b", self.base_b)?;
        require_positive("height", self.height)
    }
}

impl FromFields for TrapezoidInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(TrapezoidInput {
            base_a: fields.require_f64("base_a")?,
            base_b: fields.require_f64("base_b")?,
            height: fields.require_f64("height")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapezoidResult {
    pub area: f64,
    pub median: f64,
}

impl TrapezoidResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("Area:   {}", fmt.number(self.area)),
            format!("Median: {}", fmt.number(self.median)),
        ]
    }
}

pub fn trapezoid(input: &TrapezoidInput) -> CalcResult<TrapezoidResult> {
    input.validate()?;
    Ok(TrapezoidResult {
        area: geo::trapezoid_area(input.base_a, input.base_b, input.height),
        median: geo::trapezoid_median(input.base_a, input.base_b),
    })
}

// ============================================================================
// Cylinder
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderInput {
    pub radius: f64,
    pub height: f64,
}

impl CylinderInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("radius", self.radius)?;
        require_positive("height", self.height)
    }
}

impl FromFields for CylinderInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        // Diameter is accepted in place of radius
        let radius = match (fields.optional_f64("radius")?, fields.optional_f64("diameter")?) {
            (Some(r), _) => r,
            (None, Some(d)) => d / 2.0,
            (None, None) => return Err(CalcError::missing_field("radius")),
        };
        Ok(CylinderInput {
            radius,
            height: fields.require_f64("height")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderResult {
    pub volume: f64,
    pub lateral_area: f64,
    pub base_area: f64,
    pub total_area: f64,
}

impl CylinderResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("Volume:        {}", fmt.number(self.volume)),
            format!("Lateral area:  {}", fmt.number(self.lateral_area)),
            format!("Base area:     {}", fmt.number(self.base_area)),
            format!("Total surface: {}", fmt.number(self.total_area)),
        ]
    }
}

pub fn cylinder(input: &CylinderInput) -> CalcResult<CylinderResult> {
    input.validate()?;
    let (r, h) = (input.radius, input.height);
    Ok(CylinderResult {
        volume: geo::cylinder_volume(r, h),
        lateral_area: geo::cylinder_lateral_area(r, h),
        base_area: std::f64::consts::PI * r * r,
        total_area: geo::cylinder_total_area(r, h),
    })
}
