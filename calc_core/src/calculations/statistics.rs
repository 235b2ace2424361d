//! # Statistics Calculations
//!
//! - **Standard deviation**: population (÷N) or sample (÷N−1) variance and
//!   standard deviation.
//! - **Mean**: arithmetic mean, median, geometric mean (when every value is
//!   positive) and range.
//! - **Weighted average**: Σ wᵢxᵢ / Σ wᵢ.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::arithmetic::Dispersion;
//! use calc_core::calculations::statistics::{standard_deviation, StandardDeviationInput};
//!
//! let input = StandardDeviationInput {
//!     values: vec![1.0, 2.0, 3.0, 4.0, 5.0],
//!     dispersion: Dispersion::Population,
//! };
//! let result = standard_deviation(&input).unwrap();
//! assert!((result.standard_deviation - 2f64.sqrt()).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::arithmetic::{self, Dispersion};
use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::settings::Settings;

/// Largest number of data points accepted
pub const MAX_DATA_POINTS: usize = 100_000;

fn check_size(field: &str, len: usize) -> CalcResult<()> {
    if len > MAX_DATA_POINTS {
        return Err(CalcError::invalid_input(
            field,
            format!("{} values", len),
            format!("At most {} values are supported", MAX_DATA_POINTS),
        ));
    }
    Ok(())
}

// ============================================================================
// Standard deviation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardDeviationInput {
    pub values: Vec<f64>,

    #[serde(default)]
    pub dispersion: Dispersion,
}

impl StandardDeviationInput {
    pub fn validate(&self) -> CalcResult<()> {
        check_size("values", self.values.len())
    }
}

impl FromFields for StandardDeviationInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(StandardDeviationInput {
            values: fields.require_f64_list("values")?,
            dispersion: fields.choice_or("type", Dispersion::parse, "population, sample", Dispersion::Sample)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardDeviationResult {
    pub dispersion: Dispersion,
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub variance: f64,
    pub standard_deviation: f64,
}

impl StandardDeviationResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("Count:    {}", self.count),
            format!("Sum:      {}", fmt.number(self.sum)),
            format!("Mean:     {}", fmt.number(self.mean)),
            format!("Variance ({}): {}", self.dispersion.display_name(), fmt.number(self.variance)),
            format!("Standard deviation ({}): {}", self.dispersion.display_name(), fmt.number(self.standard_deviation)),
        ]
    }
}

/// Variance and standard deviation of a data set.
pub fn standard_deviation(input: &StandardDeviationInput) -> CalcResult<StandardDeviationResult> {
    input.validate()?;
    let variance = arithmetic::variance(&input.values, input.dispersion)?;
    Ok(StandardDeviationResult {
        dispersion: input.dispersion,
        count: input.values.len(),
        sum: input.values.iter().sum(),
        mean: arithmetic::mean(&input.values)?,
        variance,
        standard_deviation: variance.sqrt(),
    })
}

// ============================================================================
// Mean
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanInput {
    pub values: Vec<f64>,
}

impl MeanInput {
    pub fn validate(&self) -> CalcResult<()> {
        check_size("values", self.values.len())
    }
}

impl FromFields for MeanInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(MeanInput {
            values: fields.require_f64_list("values")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanResult {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,

    /// Only defined when every value is positive
    pub geometric_mean: Option<f64>,

    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl MeanResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        let mut lines = vec![
            format!("Count:  {}", self.count),
            format!("Sum:    {}", fmt.number(self.sum)),
            format!("Mean:   {}", fmt.number(self.mean)),
            format!("Median: {}", fmt.number(self.median)),
        ];
        match self.geometric_mean {
            Some(g) => lines.push(format!("Geometric mean: {}", fmt.number(g))),
            None => lines.push("Geometric mean: n/a (requires positive values)".to_string()),
        }
        lines.push(format!(
            "Range:  {} ({} to {})",
            fmt.number(self.range),
            fmt.number(self.min),
            fmt.number(self.max)
        ));
        lines
    }
}

/// Central tendency of a data set.
pub fn mean(input: &MeanInput) -> CalcResult<MeanResult> {
    input.validate()?;
    let values = &input.values;
    let mean = arithmetic::mean(values)?;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok(MeanResult {
        count: values.len(),
        sum: values.iter().sum(),
        mean,
        median: arithmetic::median(values)?,
        geometric_mean: arithmetic::geometric_mean(values).ok(),
        min,
        max,
        range: max - min,
    })
}

// ============================================================================
// Weighted average
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedAverageInput {
    pub values: Vec<f64>,
    pub weights: Vec<f64>,
}

impl WeightedAverageInput {
    pub fn validate(&self) -> CalcResult<()> {
        check_size("values", self.values.len())
    }
}

impl FromFields for WeightedAverageInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(WeightedAverageInput {
            values: fields.require_f64_list("values")?,
            weights: fields.require_f64_list("weights")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedAverageResult {
    pub count: usize,
    pub weight_sum: f64,
    pub weighted_sum: f64,
    pub weighted_average: f64,
}

impl WeightedAverageResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("Weighted average: {}", fmt.number(self.weighted_average)),
            format!(
                "Σ w·x = {}, Σ w = {}",
                fmt.number(self.weighted_sum),
                fmt.number(self.weight_sum)
            ),
        ]
    }
}

/// Weighted average of values.
pub fn weighted_average(input: &WeightedAverageInput) -> CalcResult<WeightedAverageResult> {
    input.validate()?;
    let average = arithmetic::weighted_average(&input.values, &input.weights)?;
    Ok(WeightedAverageResult {
        count: input.values.len(),
        weight_sum: input.weights.iter().sum(),
        weighted_sum: input.values.iter().zip(&input.weights).map(|(v, w)| v * w).sum(),
        weighted_average: average,
    })
}
