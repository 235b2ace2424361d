//! # Descriptive Statistics
//!
//! Single-pass closed-form statistics over `f64` samples. The only policy
//! choice is the variance divisor, selected by [`Dispersion`]:
//!
//! - `Population`: divide by N
//! - `Sample`: divide by N − 1 (Bessel's correction), requires N ≥ 2

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Whether the data is a whole population or a sample drawn from one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dispersion {
    Population,
    #[default]
    Sample,
}

impl Dispersion {
    /// Parse "population"/"p" or "sample"/"s"
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "population" | "pop" | "p" => Some(Dispersion::Population),
            "sample" | "s" => Some(Dispersion::Sample),
            _ => None,
        }
    }

    /// Variance divisor for `n` values
    pub fn divisor(&self, n: usize) -> f64 {
        match self {
            Dispersion::Population => n as f64,
            Dispersion::Sample => (n as f64) - 1.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Dispersion::Population => "population",
            Dispersion::Sample => "sample",
        }
    }
}

fn require_values(values: &[f64], min: usize) -> CalcResult<()> {
    if values.len() < min {
        return Err(CalcError::invalid_input(
            "values",
            format!("{} value(s)", values.len()),
            format!("At least {} value(s) required", min),
        ));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(CalcError::invalid_input(
            "values",
            bad.to_string(),
            "Values must be finite numbers",
        ));
    }
    Ok(())
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> CalcResult<f64> {
    require_values(values, 1)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median (average of the two middle values for even counts).
pub fn median(values: &[f64]) -> CalcResult<f64> {
    require_values(values, 1)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Variance with the chosen divisor.
pub fn variance(values: &[f64], dispersion: Dispersion) -> CalcResult<f64> {
    let min = match dispersion {
        Dispersion::Population => 1,
        Dispersion::Sample => 2,
    };
    require_values(values, min)?;
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Ok(sum_sq / dispersion.divisor(values.len()))
}

/// Standard deviation: √variance.
///
/// # Example
/// ```rust
/// use calc_core::arithmetic::{standard_deviation, Dispersion};
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let pop = standard_deviation(&data, Dispersion::Population).unwrap();
/// let sample = standard_deviation(&data, Dispersion::Sample).unwrap();
/// assert!((pop - 1.4142).abs() < 1e-4);
/// assert!((sample - 1.5811).abs() < 1e-4);
/// ```
pub fn standard_deviation(values: &[f64], dispersion: Dispersion) -> CalcResult<f64> {
    variance(values, dispersion).map(f64::sqrt)
}

/// Geometric mean: (∏ xᵢ)^(1/N), computed in log space. All values must be positive.
pub fn geometric_mean(values: &[f64]) -> CalcResult<f64> {
    require_values(values, 1)?;
    if let Some(bad) = values.iter().find(|v| **v <= 0.0) {
        return Err(CalcError::invalid_input(
            "values",
            bad.to_string(),
            "Geometric mean requires all values to be positive",
        ));
    }
    let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
    Ok((log_sum / values.len() as f64).exp())
}

/// Weighted average: Σ wᵢxᵢ / Σ wᵢ.
pub fn weighted_average(values: &[f64], weights: &[f64]) -> CalcResult<f64> {
    require_values(values, 1)?;
    if weights.len() != values.len() {
        return Err(CalcError::invalid_input(
            "weights",
            format!("{} weight(s)", weights.len()),
            format!("Expected one weight per value ({})", values.len()),
        ));
    }
    if let Some(bad) = weights.iter().find(|w| !w.is_finite()) {
        return Err(CalcError::invalid_input(
            "weights",
            bad.to_string(),
            "Weights must be finite numbers",
        ));
    }
    let weight_sum: f64 = weights.iter().sum();
    if weight_sum == 0.0 {
        return Err(CalcError::invalid_input("weights", "0", "Weights must not sum to zero"));
    }
    let weighted: f64 = values.iter().zip(weights).map(|(v, w)| v * w).sum();
    Ok(weighted / weight_sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

    #[test]
    fn test_mean_median() {
        assert_eq!(mean(&DATA).unwrap(), 3.0);
        assert_eq!(median(&[5.0, 1.0, 3.0]).unwrap(), 3.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_standard_deviation_divisors() {
        let pop = standard_deviation(&DATA, Dispersion::Population).unwrap();
        let sample = standard_deviation(&DATA, Dispersion::Sample).unwrap();
        assert!((pop - 2.0f64.sqrt()).abs() < 1e-12);
        assert!((sample - 2.5f64.sqrt()).abs() < 1e-12);
        assert!(sample > pop);
    }

    #[test]
    fn test_sample_requires_two_values() {
        assert!(standard_deviation(&[4.0], Dispersion::Sample).is_err());
        assert_eq!(standard_deviation(&[4.0], Dispersion::Population).unwrap(), 0.0);
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_geometric_mean() {
        assert!((geometric_mean(&[2.0, 8.0]).unwrap() - 4.0).abs() < 1e-12);
        assert!(geometric_mean(&[2.0, 0.0]).is_err());
        assert!(geometric_mean(&[2.0, -8.0]).is_err());
    }

    #[test]
    fn test_weighted_average() {
        let avg = weighted_average(&[90.0, 80.0], &[3.0, 1.0]).unwrap();
        assert!((avg - 87.5).abs() < 1e-12);
        assert_eq!(weighted_average(&[1.0], &[1.0, 2.0]).unwrap_err().field(), Some("weights"));
        assert!(weighted_average(&[1.0, 2.0], &[1.0, -1.0]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(mean(&[1.0, f64::NAN]).is_err());
    }
}
