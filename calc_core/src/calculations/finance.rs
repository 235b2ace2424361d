//! # Finance Calculations
//!
//! - **VAT**: add tax to a net amount or extract it from a gross amount.
//! - **Simple interest**: I = P × r × t
//! - **Compound interest**: A = P (1 + r/n)^(n t), with a year-end balance
//!   schedule.
//!
//! Rates are annual percentages.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::finance::{vat, VatInput, VatMode};
//!
//! let result = vat(&VatInput { amount: 120.0, rate: 20.0, mode: VatMode::Remove }).unwrap();
//! assert!((result.net - 100.0).abs() < 1e-9);
//! assert!((result.vat - 20.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::require_non_negative;
use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::formulas::finance as fin;
use crate::settings::Settings;

/// Longest investment horizon accepted, years
pub const MAX_YEARS: f64 = 100.0;

/// Largest compounding frequency accepted (daily)
pub const MAX_PERIODS_PER_YEAR: u32 = 365;

fn check_years(years: f64) -> CalcResult<()> {
    require_non_negative("years", years)?;
    if years > MAX_YEARS {
        return Err(CalcError::invalid_input(
            "years",
            years.to_string(),
            format!("At most {} years are supported", MAX_YEARS),
        ));
    }
    Ok(())
}

// ============================================================================
// VAT
// ============================================================================

/// Direction of a VAT calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatMode {
    /// Amount is net; add VAT on top
    #[default]
    Add,
    /// Amount is gross; extract the VAT it contains
    Remove,
}

impl VatMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "net" | "+" => Some(VatMode::Add),
            "remove" | "gross" | "extract" | "-" => Some(VatMode::Remove),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatInput {
    pub amount: f64,

    /// VAT rate, percent
    pub rate: f64,

    #[serde(default)]
    pub mode: VatMode,
}

impl VatInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("amount", self.amount)?;
        require_non_negative("rate", self.rate)?;
        if self.rate > 100.0 {
            return Err(CalcError::invalid_input(
                "rate",
                self.rate.to_string(),
                "VAT rate must be at most 100 percent",
            ));
        }
        Ok(())
    }
}

impl FromFields for VatInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(VatInput {
            amount: fields.require_f64("amount")?,
            rate: fields.require_f64("rate")?,
            mode: fields.choice_or("mode", VatMode::parse, "add, remove", VatMode::Add)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatResult {
    pub mode: VatMode,
    pub rate: f64,
    pub net: f64,
    pub vat: f64,
    pub gross: f64,
}

impl VatResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        let sym = &settings.currency_symbol;
        vec![
            format!("Net:   {}", fmt.money(self.net, sym)),
            format!("VAT ({}%): {}", fmt.number(self.rate), fmt.money(self.vat, sym)),
            format!("Gross: {}", fmt.money(self.gross, sym)),
        ]
    }
}

pub fn vat(input: &VatInput) -> CalcResult<VatResult> {
    input.validate()?;
    let (net, vat, gross) = match input.mode {
        VatMode::Add => {
            let (vat, gross) = fin::vat_add(input.amount, input.rate);
            (input.amount, vat, gross)
        }
        VatMode::Remove => {
            let (net, vat) = fin::vat_remove(input.amount, input.rate);
            (net, vat, input.amount)
        }
    };
    Ok(VatResult {
        mode: input.mode,
        rate: input.rate,
        net,
        vat,
        gross,
    })
}

// ============================================================================
// Simple interest
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    pub principal: f64,

    /// Annual rate, percent
    pub rate: f64,

    pub years: f64,
}

impl SimpleInterestInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("principal", self.principal)?;
        require_non_negative("rate", self.rate)?;
        check_years(self.years)
    }
}

impl FromFields for SimpleInterestInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(SimpleInterestInput {
            principal: fields.require_f64("principal")?,
            rate: fields.require_f64("rate")?,
            years: fields.require_f64("years")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub interest: f64,
    pub total: f64,
}

impl SimpleInterestResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        let sym = &settings.currency_symbol;
        vec![
            format!("Interest: {}", fmt.money(self.interest, sym)),
            format!("Total:    {}", fmt.money(self.total, sym)),
        ]
    }
}

pub fn simple_interest(input: &SimpleInterestInput) -> CalcResult<SimpleInterestResult> {
    input.validate()?;
    let interest = fin::simple_interest(input.principal, input.rate, input.years);
    Ok(SimpleInterestResult {
        interest,
        total: input.principal + interest,
    })
}

// ============================================================================
// Compound interest
// ============================================================================

fn default_periods() -> u32 {
    12
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: f64,

    /// Annual rate, percent
    pub rate: f64,

    pub years: f64,

    /// Compounding periods per year (1 annual, 12 monthly, 365 daily)
    #[serde(default = "default_periods")]
    pub periods_per_year: u32,
}

impl CompoundInterestInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("principal", self.principal)?;
        require_non_negative("rate", self.rate)?;
        check_years(self.years)?;
        if !(1..=MAX_PERIODS_PER_YEAR).contains(&self.periods_per_year) {
            return Err(CalcError::invalid_input(
                "periods_per_year",
                self.periods_per_year.to_string(),
                format!("Compounding periods must be between 1 and {}", MAX_PERIODS_PER_YEAR),
            ));
        }
        Ok(())
    }
}

impl FromFields for CompoundInterestInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        let periods_per_year = match fields.raw("periods") {
            Some(_) => fields.require_u32("periods")?,
            None => default_periods(),
        };
        Ok(CompoundInterestInput {
            principal: fields.require_f64("principal")?,
            rate: fields.require_f64("rate")?,
            years: fields.require_f64("years")?,
            periods_per_year,
        })
    }
}

/// Balance at the end of a whole year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearBalance {
    pub year: u32,
    pub balance: f64,
    pub interest_to_date: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub total: f64,
    pub interest: f64,

    /// Annual rate equivalent to the compounded rate, percent
    pub effective_annual_rate: f64,

    pub schedule: Vec<YearBalance>,
}

impl CompoundInterestResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        let sym = &settings.currency_symbol;
        let mut lines = vec![
            format!("Future value:   {}", fmt.money(self.total, sym)),
            format!("Interest:       {}", fmt.money(self.interest, sym)),
            format!("Effective rate: {}%", fmt.number(self.effective_annual_rate)),
        ];
        lines.extend(self.schedule.iter().map(|y| {
            format!("  Year {:>3}: {}", y.year, fmt.money(y.balance, sym))
        }));
        lines
    }
}

pub fn compound_interest(input: &CompoundInterestInput) -> CalcResult<CompoundInterestResult> {
    input.validate()?;
    let total = fin::compound_interest_total(input.principal, input.rate, input.periods_per_year, input.years);
    let effective = fin::compound_interest_total(1.0, input.rate, input.periods_per_year, 1.0) - 1.0;
    // years <= MAX_YEARS, so the cast is exact
    let schedule = (1..=input.years.floor() as u32)
        .map(|year| {
            let balance = fin::compound_interest_total(
                input.principal,
                input.rate,
                input.periods_per_year,
                year as f64,
            );
            YearBalance {
                year,
                balance,
                interest_to_date: balance - input.principal,
            }
        })
        .collect();
    Ok(CompoundInterestResult {
        total,
        interest: total - input.principal,
        effective_annual_rate: effective * 100.0,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vat_add_and_remove() {
        let added = vat(&VatInput { amount: 100.0, rate: 20.0, mode: VatMode::Add }).unwrap();
        assert!((added.gross - 120.0).abs() < 1e-9);
        let removed = vat(&VatInput { amount: added.gross, rate: 20.0, mode: VatMode::Remove }).unwrap();
        assert!((removed.net - 100.0).abs() < 1e-9);
        assert!(vat(&VatInput { amount: 100.0, rate: 120.0, mode: VatMode::Add }).is_err());
    }

    #[test]
    fn test_vat_mode_field() {
        let fields = FieldMap::parse_pairs(["amount=59.5", "rate=19", "mode=remove"]).unwrap();
        let result = vat(&VatInput::from_fields(&fields).unwrap()).unwrap();
        assert!((result.net - 50.0).abs() < 1e-9);
        assert!((result.vat - 9.5).abs() < 1e-9);
    }

    #[test]
    fn test_simple_interest() {
        let result = simple_interest(&SimpleInterestInput { principal: 1000.0, rate: 5.0, years: 3.0 }).unwrap();
        assert!((result.interest - 150.0).abs() < 1e-9);
        assert!((result.total - 1150.0).abs() < 1e-9);
        assert!(simple_interest(&SimpleInterestInput { principal: -1.0, rate: 5.0, years: 3.0 }).is_err());
    }

    #[test]
    fn test_compound_interest() {
        let input = CompoundInterestInput { principal: 1000.0, rate: 5.0, years: 2.0, periods_per_year: 1 };
        let result = compound_interest(&input).unwrap();
        assert!((result.total - 1102.5).abs() < 1e-9);
        assert!((result.effective_annual_rate - 5.0).abs() < 1e-9);
        assert_eq!(result.schedule.len(), 2);
        assert!((result.schedule[0].balance - 1050.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_default_and_limits() {
        let fields = FieldMap::parse_pairs(["principal=1000", "rate=12", "years=1"]).unwrap();
        let input = CompoundInterestInput::from_fields(&fields).unwrap();
        assert_eq!(input.periods_per_year, 12);
        let result = compound_interest(&input).unwrap();
        assert!((result.total - 1000.0 * 1.01f64.powi(12)).abs() < 1e-9);

        let input = CompoundInterestInput { periods_per_year: 0, ..input };
        assert_eq!(compound_interest(&input).unwrap_err().field(), Some("periods_per_year"));
    }
}
