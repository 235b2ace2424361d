//! # Converters
//!
//! - **Length**: any of mm, cm, m, km, in, ft, yd, mi to any other (through
//!   meters, using the exact international definitions).
//! - **Time**: a duration in one unit expressed in every unit, plus a
//!   days/hours/minutes/seconds breakdown.
//! - **Date difference**: signed number of days and whole weeks between two
//!   ISO dates.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::conversion::{convert_length, LengthConversionInput};
//! use calc_core::units::LengthUnit;
//!
//! let input = LengthConversionInput { value: 1.0, from: LengthUnit::Mile, to: LengthUnit::Foot };
//! let result = convert_length(&input).unwrap();
//! assert!((result.result - 5280.0).abs() < 1e-9);
//! ```

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::require_non_negative;
use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::settings::Settings;
use crate::units::LengthUnit;

const LENGTH_UNITS: &str = "mm, cm, m, km, in, ft, yd, mi";

// ============================================================================
// Length
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthConversionInput {
    pub value: f64,
    pub from: LengthUnit,
    pub to: LengthUnit,
}

impl LengthConversionInput {
    pub fn validate(&self) -> CalcResult<()> {
        if !self.value.is_finite() {
            return Err(CalcError::invalid_input("value", self.value.to_string(), "Value must be finite"));
        }
        Ok(())
    }
}

impl FromFields for LengthConversionInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(LengthConversionInput {
            value: fields.require_f64("value")?,
            from: fields.require_choice("from", LengthUnit::parse, LENGTH_UNITS)?,
            to: fields.require_choice("to", LengthUnit::parse, LENGTH_UNITS)?,
        })
    }
}

/// A value expressed in one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthValue {
    pub unit: LengthUnit,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthConversionResult {
    pub value: f64,
    pub from: LengthUnit,
    pub to: LengthUnit,
    pub result: f64,

    /// The input in every supported unit
    pub all_units: Vec<LengthValue>,
}

impl LengthConversionResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        let mut lines = vec![format!(
            "{} {} = {} {}",
            fmt.number(self.value),
            self.from.symbol(),
            fmt.number(self.result),
            self.to.symbol()
        )];
        lines.extend(
            self.all_units
                .iter()
                .map(|v| format!("  {:>3}: {}", v.unit.symbol(), fmt.number(v.value))),
        );
        lines
    }
}

pub fn convert_length(input: &LengthConversionInput) -> CalcResult<LengthConversionResult> {
    input.validate()?;
    Ok(LengthConversionResult {
        value: input.value,
        from: input.from,
        to: input.to,
        result: input.from.convert(input.value, input.to),
        all_units: LengthUnit::ALL
            .iter()
            .map(|&unit| LengthValue {
                unit,
                value: input.from.convert(input.value, unit),
            })
            .collect(),
    })
}

// ============================================================================
// Time
// ============================================================================

/// Longest duration accepted, in seconds (about 31.7 million years)
pub const MAX_SECONDS: f64 = 1.0e15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
    ];

    pub fn seconds_per_unit(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3600.0,
            TimeUnit::Days => 86_400.0,
            TimeUnit::Weeks => 604_800.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => Some(TimeUnit::Seconds),
            "min" | "minute" | "minutes" => Some(TimeUnit::Minutes),
            "h" | "hr" | "hour" | "hours" => Some(TimeUnit::Hours),
            "d" | "day" | "days" => Some(TimeUnit::Days),
            "w" | "wk" | "week" | "weeks" => Some(TimeUnit::Weeks),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeConversionInput {
    pub value: f64,
    pub unit: TimeUnit,
}

impl TimeConversionInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("value", self.value)?;
        if self.value * self.unit.seconds_per_unit() > MAX_SECONDS {
            return Err(CalcError::invalid_input(
                "value",
                self.value.to_string(),
                "Duration is too long",
            ));
        }
        Ok(())
    }
}

impl FromFields for TimeConversionInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(TimeConversionInput {
            value: fields.require_f64("value")?,
            unit: fields.require_choice("unit", TimeUnit::parse, "seconds, minutes, hours, days, weeks")?,
        })
    }
}

/// Whole days, hours, minutes and (fractional) seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: f64,
}

impl TimeBreakdown {
    fn from_duration(duration: Duration) -> Self {
        let ms = duration.num_milliseconds();
        TimeBreakdown {
            days: duration.num_days(),
            hours: duration.num_hours() % 24,
            minutes: duration.num_minutes() % 60,
            seconds: (ms % 60_000) as f64 / 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeConversionResult {
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
    pub weeks: f64,
    pub breakdown: TimeBreakdown,
}

impl TimeConversionResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        let b = &self.breakdown;
        let mut lines: Vec<String> = [
            (TimeUnit::Seconds, self.seconds),
            (TimeUnit::Minutes, self.minutes),
            (TimeUnit::Hours, self.hours),
            (TimeUnit::Days, self.days),
            (TimeUnit::Weeks, self.weeks),
        ]
        .iter()
        .map(|(unit, v)| format!("{:>8}: {}", unit.name(), fmt.number(*v)))
        .collect();
        lines.push(format!(
            "{}d {}h {}m {}s",
            b.days,
            b.hours,
            b.minutes,
            fmt.number(b.seconds)
        ));
        lines
    }
}

pub fn convert_time(input: &TimeConversionInput) -> CalcResult<TimeConversionResult> {
    input.validate()?;
    let seconds = input.value * input.unit.seconds_per_unit();
    // Bounded by MAX_SECONDS, so the millisecond count fits in i64
    let duration = Duration::milliseconds((seconds * 1000.0).round() as i64);
    let in_unit = |unit: TimeUnit| seconds / unit.seconds_per_unit();
    Ok(TimeConversionResult {
        seconds,
        minutes: in_unit(TimeUnit::Minutes),
        hours: in_unit(TimeUnit::Hours),
        days: in_unit(TimeUnit::Days),
        weeks: in_unit(TimeUnit::Weeks),
        breakdown: TimeBreakdown::from_duration(duration),
    })
}

// ============================================================================
// Date difference
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateDifferenceInput {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateDifferenceInput {
    // NaiveDate is always a valid calendar date
    pub fn validate(&self) -> CalcResult<()> {
        Ok(())
    }
}

fn parse_date(fields: &FieldMap, name: &str) -> CalcResult<NaiveDate> {
    let raw = fields.require_str(name)?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CalcError::not_numeric(name, raw, "date as YYYY-MM-DD"))
}

impl FromFields for DateDifferenceInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(DateDifferenceInput {
            start: parse_date(fields, "start")?,
            end: parse_date(fields, "end")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateDifferenceResult {
    pub start: NaiveDate,
    pub end: NaiveDate,

    /// end − start; negative when end is earlier
    pub days: i64,

    /// Whole weeks in |days|
    pub weeks: i64,
    pub remaining_days: i64,
}

impl DateDifferenceResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("From {} to {}: {} days", self.start, self.end, fmt.integer(self.days)),
            format!("= {} weeks and {} days", fmt.integer(self.weeks), self.remaining_days),
        ]
    }
}

pub fn date_difference(input: &DateDifferenceInput) -> CalcResult<DateDifferenceResult> {
    input.validate()?;
    let days = input.end.signed_duration_since(input.start).num_days();
    Ok(DateDifferenceResult {
        start: input.start,
        end: input.end,
        days,
        weeks: days.abs() / 7,
        remaining_days: days.abs() % 7,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_all_units() {
        let input = LengthConversionInput { value: 1.0, from: LengthUnit::Yard, to: LengthUnit::Inch };
        let result = convert_length(&input).unwrap();
        assert!((result.result - 36.0).abs() < 1e-9);
        assert_eq!(result.all_units.len(), 8);
        let meters = result.all_units.iter().find(|v| v.unit == LengthUnit::Meter).unwrap();
        assert!((meters.value - 0.9144).abs() < 1e-12);
    }

    #[test]
    fn test_length_from_fields() {
        let fields = FieldMap::parse_pairs(["value=10", "from=km", "to=miles"]).unwrap();
        let result = convert_length(&LengthConversionInput::from_fields(&fields).unwrap()).unwrap();
        assert!((result.result - 6.213_711_922).abs() < 1e-8);

        let fields = FieldMap::parse_pairs(["value=10", "from=parsec", "to=m"]).unwrap();
        assert_eq!(
            LengthConversionInput::from_fields(&fields).unwrap_err().field(),
            Some("from")
        );
    }

    #[test]
    fn test_time_breakdown() {
        let input = TimeConversionInput { value: 100_000.5, unit: TimeUnit::Seconds };
        let result = convert_time(&input).unwrap();
        // 1 day, 3 hours, 46 minutes, 40.5 seconds
        assert_eq!(result.breakdown.days, 1);
        assert_eq!(result.breakdown.hours, 3);
        assert_eq!(result.breakdown.minutes, 46);
        assert!((result.breakdown.seconds - 40.5).abs() < 1e-9);

        let week = convert_time(&TimeConversionInput { value: 1.0, unit: TimeUnit::Weeks }).unwrap();
        assert_eq!(week.hours, 168.0);
        assert!(convert_time(&TimeConversionInput { value: -1.0, unit: TimeUnit::Days }).is_err());
    }

    #[test]
    fn test_date_difference() {
        let fields = FieldMap::parse_pairs(["start=2024-01-01", "end=2024-03-01"]).unwrap();
        let result = date_difference(&DateDifferenceInput::from_fields(&fields).unwrap()).unwrap();
        // 2024 is a leap year
        assert_eq!(result.days, 60);
        assert_eq!(result.weeks, 8);
        assert_eq!(result.remaining_days, 4);

        let backwards = DateDifferenceInput { start: result.end, end: result.start };
        assert_eq!(date_difference(&backwards).unwrap().days, -60);

        let bad = FieldMap::parse_pairs(["start=2024-02-30", "end=2024-03-01"]).unwrap();
        assert_eq!(
            DateDifferenceInput::from_fields(&bad).unwrap_err().error_code(),
            "NOT_NUMERIC"
        );
    }
}
