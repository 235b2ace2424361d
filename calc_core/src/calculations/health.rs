//! # Health Calculations
//!
//! - **BMI**: kg / m² with the WHO adult weight category.
//! - **TDEE**: Mifflin-St Jeor BMR × activity multiplier, with the usual
//!   ±500 kcal/day targets for losing or gaining about 0.5 kg per week.
//!
//! Inputs are metric.

use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::errors::{CalcError, CalcResult};
use crate::fields::{FieldMap, FromFields};
use crate::format::NumberFormat;
use crate::formulas::health as hf;
use crate::settings::Settings;

/// Daily energy change for roughly 0.5 kg per week, kcal
pub const WEEKLY_HALF_KG_KCAL: f64 = 500.0;

fn check_body(weight_kg: f64, height_cm: f64) -> CalcResult<()> {
    require_positive("weight_kg", weight_kg)?;
    require_positive("height_cm", height_cm)?;
    if height_cm > 300.0 {
        return Err(CalcError::invalid_input(
            "height_cm",
            height_cm.to_string(),
            "Height is entered in centimeters",
        ));
    }
    Ok(())
}

// ============================================================================
// BMI
// ============================================================================

/// WHO adult BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl BmiInput {
    pub fn validate(&self) -> CalcResult<()> {
        check_body(self.weight_kg, self.height_cm)
    }
}

impl FromFields for BmiInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(BmiInput {
            weight_kg: fields.require_f64("weight")?,
            height_cm: fields.require_f64("height")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,

    /// Weights giving a BMI of 18.5 and 24.9 at this height, kg
    pub healthy_weight_range: (f64, f64),
}

impl BmiResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::from(settings);
        vec![
            format!("BMI: {} ({})", fmt.number(self.bmi), self.category.display_name()),
            format!(
                "Healthy weight for this height: {} to {} kg",
                fmt.number(self.healthy_weight_range.0),
                fmt.number(self.healthy_weight_range.1)
            ),
        ]
    }
}

pub fn bmi(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;
    let bmi = hf::bmi(input.weight_kg, input.height_cm);
    let m = input.height_cm / 100.0;
    Ok(BmiResult {
        bmi,
        category: BmiCategory::from_bmi(bmi),
        healthy_weight_range: (18.5 * m * m, 24.9 * m * m),
    })
}

// ============================================================================
// TDEE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Activity level and its TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Exercise 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Hard daily exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" | "lightly_active" => Some(ActivityLevel::Light),
            "moderate" | "moderately_active" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" | "extra" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdeeInput {
    pub sex: Sex,
    pub age: f64,
    pub weight_kg: f64,
    pub height_cm: f64,

    #[serde(default)]
    pub activity: ActivityLevel,
}

impl TdeeInput {
    pub fn validate(&self) -> CalcResult<()> {
        check_body(self.weight_kg, self.height_cm)?;
        // Mifflin-St Jeor is an adult equation
        if !(15.0..=120.0).contains(&self.age) {
            return Err(CalcError::invalid_input(
                "age",
                self.age.to_string(),
                "Age must be between 15 and 120 years",
            ));
        }
        Ok(())
    }
}

impl FromFields for TdeeInput {
    fn from_fields(fields: &FieldMap) -> CalcResult<Self> {
        Ok(TdeeInput {
            sex: fields.require_choice("sex", Sex::parse, "male, female")?,
            age: fields.require_f64("age")?,
            weight_kg: fields.require_f64("weight")?,
            height_cm: fields.require_f64("height")?,
            activity: fields.choice_or(
                "activity",
                ActivityLevel::parse,
                "sedentary, light, moderate, active, very_active",
                ActivityLevel::Sedentary,
            )?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdeeResult {
    /// Basal metabolic rate, kcal/day
    pub bmr: f64,
    pub multiplier: f64,

    /// Total daily energy expenditure, kcal/day
    pub tdee: f64,

    pub lose_weight: f64,
    pub gain_weight: f64,
}

impl TdeeResult {
    pub fn summary(&self, settings: &Settings) -> Vec<String> {
        let fmt = NumberFormat::new(0, settings.thousands_separator);
        vec![
            format!("BMR:  {} kcal/day", fmt.number(self.bmr)),
            format!("TDEE: {} kcal/day (× {})", fmt.number(self.tdee), self.multiplier),
            format!("Lose ~0.5 kg/week: {} kcal/day", fmt.number(self.lose_weight)),
            format!("Gain ~0.5 kg/week: {} kcal/day", fmt.number(self.gain_weight)),
        ]
    }
}

pub fn tdee(input: &TdeeInput) -> CalcResult<TdeeResult> {
    input.validate()?;
    let bmr = hf::mifflin_st_jeor_bmr(input.weight_kg, input.height_cm, input.age, input.sex == Sex::Male);
    let multiplier = input.activity.multiplier();
    let tdee = bmr * multiplier;
    Ok(TdeeResult {
        bmr,
        multiplier,
        tdee,
        lose_weight: (tdee - WEEKLY_HALF_KG_KCAL).max(0.0),
        gain_weight: tdee + WEEKLY_HALF_KG_KCAL,
    })
}
