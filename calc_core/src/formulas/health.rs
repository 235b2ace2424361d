//! # Health Formulas
//!
//! Body mass index and basal metabolic rate. Inputs are metric
//! (kilograms, centimeters, years).

/// Body mass index: BMI = kg / m²
///
/// # Example
/// ```rust
/// use calc_core::formulas::health::bmi;
/// let v = bmi(70.0, 175.0);
/// assert!((v - 22.857).abs() < 1e-3);
/// ```
#[inline]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal metabolic rate (kcal/day), Mifflin-St Jeor.
///
/// ```text
/// BMR = 10 w + 6.25 h − 5 a + s
/// s   = +5 (male), −161 (female)
/// ```
#[inline]
pub fn mifflin_st_jeor_bmr(weight_kg: f64, height_cm: f64, age_years: f64, male: bool) -> f64 {
    let s = if male { 5.0 } else { -161.0 };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years + s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_reference_values() {
        // 80 kg, 180 cm, 30 y male: 800 + 1125 - 150 + 5
        assert_eq!(mifflin_st_jeor_bmr(80.0, 180.0, 30.0, true), 1780.0);
        // same body, female: 800 + 1125 - 150 - 161
        assert_eq!(mifflin_st_jeor_bmr(80.0, 180.0, 30.0, false), 1614.0);
    }
}
