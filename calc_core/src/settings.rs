//! # User Settings
//!
//! Display and default-unit preferences. Settings travel inside every
//! worksheet (see [`crate::worksheet`]) and can also be loaded on their own
//! from a JSON file with [`crate::file_io::load_settings`].
//!
//! Missing keys fall back to their defaults, so a settings file may contain
//! only the values a user wants to change:
//!
//! ```rust
//! use calc_core::settings::Settings;
//! use calc_core::units::UnitSystem;
//!
//! let settings: Settings = serde_json::from_str(r#"{ "unit_system": "metric" }"#).unwrap();
//! assert_eq!(settings.unit_system, UnitSystem::Metric);
//! assert_eq!(settings.decimal_places, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

/// Largest supported number of displayed decimals
pub const MAX_DECIMAL_PLACES: usize = 12;

/// Display and default-unit preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum decimal places shown in summaries
    pub decimal_places: usize,

    /// Group thousands with commas in summaries
    pub thousands_separator: bool,

    /// Symbol placed before money amounts
    pub currency_symbol: String,

    /// Unit system used when an estimator input does not name one
    pub unit_system: UnitSystem,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            decimal_places: 4,
            thousands_separator: true,
            currency_symbol: "$".to_string(),
            unit_system: UnitSystem::Imperial,
        }
    }
}

impl Settings {
    /// Validate setting values.
    pub fn validate(&self) -> CalcResult<()> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(CalcError::invalid_input(
                "decimal_places",
                self.decimal_places.to_string(),
                format!("At most {} decimal places are supported", MAX_DECIMAL_PLACES),
            ));
        }
        Ok(())
    }
}
