//! # Worksheets
//!
//! A `Worksheet` is a saved set of labelled calculations together with the
//! display settings used to report them. Worksheets serialize as
//! human-readable JSON (see [`crate::file_io`]).
//!
//! ## Structure
//!
//! ```text
//! Worksheet
//! ├── meta: WorksheetMetadata (version, author, title, timestamps)
//! ├── settings: Settings (precision, currency, unit system)
//! └── items: HashMap<Uuid, WorksheetItem> (label + calculation)
//! ```
//!
//! Evaluating a worksheet produces a [`Report`] with one entry per item. An
//! item that fails validation becomes a failure entry; the other items are
//! still evaluated.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{Calculation, GcdInput};
//! use calc_core::worksheet::Worksheet;
//!
//! let mut sheet = Worksheet::new("Sam", "Homework");
//! sheet.add_item("Q1", Calculation::Gcd(GcdInput { values: vec![48, 18] }));
//!
//! let report = sheet.evaluate();
//! assert_eq!(report.succeeded(), 1);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::calculations::{Calculation, CalculationOutput};
use crate::errors::CalcError;
use crate::settings::Settings;

/// Current schema version for worksheet files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root worksheet container.
///
/// Items are stored in a flat UUID-keyed map; reports list them by label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    pub meta: WorksheetMetadata,

    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub items: HashMap<Uuid, WorksheetItem>,
}

/// Worksheet metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub author: String,
    pub title: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// A labelled calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetItem {
    pub label: String,
    pub calculation: Calculation,
}

impl Worksheet {
    /// Create a new empty worksheet with default settings.
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Worksheet {
            meta: WorksheetMetadata {
                version: SCHEMA_VERSION.to_string(),
                author: author.into(),
                title: title.into(),
                created: now,
                modified: now,
            },
            settings: Settings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a labelled calculation, returning its id.
    pub fn add_item(&mut self, label: impl Into<String>, calculation: Calculation) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(
            id,
            WorksheetItem {
                label: label.into(),
                calculation,
            },
        );
        self.touch();
        id
    }

    /// Remove an item by id, returning it if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<WorksheetItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    pub fn get_item(&self, id: &Uuid) -> Option<&WorksheetItem> {
        self.items.get(id)
    }

    /// Mutable access to an item; marks the worksheet as modified when found.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut WorksheetItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Items ordered by label, then id
    pub fn sorted_items(&self) -> Vec<(&Uuid, &WorksheetItem)> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by(|(a_id, a), (b_id, b)| a.label.cmp(&b.label).then(a_id.cmp(b_id)));
        items
    }

    /// Evaluate every item with the worksheet's settings.
    pub fn evaluate(&self) -> Report {
        debug!(title = %self.meta.title, items = self.items.len(), "evaluating worksheet");
        let entries = self
            .sorted_items()
            .into_iter()
            .map(|(id, item)| ReportEntry {
                id: *id,
                label: item.label.clone(),
                calc_type: item.calculation.calc_type().to_string(),
                outcome: match item.calculation.evaluate() {
                    Ok(output) => EntryOutcome::Success {
                        summary: output.summary(&self.settings),
                        output,
                    },
                    Err(error) => EntryOutcome::Failure { error },
                },
            })
            .collect();
        Report {
            title: self.meta.title.clone(),
            generated: Utc::now(),
            entries,
        }
    }
}

impl Default for Worksheet {
    fn default() -> Self {
        Worksheet::new("", "")
    }
}

/// Result of evaluating a worksheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub generated: DateTime<Utc>,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }

    /// Plain-text rendering, one block per entry
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{} ({} ok, {} failed)",
            if self.title.is_empty() { "Worksheet" } else { &self.title },
            self.succeeded(),
            self.failed()
        )];
        for entry in &self.entries {
            lines.push(String::new());
            lines.push(format!("[{}] {}", entry.calc_type, entry.label));
            match &entry.outcome {
                EntryOutcome::Success { summary, .. } => {
                    lines.extend(summary.iter().map(|l| format!("  {}", l)));
                }
                EntryOutcome::Failure { error } => {
                    lines.push(format!("  error ({}): {}", error.error_code(), error));
                }
            }
        }
        lines
    }
}

/// One evaluated worksheet item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub id: Uuid,
    pub label: String,
    pub calc_type: String,
    pub outcome: EntryOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOutcome {
    Success {
        output: CalculationOutput,
        summary: Vec<String>,
    },
    Failure {
        error: CalcError,
    },
}

impl EntryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EntryOutcome::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{CombinatoricsInput, GcdInput, RomanInput};

    #[test]
    fn test_worksheet_creation() {
        let sheet = Worksheet::new("Sam", "Homework");
        assert_eq!(sheet.meta.author, "Sam");
        assert_eq!(sheet.meta.version, SCHEMA_VERSION);
        assert_eq!(sheet.item_count(), 0);
    }

    #[test]
    fn test_add_remove_item() {
        let mut sheet = Worksheet::new("Sam", "Homework");
        let id = sheet.add_item("Q1", Calculation::Gcd(GcdInput { values: vec![12, 8] }));
        assert_eq!(sheet.item_count(), 1);
        assert_eq!(sheet.get_item(&id).unwrap().label, "Q1");

        sheet.get_item_mut(&id).unwrap().label = "Question 1".to_string();
        assert_eq!(sheet.get_item(&id).unwrap().label, "Question 1");

        assert!(sheet.remove_item(&id).is_some());
        assert!(sheet.remove_item(&id).is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut sheet = Worksheet::new("Sam", "Homework");
        sheet.add_item("nCr", Calculation::Combinatorics(CombinatoricsInput { n: 5, r: 2 }));
        let json = serde_json::to_string_pretty(&sheet).unwrap();
        assert!(json.contains("\"type\": \"Combinatorics\""));

        let back: Worksheet = serde_json::from_str(&json).unwrap();
        assert_eq!(back.item_count(), 1);
        assert_eq!(back.items.values().next(), sheet.items.values().next());
    }

    #[test]
    fn test_evaluate_keeps_going_after_failure() {
        let mut sheet = Worksheet::new("Sam", "Mixed");
        sheet.add_item("b-bad", Calculation::Roman(RomanInput { value: "IIII".to_string() }));
        sheet.add_item("a-good", Calculation::Gcd(GcdInput { values: vec![48, 18] }));

        let report = sheet.evaluate();
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        // Sorted by label
        assert_eq!(report.entries[0].label, "a-good");
        match &report.entries[1].outcome {
            EntryOutcome::Failure { error } => assert_eq!(error.field(), Some("numeral")),
            other => panic!("expected failure, got {:?}", other),
        }

        let text = report.render();
        assert!(text[0].contains("1 ok, 1 failed"));
        assert!(text.iter().any(|l| l.contains("GCD(48, 18) = 6")));
    }
}
