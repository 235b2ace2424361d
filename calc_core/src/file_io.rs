//! # File I/O
//!
//! JSON persistence for worksheets, reports and settings files.
//!
//! - **Atomic saves**: data is written to a sibling `.tmp` file, synced to disk
//!   and renamed over the target, so a crash never leaves a half-written file
//! - **Version checks**: worksheets carry a schema version that is checked
//!   before the rest of the file is decoded
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::file_io::{load_worksheet, save_worksheet};
//! use calc_core::worksheet::Worksheet;
//! use std::path::Path;
//!
//! let sheet = Worksheet::new("Sam", "Homework");
//! let path = Path::new("homework.json");
//!
//! save_worksheet(&sheet, path).unwrap();
//! let loaded = load_worksheet(path).unwrap();
//! assert_eq!(loaded.meta.title, "Homework");
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::{CalcError, CalcResult};
use crate::settings::Settings;
use crate::worksheet::{Report, Worksheet, SCHEMA_VERSION};

/// `report.json` -> `report.json.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("calc"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Serialize `value` as pretty JSON and atomically replace `path` with it.
pub fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp_path = tmp_path_for(path);
    let tmp_display = tmp_path.display().to_string();

    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", &tmp_display, e.to_string()))?;
    tmp_file
        .write_all(json.as_bytes())
        .and_then(|_| tmp_file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            CalcError::file_error("write temp file", &tmp_display, e.to_string())
        })?;
    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), bytes = json.len(), "wrote file");
    Ok(())
}

fn read_file(path: &Path) -> CalcResult<String> {
    fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))
}

fn parse_json<T: DeserializeOwned>(contents: &str, path: &Path) -> CalcResult<T> {
    serde_json::from_str(contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Save a worksheet with an atomic write.
pub fn save_worksheet(sheet: &Worksheet, path: &Path) -> CalcResult<()> {
    write_json_atomic(sheet, path)?;
    info!(path = %path.display(), items = sheet.item_count(), "saved worksheet");
    Ok(())
}

/// Load a worksheet, checking its schema version first.
///
/// # Errors
///
/// * `CalcError::FileError` - the file could not be read
/// * `CalcError::VersionMismatch` - the file was written by an incompatible version
/// * `CalcError::SerializationError` - the file is not a valid worksheet
pub fn load_worksheet(path: &Path) -> CalcResult<Worksheet> {
    let contents = read_file(path)?;
    let raw: serde_json::Value = parse_json(&contents, path)?;
    let version = raw
        .pointer("/meta/version")
        .and_then(|v| v.as_str())
        .ok_or_else(|| CalcError::SerializationError {
            reason: format!("{} has no meta.version", path.display()),
        })?;
    validate_version(version)?;

    let sheet: Worksheet = serde_json::from_value(raw).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid worksheet in {}: {}", path.display(), e),
    })?;
    sheet.settings.validate()?;
    debug!(path = %path.display(), items = sheet.item_count(), "loaded worksheet");
    Ok(sheet)
}

/// Save an evaluated report with an atomic write.
pub fn save_report(report: &Report, path: &Path) -> CalcResult<()> {
    write_json_atomic(report, path)?;
    info!(path = %path.display(), entries = report.entries.len(), "saved report");
    Ok(())
}

/// Load a standalone settings file. Missing keys take their defaults.
pub fn load_settings(path: &Path) -> CalcResult<Settings> {
    let settings: Settings = parse_json(&read_file(path)?, path)?;
    settings.validate()?;
    Ok(settings)
}

pub fn save_settings(settings: &Settings, path: &Path) -> CalcResult<()> {
    settings.validate()?;
    write_json_atomic(settings, path)
}

/// `"1.2.3"` -> `(1, 2)`
fn major_minor(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.trim().split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = match parts.next() {
        Some(p) => p.parse().ok()?,
        None => 0,
    };
    Some((major, minor))
}

/// Accept files from the same major version. While the major version is 0,
/// files from a newer minor version are rejected.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };
    let (file_major, file_minor) = major_minor(file_version).ok_or_else(mismatch)?;
    let (major, minor) = major_minor(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_major != major || (major == 0 && file_minor > minor) {
        return Err(mismatch());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{Calculation, GcdInput, RomanInput};
    use crate::units::UnitSystem;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.json");

        let mut sheet = Worksheet::new("Sam", "Homework");
        sheet.settings.unit_system = UnitSystem::Metric;
        let id = sheet.add_item("Q1", Calculation::Gcd(GcdInput { values: vec![48, 18] }));

        save_worksheet(&sheet, &path).unwrap();
        let loaded = load_worksheet(&path).unwrap();

        assert_eq!(loaded.meta.title, "Homework");
        assert_eq!(loaded.settings.unit_system, UnitSystem::Metric);
        assert_eq!(loaded.get_item(&id), sheet.get_item(&id));
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.json");

        save_worksheet(&Worksheet::new("Sam", "A"), &path).unwrap();
        // Overwrite an existing file
        save_worksheet(&Worksheet::new("Sam", "B"), &path).unwrap();

        assert!(path.exists());
        assert!(!tmp_path_for(&path).exists());
        assert_eq!(load_worksheet(&path).unwrap().meta.title, "B");
    }

    #[test]
    fn test_tmp_path() {
        assert_eq!(tmp_path_for(Path::new("/a/report.json")), PathBuf::from("/a/report.json.tmp"));
        assert_eq!(tmp_path_for(Path::new("sheet")), PathBuf::from("sheet.tmp"));
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("0.1").is_ok());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("banana").is_err());
    }

    #[test]
    fn test_load_rejects_newer_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("future.json");

        let mut sheet = Worksheet::new("Sam", "Future");
        sheet.meta.version = "0.9.0".to_string();
        write_json_atomic(&sheet, &path).unwrap();

        let err = load_worksheet(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();

        let missing = load_worksheet(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(missing.error_code(), "FILE_ERROR");

        let garbage = dir.path().join("garbage.json");
        fs::write(&garbage, "{ not json").unwrap();
        assert_eq!(load_worksheet(&garbage).unwrap_err().error_code(), "SERIALIZATION_ERROR");

        let versionless = dir.path().join("versionless.json");
        fs::write(&versionless, r#"{ "items": {} }"#).unwrap();
        assert_eq!(load_worksheet(&versionless).unwrap_err().error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_settings_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        fs::write(&path, r#"{ "decimal_places": 2, "currency_symbol": "€" }"#).unwrap();
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.decimal_places, 2);
        assert_eq!(settings.currency_symbol, "€");
        assert!(settings.thousands_separator);

        fs::write(&path, r#"{ "decimal_places": 99 }"#).unwrap();
        assert_eq!(load_settings(&path).unwrap_err().field(), Some("decimal_places"));

        save_settings(&Settings::default(), &path).unwrap();
        assert_eq!(load_settings(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_save_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        let mut sheet = Worksheet::new("Sam", "Report");
        sheet.add_item("bad", Calculation::Roman(RomanInput { value: "VV".to_string() }));
        save_report(&sheet.evaluate(), &path).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["title"], "Report");
        assert_eq!(json["entries"][0]["outcome"]["failure"]["error"]["type"], "InvalidInput");
    }
}
