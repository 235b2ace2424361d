//! # Reckon CLI
//!
//! Run calculators and worksheets from the terminal.
//!
//! ```text
//! calc_cli list
//! calc_cli describe combinations
//! calc_cli run combinations n=5 r=2
//! calc_cli run gcd values=48,18 --json
//! calc_cli add homework.json --label "Q1" roman value=1994
//! calc_cli sheet homework.json --out report.json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).
//! On failure the error is printed to stderr as JSON and the exit code is 1.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use calc_core::catalog::{lookup, CalculatorKind};
use calc_core::errors::CalcError;
use calc_core::fields::FieldMap;
use calc_core::file_io::{load_settings, load_worksheet, save_report, save_worksheet};
use calc_core::settings::Settings;
use calc_core::worksheet::{Report, Worksheet};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "Reckon - a catalog of small calculators")]
struct Cli {
    /// Settings file (JSON) for display precision, currency and unit system
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every calculator
    List,

    /// Show a calculator's formula and fields
    Describe { calculator: String },

    /// Evaluate one calculator from key=value fields
    Run {
        calculator: String,

        /// Input fields, e.g. `n=5 r=2`
        fields: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a calculation to a worksheet file, creating it if needed
    Add {
        worksheet: PathBuf,

        #[arg(long)]
        label: String,

        calculator: String,

        fields: Vec<String>,
    },

    /// Evaluate every item of a worksheet
    Sheet {
        worksheet: PathBuf,

        /// Write the report to this file instead of printing it
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Option<Settings>> {
    match path {
        Some(path) => {
            let settings = load_settings(path)?;
            debug!(path = %path.display(), "loaded settings");
            Ok(Some(settings))
        }
        None => Ok(None),
    }
}

fn list() {
    let width = CalculatorKind::ALL.iter().map(|k| k.slug().len()).max().unwrap_or(0);
    for kind in CalculatorKind::ALL {
        println!("{:<width$}  {}", kind.slug(), kind.description(), width = width);
    }
}

fn describe(name: &str) -> Result<()> {
    let kind = lookup(name)?;
    println!("{} ({})", kind.title(), kind.slug());
    println!("{}", kind.description());
    println!();
    println!("Formula: {}", kind.formula());
    println!();
    println!("Fields:");
    let width = kind.fields().iter().map(|f| f.name.len()).max().unwrap_or(0);
    for field in kind.fields() {
        let marker = if field.required { "required" } else { "optional" };
        println!("  {:<width$}  {:<8}  {}", field.name, marker, field.description, width = width);
    }
    Ok(())
}

fn run(name: &str, pairs: &[String], json: bool, settings: &Settings) -> Result<()> {
    let kind = lookup(name)?;
    let fields = FieldMap::parse_pairs(pairs)?;
    let output = kind.build(&fields, settings)?.evaluate()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for line in output.summary(settings) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Append one validated item, creating the worksheet if needed. Returns the new item id.
fn add(path: &Path, label: &str, name: &str, pairs: &[String], config: Option<Settings>) -> Result<String> {
    let mut sheet = if path.exists() {
        load_worksheet(path)?
    } else {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut sheet = Worksheet::new(whoami(), title);
        if let Some(settings) = &config {
            sheet.settings = settings.clone();
        }
        sheet
    };

    let kind = lookup(name)?;
    let calculation = kind.build(&FieldMap::parse_pairs(pairs)?, &sheet.settings)?;
    calculation.validate()?;

    let id = sheet.add_item(label, calculation);
    save_worksheet(&sheet, path)?;
    Ok(id.to_string())
}

/// Evaluate a worksheet. Failed items stay in the report rather than failing the command.
fn sheet(path: &Path, out: Option<&Path>, json: bool, config: Option<Settings>) -> Result<Report> {
    let mut sheet = load_worksheet(path)?;
    if let Some(settings) = config {
        sheet.settings = settings;
    }

    let report = sheet.evaluate();
    info!(
        title = %report.title,
        succeeded = report.succeeded(),
        failed = report.failed(),
        "evaluated worksheet"
    );

    match out {
        Some(out) => {
            save_report(&report, out)?;
            println!(
                "{} ok, {} failed -> {}",
                report.succeeded(),
                report.failed(),
                out.display()
            );
        }
        None if json => println!("{}", serde_json::to_string_pretty(&report)?),
        None => {
            for line in report.render() {
                println!("{}", line);
            }
        }
    }
    Ok(report)
}

fn whoami() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_default()
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref()).context("loading --config")?;
    match cli.command {
        Command::List => {
            list();
            Ok(())
        }
        Command::Describe { calculator } => describe(&calculator),
        Command::Run { calculator, fields, json } => {
            run(&calculator, &fields, json, &config.unwrap_or_default())
        }
        Command::Add {
            worksheet,
            label,
            calculator,
            fields,
        } => {
            let id = add(&worksheet, &label, &calculator, &fields, config)?;
            println!("{}", id);
            Ok(())
        }
        Command::Sheet { worksheet, out, json } => {
            sheet(&worksheet, out.as_deref(), json, config).map(|_| ())
        }
    }
}

/// Structured JSON for a failed command.
fn error_json(err: &anyhow::Error) -> serde_json::Value {
    match err.downcast_ref::<CalcError>() {
        Some(calc) => json!({
            "code": calc.error_code(),
            "message": format!("{:#}", err),
            "error": calc,
        }),
        None => json!({
            "code": "INTERNAL_ERROR",
            "message": format!("{:#}", err),
        }),
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_json(&err));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::{Calculation, GcdInput, MeanInput, RomanInput};
    use calc_core::units::UnitSystem;
    use clap::CommandFactory;
    use tempfile::tempdir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from(["calc_cli", "run", "combinations", "n=5", "r=2", "--json"]).unwrap();
        match cli.command {
            Command::Run { calculator, fields, json } => {
                assert_eq!(calculator, "combinations");
                assert_eq!(fields, vec!["n=5", "r=2"]);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_error_json_keeps_calc_error() {
        let err = anyhow::Error::new(CalcError::missing_field("r"));
        let value = error_json(&err);
        assert_eq!(value["code"], "MISSING_FIELD");
        assert_eq!(value["error"]["details"]["field"], "r");

        let wrapped = anyhow::Error::new(CalcError::missing_field("r")).context("loading --config");
        assert_eq!(error_json(&wrapped)["code"], "MISSING_FIELD");

        let other = anyhow::anyhow!("boom");
        assert_eq!(error_json(&other)["code"], "INTERNAL_ERROR");
    }

    #[test]
    fn test_add_creates_worksheet_from_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("homework.json");
        let config = Settings {
            decimal_places: 2,
            unit_system: UnitSystem::Metric,
            ..Settings::default()
        };

        let first = add(
            &path,
            "Driveway",
            "asphalt",
            &strings(&["length=10", "width=5", "thickness=5"]),
            Some(config.clone()),
        )
        .unwrap();

        let sheet = load_worksheet(&path).unwrap();
        assert_eq!(sheet.meta.title, "homework");
        assert_eq!(sheet.settings, config);
        assert_eq!(sheet.item_count(), 1);
        let item = sheet.items.values().next().unwrap();
        assert_eq!(item.label, "Driveway");
        assert_eq!(sheet.items.keys().next().unwrap().to_string(), first);
        // The unit system comes from the seeded settings
        match &item.calculation {
            Calculation::Asphalt(input) => assert_eq!(input.unit_system, UnitSystem::Metric),
            other => panic!("unexpected calculation {:?}", other),
        }

        // An existing worksheet keeps its own settings
        let second = add(&path, "Q2", "gcd", &strings(&["values=48,18"]), Some(Settings::default())).unwrap();
        assert_ne!(first, second);
        let sheet = load_worksheet(&path).unwrap();
        assert_eq!(sheet.item_count(), 2);
        assert_eq!(sheet.settings, config);
    }

    #[test]
    fn test_add_rejects_invalid_item_without_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.json");

        let err = add(&path, "bad", "combinations", &strings(&["n=2", "r=5"]), None).unwrap_err();
        assert_eq!(error_json(&err)["code"], "INVALID_INPUT");
        assert!(!path.exists());

        let err = add(&path, "bad", "nope", &[], None).unwrap_err();
        assert_eq!(error_json(&err)["code"], "UNKNOWN_CALCULATOR");
        assert!(!path.exists());
    }

    #[test]
    fn test_sheet_keeps_failures_and_applies_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed.json");

        let mut worksheet = Worksheet::new("Sam", "Mixed");
        worksheet.add_item("a mean", Calculation::Mean(MeanInput { values: vec![1.0, 1.0, 2.0] }));
        worksheet.add_item("b gcd", Calculation::Gcd(GcdInput { values: vec![48, 18] }));
        worksheet.add_item("c roman", Calculation::Roman(RomanInput { value: "VV".to_string() }));
        save_worksheet(&worksheet, &path).unwrap();

        let report = sheet(&path, None, false, None).unwrap();
        assert_eq!((report.succeeded(), report.failed()), (2, 1));
        assert!(report.render().iter().any(|l| l.trim() == "Mean:   1.3333"));

        let config = Settings { decimal_places: 1, ..Settings::default() };
        let report = sheet(&path, None, true, Some(config)).unwrap();
        assert_eq!((report.succeeded(), report.failed()), (2, 1));
        assert!(report.render().iter().any(|l| l.trim() == "Mean:   1.3"));

        // The file itself is left alone
        assert_eq!(load_worksheet(&path).unwrap().settings, Settings::default());
    }

    #[test]
    fn test_sheet_out_writes_report_atomically() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.json");
        let out = dir.path().join("report.json");

        let mut worksheet = Worksheet::new("Sam", "Report");
        worksheet.add_item("ok", Calculation::Gcd(GcdInput { values: vec![12, 8] }));
        worksheet.add_item("too big", Calculation::Roman(RomanInput { value: "4000".to_string() }));
        save_worksheet(&worksheet, &path).unwrap();

        // Overwrites a stale report
        std::fs::write(&out, "stale").unwrap();
        sheet(&path, Some(&out), false, None).unwrap();

        assert!(!dir.path().join("report.json.tmp").exists());
        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["title"], "Report");
        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["label"], "ok");
        assert!(entries[0]["outcome"]["success"].is_object());
        assert!(entries[1]["outcome"]["failure"].is_object());

        let missing = sheet(&dir.path().join("nope.json"), Some(&out), false, None).unwrap_err();
        assert_eq!(error_json(&missing)["code"], "FILE_ERROR");
    }
}
