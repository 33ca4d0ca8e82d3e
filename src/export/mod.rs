//! Export of the visible expense sequence
//!
//! - CSV: one row per expense, spreadsheet-compatible
//! - JSON: versioned document with the total, machine-readable
//! - YAML: the JSON document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use self::csv::{export_expenses_csv, CSV_HEADER};
pub use json::{export_expenses_json, import_from_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_expenses_yaml, import_from_yaml};

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Output format for `export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension, defaulting to CSV
    pub fn from_extension(path: &std::path::Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Csv,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!(
                "unknown export format '{}' (expected csv, json or yaml)",
                other
            )),
        }
    }
}

/// Write `expenses` in the chosen format
pub fn export_expenses<W: Write>(
    expenses: &[Expense],
    format: ExportFormat,
    writer: W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, writer),
        ExportFormat::Json => export_expenses_json(expenses, writer, true),
        ExportFormat::Yaml => export_expenses_yaml(expenses, writer),
    }
}
