//! JSON Export functionality
//!
//! Exports an expense sequence with its total to JSON, with schema
//! versioning so a later import can check compatibility.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Expense export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Sum of all exported amounts
    pub total: Money,

    /// Exported expenses, in the order they were shown
    pub expenses: Vec<Expense>,
}

impl ExpenseExport {
    /// Build an export document for a sequence of expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            total: expenses.iter().map(|e| e.amount).sum(),
            expenses: expenses.to_vec(),
        }
    }

    /// Check version, id uniqueness and the stated total
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = HashSet::new();
        for expense in &self.expenses {
            if !seen.insert(&expense.id) {
                return Err(format!("Duplicate expense id {}", expense.id));
            }
        }

        let sum: Money = self.expenses.iter().map(|e| e.amount).sum();
        if sum != self.total {
            return Err(format!(
                "Total mismatch: document says {}, expenses sum to {}",
                self.total, sum
            ));
        }

        Ok(())
    }
}

/// Export expenses to JSON
pub fn export_expenses_json<W: Write>(
    expenses: &[Expense],
    writer: W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = ExpenseExport::from_expenses(expenses);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> ExpenseResult<ExpenseExport> {
    let export: ExpenseExport = serde_json::from_str(json_str)?;
    export.validate().map_err(ExpenseError::Export)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SeedData;

    #[test]
    fn test_document_shape() {
        let expenses = SeedData::sample().expenses;
        let mut buffer = Vec::new();
        export_expenses_json(&expenses[..3], &mut buffer, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert!(value["exported_at"].is_string());
        assert_eq!(value["total"], 671.74);
        assert_eq!(value["expenses"].as_array().unwrap().len(), 3);
        assert_eq!(value["expenses"][1]["merchant"], "Delta Airlines");
    }

    #[test]
    fn test_import_round_trip() {
        let expenses = SeedData::sample().expenses;
        let mut buffer = Vec::new();
        export_expenses_json(&expenses, &mut buffer, true).unwrap();

        let imported = import_from_json(std::str::from_utf8(&buffer).unwrap()).unwrap();
        assert_eq!(imported.expenses, expenses);
        assert_eq!(imported.total, Money::from_cents(157_862));
    }

    #[test]
    fn test_validate_rejects_tampered_total() {
        let mut export = ExpenseExport::from_expenses(&SeedData::sample().expenses);
        export.total = Money::from_cents(1);
        assert!(export.validate().unwrap_err().contains("Total mismatch"));
    }

    #[test]
    fn test_validate_rejects_other_schema() {
        let mut export = ExpenseExport::from_expenses(&[]);
        export.schema_version = "0.9.0".into();
        assert!(export.validate().is_err());
    }
}
