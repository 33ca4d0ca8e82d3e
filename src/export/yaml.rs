//! YAML Export functionality
//!
//! Same document as the JSON export, for reading by eye.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::models::Expense;

/// Export expenses to YAML
pub fn export_expenses_yaml<W: Write>(expenses: &[Expense], mut writer: W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_expenses(expenses);

    writeln!(writer, "# Expense export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# Expenses: {}", export.expenses.len())?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> ExpenseResult<ExpenseExport> {
    let export: ExpenseExport = serde_yaml::from_str(yaml_str)?;
    export.validate().map_err(ExpenseError::Export)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::SeedData;

    #[test]
    fn test_yaml_export() {
        let expenses = SeedData::sample().expenses;
        let mut buffer = Vec::new();
        export_expenses_yaml(&expenses, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# Expense export"));
        assert!(text.contains("schema_version:"));
        assert!(text.contains("merchant: Starbucks"));

        let imported = import_from_yaml(&text).unwrap();
        assert_eq!(imported.expenses.len(), 12);
        assert_eq!(imported.total, Money::from_cents(157_862));
    }
}
