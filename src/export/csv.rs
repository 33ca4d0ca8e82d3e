//! CSV Export functionality
//!
//! Writes a sequence of expenses as spreadsheet-friendly rows.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// Column header for expense exports
pub const CSV_HEADER: [&str; 7] = [
    "ID",
    "Date",
    "Card",
    "Category",
    "Merchant",
    "Description",
    "Amount",
];

/// Export expenses to CSV, one row per expense in the given order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;

    for expense in expenses {
        csv.write_record([
            expense.id.as_str(),
            &expense.date.format("%Y-%m-%d").to_string(),
            &expense.card_name,
            &expense.category,
            &expense.merchant,
            &expense.description,
            &format!("{:.2}", expense.amount.as_decimal()),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SeedData;

    fn export(expenses: &[Expense]) -> String {
        let mut buffer = Vec::new();
        export_expenses_csv(expenses, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let expenses = SeedData::sample().expenses;
        let output = export(&expenses[..2]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "ID,Date,Card,Category,Merchant,Description,Amount");
        assert_eq!(
            lines[1],
            "1,2025-05-15,Chase Sapphire,Restaurant,Cheesecake Factory,Dinner with clients,125.75"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut expenses = SeedData::sample().expenses;
        expenses[0].description = "Dinner, drinks".into();
        let output = export(&expenses[..1]);
        assert!(output.contains("\"Dinner, drinks\""));
    }

    #[test]
    fn test_empty_export_has_header_only() {
        assert_eq!(export(&[]).lines().count(), 1);
    }
}
