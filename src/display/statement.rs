//! Statement list formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Statement;

#[derive(Tabled)]
struct StatementRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Bank")]
    bank: String,
    #[tabled(rename = "Statement Date")]
    statement_date: String,
    #[tabled(rename = "Due Date")]
    due_date: String,
    #[tabled(rename = "Other Charges")]
    other_charges: String,
    #[tabled(rename = "Amount Due")]
    amount_due: String,
}

/// Format uploaded statements as a table
pub fn format_statement_table(statements: &[Statement], date_format: &str) -> String {
    if statements.is_empty() {
        return "No statements uploaded.\n".to_string();
    }

    let rows: Vec<StatementRow> = statements
        .iter()
        .map(|s| StatementRow {
            id: s.id.clone(),
            bank: s.bank.clone(),
            statement_date: s.statement_date.format(date_format).to_string(),
            due_date: s.due_date.format(date_format).to_string(),
            other_charges: (s.finance_charge + s.other_charges).to_string(),
            amount_due: s.amount_due.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(4..)).with(Alignment::right()));
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SeedData;

    #[test]
    fn test_statement_table() {
        let output = format_statement_table(&SeedData::sample().statements, "%Y-%m-%d");
        assert!(output.contains("Due Date"));
        assert!(output.contains("American Express"));
        assert!(output.contains("$12.99"));
        assert!(output.contains("2025-05-22"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_statement_table(&[], "%Y-%m-%d"), "No statements uploaded.\n");
    }
}
