//! Expense display formatting
//!
//! Renders the visible sequence as a table followed by its filtered total.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, Money};
use crate::query::{SortDirection, SortField, SortSpec};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Card")]
    card: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Merchant")]
    merchant: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, date_format: &str, currency: &str) -> Self {
        Self {
            id: expense.id.to_string(),
            date: expense.date.format(date_format).to_string(),
            card: expense.card_name.clone(),
            category: expense.category.clone(),
            merchant: expense.merchant.clone(),
            description: truncate(&expense.description, 32),
            amount: expense.amount.format_with_symbol(currency),
        }
    }
}

/// Format expenses as a table with a trailing total line
pub fn format_expense_table(expenses: &[Expense], date_format: &str, currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses match the current filters.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, date_format, currency))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::last()).with(Alignment::right()));

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    format!(
        "{}\n{}\n",
        table,
        format_total_line(expenses.len(), total, currency)
    )
}

/// "Total (4 expenses): $421.44"-style summary line
pub fn format_total_line(count: usize, total: Money, currency: &str) -> String {
    let noun = if count == 1 { "expense" } else { "expenses" };
    format!("Total ({} {}): {}", count, noun, total.format_with_symbol(currency))
}

/// Column header with an arrow on the active sort column
pub fn format_sort_indicator(field: SortField, spec: SortSpec) -> String {
    if field != spec.field {
        return field.to_string();
    }
    let arrow = match spec.direction {
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    };
    format!("{} {}", field, arrow)
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Card:        {}\n", expense.card_name));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Merchant:    {}\n", expense.merchant));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency)
    ));

    output
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SeedData;

    #[test]
    fn test_table_has_headers_rows_and_total() {
        let expenses = SeedData::sample().expenses;
        let output = format_expense_table(&expenses[..2], "%Y-%m-%d", "$");

        assert!(output.contains("Merchant"));
        assert!(output.contains("Cheesecake Factory"));
        assert!(output.contains("2025-05-14"));
        assert!(output.contains("Total (2 expenses): $575.75"));
    }

    #[test]
    fn test_empty_table() {
        let output = format_expense_table(&[], "%Y-%m-%d", "$");
        assert_eq!(output, "No expenses match the current filters.\n");
    }

    #[test]
    fn test_total_line_singular() {
        assert_eq!(
            format_total_line(1, Money::from_cents(1825), "€"),
            "Total (1 expense): €18.25"
        );
    }

    #[test]
    fn test_sort_indicator() {
        let spec = SortSpec::ascending(SortField::Amount);
        assert_eq!(format_sort_indicator(SortField::Amount, spec), "amount ↑");
        assert_eq!(format_sort_indicator(SortField::Date, spec), "date");
    }

    #[test]
    fn test_details() {
        let expense = &SeedData::sample().expenses[4];
        let output = format_expense_details(expense, "$");
        assert!(output.contains("Merchant:    Starbucks"));
        assert!(output.contains("Amount:      $18.25"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Lunch", 10), "Lunch");
        assert_eq!(truncate("Accommodation in Miami", 10), "Accommo...");
    }
}
