//! Spending Report
//!
//! Totals per category and per merchant, and the largest single expenses,
//! over whichever expenses the caller passes in (usually the visible
//! sequence).

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;

use crate::error::ExpenseResult;
use crate::models::{Expense, Money};
use crate::query::locale_cmp;

/// Spending total for one label (a category or a merchant)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelTotal {
    /// Category or merchant name
    pub name: String,
    /// Sum of amounts
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of the report total, 0-100
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, Serialize)]
pub struct SpendingReport {
    /// Per-category totals, largest first
    pub by_category: Vec<LabelTotal>,
    /// Per-merchant totals, largest first
    pub by_merchant: Vec<LabelTotal>,
    /// Total over all expenses in the report
    pub total: Money,
    /// Number of expenses in the report
    pub expense_count: usize,
}

impl SpendingReport {
    /// Generate a spending report
    pub fn generate(expenses: &[Expense]) -> Self {
        let total: Money = expenses.iter().map(|e| e.amount).sum();
        Self {
            by_category: totals_by(expenses, total, |e| &e.category),
            by_merchant: totals_by(expenses, total, |e| &e.merchant),
            total,
            expense_count: expenses.len(),
        }
    }

    /// The `limit` highest-spending merchants
    pub fn top_merchants(&self, limit: usize) -> &[LabelTotal] {
        &self.by_merchant[..limit.min(self.by_merchant.len())]
    }

    /// Format the category breakdown for terminal display
    pub fn format_categories(&self) -> String {
        self.format_rows("Spending by Category", "Category", &self.by_category)
    }

    /// Format the top `limit` merchants for terminal display
    pub fn format_merchants(&self, limit: usize) -> String {
        self.format_rows("Top Merchants", "Merchant", self.top_merchants(limit))
    }

    fn format_rows(&self, title: &str, label: &str, rows: &[LabelTotal]) -> String {
        let mut output = String::new();

        output.push_str(title);
        output.push('\n');
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<34} {:>12} {:>7} {:>7}\n",
            label, "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in rows {
            output.push_str(&format!(
                "{:<34} {:>12} {:>7} {:>6.1}%\n",
                row.name, row.total, row.count, row.percentage
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<34} {:>12} {:>7}\n",
            "TOTAL", self.total, self.expense_count
        ));
        output
    }

    /// Export the category breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Category", "Amount", "Count", "Percentage"])?;
        for row in &self.by_category {
            csv.write_record([
                row.name.clone(),
                format!("{:.2}", row.total.as_decimal()),
                row.count.to_string(),
                format!("{:.2}", row.percentage),
            ])?;
        }
        csv.write_record([
            "TOTAL".to_string(),
            format!("{:.2}", self.total.as_decimal()),
            self.expense_count.to_string(),
            "100.00".to_string(),
        ])?;
        csv.flush()?;
        Ok(())
    }
}

/// Group amounts by a label, largest total first, ties by name
fn totals_by<F>(expenses: &[Expense], grand_total: Money, label: F) -> Vec<LabelTotal>
where
    F: Fn(&Expense) -> &String,
{
    let mut sums: HashMap<&str, (Money, usize)> = HashMap::new();
    for expense in expenses {
        let entry = sums.entry(label(expense)).or_insert((Money::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let mut rows: Vec<LabelTotal> = sums
        .into_iter()
        .map(|(name, (total, count))| LabelTotal {
            name: name.to_string(),
            total,
            count,
            percentage: percentage(total, grand_total),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| locale_cmp(&a.name, &b.name))
    });
    rows
}

fn percentage(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}

/// The `limit` largest expenses, biggest first; equal amounts keep input order
pub fn top_transactions(expenses: &[Expense], limit: usize) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
    sorted.truncate(limit);
    sorted
}
