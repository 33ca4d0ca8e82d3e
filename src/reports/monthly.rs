//! Monthly spending by card
//!
//! One row per calendar month (`YYYY-MM`, oldest first) with a column per
//! card and a row total.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Expense, Money};

/// Spending for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRow {
    /// Month key, `YYYY-MM`
    pub month: String,
    /// Amount per card, aligned with [`MonthlyCardReport::cards`]
    pub by_card: Vec<Money>,
    /// Sum across all cards
    pub total: Money,
}

/// Monthly Card Report
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyCardReport {
    /// Column order
    pub cards: Vec<String>,
    /// Months, oldest first
    pub months: Vec<MonthRow>,
    /// Per-card totals across all months
    pub card_totals: Vec<Money>,
    /// Grand total
    pub total: Money,
}

impl MonthlyCardReport {
    /// Generate the report
    ///
    /// `known_cards` fixes the leading column order; cards that appear on
    /// expenses but are not configured are appended in name order.
    pub fn generate(expenses: &[Expense], known_cards: &[&str]) -> Self {
        let mut cards: Vec<String> = known_cards.iter().map(|c| c.to_string()).collect();
        let mut extra: Vec<&str> = expenses
            .iter()
            .map(|e| e.card_name.as_str())
            .filter(|c| !known_cards.contains(c))
            .collect();
        extra.sort_unstable();
        extra.dedup();
        cards.extend(extra.into_iter().map(str::to_string));

        let mut grid: BTreeMap<String, Vec<Money>> = BTreeMap::new();
        for expense in expenses {
            let month = expense.date.format("%Y-%m").to_string();
            let column = cards
                .iter()
                .position(|c| *c == expense.card_name)
                .unwrap_or_default();
            let row = grid
                .entry(month)
                .or_insert_with(|| vec![Money::zero(); cards.len()]);
            row[column] += expense.amount;
        }

        let mut card_totals = vec![Money::zero(); cards.len()];
        let months: Vec<MonthRow> = grid
            .into_iter()
            .map(|(month, by_card)| {
                for (total, amount) in card_totals.iter_mut().zip(&by_card) {
                    *total += *amount;
                }
                let total = by_card.iter().sum();
                MonthRow {
                    month,
                    by_card,
                    total,
                }
            })
            .collect();
        let total = card_totals.iter().sum();

        Self {
            cards,
            months,
            card_totals,
            total,
        }
    }

    /// Amount for a month and card, zero when absent
    pub fn amount(&self, month: &str, card: &str) -> Money {
        let column = match self.cards.iter().position(|c| c == card) {
            Some(column) => column,
            None => return Money::zero(),
        };
        self.months
            .iter()
            .find(|row| row.month == month)
            .map(|row| row.by_card[column])
            .unwrap_or_default()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        let width = 10 + 24 * self.cards.len() + 14;

        output.push_str("Monthly Spending by Card\n");
        output.push_str(&"=".repeat(width));
        output.push('\n');

        output.push_str(&format!("{:<10}", "Month"));
        for card in &self.cards {
            output.push_str(&format!("{:>24}", card));
        }
        output.push_str(&format!("{:>14}\n", "Total"));
        output.push_str(&"-".repeat(width));
        output.push('\n');

        for row in &self.months {
            output.push_str(&format!("{:<10}", row.month));
            for amount in &row.by_card {
                output.push_str(&format!("{:>24}", amount));
            }
            output.push_str(&format!("{:>14}\n", row.total));
        }

        output.push_str(&"-".repeat(width));
        output.push('\n');
        output.push_str(&format!("{:<10}", "TOTAL"));
        for amount in &self.card_totals {
            output.push_str(&format!("{:>24}", amount));
        }
        output.push_str(&format!("{:>14}\n", self.total));
        output
    }
}
