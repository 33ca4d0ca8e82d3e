//! Card Summary Report
//!
//! Upcoming payments per configured card, soonest due first, alongside what
//! was charged to each card in the expenses passed in.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Card, Expense, Money};

/// One card's line in the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSummary {
    pub name: String,
    pub next_payment: Money,
    pub due_date: NaiveDate,
    /// Charged to this card across the reported expenses
    pub spent: Money,
    pub expense_count: usize,
}

/// Card Summary Report
#[derive(Debug, Clone, Serialize)]
pub struct CardSummaryReport {
    pub cards: Vec<CardSummary>,
    /// Sum of all next payments
    pub total_due: Money,
}

impl CardSummaryReport {
    /// Generate the summary
    pub fn generate(cards: &[Card], expenses: &[Expense]) -> Self {
        let mut rows: Vec<CardSummary> = cards
            .iter()
            .map(|card| {
                let charged = expenses.iter().filter(|e| e.card_name == card.name);
                CardSummary {
                    name: card.name.clone(),
                    next_payment: card.next_payment,
                    due_date: card.due_date,
                    spent: charged.clone().map(|e| e.amount).sum(),
                    expense_count: charged.count(),
                }
            })
            .collect();

        rows.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.name.cmp(&b.name)));
        let total_due = rows.iter().map(|r| r.next_payment).sum();

        Self {
            cards: rows,
            total_due,
        }
    }

    /// First card due on or after `today`
    pub fn next_due(&self, today: NaiveDate) -> Option<&CardSummary> {
        self.cards.iter().find(|c| c.due_date >= today)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Card Summary\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<26} {:>12} {:>12} {:>12} {:>6}\n",
            "Card", "Due", "Payment", "Spent", "Count"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for card in &self.cards {
            output.push_str(&format!(
                "{:<26} {:>12} {:>12} {:>12} {:>6}\n",
                card.name,
                card.due_date.format("%Y-%m-%d").to_string(),
                card.next_payment,
                card.spent,
                card.expense_count
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!("{:<26} {:>12} {:>12}\n", "TOTAL DUE", "", self.total_due));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SeedData;

    #[test]
    fn test_sorted_by_due_date() {
        let seed = SeedData::sample();
        let report = CardSummaryReport::generate(&seed.cards, &seed.expenses);

        let names: Vec<&str> = report.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["American Express Gold", "Chase Sapphire", "Discover It"]);
        assert_eq!(report.total_due, Money::from_cents(45075 + 32050 + 27525));
    }

    #[test]
    fn test_spent_per_card() {
        let seed = SeedData::sample();
        let report = CardSummaryReport::generate(&seed.cards, &seed.expenses);

        let discover = report.cards.iter().find(|c| c.name == "Discover It").unwrap();
        assert_eq!(discover.expense_count, 4);
        assert_eq!(discover.spent, Money::from_cents(9599 + 32045 + 1545 + 1899));
    }

    #[test]
    fn test_next_due() {
        let seed = SeedData::sample();
        let report = CardSummaryReport::generate(&seed.cards, &[]);

        let today = NaiveDate::from_ymd_opt(2025, 5, 16).unwrap();
        assert_eq!(report.next_due(today).map(|c| c.name.as_str()), Some("Chase Sapphire"));

        let later = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(report.next_due(later).is_none());
        assert!(report.cards.iter().all(|c| c.spent.is_zero()));
    }
}
