//! Expense record model
//!
//! One line item from a credit card statement. Only the category and merchant
//! labels change after creation; records are never deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A single expense line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Statement date
    pub date: NaiveDate,

    /// Card the expense was charged to
    #[serde(alias = "cardName")]
    pub card_name: String,

    /// Category label
    pub category: String,

    /// Merchant label
    pub merchant: String,

    /// Free-text description from the statement
    #[serde(default)]
    pub description: String,

    /// Charged amount (never negative)
    pub amount: Money,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        date: NaiveDate,
        card_name: impl Into<String>,
        category: impl Into<String>,
        merchant: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: ExpenseId::generate(),
            date,
            card_name: card_name.into(),
            category: category.into(),
            merchant: merchant.into(),
            description: description.into(),
            amount,
        }
    }

    /// Replace the generated id (seed data, tests)
    pub fn with_id(mut self, id: impl Into<ExpenseId>) -> Self {
        self.id = id.into();
        self
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ExpenseValidationError::EmptyId);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.merchant,
            self.amount,
            self.category
        )
    }
}

/// Fields supplied when adding an expense; the id and merchant are derived
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub card_name: String,
    pub category: String,
    pub description: String,
    pub amount: Money,
}

/// Which label a correction writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditField {
    Category,
    Merchant,
}

impl EditField {
    /// Write `value` into the labelled field of `expense`
    pub fn apply(&self, expense: &mut Expense, value: &str) {
        match self {
            Self::Category => expense.category = value.to_string(),
            Self::Merchant => expense.merchant = value.to_string(),
        }
    }
}

impl fmt::Display for EditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::Merchant => write!(f, "merchant"),
        }
    }
}

impl std::str::FromStr for EditField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "merchant" => Ok(Self::Merchant),
            other => Err(format!(
                "unknown field '{}' (expected 'category' or 'merchant')",
                other
            )),
        }
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyId,
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Expense id cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative ({})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
            "American Express Gold",
            "Restaurant",
            "Starbucks",
            "Coffee meeting",
            Money::from_cents(1825),
        )
        .with_id("5")
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "2025-05-10 Starbucks $18.25 (Restaurant)"
        );
    }

    #[test]
    fn test_validation() {
        let mut expense = sample();
        assert!(expense.validate().is_ok());

        expense.amount = Money::from_cents(-1);
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::NegativeAmount(_))
        ));

        expense.amount = Money::zero();
        expense.id = ExpenseId::new(" ");
        assert_eq!(expense.validate(), Err(ExpenseValidationError::EmptyId));
    }

    #[test]
    fn test_edit_field_apply() {
        let mut expense = sample();
        EditField::Category.apply(&mut expense, "Travel");
        EditField::Merchant.apply(&mut expense, "Blue Bottle");
        assert_eq!(expense.category, "Travel");
        assert_eq!(expense.merchant, "Blue Bottle");
    }

    #[test]
    fn test_edit_field_parse() {
        assert_eq!("Category".parse::<EditField>(), Ok(EditField::Category));
        assert_eq!("merchant".parse::<EditField>(), Ok(EditField::Merchant));
        assert!("amount".parse::<EditField>().is_err());
    }

    #[test]
    fn test_deserialize_accepts_camel_case_card() {
        let json = r#"{
            "id": "1",
            "date": "2025-05-15",
            "cardName": "Chase Sapphire",
            "category": "Restaurant",
            "merchant": "Cheesecake Factory",
            "description": "Dinner with clients",
            "amount": 125.75
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.card_name, "Chase Sapphire");
        assert_eq!(expense.amount.cents(), 12575);
    }
}
