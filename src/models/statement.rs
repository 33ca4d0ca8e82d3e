//! Uploaded statement model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A card statement already on file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub id: String,

    /// Issuing bank
    pub bank: String,

    #[serde(alias = "amountDue")]
    pub amount_due: Money,

    #[serde(alias = "statementDate")]
    pub statement_date: NaiveDate,

    #[serde(alias = "dueDate")]
    pub due_date: NaiveDate,

    #[serde(default, alias = "financeCharge")]
    pub finance_charge: Money,

    #[serde(default, alias = "otherCharges")]
    pub other_charges: Money,
}

impl Statement {
    pub fn new(
        id: impl Into<String>,
        bank: impl Into<String>,
        amount_due: Money,
        statement_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            bank: bank.into(),
            amount_due,
            statement_date,
            due_date,
            finance_charge: Money::zero(),
            other_charges: Money::zero(),
        }
    }

    /// Set the non-finance charges on the statement
    pub fn with_other_charges(mut self, other_charges: Money) -> Self {
        self.other_charges = other_charges;
        self
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} due {}",
            self.id,
            self.bank,
            self.amount_due,
            self.due_date.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upload_page_shape() {
        let json = r#"{
            "id": "2",
            "bank": "American Express",
            "amountDue": "$320.50",
            "statementDate": "2025-04-10",
            "dueDate": "2025-05-15",
            "financeCharge": "$0.00",
            "otherCharges": "$12.99"
        }"#;
        let statement: Statement = serde_json::from_str(json).unwrap();
        assert_eq!(statement.amount_due.cents(), 32050);
        assert_eq!(statement.other_charges.cents(), 1299);
        assert!(statement.finance_charge.is_zero());
    }

    #[test]
    fn test_display() {
        let statement = Statement::new(
            "1",
            "Chase",
            Money::from_cents(45075),
            NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
        );
        assert_eq!(statement.to_string(), "1 Chase: $450.75 due 2025-05-20");
    }
}
