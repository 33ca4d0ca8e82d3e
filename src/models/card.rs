//! Credit card model
//!
//! Cards label where each expense was charged and feed the card summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A credit card with its next statement payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card display name
    pub name: String,

    /// Amount due on the next statement
    #[serde(alias = "nextPayment")]
    pub next_payment: Money,

    /// Payment due date
    #[serde(alias = "dueDate")]
    pub due_date: NaiveDate,
}

impl Card {
    pub fn new(name: impl Into<String>, next_payment: Money, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            next_payment,
            due_date,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} due {}",
            self.name,
            self.next_payment,
            self.due_date.format("%Y-%m-%d")
        )
    }
}
