//! Dashboard reports
//!
//! Aggregations over a sequence of expenses: spending by category and
//! merchant, largest transactions, monthly totals per card, and the card
//! payment summary.

pub mod cards;
pub mod monthly;
pub mod spending;

pub use cards::{CardSummary, CardSummaryReport};
pub use monthly::{MonthRow, MonthlyCardReport};
pub use spending::{top_transactions, LabelTotal, SpendingReport};
