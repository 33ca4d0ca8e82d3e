//! Core data models for the expense tracker
//!
//! Expense records, merchant rules, cards and their statements, and the
//! ordered name registries used for categories and merchants.

pub mod card;
pub mod expense;
pub mod ids;
pub mod money;
pub mod name_list;
pub mod rule;
pub mod statement;

pub use card::Card;
pub use expense::{EditField, Expense, ExpenseValidationError, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use name_list::{NameList, NameListError};
pub use rule::{first_match, infer_merchant, MerchantRule, RuleValidationError, UNKNOWN_MERCHANT};
pub use statement::Statement;
