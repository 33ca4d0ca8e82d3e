//! Expense Tracker - credit card expense filtering, sorting and merchant rules
//!
//! This library provides the core of a credit card expense dashboard: a
//! ledger of expense records, ordered category and merchant registries,
//! keyword rules that assign merchants to new expenses, and a pure query
//! engine that derives the filtered, sorted "visible sequence" and its total.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, rules, registries, cards)
//! - `query`: Filtering, sorting and bulk edits over expense slices
//! - `storage`: Seed data loading and the in-memory ledger
//! - `services`: Validated edits to the ledger
//! - `reports`: Dashboard aggregations
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::query::{FilterCriteria, SortField, SortSpec};
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Ledger;
//!
//! let mut ledger = Ledger::sample();
//! let service = ExpenseService::new(&mut ledger);
//! let travel = service.list(
//!     &FilterCriteria::new().category("Travel"),
//!     SortSpec::descending(SortField::Amount),
//! );
//! assert_eq!(travel[0].merchant, "Delta Airlines");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod query;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
