//! Expense query engine
//!
//! Pure functions over slices of expenses: filtering, sorting, bulk
//! relabelling, and the derived "visible sequence" with its total. Nothing
//! here holds state; callers pass the criteria and sort spec in explicitly,
//! so recomputing with unchanged inputs always yields the same output.

pub mod bulk;
pub mod filter;
pub mod sort;

pub use bulk::{apply_in_place, bulk_apply};
pub use filter::{filter, FilterCriteria};
pub use sort::{locale_cmp, sort, SortDirection, SortField, SortSpec};

use crate::models::{Expense, Money};

/// Filter, then sort: the sequence the expense table renders
pub fn visible(records: &[Expense], criteria: &FilterCriteria, spec: SortSpec) -> Vec<Expense> {
    sort(&filter(records, criteria), spec)
}

/// Running sum of amounts over a (typically visible) sequence
pub fn filtered_total(records: &[Expense]) -> Money {
    records.iter().map(|e| e.amount).sum()
}
