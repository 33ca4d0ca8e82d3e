//! Bulk relabelling of selected expenses

use std::collections::HashSet;

use crate::models::{EditField, Expense, ExpenseId};

/// Write `value` into `field` of every record whose id is selected
///
/// Records outside the selection are returned unchanged and order is kept.
/// An empty selection or a blank value leaves every record untouched.
pub fn bulk_apply(
    records: &[Expense],
    ids: &HashSet<ExpenseId>,
    field: EditField,
    value: &str,
) -> Vec<Expense> {
    let mut updated = records.to_vec();
    apply_in_place(&mut updated, ids, field, value);
    updated
}

/// In-place form of [`bulk_apply`]; returns how many records were written
pub fn apply_in_place(
    records: &mut [Expense],
    ids: &HashSet<ExpenseId>,
    field: EditField,
    value: &str,
) -> usize {
    if ids.is_empty() || value.trim().is_empty() {
        return 0;
    }

    let mut count = 0;
    for expense in records.iter_mut().filter(|e| ids.contains(&e.id)) {
        field.apply(expense, value);
        count += 1;
    }
    count
}
