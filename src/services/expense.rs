//! Expense service
//!
//! Adds expenses (with merchant inference) and applies category/merchant
//! corrections, one record at a time or in bulk. Single and bulk edits share
//! the same mutation path.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{infer_merchant, EditField, Expense, ExpenseId, Money, NewExpense};
use crate::query::{self, FilterCriteria, SortSpec};
use crate::storage::Ledger;

/// Service for expense records
pub struct ExpenseService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Add an expense; the merchant comes from the current rule set
    pub fn add(&mut self, input: NewExpense) -> ExpenseResult<Expense> {
        let merchant = infer_merchant(&input.description, &self.ledger.rules);
        let expense = Expense::new(
            input.date,
            input.card_name.trim(),
            input.category.trim(),
            merchant,
            input.description,
            input.amount,
        );

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        info!(id = %expense.id, merchant = %expense.merchant, "expense added");
        self.ledger.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Get an expense by id
    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.ledger.expense(id)
    }

    /// Filter then sort the canonical collection
    pub fn list(&self, criteria: &FilterCriteria, spec: SortSpec) -> Vec<Expense> {
        let shown = query::visible(&self.ledger.expenses, criteria, spec);
        debug!(
            shown = shown.len(),
            total = self.ledger.expenses.len(),
            sort = %spec,
            "expenses listed"
        );
        shown
    }

    /// Sum of amounts over the visible sequence for `criteria`
    pub fn filtered_total(&self, criteria: &FilterCriteria) -> Money {
        query::filtered_total(&query::filter(&self.ledger.expenses, criteria))
    }

    /// Change the category of one expense
    pub fn set_category(&mut self, id: &ExpenseId, category: &str) -> ExpenseResult<Expense> {
        self.set_field(id, EditField::Category, category)
    }

    /// Change the merchant of one expense
    pub fn set_merchant(&mut self, id: &ExpenseId, merchant: &str) -> ExpenseResult<Expense> {
        self.set_field(id, EditField::Merchant, merchant)
    }

    fn set_field(
        &mut self,
        id: &ExpenseId,
        field: EditField,
        value: &str,
    ) -> ExpenseResult<Expense> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ExpenseError::Validation(format!("{} cannot be empty", field)));
        }

        let expense = self.ledger.expense_mut(id).ok_or_else(|| {
            warn!(%id, "edit of unknown expense");
            ExpenseError::expense_not_found(id.to_string())
        })?;

        field.apply(expense, value);
        info!(%id, %field, value, "expense updated");
        Ok(expense.clone())
    }

    /// Apply `value` to `field` of every selected expense
    ///
    /// Returns the number of records written; an empty selection or blank
    /// value is a no-op and returns zero.
    pub fn bulk_apply(&mut self, ids: &HashSet<ExpenseId>, field: EditField, value: &str) -> usize {
        let value = value.trim();
        let count = query::apply_in_place(&mut self.ledger.expenses, ids, field, value);
        if count > 0 {
            info!(count, %field, value, "bulk update applied");
        } else {
            debug!(selected = ids.len(), %field, "bulk update skipped");
        }
        count
    }

    /// Count expenses
    pub fn count(&self) -> usize {
        self.ledger.expenses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MerchantService;
    use chrono::NaiveDate;

    fn new_expense(description: &str, cents: i64) -> NewExpense {
        NewExpense {
            date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
            card_name: "Chase Sapphire".into(),
            category: "Restaurant".into(),
            description: description.into(),
            amount: Money::from_cents(cents),
        }
    }

    fn ids(values: &[&str]) -> HashSet<ExpenseId> {
        values.iter().map(|v| ExpenseId::from(*v)).collect()
    }

    #[test]
    fn test_add_infers_merchant_from_rules() {
        let mut ledger = Ledger::sample();
        let mut service = ExpenseService::new(&mut ledger);

        let expense = service.add(new_expense("Coffee with team", 950)).unwrap();
        assert_eq!(expense.merchant, "Starbucks");
        assert_eq!(service.count(), 13);
        assert_eq!(ledger.expenses().last().unwrap().id, expense.id);
    }

    #[test]
    fn test_add_falls_back_to_first_word_and_unknown() {
        let mut ledger = Ledger::sample();
        let mut service = ExpenseService::new(&mut ledger);

        assert_eq!(service.add(new_expense("Parking garage", 1200)).unwrap().merchant, "Parking");
        assert_eq!(service.add(new_expense("  ", 1200)).unwrap().merchant, "Unknown");
    }

    #[test]
    fn test_add_uses_rules_added_later() {
        let mut ledger = Ledger::sample();
        MerchantService::new(&mut ledger).add_merchant("Blue Bottle").unwrap();
        MerchantService::new(&mut ledger).add_rule("espresso", "Blue Bottle").unwrap();

        let expense = ExpenseService::new(&mut ledger)
            .add(new_expense("Espresso to go", 450))
            .unwrap();
        assert_eq!(expense.merchant, "Blue Bottle");
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let mut ledger = Ledger::sample();
        let mut service = ExpenseService::new(&mut ledger);
        let a = service.add(new_expense("Lunch", 1000)).unwrap();
        let b = service.add(new_expense("Lunch", 1000)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let mut ledger = Ledger::sample();
        let mut service = ExpenseService::new(&mut ledger);
        let result = service.add(new_expense("Refund", -1000));
        assert!(matches!(result, Err(ExpenseError::Validation(_))));
        assert_eq!(service.count(), 12);
    }

    #[test]
    fn test_set_category_and_merchant() {
        let mut ledger = Ledger::sample();
        let mut service = ExpenseService::new(&mut ledger);
        let id = ExpenseId::from("9");

        let updated = service.set_category(&id, "Travel").unwrap();
        assert_eq!(updated.category, "Travel");

        let updated = service.set_merchant(&id, " Chipotle Mexican Grill ").unwrap();
        assert_eq!(updated.merchant, "Chipotle Mexican Grill");
        assert_eq!(service.get(&id).unwrap().category, "Travel");
    }

    #[test]
    fn test_set_category_unknown_id() {
        let mut ledger = Ledger::sample();
        let mut service = ExpenseService::new(&mut ledger);
        let result = service.set_category(&ExpenseId::from("99"), "Travel");
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_set_field_rejects_blank_value() {
        let mut ledger = Ledger::sample();
        let mut service = ExpenseService::new(&mut ledger);
        assert!(service
            .set_merchant(&ExpenseId::from("1"), "  ")
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_bulk_apply_updates_selection_and_total() {
        let mut ledger = Ledger::sample();
        let mut service = ExpenseService::new(&mut ledger);
        let travel = FilterCriteria::new().category("Travel");
        let before = service.filtered_total(&travel);

        let count = service.bulk_apply(&ids(&["3", "7"]), EditField::Category, "Travel");
        assert_eq!(count, 2);
        assert_eq!(
            service.filtered_total(&travel),
            before + Money::from_cents(9599) + Money::from_cents(7999)
        );
        assert_eq!(service.list(&travel, SortSpec::default()).len(), 5);
        assert_eq!(service.get(&ExpenseId::from("11")).unwrap().category, "Phone & Internet");
    }

    #[test]
    fn test_bulk_apply_noops() {
        let mut ledger = Ledger::sample();
        let snapshot = ledger.expenses().to_vec();
        let mut service = ExpenseService::new(&mut ledger);

        assert_eq!(service.bulk_apply(&HashSet::new(), EditField::Category, "Travel"), 0);
        assert_eq!(service.bulk_apply(&ids(&["1"]), EditField::Merchant, " "), 0);
        assert_eq!(ledger.expenses(), snapshot.as_slice());
    }
}
