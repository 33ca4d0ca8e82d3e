//! Category service
//!
//! Maintains the ordered category registry. Deleting a category does not
//! touch expenses that still carry it; they keep the stale label.

use tracing::{info, warn};

use super::registry_error;
use crate::error::ExpenseResult;
use crate::storage::Ledger;

const ENTITY: &str = "Category";

/// Service for category management
pub struct CategoryService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Categories in registry order
    pub fn list(&self) -> Vec<String> {
        self.ledger.categories.iter().map(str::to_string).collect()
    }

    /// Append a new category
    pub fn add(&mut self, name: &str) -> ExpenseResult<String> {
        let added = self
            .ledger
            .categories
            .add(name)
            .map_err(|e| {
                warn!(name, error = %e, "category add rejected");
                registry_error(ENTITY, e)
            })?
            .to_string();

        info!(category = %added, "category added");
        Ok(added)
    }

    /// Rename a category in place, returning the new name
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> ExpenseResult<String> {
        let previous = self
            .ledger
            .categories
            .rename(old_name, new_name)
            .map_err(|e| {
                warn!(old_name, new_name, error = %e, "category rename rejected");
                registry_error(ENTITY, e)
            })?;

        let new_name = new_name.trim().to_string();
        info!(from = %previous, to = %new_name, "category renamed");
        Ok(new_name)
    }

    /// Remove a category from the registry
    pub fn delete(&mut self, name: &str) -> ExpenseResult<String> {
        let removed = self
            .ledger
            .categories
            .remove(name)
            .map_err(|e| registry_error(ENTITY, e))?;

        info!(category = %removed, "category deleted");
        Ok(removed)
    }

    /// Count categories
    pub fn count(&self) -> usize {
        self.ledger.categories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::models::ExpenseId;

    #[test]
    fn test_add_category() {
        let mut ledger = Ledger::sample();
        let mut service = CategoryService::new(&mut ledger);

        assert_eq!(service.add("  Groceries ").unwrap(), "Groceries");
        assert_eq!(service.list().last().map(String::as_str), Some("Groceries"));
    }

    #[test]
    fn test_duplicate_category() {
        let mut ledger = Ledger::sample();
        let mut service = CategoryService::new(&mut ledger);

        let result = service.add("Taxi");
        assert!(matches!(
            result,
            Err(ExpenseError::Duplicate { entity_type: "Category", .. })
        ));
        assert_eq!(service.count(), 4);
    }

    #[test]
    fn test_blank_category() {
        let mut ledger = Ledger::sample();
        let mut service = CategoryService::new(&mut ledger);
        assert!(service.add("   ").unwrap_err().is_validation());
    }

    #[test]
    fn test_rename_category_keeps_order() {
        let mut ledger = Ledger::sample();
        let mut service = CategoryService::new(&mut ledger);

        service.rename("Taxi", "Rideshare").unwrap();
        assert_eq!(
            service.list(),
            vec!["Restaurant", "Rideshare", "Travel", "Phone & Internet"]
        );
    }

    #[test]
    fn test_rename_into_existing_name() {
        let mut ledger = Ledger::sample();
        let mut service = CategoryService::new(&mut ledger);

        assert!(service.rename("Taxi", "Travel").unwrap_err().is_duplicate());
        assert!(service.rename("Gym", "Fitness").unwrap_err().is_not_found());
        assert_eq!(service.list()[1], "Taxi");
    }

    #[test]
    fn test_delete_leaves_expenses_stale() {
        let mut ledger = Ledger::sample();
        CategoryService::new(&mut ledger).delete("Taxi").unwrap();

        assert!(!ledger.categories().contains("Taxi"));
        let expense = ledger.expense(&ExpenseId::from("4")).unwrap();
        assert_eq!(expense.category, "Taxi");
    }

    #[test]
    fn test_delete_missing_category() {
        let mut ledger = Ledger::sample();
        let mut service = CategoryService::new(&mut ledger);
        assert!(service.delete("Gym").unwrap_err().is_not_found());
    }
}
