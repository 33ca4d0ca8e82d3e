//! Merchant service
//!
//! Maintains the merchant registry and the merchant rules that reference it.
//! A merchant rename is carried into every rule pointing at the old name; a
//! merchant still referenced by rules cannot be deleted.

use tracing::{info, warn};

use super::registry_error;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{infer_merchant, MerchantRule};
use crate::storage::Ledger;

const ENTITY: &str = "Merchant";

/// Service for merchant and merchant rule management
pub struct MerchantService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> MerchantService<'a> {
    /// Create a new merchant service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    // === Merchant Operations ===

    /// Merchants in registry order
    pub fn list(&self) -> Vec<String> {
        self.ledger.merchants.iter().map(str::to_string).collect()
    }

    /// Append a new merchant
    pub fn add_merchant(&mut self, name: &str) -> ExpenseResult<String> {
        let added = self
            .ledger
            .merchants
            .add(name)
            .map_err(|e| {
                warn!(name, error = %e, "merchant add rejected");
                registry_error(ENTITY, e)
            })?
            .to_string();

        info!(merchant = %added, "merchant added");
        Ok(added)
    }

    /// Rename a merchant in place and repoint the rules that use it
    ///
    /// Returns the number of rules rewritten.
    pub fn rename_merchant(&mut self, old_name: &str, new_name: &str) -> ExpenseResult<usize> {
        let previous = self
            .ledger
            .merchants
            .rename(old_name, new_name)
            .map_err(|e| {
                warn!(old_name, new_name, error = %e, "merchant rename rejected");
                registry_error(ENTITY, e)
            })?;

        let new_name = new_name.trim();
        let mut repointed = 0;
        for rule in self
            .ledger
            .rules
            .iter_mut()
            .filter(|r| r.merchant_name == previous)
        {
            rule.merchant_name = new_name.to_string();
            repointed += 1;
        }

        info!(from = %previous, to = new_name, rules = repointed, "merchant renamed");
        Ok(repointed)
    }

    /// Remove a merchant that no rule references
    pub fn delete_merchant(&mut self, name: &str) -> ExpenseResult<String> {
        let name = name.trim();
        if !self.ledger.merchants.contains(name) {
            return Err(ExpenseError::merchant_not_found(name));
        }

        let rule_count = self.rules_using(name);
        if rule_count > 0 {
            warn!(merchant = name, rule_count, "merchant delete blocked by rules");
            return Err(ExpenseError::MerchantInUse {
                merchant: name.to_string(),
                rule_count,
            });
        }

        let removed = self
            .ledger
            .merchants
            .remove(name)
            .map_err(|e| registry_error(ENTITY, e))?;

        info!(merchant = %removed, "merchant deleted");
        Ok(removed)
    }

    /// Number of rules that assign `merchant`
    pub fn rules_using(&self, merchant: &str) -> usize {
        self.ledger
            .rules
            .iter()
            .filter(|r| r.merchant_name == merchant)
            .count()
    }

    // === Rule Operations ===

    /// Rules in evaluation order
    pub fn list_rules(&self) -> &[MerchantRule] {
        &self.ledger.rules
    }

    /// Append a rule mapping `keyword` to an existing merchant
    pub fn add_rule(&mut self, keyword: &str, merchant: &str) -> ExpenseResult<MerchantRule> {
        let rule = MerchantRule::new(keyword, merchant);
        rule.validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        if !self.ledger.merchants.contains(&rule.merchant_name) {
            return Err(ExpenseError::merchant_not_found(rule.merchant_name));
        }

        if self.ledger.rules.iter().any(|r| r.has_keyword(&rule.keyword)) {
            warn!(keyword = %rule.keyword, "duplicate rule keyword");
            return Err(ExpenseError::Duplicate {
                entity_type: "Rule",
                identifier: rule.keyword,
            });
        }

        info!(keyword = %rule.keyword, merchant = %rule.merchant_name, "rule added");
        self.ledger.rules.push(rule.clone());
        Ok(rule)
    }

    /// Delete the rule for `keyword` (case-insensitive)
    pub fn delete_rule(&mut self, keyword: &str) -> ExpenseResult<MerchantRule> {
        let index = self
            .ledger
            .rules
            .iter()
            .position(|r| r.has_keyword(keyword))
            .ok_or_else(|| ExpenseError::rule_not_found(keyword.trim()))?;

        let removed = self.ledger.rules.remove(index);
        info!(keyword = %removed.keyword, "rule deleted");
        Ok(removed)
    }

    /// Merchant a new expense with this description would receive
    pub fn infer(&self, description: &str) -> String {
        infer_merchant(description, &self.ledger.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_merchant() {
        let mut ledger = Ledger::sample();
        let mut service = MerchantService::new(&mut ledger);

        assert_eq!(service.add_merchant(" Amtrak ").unwrap(), "Amtrak");
        assert_eq!(service.list().len(), 12);
        assert!(service.add_merchant("Uber").unwrap_err().is_duplicate());
    }

    #[test]
    fn test_rename_cascades_to_rules() {
        let mut ledger = Ledger::sample();
        let mut service = MerchantService::new(&mut ledger);

        let repointed = service.rename_merchant("Uber", "Uber Technologies").unwrap();
        assert_eq!(repointed, 1);

        let rule = service
            .list_rules()
            .iter()
            .find(|r| r.keyword == "uber")
            .unwrap();
        assert_eq!(rule.merchant_name, "Uber Technologies");
        assert_eq!(service.list()[3], "Uber Technologies");
        assert_eq!(service.infer("uber to the office"), "Uber Technologies");
    }

    #[test]
    fn test_rename_leaves_other_rules_alone() {
        let mut ledger = Ledger::sample();
        let mut service = MerchantService::new(&mut ledger);

        service.rename_merchant("Lyft", "Lyft Inc").unwrap();
        let merchants: Vec<&str> = service
            .list_rules()
            .iter()
            .map(|r| r.merchant_name.as_str())
            .collect();
        assert_eq!(merchants, vec!["Starbucks", "Uber", "Delta Airlines"]);
    }

    #[test]
    fn test_rename_collision_changes_nothing() {
        let mut ledger = Ledger::sample();
        let before = ledger.rules().to_vec();
        let mut service = MerchantService::new(&mut ledger);

        assert!(service.rename_merchant("Uber", "Lyft").unwrap_err().is_duplicate());
        assert_eq!(service.list_rules(), before.as_slice());
    }

    #[test]
    fn test_delete_blocked_while_rule_references_merchant() {
        let mut ledger = Ledger::sample();
        let mut service = MerchantService::new(&mut ledger);

        match service.delete_merchant("Uber") {
            Err(ExpenseError::MerchantInUse {
                merchant,
                rule_count,
            }) => {
                assert_eq!(merchant, "Uber");
                assert_eq!(rule_count, 1);
            }
            other => panic!("expected MerchantInUse, got {:?}", other),
        }
        assert!(service.list().contains(&"Uber".to_string()));

        service.delete_rule("uber").unwrap();
        assert_eq!(service.delete_merchant("Uber").unwrap(), "Uber");
        assert!(!service.list().contains(&"Uber".to_string()));
    }

    #[test]
    fn test_delete_unreferenced_and_missing() {
        let mut ledger = Ledger::sample();
        let mut service = MerchantService::new(&mut ledger);

        assert_eq!(service.delete_merchant("Chipotle").unwrap(), "Chipotle");
        assert!(service.delete_merchant("Chipotle").unwrap_err().is_not_found());
    }

    #[test]
    fn test_add_rule() {
        let mut ledger = Ledger::sample();
        let mut service = MerchantService::new(&mut ledger);

        let rule = service.add_rule(" hotel ", "Hilton Hotels").unwrap();
        assert_eq!(rule.keyword, "hotel");
        assert_eq!(service.list_rules().len(), 4);
        assert_eq!(service.infer("Hotel in Denver"), "Hilton Hotels");
    }

    #[test]
    fn test_add_rule_rejections() {
        let mut ledger = Ledger::sample();
        let mut service = MerchantService::new(&mut ledger);

        assert!(service.add_rule("COFFEE", "Starbucks").unwrap_err().is_duplicate());
        assert!(service.add_rule("", "Starbucks").unwrap_err().is_validation());
        assert!(service.add_rule("tea", " ").unwrap_err().is_validation());
        assert!(service.add_rule("tea", "Teavana").unwrap_err().is_not_found());
        assert_eq!(service.list_rules().len(), 3);
    }

    #[test]
    fn test_delete_rule() {
        let mut ledger = Ledger::sample();
        let mut service = MerchantService::new(&mut ledger);

        let removed = service.delete_rule("FLIGHT").unwrap();
        assert_eq!(removed.merchant_name, "Delta Airlines");
        assert_eq!(service.infer("Flight to Denver"), "Flight");
        assert!(service.delete_rule("flight").unwrap_err().is_not_found());
    }
}
