//! In-memory ledger
//!
//! The ledger is the single canonical copy of everything the services edit.
//! It is built from seed data at startup and never written back.

pub mod file_io;
pub mod seed;

pub use file_io::{read_document, write_json_atomic, DocumentFormat};
pub use seed::SeedData;

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Card, Expense, ExpenseId, MerchantRule, NameList, Statement};

/// Canonical collections for one session
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub(crate) expenses: Vec<Expense>,
    pub(crate) categories: NameList,
    pub(crate) merchants: NameList,
    pub(crate) rules: Vec<MerchantRule>,
    pub(crate) cards: Vec<Card>,
    pub(crate) statements: Vec<Statement>,
}

impl Ledger {
    /// Build a ledger from seed data, validating record ids and rules
    pub fn from_seed(mut seed: SeedData) -> ExpenseResult<Self> {
        let mut seen = HashSet::new();
        for expense in &seed.expenses {
            expense
                .validate()
                .map_err(|e| ExpenseError::Seed(format!("expense {}: {}", expense.id, e)))?;
            if !seen.insert(expense.id.clone()) {
                return Err(ExpenseError::Seed(format!(
                    "duplicate expense id: {}",
                    expense.id
                )));
            }
        }

        seed.rules = seed
            .rules
            .into_iter()
            .map(|rule| MerchantRule::new(rule.keyword, rule.merchant_name))
            .collect();

        let mut keywords = HashSet::new();
        for rule in &seed.rules {
            rule.validate()
                .map_err(|e| ExpenseError::Seed(format!("rule {}: {}", rule, e)))?;
            if !keywords.insert(MerchantRule::normalize_keyword(&rule.keyword)) {
                return Err(ExpenseError::Seed(format!(
                    "duplicate rule keyword: {}",
                    rule.keyword
                )));
            }
        }

        let mut statement_ids = HashSet::new();
        for statement in &seed.statements {
            if !statement_ids.insert(statement.id.as_str()) {
                return Err(ExpenseError::Seed(format!(
                    "duplicate statement id: {}",
                    statement.id
                )));
            }
        }

        debug!(
            expenses = seed.expenses.len(),
            categories = seed.categories.len(),
            merchants = seed.merchants.len(),
            rules = seed.rules.len(),
            statements = seed.statements.len(),
            "ledger loaded"
        );

        Ok(Self {
            expenses: seed.expenses,
            categories: seed.categories,
            merchants: seed.merchants,
            rules: seed.rules,
            cards: seed.cards,
            statements: seed.statements,
        })
    }

    /// Ledger populated with the built-in sample
    pub fn sample() -> Self {
        Self::from_seed(SeedData::sample()).unwrap_or_default()
    }

    /// Load a seed file (JSON or YAML by extension)
    pub fn load(path: &Path) -> ExpenseResult<Self> {
        debug!(path = %path.display(), "reading seed file");
        let seed: SeedData = read_document(path)?;
        Self::from_seed(seed)
    }

    /// Load `path` if given, otherwise the built-in sample
    pub fn load_or_sample(path: Option<&Path>) -> ExpenseResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::sample()),
        }
    }

    /// Snapshot the ledger as a seed document
    pub fn to_seed(&self) -> SeedData {
        SeedData {
            expenses: self.expenses.clone(),
            categories: self.categories.clone(),
            merchants: self.merchants.clone(),
            rules: self.rules.clone(),
            cards: self.cards.clone(),
            statements: self.statements.clone(),
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn categories(&self) -> &NameList {
        &self.categories
    }

    pub fn merchants(&self) -> &NameList {
        &self.merchants
    }

    pub fn rules(&self) -> &[MerchantRule] {
        &self.rules
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn card_names(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up an expense by id
    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    pub(crate) fn expense_mut(&mut self, id: &ExpenseId) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| &e.id == id)
    }
}
