//! Filter criteria for the expense list
//!
//! Every criterion is optional and absent criteria impose no constraint.
//! Active criteria combine with logical AND.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// Options for filtering expenses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Earliest date, inclusive
    pub date_from: Option<NaiveDate>,
    /// Latest date, inclusive
    pub date_to: Option<NaiveDate>,
    /// Exact card name
    pub card: Option<String>,
    /// Exact category
    pub category: Option<String>,
    /// Exact merchant
    pub merchant: Option<String>,
    /// Case-insensitive substring of the description
    pub description_search: Option<String>,
}

/// Blank selections mean "no filter"
fn selection(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl FilterCriteria {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter from a start date (inclusive)
    pub fn from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Filter up to an end date (inclusive)
    pub fn to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Filter by date range (both ends inclusive)
    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.from(start).to(end)
    }

    /// Filter by card
    pub fn card(mut self, card: impl Into<String>) -> Self {
        self.card = selection(card);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = selection(category);
        self
    }

    /// Filter by merchant
    pub fn merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = selection(merchant);
        self
    }

    /// Search descriptions
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.description_search = selection(text);
        self
    }

    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.date_from.is_none()
            && self.date_to.is_none()
            && active(&self.card).is_none()
            && active(&self.category).is_none()
            && active(&self.merchant).is_none()
            && active(&self.description_search).is_none()
    }

    /// Check whether a single expense passes every active criterion
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(from) = self.date_from {
            if expense.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if expense.date > to {
                return false;
            }
        }
        if let Some(card) = active(&self.card) {
            if expense.card_name != card {
                return false;
            }
        }
        if let Some(category) = active(&self.category) {
            if expense.category != category {
                return false;
            }
        }
        if let Some(merchant) = active(&self.merchant) {
            if expense.merchant != merchant {
                return false;
            }
        }
        if let Some(search) = active(&self.description_search) {
            if !expense
                .description
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Fields are public, so a blank string may still arrive here
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Keep the expenses that pass `criteria`, preserving their order
pub fn filter(records: &[Expense], criteria: &FilterCriteria) -> Vec<Expense> {
    records
        .iter()
        .filter(|expense| criteria.matches(expense))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SeedData;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(records: &[Expense]) -> Vec<&str> {
        records.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_everything() {
        let records = SeedData::sample().expenses;
        let criteria = FilterCriteria::new();
        assert!(criteria.is_empty());
        assert_eq!(filter(&records, &criteria), records);
    }

    #[test]
    fn test_inclusive_date_range() {
        let records = SeedData::sample().expenses;
        let criteria = FilterCriteria::new().date_range(date(2025, 5, 5), date(2025, 5, 10));
        let result = filter(&records, &criteria);
        assert_eq!(ids(&result), vec!["5", "6", "7", "8"]);
        assert!(result
            .iter()
            .all(|e| e.date >= date(2025, 5, 5) && e.date <= date(2025, 5, 10)));
    }

    #[test]
    fn test_open_ended_dates() {
        let records = SeedData::sample().expenses;
        let since = filter(&records, &FilterCriteria::new().from(date(2025, 5, 13)));
        assert_eq!(ids(&since), vec!["1", "2", "3"]);

        let until = filter(&records, &FilterCriteria::new().to(date(2025, 4, 28)));
        assert_eq!(ids(&until), vec!["11", "12"]);
    }

    #[test]
    fn test_exact_label_filters_combine_with_and() {
        let records = SeedData::sample().expenses;
        let criteria = FilterCriteria::new().card("Discover It").category("Taxi");
        assert_eq!(ids(&filter(&records, &criteria)), vec!["12"]);

        let by_merchant = FilterCriteria::new().merchant("Uber");
        assert_eq!(ids(&filter(&records, &by_merchant)), vec!["4", "12"]);
    }

    #[test]
    fn test_label_filters_are_case_sensitive() {
        let records = SeedData::sample().expenses;
        let criteria = FilterCriteria::new().merchant("uber");
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn test_description_search_is_case_insensitive() {
        let records = SeedData::sample().expenses;
        let criteria = FilterCriteria::new().search("RIDE");
        assert_eq!(ids(&filter(&records, &criteria)), vec!["4", "8", "12"]);
    }

    #[test]
    fn test_blank_selections_are_ignored() {
        let records = SeedData::sample().expenses;
        let criteria = FilterCriteria::new().card("").category("  ").search("");
        assert!(criteria.is_empty());
        assert_eq!(filter(&records, &criteria).len(), records.len());

        let raw = FilterCriteria {
            merchant: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert!(raw.is_empty());
        assert_eq!(filter(&records, &raw).len(), records.len());
    }

    #[test]
    fn test_output_is_ordered_subset() {
        let records = SeedData::sample().expenses;
        let criteria_list = [
            FilterCriteria::new().search("e"),
            FilterCriteria::new().category("Travel"),
            FilterCriteria::new().from(date(2025, 5, 1)).card("Chase Sapphire"),
            FilterCriteria::new().search("nothing matches this"),
        ];

        for criteria in &criteria_list {
            let result = filter(&records, criteria);
            let mut cursor = records.iter();
            for kept in &result {
                assert!(
                    cursor.any(|r| r == kept),
                    "{} out of order for {:?}",
                    kept.id,
                    criteria
                );
            }
        }
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let records = SeedData::sample().expenses;
        let snapshot = records.clone();
        let _ = filter(&records, &FilterCriteria::new().category("Travel"));
        assert_eq!(records, snapshot);
    }
}
