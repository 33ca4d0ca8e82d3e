//! Sorting for the expense list
//!
//! Sorting is stable: records that compare equal keep their prior relative
//! order in both directions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::Expense;

/// Column the expense list is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Date,
    Amount,
    Category,
    Merchant,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Field and direction of the expense list ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    /// Newest first
    fn default() -> Self {
        Self::descending(SortField::Date)
    }
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Column-header click: the active field flips direction, any other
    /// field becomes active in ascending order
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::ascending(field)
        }
    }

    /// Compare two expenses under this spec
    pub fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        let ordering = match self.field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Amount => a.amount.cmp(&b.amount),
            SortField::Category => locale_cmp(&a.category, &b.category),
            SortField::Merchant => locale_cmp(&a.merchant, &b.merchant),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Dictionary-style string comparison
///
/// Letters compare case-insensitively first; strings that differ only in
/// case order lowercase before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

/// Return a sorted copy of `records`
pub fn sort(records: &[Expense], spec: SortSpec) -> Vec<Expense> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| spec.compare(a, b));
    sorted
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Amount => write!(f, "amount"),
            Self::Category => write!(f, "category"),
            Self::Merchant => write!(f, "merchant"),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "category" => Ok(Self::Category),
            "merchant" => Ok(Self::Merchant),
            other => Err(format!(
                "unknown sort field '{}' (expected date, amount, category or merchant)",
                other
            )),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::SeedData;
    use chrono::NaiveDate;

    fn ids(records: &[Expense]) -> Vec<&str> {
        records.iter().map(|e| e.id.as_str()).collect()
    }

    fn expense(id: &str, category: &str, cents: i64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            "Chase Sapphire",
            category,
            "Merchant",
            "",
            Money::from_cents(cents),
        )
        .with_id(id)
    }

    #[test]
    fn test_sort_by_date_ascending() {
        let records = SeedData::sample().expenses;
        let sorted = sort(&records, SortSpec::ascending(SortField::Date));
        assert_eq!(
            ids(&sorted),
            vec!["12", "11", "10", "9", "8", "7", "6", "5", "4", "3", "2", "1"]
        );
    }

    #[test]
    fn test_sort_by_amount() {
        let records = SeedData::sample().expenses;
        let sorted = sort(&records, SortSpec::descending(SortField::Amount));
        assert_eq!(sorted[0].id.as_str(), "2");
        assert_eq!(sorted.last().unwrap().id.as_str(), "9");
    }

    #[test]
    fn test_date_descending_is_exact_reverse_without_ties() {
        let records = SeedData::sample().expenses;
        let asc = sort(&records, SortSpec::ascending(SortField::Date));
        let mut desc = sort(&asc, SortSpec::descending(SortField::Date));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let records = SeedData::sample().expenses;
        for field in [
            SortField::Date,
            SortField::Amount,
            SortField::Category,
            SortField::Merchant,
        ] {
            for spec in [SortSpec::ascending(field), SortSpec::descending(field)] {
                let once = sort(&records, spec);
                let twice = sort(&once, spec);
                assert_eq!(once, twice, "not idempotent for {}", spec);
            }
        }
    }

    #[test]
    fn test_stable_on_equal_keys_in_both_directions() {
        let records = vec![
            expense("a", "Travel", 100),
            expense("b", "Taxi", 100),
            expense("c", "Travel", 50),
            expense("d", "Taxi", 100),
        ];

        let asc = sort(&records, SortSpec::ascending(SortField::Category));
        assert_eq!(ids(&asc), vec!["b", "d", "a", "c"]);

        let desc = sort(&records, SortSpec::descending(SortField::Category));
        assert_eq!(ids(&desc), vec!["a", "c", "b", "d"]);

        let by_amount = sort(&records, SortSpec::descending(SortField::Amount));
        assert_eq!(ids(&by_amount), vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_sort_by_category_groups_sample() {
        let records = SeedData::sample().expenses;
        let sorted = sort(&records, SortSpec::ascending(SortField::Category));
        let categories: Vec<&str> = sorted.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(&categories[..3], &["Phone & Internet"; 3]);
        assert_eq!(&categories[9..], &["Travel"; 3]);
        // equal categories keep seed order
        assert_eq!(ids(&sorted[..3]), vec!["3", "7", "11"]);
    }

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("AT&T", "Airbnb"), Ordering::Greater);
        assert_eq!(locale_cmp("uber", "Uber"), Ordering::Less);
        assert_eq!(locale_cmp("Lyft", "Lyft"), Ordering::Equal);
    }

    #[test]
    fn test_toggle() {
        let spec = SortSpec::ascending(SortField::Date);
        let flipped = spec.toggle(SortField::Date);
        assert_eq!(flipped, SortSpec::descending(SortField::Date));
        assert_eq!(flipped.toggle(SortField::Date), spec);

        let switched = flipped.toggle(SortField::Amount);
        assert_eq!(switched, SortSpec::ascending(SortField::Amount));
    }

    #[test]
    fn test_default_is_newest_first() {
        assert_eq!(SortSpec::default(), SortSpec::descending(SortField::Date));
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("Amount".parse::<SortField>(), Ok(SortField::Amount));
        assert!("description".parse::<SortField>().is_err());
    }
}
