//! Seed data
//!
//! The static collections the ledger starts from: expense records, the
//! category and merchant registries, merchant rules, cards, and uploaded
//! statements. A seed file
//! may be JSON or YAML; without one the built-in sample is used.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Card, Expense, MerchantRule, Money, NameList, Statement};

/// Serializable seed document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub categories: NameList,
    #[serde(default)]
    pub merchants: NameList,
    #[serde(default)]
    pub rules: Vec<MerchantRule>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn names(values: &[&str]) -> NameList {
    NameList::try_from_names(values).unwrap_or_default()
}

impl SeedData {
    /// The built-in sample: twelve expenses from April and May 2025
    pub fn sample() -> Self {
        let rows: [(&str, (i32, u32, u32), &str, &str, &str, &str, i64); 12] = [
            (
                "1",
                (2025, 5, 15),
                "Chase Sapphire",
                "Restaurant",
                "Cheesecake Factory",
                "Dinner with clients",
                12575,
            ),
            (
                "2",
                (2025, 5, 14),
                "American Express Gold",
                "Travel",
                "Delta Airlines",
                "Flight to New York",
                45000,
            ),
            (
                "3",
                (2025, 5, 13),
                "Discover It",
                "Phone & Internet",
                "Verizon",
                "Monthly phone bill",
                9599,
            ),
            ("4", (2025, 5, 12), "Chase Sapphire", "Taxi", "Uber", "Ride to airport", 3550),
            (
                "5",
                (2025, 5, 10),
                "American Express Gold",
                "Restaurant",
                "Starbucks",
                "Coffee meeting",
                1825,
            ),
            (
                "6",
                (2025, 5, 8),
                "Discover It",
                "Travel",
                "Hilton Hotels",
                "Hotel stay in Chicago",
                32045,
            ),
            (
                "7",
                (2025, 5, 7),
                "Chase Sapphire",
                "Phone & Internet",
                "AT&T",
                "Internet service",
                7999,
            ),
            ("8", (2025, 5, 5), "American Express Gold", "Taxi", "Lyft", "Ride to meeting", 2275),
            ("9", (2025, 5, 3), "Discover It", "Restaurant", "Chipotle", "Lunch", 1545),
            (
                "10",
                (2025, 5, 1),
                "Chase Sapphire",
                "Travel",
                "Airbnb",
                "Accommodation in Miami",
                27500,
            ),
            (
                "11",
                (2025, 4, 28),
                "American Express Gold",
                "Phone & Internet",
                "T-Mobile",
                "Family plan",
                12050,
            ),
            ("12", (2025, 4, 25), "Discover It", "Taxi", "Uber", "Ride home", 1899),
        ];

        let expenses = rows
            .into_iter()
            .map(|(id, (y, m, d), card, category, merchant, description, cents)| {
                Expense::new(
                    ymd(y, m, d),
                    card,
                    category,
                    merchant,
                    description,
                    Money::from_cents(cents),
                )
                .with_id(id)
            })
            .collect();

        Self {
            expenses,
            categories: names(&["Restaurant", "Taxi", "Travel", "Phone & Internet"]),
            merchants: names(&[
                "Cheesecake Factory",
                "Delta Airlines",
                "Verizon",
                "Uber",
                "Starbucks",
                "Hilton Hotels",
                "AT&T",
                "Lyft",
                "Chipotle",
                "Airbnb",
                "T-Mobile",
            ]),
            rules: vec![
                MerchantRule::new("coffee", "Starbucks"),
                MerchantRule::new("uber", "Uber"),
                MerchantRule::new("flight", "Delta Airlines"),
            ],
            cards: vec![
                Card::new("Chase Sapphire", Money::from_cents(45075), ymd(2025, 5, 20)),
                Card::new(
                    "American Express Gold",
                    Money::from_cents(32050),
                    ymd(2025, 5, 15),
                ),
                Card::new("Discover It", Money::from_cents(27525), ymd(2025, 5, 22)),
            ],
            statements: vec![
                Statement::new(
                    "1",
                    "Chase",
                    Money::from_cents(45075),
                    ymd(2025, 4, 15),
                    ymd(2025, 5, 20),
                ),
                Statement::new(
                    "2",
                    "American Express",
                    Money::from_cents(32050),
                    ymd(2025, 4, 10),
                    ymd(2025, 5, 15),
                )
                .with_other_charges(Money::from_cents(1299)),
                Statement::new(
                    "3",
                    "Discover",
                    Money::from_cents(27525),
                    ymd(2025, 4, 17),
                    ymd(2025, 5, 22),
                ),
            ],
        }
    }

    /// Names of the configured cards, in seed order
    pub fn card_names(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.name.clone()).collect()
    }
}
