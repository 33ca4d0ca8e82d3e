//! Merchant rules
//!
//! A rule maps a keyword found in an expense description to a merchant name.
//! Rules are evaluated in list order and the first match wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Merchant assigned when a description is blank
pub const UNKNOWN_MERCHANT: &str = "Unknown";

/// Keyword-to-merchant mapping used to label new expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantRule {
    /// Substring searched for in descriptions (case-insensitive)
    pub keyword: String,

    /// Merchant assigned on match
    #[serde(alias = "merchantName")]
    pub merchant_name: String,
}

impl MerchantRule {
    /// Create a new rule; both parts are trimmed
    pub fn new(keyword: impl Into<String>, merchant_name: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().trim().to_string(),
            merchant_name: merchant_name.into().trim().to_string(),
        }
    }

    /// Normalize a keyword for comparison
    pub fn normalize_keyword(keyword: &str) -> String {
        keyword.trim().to_lowercase()
    }

    /// Check whether this rule's keyword equals `keyword` (case-insensitive)
    pub fn has_keyword(&self, keyword: &str) -> bool {
        Self::normalize_keyword(&self.keyword) == Self::normalize_keyword(keyword)
    }

    /// Check whether the rule fires for a description
    pub fn matches(&self, description: &str) -> bool {
        let keyword = Self::normalize_keyword(&self.keyword);
        !keyword.is_empty() && description.to_lowercase().contains(&keyword)
    }

    /// Validate the rule
    pub fn validate(&self) -> Result<(), RuleValidationError> {
        if self.keyword.trim().is_empty() {
            return Err(RuleValidationError::EmptyKeyword);
        }
        if self.merchant_name.trim().is_empty() {
            return Err(RuleValidationError::EmptyMerchant);
        }
        Ok(())
    }
}

impl fmt::Display for MerchantRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" -> {}", self.keyword, self.merchant_name)
    }
}

/// Return the first rule (in order) that matches `description`
pub fn first_match<'a>(description: &str, rules: &'a [MerchantRule]) -> Option<&'a MerchantRule> {
    rules.iter().find(|rule| rule.matches(description))
}

/// Determine the merchant for a new expense from its description
///
/// Falls back to the description's first word, then to [`UNKNOWN_MERCHANT`].
pub fn infer_merchant(description: &str, rules: &[MerchantRule]) -> String {
    if let Some(rule) = first_match(description, rules) {
        return rule.merchant_name.clone();
    }

    description
        .split_whitespace()
        .next()
        .unwrap_or(UNKNOWN_MERCHANT)
        .to_string()
}

/// Validation errors for merchant rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleValidationError {
    EmptyKeyword,
    EmptyMerchant,
}

impl fmt::Display for RuleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKeyword => write!(f, "Rule keyword cannot be empty"),
            Self::EmptyMerchant => write!(f, "Rule merchant cannot be empty"),
        }
    }
}

impl std::error::Error for RuleValidationError {}
