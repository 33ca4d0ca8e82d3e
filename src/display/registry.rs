//! Category, merchant and rule display formatting

use crate::models::{MerchantRule, NameList};

/// Format a registry as a numbered list
pub fn format_name_list(title: &str, names: &NameList) -> String {
    if names.is_empty() {
        return format!("No {} defined.\n", title.to_lowercase());
    }

    let mut output = format!("{}:\n", title);
    for (i, name) in names.iter().enumerate() {
        output.push_str(&format!("  {:>2}. {}\n", i + 1, name));
    }
    output
}

/// Format merchant rules in evaluation order
pub fn format_rule_list(rules: &[MerchantRule]) -> String {
    if rules.is_empty() {
        return "No merchant rules defined.\n".to_string();
    }

    let keyword_width = rules
        .iter()
        .map(|r| r.keyword.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}    {}\n",
        "Keyword",
        "Merchant",
        width = keyword_width
    ));
    output.push_str(&"-".repeat(keyword_width + 24));
    output.push('\n');

    for rule in rules {
        output.push_str(&format!(
            "{:<width$} -> {}\n",
            rule.keyword,
            rule.merchant_name,
            width = keyword_width
        ));
    }
    output
}
