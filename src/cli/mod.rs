//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod expense;
pub mod export;
pub mod merchant;
pub mod report;
pub mod rule;
pub mod upload;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use merchant::{handle_merchant_command, MerchantCommands};
pub use report::{handle_report_command, ReportCommands};
pub use rule::{handle_rule_command, RuleCommands};
pub use upload::{handle_upload_command, UploadCommands};

use chrono::NaiveDate;
use clap::Args;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::NameList;
use crate::query::{FilterCriteria, SortDirection, SortField, SortSpec};

/// Filter and sort flags shared by `list`, `export` and `report`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Only expenses charged to this card
    #[arg(long)]
    pub card: Option<String>,

    /// Only expenses in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only expenses at this merchant
    #[arg(long)]
    pub merchant: Option<String>,

    /// Case-insensitive text to find in descriptions
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort column: date, amount, category or merchant
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,
}

impl FilterArgs {
    /// Criteria built from the given flags
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        if let Some(from) = self.from {
            criteria = criteria.from(from);
        }
        if let Some(to) = self.to {
            criteria = criteria.to(to);
        }
        if let Some(card) = &self.card {
            criteria = criteria.card(card.as_str());
        }
        if let Some(category) = &self.category {
            criteria = criteria.category(category.as_str());
        }
        if let Some(merchant) = &self.merchant {
            criteria = criteria.merchant(merchant.as_str());
        }
        if let Some(search) = &self.search {
            criteria = criteria.search(search.as_str());
        }
        criteria
    }

    /// Sort spec from `--sort`/`--desc`, or `fallback` when `--sort` is absent
    pub fn sort_spec(&self, fallback: SortSpec) -> SortSpec {
        match (self.sort, self.desc) {
            (Some(field), true) => SortSpec::descending(field),
            (Some(field), false) => SortSpec::ascending(field),
            (None, true) => SortSpec::new(fallback.field, SortDirection::Descending),
            (None, false) => fallback,
        }
    }
}

/// Resolve a registry argument: a name, or `#N` for the N-th entry (1-based)
pub(crate) fn resolve_name(
    names: &NameList,
    entity_type: &'static str,
    arg: &str,
) -> ExpenseResult<String> {
    let arg = arg.trim();
    match arg.strip_prefix('#').map(str::parse::<usize>) {
        Some(Ok(n)) => n
            .checked_sub(1)
            .and_then(|i| names.get(i))
            .map(str::to_string)
            .ok_or_else(|| ExpenseError::NotFound {
                entity_type,
                identifier: arg.to_string(),
            }),
        _ => Ok(arg.to_string()),
    }
}
