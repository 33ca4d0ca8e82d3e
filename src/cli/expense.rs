//! Expense CLI commands
//!
//! Listing the visible sequence, adding expenses, and category/merchant
//! corrections. Edits apply to the in-memory ledger for this run; the
//! resulting records are printed.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use super::FilterArgs;
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table, format_sort_indicator};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{EditField, Expense, ExpenseId, Money, NewExpense};
use crate::query;
use crate::services::{ExpenseService, MerchantService};
use crate::storage::Ledger;

/// Expense subcommands (flattened into the top level)
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List expenses matching the filters, with their total
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show one expense
    Show {
        /// Expense ID
        id: ExpenseId,
    },

    /// Add an expense; the merchant is inferred from the description
    Add {
        /// Amount (e.g., "18.25" or "$1,200")
        amount: String,
        /// Card charged
        #[arg(long)]
        card: String,
        /// Category
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show which merchant a description would be assigned
    Infer {
        /// Expense description
        description: String,
    },

    /// Change the category of one expense
    #[command(name = "set-category")]
    SetCategory {
        /// Expense ID
        id: ExpenseId,
        /// New category
        category: String,
    },

    /// Change the merchant of one expense
    #[command(name = "set-merchant")]
    SetMerchant {
        /// Expense ID
        id: ExpenseId,
        /// New merchant
        merchant: String,
    },

    /// Set category or merchant on several expenses at once
    Bulk {
        /// Field to change: category or merchant
        #[arg(long)]
        field: EditField,
        /// New value
        #[arg(long)]
        value: String,
        /// Expense IDs
        #[arg(required = true, num_args = 1..)]
        ids: Vec<ExpenseId>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let currency = settings.currency_symbol.as_str();
    let date_format = settings.date_format.as_str();

    match cmd {
        ExpenseCommands::List { filter } => {
            let spec = filter.sort_spec(settings.default_sort);
            let shown = ExpenseService::new(ledger).list(&filter.criteria(), spec);
            println!("Sorted by {}", format_sort_indicator(spec.field, spec));
            print!("{}", format_expense_table(&shown, date_format, currency));
        }

        ExpenseCommands::Show { id } => {
            let expense = ledger
                .expense(&id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
            print!("{}", format_expense_details(expense, currency));
        }

        ExpenseCommands::Add {
            amount,
            card,
            category,
            description,
            date,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| ExpenseError::Validation(format!("Invalid amount: {}", e)))?;

            let mut service = ExpenseService::new(ledger);
            let expense = service.add(NewExpense {
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                card_name: card,
                category,
                description,
                amount,
            })?;

            println!("Added expense: {}", expense);
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::Infer { description } => {
            let merchant = MerchantService::new(ledger).infer(&description);
            println!("{}", merchant);
        }

        ExpenseCommands::SetCategory { id, category } => {
            let expense = ExpenseService::new(ledger).set_category(&id, &category)?;
            println!("Updated expense: {}", expense);
        }

        ExpenseCommands::SetMerchant { id, merchant } => {
            let expense = ExpenseService::new(ledger).set_merchant(&id, &merchant)?;
            println!("Updated expense: {}", expense);
        }

        ExpenseCommands::Bulk { field, value, ids } => {
            let selected: HashSet<ExpenseId> = ids.into_iter().collect();
            let unknown: Vec<&ExpenseId> =
                selected.iter().filter(|id| ledger.expense(id).is_none()).collect();
            if let Some(id) = unknown.first() {
                return Err(ExpenseError::expense_not_found(id.to_string()));
            }

            let updated = ExpenseService::new(ledger).bulk_apply(&selected, field, &value);
            println!("Updated {} expense(s)", updated);

            let changed: Vec<_> = ledger
                .expenses()
                .iter()
                .filter(|e| selected.contains(&e.id))
                .cloned()
                .collect();
            print!("{}", format_expense_table(&changed, date_format, currency));
        }
    }

    Ok(())
}

/// Visible sequence for report and export commands
pub(crate) fn visible_for(
    ledger: &Ledger,
    settings: &Settings,
    filter: &FilterArgs,
) -> Vec<Expense> {
    query::visible(
        ledger.expenses(),
        &filter.criteria(),
        filter.sort_spec(settings.default_sort),
    )
}
