//! CLI commands for dashboard reports
//!
//! Every report runs over the visible sequence chosen by the shared filter
//! flags.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use super::expense::visible_for;
use super::FilterArgs;
use crate::config::Settings;
use crate::display::format_expense_table;
use crate::error::ExpenseResult;
use crate::reports::{top_transactions, CardSummaryReport, MonthlyCardReport, SpendingReport};
use crate::storage::Ledger;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending by category
    Categories {
        #[command(flatten)]
        filter: FilterArgs,

        /// Also write the breakdown to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Highest-spending merchants
    Merchants {
        #[command(flatten)]
        filter: FilterArgs,

        /// Number of merchants to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Monthly totals per card
    Monthly {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Largest individual expenses
    Top {
        #[command(flatten)]
        filter: FilterArgs,

        /// Number of expenses to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Upcoming card payments
    Cards {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Handle a report command
pub fn handle_report_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    match cmd {
        ReportCommands::Categories { filter, output } => {
            let shown = visible_for(ledger, settings, &filter);
            let report = SpendingReport::generate(&shown);
            print!("{}", report.format_categories());

            if let Some(path) = output {
                let file = File::create(&path)?;
                report.export_csv(BufWriter::new(file))?;
                println!("\nWrote {}", path.display());
            }
        }

        ReportCommands::Merchants { filter, limit } => {
            let shown = visible_for(ledger, settings, &filter);
            let report = SpendingReport::generate(&shown);
            print!(
                "{}",
                report.format_merchants(limit.unwrap_or(settings.report_limit))
            );
        }

        ReportCommands::Monthly { filter } => {
            let shown = visible_for(ledger, settings, &filter);
            let report = MonthlyCardReport::generate(&shown, &ledger.card_names());
            print!("{}", report.format_terminal());
        }

        ReportCommands::Top { filter, limit } => {
            let shown = visible_for(ledger, settings, &filter);
            let top = top_transactions(&shown, limit.unwrap_or(settings.report_limit));
            print!(
                "{}",
                format_expense_table(&top, &settings.date_format, &settings.currency_symbol)
            );
        }

        ReportCommands::Cards { filter } => {
            let shown = visible_for(ledger, settings, &filter);
            let report = CardSummaryReport::generate(ledger.cards(), &shown);
            print!("{}", report.format_terminal());

            if let Some(next) = report.next_due(Local::now().date_naive()) {
                println!(
                    "\nNext payment: {} {} on {}",
                    next.name, next.next_payment, next.due_date
                );
            }
        }
    }

    Ok(())
}
