//! Merchant CLI commands

use clap::Subcommand;

use super::resolve_name;
use crate::display::format_name_list;
use crate::error::ExpenseResult;
use crate::services::MerchantService;
use crate::storage::Ledger;

/// Merchant subcommands
#[derive(Subcommand, Debug)]
pub enum MerchantCommands {
    /// List merchants in order
    List,

    /// Add a merchant
    Add {
        /// Merchant name
        name: String,
    },

    /// Rename a merchant; rules pointing at it follow the rename
    Rename {
        /// Current name, or #N for the N-th merchant
        merchant: String,
        /// New name
        new_name: String,
    },

    /// Delete a merchant that no rule uses
    Delete {
        /// Merchant name, or #N for the N-th merchant
        merchant: String,
    },
}

/// Handle a merchant command
pub fn handle_merchant_command(ledger: &mut Ledger, cmd: MerchantCommands) -> ExpenseResult<()> {
    match cmd {
        MerchantCommands::List => {
            print!("{}", format_name_list("Merchants", ledger.merchants()));
        }

        MerchantCommands::Add { name } => {
            let added = MerchantService::new(ledger).add_merchant(&name)?;
            println!("Added merchant: {}", added);
            print!("{}", format_name_list("Merchants", ledger.merchants()));
        }

        MerchantCommands::Rename { merchant, new_name } => {
            let current = resolve_name(ledger.merchants(), "Merchant", &merchant)?;
            let repointed = MerchantService::new(ledger).rename_merchant(&current, &new_name)?;
            println!(
                "Renamed merchant '{}' to '{}' ({} rule(s) updated)",
                current,
                new_name.trim(),
                repointed
            );
            print!("{}", format_name_list("Merchants", ledger.merchants()));
        }

        MerchantCommands::Delete { merchant } => {
            let current = resolve_name(ledger.merchants(), "Merchant", &merchant)?;
            let removed = MerchantService::new(ledger).delete_merchant(&current)?;
            println!("Deleted merchant: {}", removed);
            print!("{}", format_name_list("Merchants", ledger.merchants()));
        }
    }

    Ok(())
}
