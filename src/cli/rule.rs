//! Merchant rule CLI commands

use clap::Subcommand;

use crate::display::format_rule_list;
use crate::error::ExpenseResult;
use crate::services::MerchantService;
use crate::storage::Ledger;

/// Rule subcommands
#[derive(Subcommand, Debug)]
pub enum RuleCommands {
    /// List rules in evaluation order (first match wins)
    List,

    /// Add a rule: descriptions containing KEYWORD get MERCHANT
    Add {
        /// Keyword, matched case-insensitively
        keyword: String,
        /// Merchant to assign (must exist)
        merchant: String,
    },

    /// Delete the rule for a keyword
    Delete {
        /// Keyword
        keyword: String,
    },
}

/// Handle a rule command
pub fn handle_rule_command(ledger: &mut Ledger, cmd: RuleCommands) -> ExpenseResult<()> {
    match cmd {
        RuleCommands::List => {
            print!("{}", format_rule_list(ledger.rules()));
        }

        RuleCommands::Add { keyword, merchant } => {
            let rule = MerchantService::new(ledger).add_rule(&keyword, &merchant)?;
            println!("Added rule: {} -> {}", rule.keyword, rule.merchant_name);
            print!("{}", format_rule_list(ledger.rules()));
        }

        RuleCommands::Delete { keyword } => {
            let rule = MerchantService::new(ledger).delete_rule(&keyword)?;
            println!("Deleted rule: {} -> {}", rule.keyword, rule.merchant_name);
            print!("{}", format_rule_list(ledger.rules()));
        }
    }

    Ok(())
}
