//! Category CLI commands

use clap::Subcommand;

use super::resolve_name;
use crate::display::format_name_list;
use crate::error::ExpenseResult;
use crate::services::CategoryService;
use crate::storage::Ledger;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories in order
    List,

    /// Add a category
    Add {
        /// Category name
        name: String,
    },

    /// Rename a category in place
    Rename {
        /// Current name, or #N for the N-th category
        category: String,
        /// New name
        new_name: String,
    },

    /// Delete a category (expenses keep their label)
    Delete {
        /// Category name, or #N for the N-th category
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(ledger: &mut Ledger, cmd: CategoryCommands) -> ExpenseResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_name_list("Categories", ledger.categories()));
        }

        CategoryCommands::Add { name } => {
            let added = CategoryService::new(ledger).add(&name)?;
            println!("Added category: {}", added);
            print!("{}", format_name_list("Categories", ledger.categories()));
        }

        CategoryCommands::Rename { category, new_name } => {
            let current = resolve_name(ledger.categories(), "Category", &category)?;
            let renamed = CategoryService::new(ledger).rename(&current, &new_name)?;
            println!("Renamed category '{}' to '{}'", current, renamed);
            print!("{}", format_name_list("Categories", ledger.categories()));
        }

        CategoryCommands::Delete { category } => {
            let current = resolve_name(ledger.categories(), "Category", &category)?;
            let removed = CategoryService::new(ledger).delete(&current)?;
            println!("Deleted category: {}", removed);
            print!("{}", format_name_list("Categories", ledger.categories()));
        }
    }

    Ok(())
}
