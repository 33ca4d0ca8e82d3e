//! Statement upload CLI commands
//!
//! Uploads are acknowledged and logged only; no statement file is read.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_statement_table;
use crate::error::ExpenseResult;
use crate::services::UploadService;
use crate::storage::Ledger;

/// Upload subcommands
#[derive(Subcommand, Debug)]
pub enum UploadCommands {
    /// List uploaded statements
    #[command(alias = "ls")]
    List,

    /// Queue a statement file for a card
    Statement {
        /// Card the statement belongs to
        #[arg(long)]
        card: String,
        /// Statement file
        file: PathBuf,
    },

    /// Register a new card
    Card {
        /// Card name
        name: String,
    },

    /// Delete uploaded statements
    Delete {
        /// Statement IDs
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

/// Handle an upload command
pub fn handle_upload_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: UploadCommands,
) -> ExpenseResult<()> {
    let mut service = UploadService::new(ledger);

    let ack = match cmd {
        UploadCommands::List => {
            print!(
                "{}",
                format_statement_table(service.list_statements(), &settings.date_format)
            );
            return Ok(());
        }
        UploadCommands::Statement { card, file } => service.upload_statement(&card, &file),
        UploadCommands::Card { name } => service.add_card(&name),
        UploadCommands::Delete { ids } => {
            let ack = service.delete_statements(&ids);
            println!("{}", ack.message);
            print!(
                "{}",
                format_statement_table(service.list_statements(), &settings.date_format)
            );
            return Ok(());
        }
    };

    println!("{}", ack.message);
    Ok(())
}
