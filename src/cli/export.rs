//! CLI command for exporting the visible expense sequence

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::expense::visible_for;
use super::FilterArgs;
use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::export::{export_expenses, ExportFormat};
use crate::storage::Ledger;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// csv, json or yaml; guessed from the output extension when omitted
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle the export command
pub fn handle_export_command(
    ledger: &Ledger,
    settings: &Settings,
    args: ExportArgs,
) -> ExpenseResult<()> {
    let shown = visible_for(ledger, settings, &args.filter);

    match args.output {
        Some(path) => {
            let format = args
                .format
                .unwrap_or_else(|| ExportFormat::from_extension(&path));
            let mut writer = BufWriter::new(File::create(&path)?);
            export_expenses(&shown, format, &mut writer)?;
            writer.flush()?;

            info!(path = %path.display(), count = shown.len(), ?format, "export written");
            println!("Exported {} expense(s) to {}", shown.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_expenses(&shown, args.format.unwrap_or(ExportFormat::Csv), &mut handle)?;
            if args.format == Some(ExportFormat::Json) {
                writeln!(handle)?;
            }
        }
    }

    Ok(())
}
