use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_category_command, handle_expense_command, handle_export_command,
    handle_merchant_command, handle_report_command, handle_rule_command, handle_upload_command,
    CategoryCommands, ExpenseCommands, ExportArgs, MerchantCommands, ReportCommands, RuleCommands,
    UploadCommands,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging;
use expense_tracker::storage::{write_json_atomic, Ledger};

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Credit card expense tracking from the command line",
    long_about = "Filter, sort and relabel credit card expenses, keep category and \
                  merchant lists tidy, and let keyword rules pick the merchant for \
                  new expenses. Edits apply to the loaded data for the current run."
)]
struct Cli {
    /// Seed file (JSON or YAML) to load instead of the configured one
    #[arg(long, global = true, env = "EXPENSES_SEED")]
    seed: Option<PathBuf>,

    /// Log service activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Merchant management commands
    #[command(subcommand)]
    Merchant(MerchantCommands),

    /// Merchant rule commands
    #[command(subcommand)]
    Rule(RuleCommands),

    /// Dashboard reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the filtered expenses
    Export(ExportArgs),

    /// Statement upload commands
    #[command(subcommand)]
    Upload(UploadCommands),

    /// Write default settings and the sample seed file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let seed_path = cli.seed.or_else(|| settings.seed_file.clone());
    let load_ledger = || {
        Ledger::load_or_sample(seed_path.as_deref()).with_context(|| match &seed_path {
            Some(path) => format!("Failed to load seed file {}", path.display()),
            None => "Failed to load sample data".to_string(),
        })
    };

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut ledger = load_ledger()?;
            handle_expense_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            let mut ledger = load_ledger()?;
            handle_category_command(&mut ledger, cmd)?;
        }
        Some(Commands::Merchant(cmd)) => {
            let mut ledger = load_ledger()?;
            handle_merchant_command(&mut ledger, cmd)?;
        }
        Some(Commands::Rule(cmd)) => {
            let mut ledger = load_ledger()?;
            handle_rule_command(&mut ledger, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let ledger = load_ledger()?;
            handle_report_command(&ledger, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let ledger = load_ledger()?;
            handle_export_command(&ledger, &settings, args)?;
        }
        Some(Commands::Upload(cmd)) => {
            let mut ledger = load_ledger()?;
            handle_upload_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            paths.ensure_directories()?;

            let seed_file = paths.seed_file();
            if seed_file.exists() {
                println!("Seed file already present: {}", seed_file.display());
            } else {
                write_json_atomic(&seed_file, &load_ledger()?.to_seed())?;
                println!("Wrote sample seed file: {}", seed_file.display());
            }

            let mut settings = settings;
            settings.seed_file.get_or_insert(seed_file);
            settings.save(&paths)?;
            println!("Wrote settings: {}", paths.settings_file().display());
            println!();
            println!("Run 'expenses list' to see your expenses.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Default sort:    {}", settings.default_sort);
            println!("  Report limit:    {}", settings.report_limit);
            match &seed_path {
                Some(path) => println!("  Seed file:       {}", path.display()),
                None => println!("  Seed file:       (built-in sample)"),
            }
        }
        None => {
            println!("Expense Tracker - credit card expenses from the command line");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses list' to see the sample expenses.");
        }
    }

    Ok(())
}
