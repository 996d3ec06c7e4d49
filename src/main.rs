use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use financebuddy::cli::{
    handle_budget_command, handle_expense_command, handle_income_command, handle_list_command,
    BudgetCommands, EntryArgs,
};
use financebuddy::config::{paths::FinancePaths, settings::Settings};
use financebuddy::logging::init_tracing;
use financebuddy::models::{CategorySet, ExpenseCategory, IncomeCategory};
use financebuddy::services::LedgerService;
use financebuddy::storage::Storage;

#[derive(Parser)]
#[command(
    name = "financebuddy",
    version,
    about = "Track expenses, income and a monthly budget in a plain-text ledger"
)]
struct Cli {
    /// Base directory holding data/ and config.json (defaults to the current directory)
    #[arg(long, global = true, env = "FINANCEBUDDY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense
    #[command(alias = "e")]
    Expense(EntryArgs),

    /// Record an income
    #[command(alias = "i")]
    Income(EntryArgs),

    /// List all recorded entries
    #[command(alias = "ls")]
    List,

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show current configuration and paths, optionally updating settings
    Config {
        /// Currency symbol used when printing amounts
        #[arg(long)]
        currency_symbol: Option<String>,

        /// Log filter used when RUST_LOG is not set (e.g., "financebuddy=info")
        #[arg(long)]
        log_filter: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FinancePaths::with_base_dir(dir),
        None => FinancePaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    match cli.command {
        Commands::Config {
            currency_symbol,
            log_filter,
        } => {
            if currency_symbol.is_some() || log_filter.is_some() {
                if let Some(symbol) = currency_symbol {
                    settings.currency_symbol = symbol;
                }
                if let Some(filter) = log_filter {
                    settings.log_filter = filter;
                }
                settings.save(&paths)?;
                println!("Settings saved to {}", paths.settings_file().display());
                println!();
            }
            print_config(&paths, &settings);
        }
        command => run_ledger_command(paths, &settings, command)?,
    }

    Ok(())
}

fn run_ledger_command(paths: FinancePaths, settings: &Settings, command: Commands) -> Result<()> {
    let storage = Storage::new(paths);
    let mut service = LedgerService::open(&storage)?;

    match command {
        Commands::Expense(args) => handle_expense_command(&mut service, settings, args)?,
        Commands::Income(args) => handle_income_command(&mut service, settings, args)?,
        Commands::List => handle_list_command(&service, settings)?,
        Commands::Budget(cmd) => handle_budget_command(&mut service, settings, cmd)?,
        Commands::Config { .. } => print_config(storage.paths(), settings),
    }

    Ok(())
}

fn print_config(paths: &FinancePaths, settings: &Settings) {
    println!("FinanceBuddy Configuration");
    println!("==========================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Entries file:    {}", paths.entries_file().display());
    println!("Budget file:     {}", paths.budget_file().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!();
    println!("Currency symbol: {}", settings.currency_symbol);
    println!("Log filter:      {}", settings.log_filter);
    println!();
    println!("Expense categories: {}", ExpenseCategory::names());
    println!("Income categories:  {}", IncomeCategory::names());
}
