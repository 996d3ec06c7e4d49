//! Entry CLI commands
//!
//! `expense`, `income` and `list`.

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_entry_register, format_entry_row};
use crate::error::FinanceResult;
use crate::models::{
    parse_amount, parse_entry_date, today, CategorySet, EntryError, ExpenseCategory,
    IncomeCategory, Money,
};
use crate::services::LedgerService;

/// Arguments shared by `expense` and `income`
#[derive(Args, Debug)]
pub struct EntryArgs {
    /// Amount (e.g., "12" or "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// What the money was for
    pub description: String,

    /// Date in dd/mm/yy form (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category name, case-insensitive (defaults to UNCATEGORIZED)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// The typed fields of an [`EntryArgs`], checked in the same order the
/// codec checks stored lines
struct ParsedEntry<C> {
    amount: Money,
    date: NaiveDate,
    category: C,
}

fn parse_entry_args<C: CategorySet + Default>(args: &EntryArgs) -> Result<ParsedEntry<C>, EntryError> {
    let amount = parse_amount(&args.amount)?;

    let category = match args.category.as_deref() {
        Some(name) => C::parse(name).ok_or_else(|| EntryError::UnknownCategory(name.to_string()))?,
        None => C::default(),
    };

    let date = match args.date.as_deref() {
        Some(text) => parse_entry_date(text)?,
        None => today(),
    };

    Ok(ParsedEntry {
        amount,
        date,
        category,
    })
}

/// Handle `expense`
pub fn handle_expense_command(
    service: &mut LedgerService<'_>,
    settings: &Settings,
    args: EntryArgs,
) -> FinanceResult<()> {
    let parsed: ParsedEntry<ExpenseCategory> = parse_entry_args(&args)?;
    let entry = service.add_expense(parsed.amount, &args.description, parsed.date, parsed.category)?;

    println!("Expense added:");
    println!(
        "{}",
        format_entry_row(service.list().entry_count(), &entry, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `income`
pub fn handle_income_command(
    service: &mut LedgerService<'_>,
    settings: &Settings,
    args: EntryArgs,
) -> FinanceResult<()> {
    let parsed: ParsedEntry<IncomeCategory> = parse_entry_args(&args)?;
    let entry = service.add_income(parsed.amount, &args.description, parsed.date, parsed.category)?;

    println!("Income added:");
    println!(
        "{}",
        format_entry_row(service.list().entry_count(), &entry, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(service: &LedgerService<'_>, settings: &Settings) -> FinanceResult<()> {
    print!(
        "{}",
        format_entry_register(service.list(), &settings.currency_symbol)
    );

    let skipped = service.load_report().skipped;
    if skipped > 0 {
        println!();
        println!(
            "Note: {} stored line(s) could not be read and were dropped.",
            skipped
        );
    }
    Ok(())
}
