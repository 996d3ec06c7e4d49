//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_summary;
use crate::error::FinanceResult;
use crate::models::parse_amount;
use crate::services::LedgerService;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly budget amount
    Set {
        /// Amount (e.g., "1500" or "1500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the budget and what is left of it this month
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    service: &mut LedgerService<'_>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            let budget = service.set_budget(amount)?;
            println!("Budget set to {}", budget.amount.format_with_symbol(symbol));
        }

        BudgetCommands::Show => {
            print!(
                "{}",
                format_budget_summary(service.budget(), service.budget_remaining(), symbol)
            );
        }
    }

    Ok(())
}
