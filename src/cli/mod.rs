//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod entry;

pub use budget::{handle_budget_command, BudgetCommands};
pub use entry::{handle_expense_command, handle_income_command, handle_list_command, EntryArgs};
