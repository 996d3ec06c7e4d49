//! Display formatting for terminal output

pub mod entry;

pub use entry::{format_budget_summary, format_entry_register, format_entry_row};
