//! Entry and budget display formatting
//!
//! Plain-text register output for the terminal.

use crate::models::{Budget, FinancialEntry, FinancialList, Money, ENTRY_DATE_FORMAT};

/// Format a single entry as a register row
pub fn format_entry_row(index: usize, entry: &FinancialEntry, symbol: &str) -> String {
    format!(
        "{:>3}. {:8} {:8} {:24} {:>14} {}",
        index,
        entry.kind(),
        entry.date().format(ENTRY_DATE_FORMAT).to_string(),
        truncate(entry.description(), 24),
        entry.amount().format_with_symbol(symbol),
        entry.category_name()
    )
}

/// Format the whole list as a numbered register with totals
pub fn format_entry_register(list: &FinancialList, symbol: &str) -> String {
    if list.is_empty() {
        return "No entries recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:8} {:8} {:24} {:>14} {}\n",
        "#", "Type", "Date", "Description", "Amount", "Category"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for (i, entry) in list.iter().enumerate() {
        output.push_str(&format_entry_row(i + 1, entry, symbol));
        output.push('\n');
    }

    output.push_str(&"-".repeat(72));
    output.push('\n');
    output.push_str(&format!(
        "Income:   {:>14}\nExpenses: {:>14}\nBalance:  {:>14}\n",
        list.total_income().format_with_symbol(symbol),
        list.total_expenses().format_with_symbol(symbol),
        list.balance().format_with_symbol(symbol)
    ));

    output
}

/// Format the budget with what is left of it
pub fn format_budget_summary(budget: &Budget, remaining: Money, symbol: &str) -> String {
    if !budget.is_set() {
        return "No budget set.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Budget:    {} (set on {})\n",
        budget.amount.format_with_symbol(symbol),
        budget.set_date.format("%Y-%m-%d")
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        remaining.format_with_symbol(symbol)
    ));
    if remaining.is_negative() {
        output.push_str("You have exceeded your budget for this month.\n");
    }
    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
