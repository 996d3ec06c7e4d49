//! Core data models for FinanceBuddy
//!
//! Entries (expenses and incomes), the ordered list that holds them, the
//! single budget record, and the money and category types they are built on.

pub mod budget;
pub mod category;
pub mod entry;
pub mod list;
pub mod money;

pub use budget::Budget;
pub use category::{CategorySet, ExpenseCategory, IncomeCategory};
pub use entry::{
    parse_amount, parse_entry_date, today, validate, validate_as_of, EntryError, EntryKind,
    Expense, FinancialEntry, Income, ENTRY_DATE_FORMAT, RESERVED_SEPARATOR,
};
pub use list::FinancialList;
pub use money::{Money, MoneyParseError};
