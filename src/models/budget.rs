//! Budget model
//!
//! A single spending budget: an amount and the date it was set. Only one
//! budget is live at a time and it carries no history.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use super::entry::{today, EntryError};
use super::money::Money;

/// The live budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    /// Budgeted amount
    pub amount: Money,

    /// When the budget was set
    pub set_date: NaiveDate,
}

impl Budget {
    pub fn new(amount: Money, set_date: NaiveDate) -> Self {
        Self { amount, set_date }
    }

    /// Check an amount a user wants to set as their budget
    pub fn validate_amount(amount: Money) -> Result<(), EntryError> {
        if amount.is_negative() {
            return Err(EntryError::AmountFormat(amount.to_plain_string()));
        }
        if amount > Money::MAX_ENTRY {
            return Err(EntryError::AmountOutOfRange(amount));
        }
        Ok(())
    }

    /// Replace the amount and stamp today's date
    pub fn set(&mut self, amount: Money) -> Result<(), EntryError> {
        Self::validate_amount(amount)?;
        self.amount = amount;
        self.set_date = today();
        Ok(())
    }

    pub fn is_set(&self) -> bool {
        !self.amount.is_zero()
    }

    /// Whether a date falls in the same calendar month the budget was set in
    pub fn covers(&self, date: NaiveDate) -> bool {
        date.year() == self.set_date.year() && date.month() == self.set_date.month()
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new(Money::zero(), today())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (set on {})",
            self.amount,
            self.set_date.format("%Y-%m-%d")
        )
    }
}
