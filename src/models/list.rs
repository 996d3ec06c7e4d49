//! Ordered in-memory ledger
//!
//! Insertion order is the display and iteration order, and is preserved
//! through every save/load cycle.

use super::entry::FinancialEntry;
use super::money::Money;

/// The session's list of entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinancialList {
    entries: Vec<FinancialEntry>,
}

impl FinancialList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end of the list
    pub fn add_entry(&mut self, entry: impl Into<FinancialEntry>) {
        self.entries.push(entry.into());
    }

    /// Get the entry at a zero-based index
    pub fn get_entry(&self, index: usize) -> Option<&FinancialEntry> {
        self.entries.get(index)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FinancialEntry> {
        self.entries.iter()
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.iter()
            .filter(|e| e.is_expense())
            .map(|e| e.amount())
            .sum()
    }

    /// Sum of all income amounts
    pub fn total_income(&self) -> Money {
        self.iter().filter(|e| e.is_income()).map(|e| e.amount()).sum()
    }

    /// Income minus expenses
    pub fn balance(&self) -> Money {
        self.total_income() - self.total_expenses()
    }
}

impl<'a> IntoIterator for &'a FinancialList {
    type Item = &'a FinancialEntry;
    type IntoIter = std::slice::Iter<'a, FinancialEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
