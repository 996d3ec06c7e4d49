//! Ledger service
//!
//! Owns one session's in-memory ledger and budget on top of [`Storage`].
//! Every mutation is validated first and persisted straight after. Memory is
//! only updated once the write succeeds, so a rejected or unsaved change
//! never shows up in the session.

use chrono::NaiveDate;
use tracing::info;

use crate::error::FinanceResult;
use crate::models::{
    Budget, Expense, ExpenseCategory, FinancialEntry, FinancialList, Income, IncomeCategory,
    Money,
};
use crate::storage::{LoadReport, Storage};

/// Service for one ledger session
pub struct LedgerService<'a> {
    storage: &'a Storage,
    list: FinancialList,
    budget: Budget,
    report: LoadReport,
}

impl<'a> LedgerService<'a> {
    /// Load the stored ledger and budget
    pub fn open(storage: &'a Storage) -> FinanceResult<Self> {
        let mut budget = Budget::default();
        let (list, report) = storage.load_with_report(&mut budget)?;
        Ok(Self {
            storage,
            list,
            budget,
            report,
        })
    }

    pub fn list(&self) -> &FinancialList {
        &self.list
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// What the initial load found
    pub fn load_report(&self) -> LoadReport {
        self.report
    }

    /// Record a new expense
    pub fn add_expense(
        &mut self,
        amount: Money,
        description: &str,
        date: NaiveDate,
        category: ExpenseCategory,
    ) -> FinanceResult<FinancialEntry> {
        let expense = Expense::new(amount, description, date, category)?;
        self.append(expense.into())
    }

    /// Record a new income
    pub fn add_income(
        &mut self,
        amount: Money,
        description: &str,
        date: NaiveDate,
        category: IncomeCategory,
    ) -> FinanceResult<FinancialEntry> {
        let income = Income::new(amount, description, date, category)?;
        self.append(income.into())
    }

    /// Replace the budget amount, stamped with today's date
    pub fn set_budget(&mut self, amount: Money) -> FinanceResult<&Budget> {
        let mut budget = self.budget.clone();
        budget.set(amount)?;
        self.storage.persist(&self.list, &budget)?;
        self.budget = budget;
        info!(amount = %self.budget.amount, "Budget set");
        Ok(&self.budget)
    }

    /// Budget left after the expenses dated in the budget's month
    pub fn budget_remaining(&self) -> Money {
        let spent: Money = self
            .list
            .iter()
            .filter(|e| e.is_expense() && self.budget.covers(e.date()))
            .map(|e| e.amount())
            .sum();
        self.budget.amount - spent
    }

    fn append(&mut self, entry: FinancialEntry) -> FinanceResult<FinancialEntry> {
        let mut list = self.list.clone();
        list.add_entry(entry.clone());
        self.storage.persist(&list, &self.budget)?;
        self.list = list;
        info!(kind = %entry.kind(), amount = %entry.amount(), "Entry added");
        Ok(entry)
    }
}
