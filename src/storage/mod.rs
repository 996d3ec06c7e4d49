//! Storage layer for FinanceBuddy
//!
//! Plain-text, line-oriented persistence for the ledger and the budget:
//! a record codec, a tolerant loader, a full-rewrite writer, and the file
//! lifecycle helper they share.

pub mod codec;
pub mod file_io;
pub mod loader;
pub mod writer;

pub use codec::{RecordError, DELIMITER};
pub use file_io::StorageFile;
pub use loader::LoadReport;

use tracing::info;

use crate::config::paths::FinancePaths;
use crate::error::FinanceResult;
use crate::models::{today, Budget, FinancialList};

/// Storage coordinator owning the entries file and the budget file
pub struct Storage {
    paths: FinancePaths,
    entries: StorageFile,
    budget: StorageFile,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// Nothing is created on disk until the first write.
    pub fn new(paths: FinancePaths) -> Self {
        Self {
            entries: StorageFile::new(paths.entries_file()),
            budget: StorageFile::new(paths.budget_file()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    pub fn entries_file(&self) -> &StorageFile {
        &self.entries
    }

    pub fn budget_file(&self) -> &StorageFile {
        &self.budget
    }

    /// Load the ledger and, if one is stored, replace `budget` with the
    /// stored budget
    pub fn load(&self, budget: &mut Budget) -> FinanceResult<FinancialList> {
        self.load_with_report(budget).map(|(list, _)| list)
    }

    /// Same as [`Storage::load`], also returning what was found
    ///
    /// When the budget line decodes, both files are rewritten straight away
    /// so dropped or non-canonical lines are normalized on disk.
    pub fn load_with_report(
        &self,
        budget: &mut Budget,
    ) -> FinanceResult<(FinancialList, LoadReport)> {
        let (list, mut report) = loader::load_entries(&self.entries, today())?;

        if let Some(stored) = loader::load_budget(&self.budget)? {
            *budget = stored;
            report.budget_loaded = true;
            self.persist(&list, budget)?;
        }

        info!(
            total = report.loaded(),
            skipped = report.skipped,
            "Loaded {} expenses and {} incomes from file.",
            report.expenses,
            report.incomes
        );
        Ok((list, report))
    }

    /// Rewrite both files from the current state
    pub fn persist(&self, list: &FinancialList, budget: &Budget) -> FinanceResult<()> {
        writer::write_entries(&self.entries, list)?;
        writer::write_budget(&self.budget, budget)?;
        info!("Updated file with {} entries.", list.entry_count());
        Ok(())
    }
}
