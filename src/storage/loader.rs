//! Tolerant loading of the ledger files
//!
//! Every line is decoded on its own. A line that fails to decode is logged
//! and dropped; it never stops the rest of the file from loading. Only real
//! I/O failures are returned to the caller.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::FinanceResult;
use crate::models::{Budget, EntryKind, FinancialList};

use super::codec::{decode_budget, decode_entry};
use super::file_io::StorageFile;

/// What a load found
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Expenses decoded successfully
    pub expenses: usize,
    /// Incomes decoded successfully
    pub incomes: usize,
    /// Entry lines dropped because they could not be decoded
    pub skipped: usize,
    /// Whether the budget line was decoded and applied
    pub budget_loaded: bool,
}

impl LoadReport {
    /// Total entries loaded
    pub fn loaded(&self) -> usize {
        self.expenses + self.incomes
    }
}

/// Read and decode every line of the entries file
///
/// A missing file is an empty ledger, not an error.
pub fn load_entries(
    file: &StorageFile,
    today: NaiveDate,
) -> FinanceResult<(FinancialList, LoadReport)> {
    let mut list = FinancialList::new();
    let mut report = LoadReport::default();

    let Some(lines) = file.read_lines()? else {
        info!(
            path = %file.path().display(),
            "No entries file found, starting with an empty ledger"
        );
        return Ok((list, report));
    };

    for (index, line) in lines.iter().enumerate() {
        match decode_entry(line, today) {
            Ok(entry) => {
                match entry.kind() {
                    EntryKind::Expense => report.expenses += 1,
                    EntryKind::Income => report.incomes += 1,
                }
                list.add_entry(entry);
            }
            Err(err) => {
                report.skipped += 1;
                warn!(
                    line = index + 1,
                    content = %line,
                    "Skipping stored entry, invalid storage format: {}",
                    err
                );
            }
        }
    }

    Ok((list, report))
}

/// Read and decode the budget line
///
/// Returns `None` (after logging) when there is no usable budget on disk.
pub fn load_budget(file: &StorageFile) -> FinanceResult<Option<Budget>> {
    let Some(lines) = file.read_lines()? else {
        info!(path = %file.path().display(), "No budget file found");
        return Ok(None);
    };

    let Some(line) = lines.first() else {
        warn!(path = %file.path().display(), "Skipping stored budget, budget file is empty");
        return Ok(None);
    };

    match decode_budget(line) {
        Ok(budget) => Ok(Some(budget)),
        Err(err) => {
            warn!(
                content = %line,
                "Skipping stored budget, invalid storage format: {}",
                err
            );
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 15).unwrap()
    }

    fn file_with(temp_dir: &TempDir, contents: &str) -> StorageFile {
        let path = temp_dir.path().join("FinancialList.txt");
        fs::write(&path, contents).unwrap();
        StorageFile::new(path)
    }

    #[test]
    fn test_missing_file_is_empty_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let file = StorageFile::new(temp_dir.path().join("data").join("FinancialList.txt"));

        let (list, report) = load_entries(&file, today()).unwrap();

        assert!(list.is_empty());
        assert_eq!(report, LoadReport::default());
        assert!(!file.exists());
    }

    #[test]
    fn test_tolerant_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = file_with(
            &temp_dir,
            "E ¦¦ 12.50 ¦¦ Lunch ¦¦ 01/10/24 ¦¦ FOOD\n\
             E ¦¦ twelve ¦¦ Lunch ¦¦ 01/10/24 ¦¦ FOOD\n\
             I ¦¦ 3000.00 ¦¦ Pay ¦¦ 01/10/24 ¦¦ SALARY\n\
             I ¦¦ 10.00 ¦¦ Pay ¦¦ 40/10/24 ¦¦ SALARY\n\
             E ¦¦ 3.00 ¦¦ Bus ¦¦ 02/10/24 ¦¦ PLANE\n\
             D ¦¦ 3.00 ¦¦ Bus ¦¦ 02/10/24 ¦¦ TRANSPORT\n\
             E ¦¦ 3.00 ¦¦ Bus\n\
             \n\
             E ¦¦ 4.00 ¦¦ Tea ¦¦ 03/10/24 ¦¦ food\n",
        );

        let (list, report) = load_entries(&file, today()).unwrap();

        assert_eq!(list.entry_count(), 3);
        assert_eq!(report.expenses, 2);
        assert_eq!(report.incomes, 1);
        assert_eq!(report.skipped, 6);
        assert_eq!(report.loaded(), 3);

        let descriptions: Vec<_> = list.iter().map(|e| e.description()).collect();
        assert_eq!(descriptions, vec!["Lunch", "Pay", "Tea"]);
    }

    #[test]
    fn test_future_dated_line_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let file = file_with(
            &temp_dir,
            "E ¦¦ 1.00 ¦¦ Today ¦¦ 15/10/24 ¦¦ FOOD\nE ¦¦ 1.00 ¦¦ Tomorrow ¦¦ 16/10/24 ¦¦ FOOD\n",
        );

        let (list, report) = load_entries(&file, today()).unwrap();

        assert_eq!(list.entry_count(), 1);
        assert_eq!(list.get_entry(0).unwrap().description(), "Today");
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_load_budget() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Budget.txt");
        let file = StorageFile::new(&path);

        assert_eq!(load_budget(&file).unwrap(), None);

        fs::write(&path, "").unwrap();
        assert_eq!(load_budget(&file).unwrap(), None);

        fs::write(&path, "garbage\n").unwrap();
        assert_eq!(load_budget(&file).unwrap(), None);

        fs::write(&path, "250.00 ¦¦ 2024-10-01\nignored\n").unwrap();
        let budget = load_budget(&file).unwrap().unwrap();
        assert_eq!(budget.amount.cents(), 25000);
    }
}
