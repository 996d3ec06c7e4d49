//! Full rewrite of the ledger files
//!
//! Each call replaces the whole file; nothing is appended or patched.

use tracing::debug;

use crate::error::FinanceResult;
use crate::models::{Budget, FinancialList};

use super::codec::{encode_budget, encode_entry};
use super::file_io::StorageFile;

/// Rewrite the entries file, one line per entry in list order
pub fn write_entries(file: &StorageFile, list: &FinancialList) -> FinanceResult<()> {
    file.write_lines(list.iter().map(encode_entry))?;
    debug!(path = %file.path().display(), entries = list.entry_count(), "wrote entries file");
    Ok(())
}

/// Rewrite the budget file with its single line
pub fn write_budget(file: &StorageFile, budget: &Budget) -> FinanceResult<()> {
    file.write_lines([encode_budget(budget)])?;
    debug!(path = %file.path().display(), "wrote budget file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseCategory, Income, IncomeCategory, Money};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).unwrap()
    }

    #[test]
    fn test_write_entries_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("FinancialList.txt");
        let file = StorageFile::new(&path);

        let mut list = FinancialList::new();
        list.add_entry(
            Income::new(Money::from_cents(100000), "Pay", date(1), IncomeCategory::Salary).unwrap(),
        );
        list.add_entry(
            Expense::new(Money::from_cents(450), "Coffee", date(2), ExpenseCategory::Food).unwrap(),
        );

        write_entries(&file, &list).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "I ¦¦ 1000.00 ¦¦ Pay ¦¦ 01/10/24 ¦¦ SALARY\n\
             E ¦¦ 4.50 ¦¦ Coffee ¦¦ 02/10/24 ¦¦ FOOD\n"
        );
    }

    #[test]
    fn test_write_empty_list_truncates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("FinancialList.txt");
        fs::write(&path, "E ¦¦ 1.00 ¦¦ Old ¦¦ 01/10/24 ¦¦ FOOD\n").unwrap();

        write_entries(&StorageFile::new(&path), &FinancialList::new()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_budget() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Budget.txt");

        write_budget(
            &StorageFile::new(&path),
            &Budget::new(Money::from_cents(75000), date(5)),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "750.00 ¦¦ 2024-10-05\n");
    }
}
