//! Path management for FinanceBuddy
//!
//! ## Path Resolution Order
//!
//! 1. An explicit base directory (the `--data-dir` flag, or tests)
//! 2. `FINANCEBUDDY_DATA_DIR` environment variable (if set)
//! 3. The current working directory
//!
//! Ledger files live under `<base>/data/`; settings live at
//! `<base>/config.json`.

use std::path::PathBuf;

use crate::error::FinanceError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINANCEBUDDY_DATA_DIR";

/// Manages all paths used by FinanceBuddy
#[derive(Debug, Clone)]
pub struct FinancePaths {
    /// Base directory for all FinanceBuddy data
    base_dir: PathBuf,
}

impl FinancePaths {
    /// Create a new FinancePaths instance from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                FinanceError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinancePaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the entries file
    pub fn entries_file(&self) -> PathBuf {
        self.data_dir().join("FinancialList.txt")
    }

    /// Get the path to the budget file
    pub fn budget_file(&self) -> PathBuf {
        self.data_dir().join("Budget.txt")
    }
}
