//! FinanceBuddy - personal finance tracker with a plain-text ledger
//!
//! Expenses, incomes and a single monthly budget are kept in memory and
//! persisted to two line-oriented text files. Loading is fault tolerant: a
//! damaged or hand-edited line is logged and skipped, and the files are
//! rewritten in canonical form once a load succeeds.
//!
//! # Architecture
//!
//! - `config`: Data directory, file paths and user settings
//! - `error`: Custom error types
//! - `models`: Entries, the ordered list, the budget, money and categories
//! - `storage`: Record codec, file lifecycle, loader and writer
//! - `services`: Session logic (validate, mutate, persist)
//! - `display` / `cli`: Terminal front end
//! - `logging`: `tracing` subscriber setup for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use financebuddy::config::FinancePaths;
//! use financebuddy::models::Budget;
//! use financebuddy::storage::Storage;
//!
//! let storage = Storage::new(FinancePaths::new()?);
//! let mut budget = Budget::default();
//! let list = storage.load(&mut budget)?;
//! storage.persist(&list, &budget)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
