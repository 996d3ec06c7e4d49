//! Service layer for FinanceBuddy
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and persisting after every change.

pub mod ledger;

pub use ledger::LedgerService;
