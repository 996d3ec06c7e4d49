//! Configuration module for FinanceBuddy
//!
//! This module provides configuration management including:
//! - Data directory and ledger file path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::Settings;
