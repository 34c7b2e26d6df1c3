//! budget-tracker - Personal finance record keeper
//!
//! This library provides the core functionality for the `btrack` command-line
//! tool. It records expenses and income, per-category budgets and savings
//! goals in a local SQLite database, and derives summaries from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, budgets, goals)
//! - `validation`: Checks applied to raw user input before anything is stored
//! - `storage`: SQLite schema and repositories
//! - `services`: Business logic layer
//! - `reports`: Totals, budget-vs-actual and goal progress
//! - `display`: Terminal formatting
//! - `cli`: Command handlers used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::paths::BudgetPaths;
//! use budget_tracker::services::TransactionService;
//! use budget_tracker::storage::Storage;
//!
//! let paths = BudgetPaths::new()?;
//! let storage = Storage::open(&paths)?;
//! TransactionService::expenses(&storage).add("Groceries", "49.99", "2024-12-01")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{BudgetError, BudgetResult};
