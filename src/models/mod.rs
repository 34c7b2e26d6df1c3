//! Core data models for budget-tracker
//!
//! This module contains the record types stored in the database and the
//! derived values the reports compute from them.

pub mod budget;
pub mod goal;
pub mod money;
pub mod transaction;

pub use budget::{Budget, BudgetComparison, BudgetStatus};
pub use goal::{Goal, GoalProgress};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TransactionUpdate};
