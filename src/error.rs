//! Custom error types for budget-tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget-tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Amount was not a number, or was out of the allowed range
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Date was not a valid YYYY-MM-DD calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Category (or goal name) was empty
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Underlying SQLite failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl BudgetError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: id.to_string(),
        }
    }

    /// Create a "not found" error for income entries
    pub fn income_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Income",
            identifier: id.to_string(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(category: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: category.into(),
        }
    }

    /// Create a "not found" error for goals
    pub fn goal_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: id.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an input validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InvalidDate(_) | Self::InvalidCategory(_)
        )
    }
}

// Implement From traits for common error types

impl From<rusqlite::Error> for BudgetError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget-tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
