//! Transaction model
//!
//! Expenses and income share one record shape and differ only in the table
//! they live in, so both are represented by [`Transaction`] tagged with a
//! [`TransactionKind`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::BudgetError;

/// Which ledger a transaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    /// Backing table name
    pub(crate) fn table(&self) -> &'static str {
        match self {
            Self::Expense => "expenses",
            Self::Income => "income",
        }
    }

    /// Name of the date column in the backing table
    pub(crate) fn date_column(&self) -> &'static str {
        match self {
            Self::Expense => "due_date",
            Self::Income => "pay_date",
        }
    }

    /// Human-readable label for the date column
    pub fn date_label(&self) -> &'static str {
        match self {
            Self::Expense => "Due date",
            Self::Income => "Pay date",
        }
    }

    /// Build the matching "not found" error for an id
    pub fn not_found(&self, id: i64) -> BudgetError {
        match self {
            Self::Expense => BudgetError::expense_not_found(id),
            Self::Income => BudgetError::income_not_found(id),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
        }
    }
}

/// A recorded expense or income entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Store-assigned identifier, never reused
    pub id: i64,
    pub kind: TransactionKind,
    pub category: String,
    /// Always positive; the kind determines the direction
    pub amount: Money,
    pub date: NaiveDate,
}

/// Partial update for a transaction; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionUpdate {
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
}

impl TransactionUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Check whether any field would change
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.amount.is_none() && self.date.is_none()
    }
}
