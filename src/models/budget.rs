//! Budget model
//!
//! A budget is a spending ceiling for one expense category. Categories are
//! matched against expenses by exact string equality.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A per-category spending limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    pub limit: Money,
}

/// How actual spending compares to a budget limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Over,
    Under,
    Exact,
}

impl BudgetStatus {
    /// Classify `actual` spending against `budgeted`
    pub fn classify(budgeted: Money, actual: Money) -> Self {
        match actual.cmp(&budgeted) {
            std::cmp::Ordering::Greater => Self::Over,
            std::cmp::Ordering::Less => Self::Under,
            std::cmp::Ordering::Equal => Self::Exact,
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Over => "over",
            Self::Under => "under",
            Self::Exact => "exact",
        };
        f.pad(label)
    }
}

/// Budgeted vs actual spending for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetComparison {
    pub category: String,
    pub budgeted: Money,
    pub actual: Money,
    pub status: BudgetStatus,
}

impl BudgetComparison {
    pub fn new(category: impl Into<String>, budgeted: Money, actual: Money) -> Self {
        Self {
            category: category.into(),
            budgeted,
            actual,
            status: BudgetStatus::classify(budgeted, actual),
        }
    }

    /// Amount left before the limit is reached (negative when over)
    pub fn remaining(&self) -> Money {
        self.budgeted - self.actual
    }
}
