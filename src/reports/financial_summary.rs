//! Financial summary report
//!
//! The full picture in one place: ledger totals, overall budget standing,
//! over-budget and unbudgeted categories, and which goals are done.

use serde::Serialize;

use crate::error::BudgetResult;
use crate::models::Money;
use crate::storage::Storage;

use super::totals::{total_expenses, total_income};

/// Overall spending standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// Spending fits inside the total budget and income exceeds spending
    WithinBudget,
    OverBudget,
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WithinBudget => write!(f, "within budget"),
            Self::OverBudget => write!(f, "over budget"),
        }
    }
}

/// A category whose spending exceeded its limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverBudgetCategory {
    pub category: String,
    pub spent: Money,
    pub budgeted: Money,
}

/// An expense category with no budget row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnbudgetedCategory {
    pub category: String,
    pub spent: Money,
}

/// Snapshot of every headline figure
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub total_budgeted: Money,
    pub balance: Money,
    pub status: OverallStatus,
    pub over_budget: Vec<OverBudgetCategory>,
    pub unbudgeted: Vec<UnbudgetedCategory>,
    pub achieved_goals: Vec<String>,
}

impl FinancialSummary {
    /// Generate the summary from the current store contents
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        let total_income = total_income(storage)?;
        let total_expenses = total_expenses(storage)?;
        let budgets = storage.budgets();
        let total_budgeted = budgets.total()?;
        let balance = total_income - total_expenses;

        let status = if total_expenses <= total_budgeted && balance.is_positive() {
            OverallStatus::WithinBudget
        } else {
            OverallStatus::OverBudget
        };

        let mut over_budget = Vec::new();
        let mut unbudgeted = Vec::new();
        for (category, spent) in storage.expenses().totals_by_category()? {
            match budgets.get(&category)? {
                Some(budget) if spent > budget.limit => over_budget.push(OverBudgetCategory {
                    category,
                    spent,
                    budgeted: budget.limit,
                }),
                Some(_) => {}
                None => unbudgeted.push(UnbudgetedCategory { category, spent }),
            }
        }

        let achieved_goals = storage
            .goals()
            .achieved()?
            .into_iter()
            .map(|g| g.name)
            .collect();

        Ok(Self {
            total_income,
            total_expenses,
            total_budgeted,
            balance,
            status,
            over_budget,
            unbudgeted,
            achieved_goals,
        })
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str("----- Budget Summary -----\n");
        output.push_str(&format!("Total Income:       {:>14}\n", money(self.total_income)));
        output.push_str(&format!("Total Expenses:     {:>14}\n", money(self.total_expenses)));
        output.push_str(&format!("Total Budgeted:     {:>14}\n", money(self.total_budgeted)));
        output.push_str(&format!("Remaining Balance:  {:>14}\n", money(self.balance)));
        output.push_str(&format!("Overall Status:     {:>14}\n", self.status.to_string()));

        output.push('\n');
        if self.over_budget.is_empty() {
            output.push_str("No categories are over budget.\n");
        } else {
            output.push_str("Over Budget Categories:\n");
            for line in &self.over_budget {
                output.push_str(&format!(
                    "  - {}: spent {}, budgeted {}\n",
                    line.category,
                    money(line.spent),
                    money(line.budgeted)
                ));
            }
        }

        output.push('\n');
        if self.unbudgeted.is_empty() {
            output.push_str("All expense categories have budgets set.\n");
        } else {
            output.push_str("Categories With No Budget:\n");
            for line in &self.unbudgeted {
                output.push_str(&format!("  - {}: spent {}\n", line.category, money(line.spent)));
            }
        }

        output.push_str("\n--- Financial Goals ---\n");
        if self.achieved_goals.is_empty() {
            output.push_str("In progress\n");
        } else {
            output.push_str("Achieved:\n");
            for name in &self.achieved_goals {
                output.push_str(&format!("  - {}\n", name));
            }
        }

        output
    }
}
