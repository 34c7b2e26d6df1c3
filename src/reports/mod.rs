//! Aggregation and reports for budget-tracker
//!
//! Every figure here is derived from the store at call time; nothing is
//! cached between calls.

pub mod budget_summary;
pub mod financial_summary;
pub mod goal_progress;
pub mod totals;

pub use budget_summary::{budget_summary, BudgetSummaryReport};
pub use financial_summary::{
    FinancialSummary, OverBudgetCategory, OverallStatus, UnbudgetedCategory,
};
pub use goal_progress::goal_progress;
pub use totals::{balance, total_expenses, total_income};
