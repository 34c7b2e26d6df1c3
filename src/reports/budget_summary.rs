//! Budget vs actual report
//!
//! One line per budgeted category comparing the limit with the sum of
//! expenses recorded under exactly that category name.

use crate::display::truncate;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetComparison, BudgetStatus, Money};
use crate::storage::Storage;

/// Compare every budget with actual spending, ordered by category
pub fn budget_summary(storage: &Storage) -> BudgetResult<Vec<BudgetComparison>> {
    let expenses = storage.expenses();
    let mut lines = Vec::new();

    for budget in storage.budgets().list()? {
        let actual = expenses.total_for_category(&budget.category)?;
        lines.push(BudgetComparison::new(budget.category, budget.limit, actual));
    }

    Ok(lines)
}

fn checked_total(mut amounts: impl Iterator<Item = Money>) -> BudgetResult<Money> {
    amounts.try_fold(Money::zero(), |total, amount| {
        total.checked_add(amount).ok_or_else(|| {
            BudgetError::InvalidAmount("report total exceeds the largest supported amount".into())
        })
    })
}

/// Budget summary with totals, ready for display
#[derive(Debug, Clone)]
pub struct BudgetSummaryReport {
    pub lines: Vec<BudgetComparison>,
    pub total_budgeted: Money,
    pub total_actual: Money,
}

impl BudgetSummaryReport {
    /// Generate the report from the current store contents
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        let lines = budget_summary(storage)?;
        let total_budgeted = checked_total(lines.iter().map(|l| l.budgeted))?;
        let total_actual = checked_total(lines.iter().map(|l| l.actual))?;

        Ok(Self {
            lines,
            total_budgeted,
            total_actual,
        })
    }

    /// Categories whose spending exceeds the limit
    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetComparison> {
        self.lines
            .iter()
            .filter(|l| l.status == BudgetStatus::Over)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.lines.is_empty() {
            return "No budgets set.\n\nUse 'btrack budget set <category> <limit>' to add one.\n"
                .to_string();
        }

        let mut output = String::new();
        output.push_str("Budget Summary\n");
        output.push_str(&"=".repeat(66));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12} {:>3}\n",
            "Category", "Budgeted", "Actual", "Remaining", ""
        ));
        output.push_str(&"-".repeat(66));
        output.push('\n');

        for line in &self.lines {
            output.push_str(&format!(
                "{:<24} {:>12} {:>12} {:>12} {}\n",
                truncate(&line.category, 24),
                line.budgeted.format_with_symbol(symbol),
                line.actual.format_with_symbol(symbol),
                line.remaining().format_with_symbol(symbol),
                line.status
            ));
        }

        output.push_str(&"-".repeat(66));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12}\n",
            "TOTAL",
            self.total_budgeted.format_with_symbol(symbol),
            self.total_actual.format_with_symbol(symbol),
            (self.total_budgeted - self.total_actual).format_with_symbol(symbol)
        ));

        let over = self.over_budget().count();
        if over > 0 {
            let noun = if over == 1 { "category" } else { "categories" };
            output.push_str(&format!("\n{} {} over budget.\n", over, noun));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{BudgetService, TransactionService};

    #[test]
    fn test_groceries_flip_from_under_to_over() {
        let storage = Storage::open_in_memory().unwrap();
        let budgets = BudgetService::new(&storage);
        let expenses = TransactionService::expenses(&storage);

        budgets.set_budget("Groceries", "200").unwrap();
        expenses.add("Groceries", "50", "2024-12-01").unwrap();
        expenses.add("Groceries", "60", "2024-12-02").unwrap();

        let summary = budget_summary(&storage).unwrap();
        assert_eq!(
            summary,
            vec![BudgetComparison {
                category: "Groceries".into(),
                budgeted: Money::from_units(200),
                actual: Money::from_units(110),
                status: BudgetStatus::Under,
            }]
        );

        expenses.add("Groceries", "100", "2024-12-03").unwrap();
        let summary = budget_summary(&storage).unwrap();
        assert_eq!(summary[0].actual, Money::from_units(210));
        assert_eq!(summary[0].status, BudgetStatus::Over);
    }

    #[test]
    fn test_budget_without_expenses_and_exact_match() {
        let storage = Storage::open_in_memory().unwrap();
        let budgets = BudgetService::new(&storage);
        let expenses = TransactionService::expenses(&storage);

        budgets.set_budget("Utilities", "100").unwrap();
        budgets.set_budget("Dining", "150").unwrap();
        expenses.add("Utilities", "100", "2024-12-02").unwrap();
        // unbudgeted categories are not part of the comparison
        expenses.add("Transport", "20", "2024-12-03").unwrap();

        let summary = budget_summary(&storage).unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].category, "Dining");
        assert_eq!(summary[0].actual, Money::zero());
        assert_eq!(summary[0].status, BudgetStatus::Under);
        assert_eq!(summary[1].category, "Utilities");
        assert_eq!(summary[1].status, BudgetStatus::Exact);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let storage = Storage::open_in_memory().unwrap();
        BudgetService::new(&storage)
            .set_budget("Groceries", "10")
            .unwrap();
        TransactionService::expenses(&storage)
            .add("groceries", "50", "2024-12-01")
            .unwrap();

        let summary = budget_summary(&storage).unwrap();
        assert_eq!(summary[0].actual, Money::zero());
    }

    #[test]
    fn test_report_totals_and_format() {
        let storage = Storage::open_in_memory().unwrap();
        let budgets = BudgetService::new(&storage);
        let expenses = TransactionService::expenses(&storage);
        budgets.set_budget("Dining", "100").unwrap();
        budgets.set_budget("Groceries", "200").unwrap();
        expenses.add("Dining", "130", "2024-12-01").unwrap();

        let report = BudgetSummaryReport::generate(&storage).unwrap();
        assert_eq!(report.total_budgeted, Money::from_units(300));
        assert_eq!(report.total_actual, Money::from_units(130));
        assert_eq!(report.over_budget().count(), 1);

        let text = report.format_terminal("$");
        assert!(text.contains("Dining"));
        assert!(text.contains("over"));
        assert!(text.contains("-$30.00"));
        assert!(text.contains("1 category over budget."));
    }

    #[test]
    fn test_oversized_totals_are_an_error() {
        let storage = Storage::open_in_memory().unwrap();
        let budgets = BudgetService::new(&storage);
        let expenses = TransactionService::expenses(&storage);
        for category in ["A", "B"] {
            budgets.set_budget(category, "1").unwrap();
            expenses
                .add(category, "50000000000000000", "2024-12-01")
                .unwrap();
        }

        let result = BudgetSummaryReport::generate(&storage);
        assert!(matches!(result, Err(BudgetError::InvalidAmount(_))));
    }

    #[test]
    fn test_empty_report_format() {
        let storage = Storage::open_in_memory().unwrap();
        let report = BudgetSummaryReport::generate(&storage).unwrap();
        assert!(report.format_terminal("$").starts_with("No budgets set."));
    }
}
