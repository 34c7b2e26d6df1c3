//! Budget display formatting

use crate::models::Budget;

use super::truncate;

/// Format all budgets as a table
pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<24} {:>12}\n", "Category", "Limit"));
    output.push_str(&"-".repeat(37));
    output.push('\n');

    for budget in budgets {
        output.push_str(&format!(
            "{:<24} {:>12}\n",
            truncate(&budget.category, 24),
            budget.limit.format_with_symbol(symbol)
        ));
    }

    output
}

/// Format one budget
pub fn format_budget(budget: &Budget, symbol: &str) -> String {
    format!(
        "Budget for {}: {}\n",
        budget.category,
        budget.limit.format_with_symbol(symbol)
    )
}
