//! Transaction display formatting

use crate::models::{Transaction, TransactionKind};

use super::truncate;

/// Format a list of expenses or income as a table
pub fn format_transaction_list(
    kind: TransactionKind,
    transactions: &[Transaction],
    symbol: &str,
) -> String {
    if transactions.is_empty() {
        return match kind {
            TransactionKind::Expense => "No expenses found.\n".to_string(),
            TransactionKind::Income => "No income found.\n".to_string(),
        };
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>6}  {:<24} {:>12}  {}\n",
        "ID",
        "Category",
        "Amount",
        kind.date_label()
    ));
    output.push_str(&"-".repeat(58));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format!(
            "{:>6}  {:<24} {:>12}  {}\n",
            txn.id,
            truncate(&txn.category, 24),
            txn.amount.format_with_symbol(symbol),
            txn.date.format("%Y-%m-%d")
        ));
    }

    output
}

/// Format a single entry
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{} #{}\n", txn.kind, txn.id));
    output.push_str(&format!("  Category:  {}\n", txn.category));
    output.push_str(&format!(
        "  Amount:    {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  {:<10} {}\n",
        format!("{}:", txn.kind.date_label()),
        txn.date.format("%Y-%m-%d")
    ));
    output
}

/// Format the distinct categories of a ledger
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories yet.\n".to_string();
    }

    let mut output = String::from("Available categories:\n");
    for category in categories {
        output.push_str(&format!("  - {}\n", category));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn expense() -> Transaction {
        Transaction {
            id: 3,
            kind: TransactionKind::Expense,
            category: "Groceries".into(),
            amount: Money::from_cents(5025),
            date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        }
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(
            format_transaction_list(TransactionKind::Income, &[], "$"),
            "No income found.\n"
        );
        assert_eq!(format_category_list(&[]), "No categories yet.\n");
    }

    #[test]
    fn test_list_rows() {
        let text = format_transaction_list(TransactionKind::Expense, &[expense()], "$");
        assert!(text.contains("Due date"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("$50.25"));
        assert!(text.contains("2024-12-01"));
    }

    #[test]
    fn test_details_use_symbol() {
        let text = format_transaction_details(&expense(), "€");
        assert!(text.starts_with("Expense #3"));
        assert!(text.contains("€50.25"));
    }
}
