//! Ledger totals
//!
//! Each total is recomputed from the store on every call.

use crate::error::BudgetResult;
use crate::models::Money;
use crate::storage::Storage;

/// Sum of all expenses (zero when there are none)
pub fn total_expenses(storage: &Storage) -> BudgetResult<Money> {
    storage.expenses().total()
}

/// Sum of all income (zero when there is none)
pub fn total_income(storage: &Storage) -> BudgetResult<Money> {
    storage.income().total()
}

/// Total income minus total expenses
pub fn balance(storage: &Storage) -> BudgetResult<Money> {
    Ok(total_income(storage)? - total_expenses(storage)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::TransactionService;

    #[test]
    fn test_empty_store_is_zero() {
        let storage = Storage::open_in_memory().unwrap();
        assert_eq!(total_expenses(&storage).unwrap(), Money::zero());
        assert_eq!(total_income(&storage).unwrap(), Money::zero());
        assert_eq!(balance(&storage).unwrap(), Money::zero());
    }

    #[test]
    fn test_balance_tracks_adds_and_deletes() {
        let storage = Storage::open_in_memory().unwrap();
        let expenses = TransactionService::expenses(&storage);
        let income = TransactionService::income(&storage);

        income.add("Salary", "2000", "2024-12-01").unwrap();
        let gift = income.add("Gifts", "100.50", "2024-12-04").unwrap();
        expenses.add("Groceries", "50", "2024-12-01").unwrap();
        let rent = expenses.add("Rent", "900", "2024-12-01").unwrap();

        let check = |storage: &Storage| {
            let diff = total_income(storage).unwrap() - total_expenses(storage).unwrap();
            assert_eq!(diff, balance(storage).unwrap());
        };

        check(&storage);
        assert_eq!(balance(&storage).unwrap(), Money::from_cents(115050));

        income.delete(gift.id).unwrap();
        check(&storage);
        expenses.delete(rent.id).unwrap();
        check(&storage);
        assert_eq!(balance(&storage).unwrap(), Money::from_units(1950));
    }

    #[test]
    fn test_negative_balance() {
        let storage = Storage::open_in_memory().unwrap();
        TransactionService::expenses(&storage)
            .add("Rent", "900", "2024-12-01")
            .unwrap();
        assert_eq!(balance(&storage).unwrap(), Money::from_units(-900));
    }
}
