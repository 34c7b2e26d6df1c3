//! Transaction service
//!
//! Validates raw input for expenses and income and forwards it to the
//! matching repository. Nothing reaches the store until every field has
//! passed validation.

use crate::error::BudgetResult;
use crate::models::{Money, Transaction, TransactionKind, TransactionUpdate};
use crate::storage::{Storage, TransactionRepository};
use crate::validation::{validate_amount, validate_category, validate_date};

/// Service for expense or income management
pub struct TransactionService<'a> {
    storage: &'a Storage,
    kind: TransactionKind,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service for one ledger
    pub fn new(storage: &'a Storage, kind: TransactionKind) -> Self {
        Self { storage, kind }
    }

    pub fn expenses(storage: &'a Storage) -> Self {
        Self::new(storage, TransactionKind::Expense)
    }

    pub fn income(storage: &'a Storage) -> Self {
        Self::new(storage, TransactionKind::Income)
    }

    fn repo(&self) -> TransactionRepository<'a> {
        self.storage.transactions(self.kind)
    }

    /// Record a new entry
    pub fn add(&self, category: &str, amount: &str, date: &str) -> BudgetResult<Transaction> {
        let category = validate_category(category)?;
        let amount = validate_amount(amount)?;
        let date = validate_date(date)?;

        let id = self.repo().add(&category, amount, date)?;
        tracing::info!(kind = %self.kind, id, %category, %amount, "recorded entry");

        Ok(Transaction {
            id,
            kind: self.kind,
            category,
            amount,
            date,
        })
    }

    /// Get an entry by id
    pub fn get(&self, id: i64) -> BudgetResult<Transaction> {
        self.repo()
            .get(id)?
            .ok_or_else(|| self.kind.not_found(id))
    }

    /// List entries in insertion order, optionally for one category
    ///
    /// The filter is trimmed the same way categories are on `add`.
    pub fn list(&self, category: Option<&str>) -> BudgetResult<Vec<Transaction>> {
        let category = category.map(validate_category).transpose()?;
        let list = self.repo().list(category.as_deref())?;
        tracing::debug!(kind = %self.kind, ?category, count = list.len(), "listed entries");
        Ok(list)
    }

    /// Update any of category, amount and date
    ///
    /// All supplied fields are validated before the row is touched.
    pub fn update(
        &self,
        id: i64,
        category: Option<&str>,
        amount: Option<&str>,
        date: Option<&str>,
    ) -> BudgetResult<Transaction> {
        let mut update = TransactionUpdate::new();
        if let Some(category) = category {
            update = update.category(validate_category(category)?);
        }
        if let Some(amount) = amount {
            update = update.amount(validate_amount(amount)?);
        }
        if let Some(date) = date {
            update = update.date(validate_date(date)?);
        }

        if update.is_empty() {
            return self.get(id);
        }

        if !self.repo().update(id, &update)? {
            tracing::warn!(kind = %self.kind, id, "update on missing entry");
            return Err(self.kind.not_found(id));
        }
        tracing::info!(kind = %self.kind, id, "updated entry");

        self.get(id)
    }

    /// Delete an entry
    pub fn delete(&self, id: i64) -> BudgetResult<()> {
        if !self.repo().delete(id)? {
            tracing::warn!(kind = %self.kind, id, "delete on missing entry");
            return Err(self.kind.not_found(id));
        }
        tracing::info!(kind = %self.kind, id, "deleted entry");
        Ok(())
    }

    /// Sum of every entry in this ledger
    pub fn total(&self) -> BudgetResult<Money> {
        self.repo().total()
    }

    /// Distinct categories used in this ledger
    pub fn categories(&self) -> BudgetResult<Vec<String>> {
        self.repo().categories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BudgetError;
    use chrono::NaiveDate;

    #[test]
    fn test_add_then_list_by_category() {
        let storage = Storage::open_in_memory().unwrap();
        let service = TransactionService::expenses(&storage);

        service.add("Transport", "20", "2024-12-03").unwrap();
        let added = service.add("Groceries", "50.25", "2024-12-01").unwrap();

        let groceries = service.list(Some("Groceries")).unwrap();
        assert_eq!(groceries, vec![added.clone()]);
        assert_eq!(added.amount, Money::from_cents(5025));
        assert_eq!(added.date, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    }

    #[test]
    fn test_add_trims_category() {
        let storage = Storage::open_in_memory().unwrap();
        let service = TransactionService::income(&storage);

        let txn = service.add("  Salary ", "2000", "2024-12-01").unwrap();
        assert_eq!(txn.category, "Salary");
        assert_eq!(service.list(Some("Salary")).unwrap().len(), 1);
    }

    #[test]
    fn test_list_filter_is_trimmed() {
        let storage = Storage::open_in_memory().unwrap();
        let service = TransactionService::expenses(&storage);
        service.add("Groceries", "50", "2024-12-01").unwrap();

        assert_eq!(service.list(Some(" Groceries ")).unwrap().len(), 1);
        assert!(matches!(
            service.list(Some("   ")),
            Err(BudgetError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_invalid_input_leaves_store_untouched() {
        let storage = Storage::open_in_memory().unwrap();
        let service = TransactionService::expenses(&storage);

        assert!(matches!(
            service.add("Groceries", "-5", "2024-12-01"),
            Err(BudgetError::InvalidAmount(_))
        ));
        assert!(matches!(
            service.add("Groceries", "abc", "2024-12-01"),
            Err(BudgetError::InvalidAmount(_))
        ));
        assert!(matches!(
            service.add("Groceries", "5", "2024-13-40"),
            Err(BudgetError::InvalidDate(_))
        ));
        assert!(matches!(
            service.add(" ", "5", "2024-12-01"),
            Err(BudgetError::InvalidCategory(_))
        ));
        assert!(service.list(None).unwrap().is_empty());
    }

    #[test]
    fn test_update_round_trip() {
        let storage = Storage::open_in_memory().unwrap();
        let service = TransactionService::expenses(&storage);
        let txn = service.add("Dining", "30", "2024-12-04").unwrap();

        let updated = service
            .update(txn.id, Some("Eating out"), Some("42.10"), Some("2024-12-06"))
            .unwrap();

        let listed = service.list(None).unwrap();
        assert_eq!(listed, vec![updated.clone()]);
        assert_eq!(updated.category, "Eating out");
        assert_eq!(updated.amount, Money::from_cents(4210));
        assert_eq!(updated.date, NaiveDate::from_ymd_opt(2024, 12, 6).unwrap());
    }

    #[test]
    fn test_update_with_bad_field_changes_nothing() {
        let storage = Storage::open_in_memory().unwrap();
        let service = TransactionService::expenses(&storage);
        let txn = service.add("Dining", "30", "2024-12-04").unwrap();

        let result = service.update(txn.id, Some("Food"), Some("0"), None);
        assert!(matches!(result, Err(BudgetError::InvalidAmount(_))));
        assert_eq!(service.get(txn.id).unwrap(), txn);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let storage = Storage::open_in_memory().unwrap();
        let service = TransactionService::income(&storage);

        let err = service.update(12, None, Some("10"), None).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Income not found: 12");
    }

    #[test]
    fn test_delete_twice_is_not_found() {
        let storage = Storage::open_in_memory().unwrap();
        let service = TransactionService::expenses(&storage);
        let txn = service.add("Utilities", "100", "2024-12-02").unwrap();

        service.delete(txn.id).unwrap();
        assert!(service.get(txn.id).unwrap_err().is_not_found());
        assert!(service
            .list(None)
            .unwrap()
            .iter()
            .all(|t| t.id != txn.id));
        assert!(service.delete(txn.id).unwrap_err().is_not_found());
    }
}
