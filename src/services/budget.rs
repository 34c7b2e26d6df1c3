//! Budget service
//!
//! Validates and stores per-category spending limits.

use crate::error::{BudgetError, BudgetResult};
use crate::models::Budget;
use crate::storage::Storage;
use crate::validation::{validate_category, validate_non_negative_amount};

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the limit for a category, replacing any existing limit
    pub fn set_budget(&self, category: &str, limit: &str) -> BudgetResult<Budget> {
        let category = validate_category(category)?;
        let limit = validate_non_negative_amount(limit)?;

        self.storage.budgets().set(&category, limit)?;
        tracing::info!(%category, %limit, "budget set");

        Ok(Budget { category, limit })
    }

    /// Get the budget for one category
    pub fn get_budget(&self, category: &str) -> BudgetResult<Budget> {
        let category = validate_category(category)?;
        self.storage
            .budgets()
            .get(&category)?
            .ok_or_else(|| BudgetError::budget_not_found(category))
    }

    /// All budgets, ordered by category
    pub fn list_budgets(&self) -> BudgetResult<Vec<Budget>> {
        self.storage.budgets().list()
    }

    /// Remove the budget for a category
    pub fn delete_budget(&self, category: &str) -> BudgetResult<()> {
        let category = validate_category(category)?;
        if !self.storage.budgets().delete(&category)? {
            tracing::warn!(%category, "delete on missing budget");
            return Err(BudgetError::budget_not_found(category));
        }
        tracing::info!(%category, "budget deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_set_and_overwrite() {
        let storage = Storage::open_in_memory().unwrap();
        let service = BudgetService::new(&storage);

        service.set_budget("Groceries", "200").unwrap();
        let budget = service.set_budget("Groceries", "250.50").unwrap();

        assert_eq!(budget.limit, Money::from_cents(25050));
        assert_eq!(service.list_budgets().unwrap(), vec![budget]);
    }

    #[test]
    fn test_zero_allowed_negative_rejected() {
        let storage = Storage::open_in_memory().unwrap();
        let service = BudgetService::new(&storage);

        assert!(service.set_budget("Gifts", "0").is_ok());
        assert!(matches!(
            service.set_budget("Gifts", "-1"),
            Err(BudgetError::InvalidAmount(_))
        ));
        assert_eq!(service.get_budget("Gifts").unwrap().limit, Money::zero());
    }

    #[test]
    fn test_get_missing() {
        let storage = Storage::open_in_memory().unwrap();
        let service = BudgetService::new(&storage);
        assert!(service.get_budget("Rent").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete() {
        let storage = Storage::open_in_memory().unwrap();
        let service = BudgetService::new(&storage);
        service.set_budget("Transport", "100").unwrap();

        service.delete_budget("Transport").unwrap();
        assert!(service.delete_budget("Transport").unwrap_err().is_not_found());
    }
}
