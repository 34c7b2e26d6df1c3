//! Savings goal service
//!
//! Goals can be moved toward their target two ways: `contribute` adds to the
//! saved amount, `set_saved` replaces it outright.

use crate::error::{BudgetError, BudgetResult};
use crate::models::Goal;
use crate::storage::Storage;
use crate::validation::{validate_amount, validate_goal_name, validate_non_negative_amount};

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a goal with nothing saved
    pub fn add_goal(&self, name: &str, target: &str) -> BudgetResult<Goal> {
        let name = validate_goal_name(name)?;
        let target = validate_amount(target)?;

        let id = self.storage.goals().add(&name, target)?;
        tracing::info!(id, %name, %target, "goal created");

        self.get_goal(id)
    }

    /// Get a goal by id
    pub fn get_goal(&self, id: i64) -> BudgetResult<Goal> {
        self.storage
            .goals()
            .get(id)?
            .ok_or_else(|| BudgetError::goal_not_found(id))
    }

    /// All goals in insertion order
    pub fn list_goals(&self) -> BudgetResult<Vec<Goal>> {
        self.storage.goals().list()
    }

    /// Add a positive amount to the saved total
    pub fn contribute(&self, id: i64, amount: &str) -> BudgetResult<Goal> {
        let amount = validate_amount(amount)?;
        if !self.storage.goals().add_to_saved(id, amount)? {
            tracing::warn!(id, "contribution to missing goal");
            return Err(BudgetError::goal_not_found(id));
        }
        tracing::info!(id, %amount, "goal contribution");
        self.get_goal(id)
    }

    /// Take a positive amount back out of the saved total
    pub fn withdraw(&self, id: i64, amount: &str) -> BudgetResult<Goal> {
        let amount = validate_amount(amount)?;
        if !self.storage.goals().add_to_saved(id, -amount)? {
            tracing::warn!(id, "withdrawal from missing goal");
            return Err(BudgetError::goal_not_found(id));
        }
        tracing::info!(id, %amount, "goal withdrawal");
        self.get_goal(id)
    }

    /// Replace the saved total
    pub fn set_saved(&self, id: i64, saved: &str) -> BudgetResult<Goal> {
        let saved = validate_non_negative_amount(saved)?;
        if !self.storage.goals().set_saved(id, saved)? {
            tracing::warn!(id, "set_saved on missing goal");
            return Err(BudgetError::goal_not_found(id));
        }
        tracing::info!(id, %saved, "goal saved amount set");
        self.get_goal(id)
    }

    /// Delete a goal
    pub fn delete_goal(&self, id: i64) -> BudgetResult<()> {
        if !self.storage.goals().delete(id)? {
            tracing::warn!(id, "delete on missing goal");
            return Err(BudgetError::goal_not_found(id));
        }
        tracing::info!(id, "goal deleted");
        Ok(())
    }
}
