//! Goal progress

use crate::error::{BudgetError, BudgetResult};
use crate::models::GoalProgress;
use crate::storage::Storage;

/// Progress toward one goal, read fresh from the store
pub fn goal_progress(storage: &Storage, id: i64) -> BudgetResult<GoalProgress> {
    let goal = storage
        .goals()
        .get(id)?
        .ok_or_else(|| BudgetError::goal_not_found(id))?;
    Ok(GoalProgress::from_goal(&goal))
}
