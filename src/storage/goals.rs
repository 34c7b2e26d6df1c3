//! Savings goal repository for SQLite storage

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Goal, Money};

/// Repository for savings goals
pub struct GoalRepository<'a> {
    conn: &'a Connection,
}

fn map_goal(row: &Row<'_>) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: row.get(0)?,
        name: row.get(1)?,
        target: row.get(2)?,
        saved: row.get(3)?,
    })
}

impl<'a> GoalRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a goal with nothing saved yet and return its id
    pub fn add(&self, name: &str, target: Money) -> BudgetResult<i64> {
        self.add_with_saved(name, target, Money::zero())
    }

    /// Insert a goal with an opening saved amount
    pub fn add_with_saved(&self, name: &str, target: Money, saved: Money) -> BudgetResult<i64> {
        self.conn.execute(
            "INSERT INTO financial_goals (goal, target_amount, saved_amount) VALUES (?1, ?2, ?3)",
            params![name, target, saved],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a goal by id
    pub fn get(&self, id: i64) -> BudgetResult<Option<Goal>> {
        let goal = self
            .conn
            .query_row(
                "SELECT id, goal, target_amount, saved_amount FROM financial_goals WHERE id = ?1",
                [id],
                map_goal,
            )
            .optional()?;
        Ok(goal)
    }

    /// List goals in insertion order
    pub fn list(&self) -> BudgetResult<Vec<Goal>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, goal, target_amount, saved_amount FROM financial_goals ORDER BY id",
        )?;
        let rows = stmt.query_map([], map_goal)?;

        let mut list = Vec::new();
        for row in rows {
            list.push(row?);
        }
        Ok(list)
    }

    /// Add `delta` to the saved amount; returns false when the goal is missing
    ///
    /// A negative delta withdraws, but never below zero. The write is a single
    /// conditional UPDATE, so this is safe to call inside `Storage::atomically`.
    pub fn add_to_saved(&self, id: i64, delta: Money) -> BudgetResult<bool> {
        let current: Option<Money> = self
            .conn
            .query_row(
                "SELECT saved_amount FROM financial_goals WHERE id = ?1",
                [id],
                |row| row.get(0),
            )
            .optional()?;

        let Some(current) = current else {
            return Ok(false);
        };

        let updated = current.checked_add(delta).ok_or_else(|| {
            BudgetError::InvalidAmount(format!(
                "adding {} to {} exceeds the largest supported amount",
                delta, current
            ))
        })?;
        if updated.is_negative() {
            return Err(BudgetError::InvalidAmount(format!(
                "withdrawing {} would leave the saved amount negative ({} saved)",
                delta.abs(),
                current
            )));
        }

        let changed = self.conn.execute(
            "UPDATE financial_goals SET saved_amount = ?1 WHERE id = ?2 AND saved_amount = ?3",
            params![updated, id, current],
        )?;
        Ok(changed > 0)
    }

    /// Overwrite the saved amount; returns false when the goal is missing
    pub fn set_saved(&self, id: i64, saved: Money) -> BudgetResult<bool> {
        let changed = self.conn.execute(
            "UPDATE financial_goals SET saved_amount = ?1 WHERE id = ?2",
            params![saved, id],
        )?;
        Ok(changed > 0)
    }

    /// Delete a goal; returns false when the goal is missing
    pub fn delete(&self, id: i64) -> BudgetResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM financial_goals WHERE id = ?1", [id])?;
        Ok(changed > 0)
    }

    /// Goals whose saved amount has reached the target, in insertion order
    pub fn achieved(&self) -> BudgetResult<Vec<Goal>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, goal, target_amount, saved_amount FROM financial_goals
             WHERE target_amount > 0 AND saved_amount >= target_amount ORDER BY id",
        )?;
        let rows = stmt.query_map([], map_goal)?;

        let mut list = Vec::new();
        for row in rows {
            list.push(row?);
        }
        Ok(list)
    }

    /// Count goals
    pub fn count(&self) -> BudgetResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM financial_goals", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
