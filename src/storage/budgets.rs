//! Budget repository for SQLite storage
//!
//! Budgets are keyed by category; setting a budget for a category that
//! already has one overwrites its limit in a single statement.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::BudgetResult;
use crate::models::{Budget, Money};

/// Repository for per-category budget limits
pub struct BudgetRepository<'a> {
    conn: &'a Connection,
}

impl<'a> BudgetRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert or overwrite the limit for a category
    pub fn set(&self, category: &str, limit: Money) -> BudgetResult<()> {
        self.conn.execute(
            "INSERT INTO budgets (category, budget_amount) VALUES (?1, ?2)
             ON CONFLICT(category) DO UPDATE SET budget_amount = excluded.budget_amount",
            params![category, limit],
        )?;
        Ok(())
    }

    /// Get the budget for a category
    pub fn get(&self, category: &str) -> BudgetResult<Option<Budget>> {
        let budget = self
            .conn
            .query_row(
                "SELECT category, budget_amount FROM budgets WHERE category = ?1",
                [category],
                |row| {
                    Ok(Budget {
                        category: row.get(0)?,
                        limit: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(budget)
    }

    /// Get all budgets, ordered by category
    pub fn list(&self) -> BudgetResult<Vec<Budget>> {
        let mut stmt = self
            .conn
            .prepare("SELECT category, budget_amount FROM budgets ORDER BY category")?;
        let rows = stmt.query_map([], |row| {
            Ok(Budget {
                category: row.get(0)?,
                limit: row.get(1)?,
            })
        })?;

        let mut list = Vec::new();
        for row in rows {
            list.push(row?);
        }
        Ok(list)
    }

    /// Delete the budget for a category; returns false when none was set
    pub fn delete(&self, category: &str) -> BudgetResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM budgets WHERE category = ?1", [category])?;
        Ok(changed > 0)
    }

    /// Sum of every budget limit
    pub fn total(&self) -> BudgetResult<Money> {
        Ok(self.conn.query_row(
            "SELECT COALESCE(SUM(budget_amount), 0) FROM budgets",
            [],
            |row| row.get(0),
        )?)
    }

    /// Count budgets
    pub fn count(&self) -> BudgetResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM budgets", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
