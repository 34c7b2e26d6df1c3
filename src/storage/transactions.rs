//! Transaction repository for SQLite storage
//!
//! One repository type serves both the `expenses` and `income` tables; the
//! [`TransactionKind`] picks the table and its date column.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::BudgetResult;
use crate::models::{Money, Transaction, TransactionKind, TransactionUpdate};

/// Repository for expense or income rows
pub struct TransactionRepository<'a> {
    conn: &'a Connection,
    kind: TransactionKind,
}

impl<'a> TransactionRepository<'a> {
    pub(crate) fn new(conn: &'a Connection, kind: TransactionKind) -> Self {
        Self { conn, kind }
    }

    fn select_columns(&self) -> String {
        format!(
            "SELECT id, category, amount, {date} FROM {table}",
            date = self.kind.date_column(),
            table = self.kind.table()
        )
    }

    fn map_row(&self, row: &Row<'_>) -> rusqlite::Result<Transaction> {
        Ok(Transaction {
            id: row.get(0)?,
            kind: self.kind,
            category: row.get(1)?,
            amount: row.get(2)?,
            date: row.get(3)?,
        })
    }

    /// Insert a new row and return its id
    pub fn add(&self, category: &str, amount: Money, date: NaiveDate) -> BudgetResult<i64> {
        let sql = format!(
            "INSERT INTO {table} (category, amount, {date}) VALUES (?1, ?2, ?3)",
            table = self.kind.table(),
            date = self.kind.date_column()
        );
        self.conn.execute(&sql, params![category, amount, date])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a single row by id
    pub fn get(&self, id: i64) -> BudgetResult<Option<Transaction>> {
        let sql = format!("{} WHERE id = ?1", self.select_columns());
        let txn = self
            .conn
            .query_row(&sql, [id], |row| self.map_row(row))
            .optional()?;
        Ok(txn)
    }

    /// List rows in insertion order, optionally restricted to one category
    ///
    /// The category match is exact and case-sensitive.
    pub fn list(&self, category: Option<&str>) -> BudgetResult<Vec<Transaction>> {
        let sql = format!(
            "{} WHERE (?1 IS NULL OR category = ?1) ORDER BY id",
            self.select_columns()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([category], |row| self.map_row(row))?;

        let mut list = Vec::new();
        for row in rows {
            list.push(row?);
        }
        Ok(list)
    }

    /// Apply a partial update; returns false when no row has this id
    pub fn update(&self, id: i64, update: &TransactionUpdate) -> BudgetResult<bool> {
        let sql = format!(
            "UPDATE {table} SET
                category = COALESCE(?1, category),
                amount   = COALESCE(?2, amount),
                {date}   = COALESCE(?3, {date})
             WHERE id = ?4",
            table = self.kind.table(),
            date = self.kind.date_column()
        );
        let changed = self.conn.execute(
            &sql,
            params![update.category, update.amount, update.date, id],
        )?;
        Ok(changed > 0)
    }

    /// Delete a row; returns false when no row has this id
    pub fn delete(&self, id: i64) -> BudgetResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", self.kind.table());
        let changed = self.conn.execute(&sql, [id])?;
        Ok(changed > 0)
    }

    /// Sum of all amounts (zero when empty)
    pub fn total(&self) -> BudgetResult<Money> {
        let sql = format!(
            "SELECT COALESCE(SUM(amount), 0) FROM {}",
            self.kind.table()
        );
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }

    /// Sum of amounts in one category (zero when none)
    pub fn total_for_category(&self, category: &str) -> BudgetResult<Money> {
        let sql = format!(
            "SELECT COALESCE(SUM(amount), 0) FROM {} WHERE category = ?1",
            self.kind.table()
        );
        Ok(self.conn.query_row(&sql, [category], |row| row.get(0))?)
    }

    /// Per-category sums, ordered by category
    pub fn totals_by_category(&self) -> BudgetResult<Vec<(String, Money)>> {
        let sql = format!(
            "SELECT category, SUM(amount) FROM {} GROUP BY category ORDER BY category",
            self.kind.table()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut totals = Vec::new();
        for row in rows {
            totals.push(row?);
        }
        Ok(totals)
    }

    /// Distinct categories in use, sorted
    pub fn categories(&self) -> BudgetResult<Vec<String>> {
        let sql = format!(
            "SELECT DISTINCT category FROM {} ORDER BY category",
            self.kind.table()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }
        Ok(categories)
    }

    /// Count rows
    pub fn count(&self) -> BudgetResult<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.kind.table());
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
