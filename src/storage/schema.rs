//! SQLite schema for the record tables
//!
//! Amounts are stored as INTEGER cents and dates as `YYYY-MM-DD` text.
//! AUTOINCREMENT keeps ids monotonic so a deleted id is never handed out again.

use rusqlite::Connection;

use crate::error::BudgetResult;

pub(crate) const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS expenses (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    category  TEXT    NOT NULL,
    amount    INTEGER NOT NULL CHECK (amount > 0),
    due_date  TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS income (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    category  TEXT    NOT NULL,
    amount    INTEGER NOT NULL CHECK (amount > 0),
    pay_date  TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS budgets (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    category       TEXT    NOT NULL UNIQUE,
    budget_amount  INTEGER NOT NULL CHECK (budget_amount >= 0)
);

CREATE TABLE IF NOT EXISTS financial_goals (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    goal           TEXT    NOT NULL,
    target_amount  INTEGER NOT NULL CHECK (target_amount > 0),
    saved_amount   INTEGER NOT NULL DEFAULT 0 CHECK (saved_amount >= 0)
);

CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(category);
CREATE INDEX IF NOT EXISTS idx_income_category ON income(category);
"#;

pub(crate) const SCHEMA_VERSION: i32 = 1;

/// Create all tables if they are missing and stamp the schema version
pub(crate) fn create_schema(conn: &Connection) -> BudgetResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version == 0 {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    tracing::debug!(version = SCHEMA_VERSION, "schema ready");
    Ok(())
}

/// Read the stamped schema version
pub(crate) fn schema_version(conn: &Connection) -> BudgetResult<i32> {
    Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
}
