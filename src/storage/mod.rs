//! Storage layer for budget-tracker
//!
//! Owns the SQLite connection, creates the schema on open, and hands out
//! short-lived repositories that borrow the connection.

pub mod budgets;
pub mod goals;
pub mod init;
pub(crate) mod schema;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use goals::GoalRepository;
pub use init::{initialize_storage, seed_sample_data, Initialized};
pub use transactions::TransactionRepository;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::TransactionKind;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    conn: Connection,
    location: Option<PathBuf>,
}

impl Storage {
    /// Open (or create) the store under the configured data directory
    pub fn open(paths: &BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;
        Self::open_file(&paths.database_file())
    }

    /// Open (or create) a store at an explicit database path
    pub fn open_file(path: &Path) -> BudgetResult<Self> {
        let conn = Connection::open(path).map_err(|e| {
            BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "opened database");
        Self::from_connection(conn, Some(path.to_path_buf()))
    }

    /// Create an in-memory store (for testing)
    pub fn open_in_memory() -> BudgetResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, None)
    }

    fn from_connection(conn: Connection, location: Option<PathBuf>) -> BudgetResult<Self> {
        schema::create_schema(&conn)?;
        Ok(Self { conn, location })
    }

    /// Path of the backing database file, `None` for in-memory stores
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Stamped schema version of the open database
    pub fn schema_version(&self) -> BudgetResult<i32> {
        schema::schema_version(&self.conn)
    }

    /// Repository for either transaction ledger
    pub fn transactions(&self, kind: TransactionKind) -> TransactionRepository<'_> {
        TransactionRepository::new(&self.conn, kind)
    }

    pub fn expenses(&self) -> TransactionRepository<'_> {
        self.transactions(TransactionKind::Expense)
    }

    pub fn income(&self) -> TransactionRepository<'_> {
        self.transactions(TransactionKind::Income)
    }

    pub fn budgets(&self) -> BudgetRepository<'_> {
        BudgetRepository::new(&self.conn)
    }

    pub fn goals(&self) -> GoalRepository<'_> {
        GoalRepository::new(&self.conn)
    }

    /// Check if every table is empty
    pub fn is_empty(&self) -> BudgetResult<bool> {
        Ok(self.expenses().count()? == 0
            && self.income().count()? == 0
            && self.budgets().count()? == 0
            && self.goals().count()? == 0)
    }

    /// Run `f` inside a single SQLite transaction
    ///
    /// Everything `f` writes is committed together or not at all.
    pub fn atomically<T>(&self, f: impl FnOnce(&Self) -> BudgetResult<T>) -> BudgetResult<T> {
        let tx = self.conn.unchecked_transaction()?;
        let value = f(self)?;
        tx.commit()?;
        Ok(value)
    }
}
