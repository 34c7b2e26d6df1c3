//! Storage initialization
//!
//! Handles first-run setup and optional sample data

use chrono::NaiveDate;

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

use super::Storage;

const SAMPLE_EXPENSES: &[(&str, i64, &str)] = &[
    ("Groceries", 50, "2024-12-01"),
    ("Utilities", 100, "2024-12-02"),
    ("Transport", 20, "2024-12-03"),
    ("Dining", 30, "2024-12-04"),
    ("Entertainment", 40, "2024-12-05"),
];

const SAMPLE_INCOME: &[(&str, i64, &str)] = &[
    ("Salary", 2000, "2024-12-01"),
    ("Freelancing", 500, "2024-12-02"),
    ("Investments", 300, "2024-12-03"),
    ("Gifts", 100, "2024-12-04"),
    ("Other", 50, "2024-12-05"),
];

const SAMPLE_BUDGETS: &[(&str, i64)] = &[
    ("Groceries", 300),
    ("Utilities", 150),
    ("Transport", 100),
    ("Dining", 200),
    ("Entertainment", 150),
];

const SAMPLE_GOALS: &[(&str, i64, i64)] = &[
    ("Buy a car", 20000, 5000),
    ("Vacation", 5000, 1500),
    ("Emergency fund", 10000, 3000),
    ("Home renovation", 15000, 4000),
    ("New laptop", 2000, 800),
];

/// Result of first-run setup
pub struct Initialized {
    pub storage: Storage,
    /// Whether sample rows were written
    pub seeded: bool,
}

/// Initialize storage for a fresh installation
///
/// Creates the data directory and schema, and seeds sample rows when asked.
/// Sample rows are only written into an empty store.
pub fn initialize_storage(paths: &BudgetPaths, with_samples: bool) -> BudgetResult<Initialized> {
    let storage = Storage::open(paths)?;
    let seeded = if with_samples {
        seed_sample_data(&storage)?
    } else {
        false
    };

    Ok(Initialized { storage, seeded })
}

/// Populate an empty store with example rows
///
/// Returns false without writing anything if the store already has data.
pub fn seed_sample_data(storage: &Storage) -> BudgetResult<bool> {
    if !storage.is_empty()? {
        tracing::info!("store already has data, skipping sample rows");
        return Ok(false);
    }

    storage.atomically(|s| {
        for (category, amount, date) in SAMPLE_EXPENSES {
            s.expenses()
                .add(category, Money::from_units(*amount), sample_date(date)?)?;
        }
        for (category, amount, date) in SAMPLE_INCOME {
            s.income()
                .add(category, Money::from_units(*amount), sample_date(date)?)?;
        }
        for (category, limit) in SAMPLE_BUDGETS {
            s.budgets().set(category, Money::from_units(*limit))?;
        }
        for (name, target, saved) in SAMPLE_GOALS {
            s.goals().add_with_saved(
                name,
                Money::from_units(*target),
                Money::from_units(*saved),
            )?;
        }
        Ok(())
    })?;

    tracing::info!("seeded sample data");
    Ok(true)
}

fn sample_date(text: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| BudgetError::InvalidDate(format!("{}: {}", text, e)))
}
