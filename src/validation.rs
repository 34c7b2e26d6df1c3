//! Input validation utilities
//!
//! Pure functions that turn raw user input into typed values. Every mutation
//! in the service layer runs its input through here before touching the store.

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

/// Date format accepted for expenses and income
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strictly positive amount
pub fn validate_amount(value: &str) -> BudgetResult<Money> {
    let amount = parse_amount(value)?;
    if !amount.is_positive() {
        return Err(BudgetError::InvalidAmount(format!(
            "amount must be greater than zero, got {}",
            value.trim()
        )));
    }
    Ok(amount)
}

/// Parse an amount that may be zero (budget limits, absolute saved amounts)
pub fn validate_non_negative_amount(value: &str) -> BudgetResult<Money> {
    let amount = parse_amount(value)?;
    if amount.is_negative() {
        return Err(BudgetError::InvalidAmount(format!(
            "amount cannot be negative, got {}",
            value.trim()
        )));
    }
    Ok(amount)
}

fn parse_amount(value: &str) -> BudgetResult<Money> {
    Money::parse(value).map_err(|e| BudgetError::InvalidAmount(e.to_string()))
}

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn validate_date(text: &str) -> BudgetResult<NaiveDate> {
    let text = text.trim();
    let invalid = || BudgetError::InvalidDate(format!("'{}' is not a valid YYYY-MM-DD date", text));

    // chrono accepts unpadded fields, so pin the shape first
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}

/// Trim a category label, rejecting empty input
pub fn validate_category(text: &str) -> BudgetResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::InvalidCategory(
            "category cannot be empty".into(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Trim a goal name, rejecting empty input
pub fn validate_goal_name(text: &str) -> BudgetResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::InvalidCategory(
            "goal name cannot be empty".into(),
        ));
    }
    Ok(trimmed.to_string())
}
