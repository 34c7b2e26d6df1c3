//! Configuration module for budget-tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution for the data directory
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
