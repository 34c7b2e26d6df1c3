//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the service layer. Handlers keep no state between
//! calls; everything they need arrives as arguments.

pub mod budget;
pub mod goal;
pub mod summary;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use summary::handle_summary_command;
pub use transaction::{handle_transaction_command, TransactionCommands};
