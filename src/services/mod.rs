//! Service layer for budget-tracker
//!
//! The service layer sits between the command handlers and the storage layer,
//! turning raw input into validated values and reporting missing records as
//! `NotFound` errors.

pub mod budget;
pub mod goal;
pub mod transaction;

pub use budget::BudgetService;
pub use goal::GoalService;
pub use transaction::TransactionService;
