//! Display formatting for terminal output
//!
//! Plain-text tables for the records the CLI lists.

pub mod budget;
pub mod goal;
pub mod transaction;

pub use budget::{format_budget, format_budget_list};
pub use goal::{format_goal_list, format_goal_progress};
pub use transaction::{format_category_list, format_transaction_details, format_transaction_list};

/// Shorten `s` to at most `max` characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
