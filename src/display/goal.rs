//! Savings goal display formatting

use crate::models::{Goal, GoalProgress};

use super::truncate;

const BAR_WIDTH: usize = 20;

fn progress_bar(ratio: f64) -> String {
    let filled = ((ratio.clamp(0.0, 1.0)) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Format all goals with their progress
pub fn format_goal_list(goals: &[Goal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No financial goals set.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<20} {:>12} {:>12} {:>7}\n",
        "ID", "Goal", "Saved", "Target", "%"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for goal in goals {
        let progress = GoalProgress::from_goal(goal);
        let marker = if progress.achieved { " ✓" } else { "" };
        output.push_str(&format!(
            "{:>4}  {:<20} {:>12} {:>12} {:>6.1}%{}\n",
            goal.id,
            truncate(&goal.name, 20),
            goal.saved.format_with_symbol(symbol),
            goal.target.format_with_symbol(symbol),
            progress.percent(),
            marker
        ));
    }

    output
}

/// Format detailed progress for a single goal
pub fn format_goal_progress(goal: &Goal, progress: &GoalProgress, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Goal: {} (#{})\n", goal.name, goal.id));
    output.push_str(&format!(
        "  Saved:     {}\n",
        progress.saved.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Target:    {}\n",
        progress.target.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Progress:  {} {:.1}%\n",
        progress_bar(progress.ratio),
        progress.percent()
    ));

    if progress.achieved {
        output.push_str("  Status:    achieved\n");
    } else {
        output.push_str(&format!(
            "  Status:    {} to go\n",
            goal.remaining().format_with_symbol(symbol)
        ));
    }

    output
}
