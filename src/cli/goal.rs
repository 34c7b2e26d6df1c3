//! Savings goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_goal_list, format_goal_progress};
use crate::error::BudgetResult;
use crate::reports::goal_progress;
use crate::services::GoalService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name (e.g., "Vacation")
        name: String,
        /// Target amount
        #[arg(allow_hyphen_values = true)]
        target: String,
    },

    /// List goals with their progress
    List,

    /// Add money to a goal's saved amount
    Contribute {
        /// Goal ID
        id: i64,
        /// Amount to add
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Take money back out of a goal's saved amount
    Withdraw {
        /// Goal ID
        id: i64,
        /// Amount to remove
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Replace a goal's saved amount
    SetSaved {
        /// Goal ID
        id: i64,
        /// New saved amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show progress toward a goal
    Progress {
        /// Goal ID
        id: i64,
    },

    /// Delete a goal
    Delete {
        /// Goal ID
        id: i64,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> BudgetResult<()> {
    let service = GoalService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Add { name, target } => {
            let goal = service.add_goal(&name, &target)?;
            println!(
                "Goal '{}' created (ID: {}, target {})",
                goal.name,
                goal.id,
                goal.target.format_with_symbol(symbol)
            );
        }

        GoalCommands::List => {
            print!("{}", format_goal_list(&service.list_goals()?, symbol));
        }

        GoalCommands::Contribute { id, amount } => {
            let goal = service.contribute(id, &amount)?;
            println!(
                "Saved amount for '{}' is now {}",
                goal.name,
                goal.saved.format_with_symbol(symbol)
            );
        }

        GoalCommands::Withdraw { id, amount } => {
            let goal = service.withdraw(id, &amount)?;
            println!(
                "Saved amount for '{}' is now {}",
                goal.name,
                goal.saved.format_with_symbol(symbol)
            );
        }

        GoalCommands::SetSaved { id, amount } => {
            let goal = service.set_saved(id, &amount)?;
            println!(
                "Saved amount for '{}' set to {}",
                goal.name,
                goal.saved.format_with_symbol(symbol)
            );
        }

        GoalCommands::Progress { id } => {
            let goal = service.get_goal(id)?;
            let progress = goal_progress(storage, id)?;
            print!("{}", format_goal_progress(&goal, &progress, symbol));
        }

        GoalCommands::Delete { id } => {
            service.delete_goal(id)?;
            println!("Goal {} deleted successfully!", id);
        }
    }

    Ok(())
}
