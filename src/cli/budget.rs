//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget, format_budget_list};
use crate::error::BudgetResult;
use crate::reports::BudgetSummaryReport;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set (or replace) the spending limit for a category
    Set {
        /// Category name
        category: String,
        /// Limit (e.g., "300" or "300.00")
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// Show the budget for a category, or all budgets
    Show {
        /// Category name
        category: Option<String>,
    },

    /// Remove the budget for a category
    Delete {
        /// Category name
        category: String,
    },

    /// Compare budgets with actual spending
    Summary,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let budget = service.set_budget(&category, &limit)?;
            println!(
                "Budget for {} set to {}",
                budget.category,
                budget.limit.format_with_symbol(symbol)
            );
        }

        BudgetCommands::Show { category } => match category {
            Some(category) => {
                let budget = service.get_budget(&category)?;
                print!("{}", format_budget(&budget, symbol));
            }
            None => print!("{}", format_budget_list(&service.list_budgets()?, symbol)),
        },

        BudgetCommands::Delete { category } => {
            service.delete_budget(&category)?;
            println!("Budget for {} removed.", category.trim());
        }

        BudgetCommands::Summary => {
            let report = BudgetSummaryReport::generate(storage)?;
            print!("{}", report.format_terminal(symbol));
        }
    }

    Ok(())
}
