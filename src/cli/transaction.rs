//! Expense and income CLI commands
//!
//! Both ledgers accept the same subcommands; the caller picks the ledger.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_list, format_transaction_details, format_transaction_list};
use crate::error::BudgetResult;
use crate::models::TransactionKind;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Subcommands shared by `expense` and `income`
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new entry
    Add {
        /// Category label (e.g., "Groceries")
        category: String,
        /// Amount (e.g., "50" or "49.99")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// List entries
    List {
        /// Only show entries in this category (exact match)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show a single entry
    Show {
        /// Entry ID
        id: i64,
    },

    /// Change the category, amount or date of an entry
    Update {
        /// Entry ID
        id: i64,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry ID
        id: i64,
    },

    /// Show the sum of all entries
    Total,

    /// List the categories in use
    Categories,
}

/// Handle an expense or income command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    kind: TransactionKind,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    let service = TransactionService::new(storage, kind);
    let symbol = settings.currency_symbol.as_str();
    let noun = kind.to_string();

    match cmd {
        TransactionCommands::Add {
            category,
            amount,
            date,
        } => {
            let txn = service.add(&category, &amount, &date)?;
            println!(
                "{} added successfully! (ID: {}, {} in {} on {})",
                noun,
                txn.id,
                txn.amount.format_with_symbol(symbol),
                txn.category,
                txn.date.format("%Y-%m-%d")
            );
        }

        TransactionCommands::List { category } => {
            let list = service.list(category.as_deref())?;
            if let Some(category) = &category {
                println!("{} in category '{}':", noun, category);
            }
            print!("{}", format_transaction_list(kind, &list, symbol));
        }

        TransactionCommands::Show { id } => {
            let txn = service.get(id)?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Update {
            id,
            category,
            amount,
            date,
        } => {
            if category.is_none() && amount.is_none() && date.is_none() {
                println!("Nothing to update. Pass --category, --amount or --date.");
                return Ok(());
            }
            let txn = service.update(
                id,
                category.as_deref(),
                amount.as_deref(),
                date.as_deref(),
            )?;
            println!("{} updated successfully!", noun);
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            service.delete(id)?;
            println!("{} {} deleted successfully!", noun, id);
        }

        TransactionCommands::Total => {
            let total = service.total()?;
            println!("Total {}: {}", noun.to_lowercase(), total.format_with_symbol(symbol));
        }

        TransactionCommands::Categories => {
            print!("{}", format_category_list(&service.categories()?));
        }
    }

    Ok(())
}
