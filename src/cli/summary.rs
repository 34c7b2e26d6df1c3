//! Financial summary command

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::reports::FinancialSummary;
use crate::storage::Storage;

/// Print the full financial summary, as text or JSON
pub fn handle_summary_command(storage: &Storage, settings: &Settings, json: bool) -> BudgetResult<()> {
    let summary = FinancialSummary::generate(storage)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}
