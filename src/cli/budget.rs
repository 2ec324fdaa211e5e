//! Budget CLI commands
//!
//! Budgets are read-only in this release; `create` only announces itself.

use clap::Subcommand;

use crate::display::{format_budget_overview, format_budget_table};
use crate::error::FinboardResult;
use crate::session::Session;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show every budget with totals
    Overview,

    /// Show overspent budgets
    Overspent,

    /// Show budgets above the warning threshold
    Warnings,

    /// Create a budget
    Create,
}

/// Handle a budget command
pub fn handle_budget_command(session: &mut Session, cmd: BudgetCommands) -> FinboardResult<()> {
    let currency = session.settings().currency;
    let service = session.budget_service()?;

    match cmd {
        BudgetCommands::Overview => {
            let overview = service.overview()?;
            println!("Budget Overview");
            println!("{}", "=".repeat(60));
            print!("{}", format_budget_overview(&overview, currency));
        }

        BudgetCommands::Overspent => {
            let overspent = service.overspent()?;
            if overspent.is_empty() {
                println!("No overspent budgets.");
            } else {
                println!("Overspent Budgets");
                println!("{}", "=".repeat(60));
                print!("{}", format_budget_table(&overspent, currency));
            }
        }

        BudgetCommands::Warnings => {
            let warnings = service.warnings()?;
            if warnings.is_empty() {
                println!(
                    "No budgets above {}% of their allocation.",
                    session.settings().budget_warning_threshold
                );
            } else {
                print!("{}", format_budget_table(&warnings, currency));
            }
        }

        BudgetCommands::Create => {
            println!("Creating budgets is coming soon.");
        }
    }

    Ok(())
}
