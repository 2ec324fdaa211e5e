//! CLI command handlers
//!
//! This module contains the clap command tree and the handlers that bridge
//! it to a running [`Session`]. The same tree is used by the one-shot binary
//! and by the interactive shell.

pub mod budget;
pub mod config;
pub mod expense;
pub mod export;
pub mod report;
pub mod settings;
pub mod shell;
pub mod suggestion;

use std::io;
use std::path::PathBuf;

use chrono::{Local, Timelike};
use clap::{Parser, Subcommand};

use crate::error::FinboardResult;
use crate::session::Session;

pub use budget::{handle_budget_command, BudgetCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use shell::run_shell;
pub use suggestion::{handle_suggestion_command, SuggestionCommands};

#[derive(Parser, Debug)]
#[command(
    name = "finboard",
    version,
    about = "Personal finance dashboard for the terminal",
    long_about = "Finboard shows income, expenses and budgets at a glance, tracks \
                  spending by category and suggests categories for uncategorized \
                  payments."
)]
pub struct Cli {
    /// Directory holding config.json and the login state
    #[arg(long, global = true, env = "FINBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in
    Login,

    /// Log out
    Logout,

    /// Show whether you are logged in
    Status,

    /// Show the dashboard summary
    #[command(alias = "dash")]
    Dashboard,

    /// Expense commands
    #[command(subcommand, alias = "expenses")]
    Expense(ExpenseCommands),

    /// Budget commands
    #[command(subcommand, alias = "budgets")]
    Budget(BudgetCommands),

    /// Category suggestion commands
    #[command(subcommand, alias = "suggestions")]
    Suggestion(SuggestionCommands),

    /// Reports
    #[command(subcommand, alias = "reports")]
    Report(ReportCommands),

    /// Export records to CSV, JSON or YAML
    Export(ExportArgs),

    /// Settings for this session
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Show recent activity
    Activity {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Configuration file commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Start an interactive session
    Shell,
}

/// Run one command against the session
///
/// Everything except the auth commands and `config` fails with
/// `NotAuthenticated` while logged out; the session enforces that.
pub fn run_command(session: &mut Session, command: Commands) -> FinboardResult<()> {
    match command {
        Commands::Login => {
            if session.login()? {
                println!("Logged in. Run 'finboard dashboard' to get started.");
            } else {
                println!("Already logged in.");
            }
        }
        Commands::Logout => {
            if session.logout()? {
                println!("Logged out.");
            } else {
                println!("Not logged in.");
            }
        }
        Commands::Status => {
            if session.is_authenticated() {
                println!("Logged in");
            } else {
                println!("Logged out");
            }
        }
        Commands::Dashboard => {
            let summary = session.dashboard(Local::now().hour())?;
            print!("{}", summary.format_terminal(session.settings().currency));
        }
        Commands::Expense(cmd) => handle_expense_command(session, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(session, cmd)?,
        Commands::Suggestion(cmd) => handle_suggestion_command(session, cmd)?,
        Commands::Report(cmd) => handle_report_command(session, cmd)?,
        Commands::Export(args) => handle_export_command(session, args)?,
        Commands::Settings(cmd) => handle_settings_command(session, cmd)?,
        Commands::Activity { count } => handle_activity(session, count)?,
        Commands::Config(cmd) => handle_config_command(session.paths(), session.settings(), cmd)?,
        Commands::Shell => {
            let stdin = io::stdin();
            run_shell(session, stdin.lock())?;
        }
    }

    Ok(())
}

fn handle_activity(session: &Session, count: usize) -> FinboardResult<()> {
    let entries = session.audit()?.read_recent(count)?;

    if entries.is_empty() {
        println!("No activity recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_command_paths() {
        let cases: [&[&str]; 8] = [
            &["finboard", "login"],
            &["finboard", "dashboard"],
            &["finboard", "expense", "list", "--recent"],
            &["finboard", "budget", "overview"],
            &["finboard", "suggestion", "accept", "txn-00000001"],
            &["finboard", "report", "month", "--month", "2025-01", "--prev"],
            &["finboard", "export", "budgets", "--format", "json"],
            &["finboard", "settings", "toggle", "weekly-report"],
        ];
        for args in cases {
            assert!(parse(args).command.is_some(), "failed to parse {:?}", args);
        }
    }

    #[test]
    fn test_data_dir_is_global() {
        let cli = parse(&["finboard", "status", "--data-dir", "/tmp/finboard-test"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/finboard-test")));
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(Cli::try_parse_from(["finboard", "export", "payees"]).is_err());
        assert!(Cli::try_parse_from(["finboard", "settings", "toggle", "sms"]).is_err());
        assert!(
            Cli::try_parse_from(["finboard", "report", "month", "--prev", "--next"]).is_err()
        );
    }
}
