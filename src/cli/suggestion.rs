//! Category suggestion CLI commands

use clap::Subcommand;

use crate::display::format_suggestion_table;
use crate::error::FinboardResult;
use crate::models::Category;
use crate::session::Session;

/// Suggestion subcommands
#[derive(Subcommand, Debug)]
pub enum SuggestionCommands {
    /// List transactions with a pending category suggestion
    #[command(alias = "ls")]
    List,

    /// Accept a suggestion, recategorizing the transaction
    Accept {
        /// Transaction ID (full or short, e.g. txn-1a2b3c4d)
        id: String,

        /// Category being accepted; must match the suggestion
        #[arg(short, long)]
        category: Option<Category>,
    },
}

/// Handle a suggestion command
pub fn handle_suggestion_command(
    session: &mut Session,
    cmd: SuggestionCommands,
) -> FinboardResult<()> {
    match cmd {
        SuggestionCommands::List => {
            let pending = session.suggestion_service()?.pending();
            print!("{}", format_suggestion_table(&pending));
            if !pending.is_empty() {
                println!("Run 'finboard suggestion accept <id>' to apply one.");
            }
        }

        SuggestionCommands::Accept { id, category } => {
            let txn = session.records()?.find(&id)?;
            let (txn_id, description) = (txn.id, txn.description.clone());

            let mut service = session.suggestion_service()?;
            let accepted = match category {
                Some(category) => service.accept(txn_id, category)?,
                None => service.accept_suggested(txn_id)?,
            };

            println!(
                "Category updated: {} is now {} {}",
                description,
                accepted.icon(),
                accepted
            );
        }
    }

    Ok(())
}
