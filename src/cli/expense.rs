//! Expense CLI commands
//!
//! Listing, filtering and adding expenses.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Category, ExpenseDraft, Money, PaymentMethod};
use crate::services::ExpenseFilter;
use crate::session::Session;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List transactions, most recent first
    #[command(alias = "ls")]
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<Category>,

        /// Only show the seven days ending at --as-of
        #[arg(short, long)]
        recent: bool,

        /// Reference date for --recent (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one transaction
    Show {
        /// Transaction ID (full or short, e.g. txn-1a2b3c4d)
        id: String,
    },

    /// Add a new expense
    Add {
        /// What the money was spent on
        description: Option<String>,

        /// Amount, e.g. "12.50"
        amount: Option<String>,

        /// Category name
        #[arg(short, long)]
        category: Option<Category>,

        /// Payment method, e.g. "credit-card" or "Mobile Payment"
        #[arg(short, long)]
        payment: Option<PaymentMethod>,

        /// Transaction date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Payment reference, e.g. "grocer@upi"
        #[arg(long)]
        payment_ref: Option<String>,
    },
}

/// Fill in the draft's amount from the command line text
///
/// A blank amount counts as missing. An amount that does not parse is
/// reported only once no other required field is missing.
fn build_draft(mut draft: ExpenseDraft, amount: Option<&str>) -> FinboardResult<ExpenseDraft> {
    let Some(text) = amount.map(str::trim).filter(|a| !a.is_empty()) else {
        return Ok(draft);
    };

    match Money::parse(text) {
        Ok(amount) => {
            draft.amount = Some(amount);
            Ok(draft)
        }
        Err(e) => {
            let missing: Vec<_> = draft
                .missing_fields()
                .into_iter()
                .filter(|field| *field != "amount")
                .collect();
            if missing.is_empty() {
                Err(FinboardError::Validation(e.to_string()))
            } else {
                Err(FinboardError::missing_fields(missing))
            }
        }
    }
}

/// Handle an expense command
pub fn handle_expense_command(session: &mut Session, cmd: ExpenseCommands) -> FinboardResult<()> {
    let today = Local::now().date_naive();

    match cmd {
        ExpenseCommands::List {
            category,
            recent,
            as_of,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if recent {
                filter = filter.recent(as_of.unwrap_or(today));
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let transactions = session.expense_service()?.list(&filter);
            let tracker = session.tracker()?;
            let settings = session.settings();
            print!(
                "{}",
                format_transaction_table(
                    &transactions,
                    tracker,
                    settings.currency,
                    &settings.date_format,
                )
            );
            if transactions.iter().any(|t| tracker.has_pending_suggestion(t)) {
                println!("* category suggestion pending. Run 'finboard suggestion list'.");
            }
        }

        ExpenseCommands::Show { id } => {
            let txn = session.records()?.find(&id)?;
            print!(
                "{}",
                format_transaction_details(txn, session.tracker()?, session.settings().currency)
            );
        }

        ExpenseCommands::Add {
            description,
            amount,
            category,
            payment,
            date,
            payment_ref,
        } => {
            session.require_auth()?;
            let draft = build_draft(
                ExpenseDraft {
                    description: description.unwrap_or_default(),
                    amount: None,
                    category,
                    payment_method: payment,
                    date,
                    payment_ref,
                },
                amount.as_deref(),
            )?;

            let txn = session.expense_service()?.add(draft, today)?;
            println!("Expense added successfully!");
            println!(
                "  {} {} {} {}",
                txn.id,
                txn.date.format("%Y-%m-%d"),
                txn.description,
                txn.format_signed(session.settings().currency)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(description: &str) -> ExpenseDraft {
        ExpenseDraft {
            description: description.into(),
            category: Some(Category::Food),
            payment_method: Some(PaymentMethod::Cash),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_amount_is_missing() {
        let built = build_draft(ExpenseDraft::default(), Some("  ")).unwrap();
        assert!(built.amount.is_none());
        assert_eq!(
            built.missing_fields(),
            vec!["description", "amount", "category", "payment method"]
        );
    }

    #[test]
    fn test_bad_amount_reports_other_missing_fields_first() {
        let err = build_draft(draft(""), Some("twelve")).unwrap_err();
        assert!(matches!(&err, FinboardError::MissingFields(f) if f == &vec!["description"]));

        let err = build_draft(draft("Lunch"), Some("twelve")).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Invalid money format: twelve"));
    }

    #[test]
    fn test_amount_is_parsed() {
        let built = build_draft(draft("Lunch"), Some(" 12.50 ")).unwrap();
        assert_eq!(built.amount, Some(Money::from_cents(1250)));
        assert!(built.missing_fields().is_empty());
    }
}
