//! Display formatting for terminal output
//!
//! Number formatting plus table rendering for transactions, suggestions
//! and budgets.

pub mod budget;
pub mod format;
pub mod transaction;

pub use budget::{format_budget_overview, format_budget_table, progress_bar};
pub use format::{format_currency, format_percentage, format_share};
pub use transaction::{
    format_suggestion_table, format_transaction_details, format_transaction_table,
};
