//! Service layer for Finboard
//!
//! Business logic on top of the record store: validation, derived figures,
//! suggestion acceptance and activity logging.

pub mod aggregation;
pub mod budget;
pub mod expense;
pub mod suggestion;

pub use aggregation::{percentage_used, BudgetTotals};
pub use budget::{BudgetOverview, BudgetService, BudgetSummary};
pub use expense::{ExpenseFilter, ExpenseService};
pub use suggestion::{PendingSuggestion, SuggestionService, SuggestionTracker};
