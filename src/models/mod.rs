//! Core data models for Finboard
//!
//! This module contains the data structures of the dashboard domain:
//! transactions, budgets, categories, money and category suggestions.

pub mod budget;
pub mod category;
pub mod currency;
pub mod ids;
pub mod money;
pub mod payment;
pub mod suggestion;
pub mod transaction;

pub use budget::{Budget, BudgetSeverity, BudgetValidationError};
pub use category::Category;
pub use currency::Currency;
pub use ids::{BudgetId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use payment::PaymentMethod;
pub use suggestion::{CategorySuggestion, Confidence, SuggestionState};
pub use transaction::{ExpenseDraft, Transaction};
