//! Transaction model
//!
//! A transaction is either an expense or an income entry. Amounts are always
//! stored as non-negative values; `is_income` carries the direction.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::currency::Currency;
use super::ids::TransactionId;
use super::money::Money;
use super::payment::PaymentMethod;
use super::suggestion::CategorySuggestion;
use crate::error::{FinboardError, FinboardResult};

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// What the money was for
    pub description: String,

    /// Effective category
    pub category: Category,

    /// Amount, never negative
    pub amount: Money,

    /// Whether this is money coming in
    #[serde(default)]
    pub is_income: bool,

    /// How it was paid
    pub payment_method: PaymentMethod,

    /// Payment identifier such as a UPI handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_ref: Option<String>,

    /// Category proposed for this transaction, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_category: Option<CategorySuggestion>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new expense
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: Category,
        amount: Money,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            description: description.into(),
            category,
            amount,
            is_income: false,
            payment_method,
            payment_ref: None,
            suggested_category: None,
            created_at: Utc::now(),
        }
    }

    /// Mark this transaction as income
    pub fn as_income(mut self) -> Self {
        self.is_income = true;
        self
    }

    /// Attach a payment identifier
    pub fn with_payment_ref(mut self, payment_ref: impl Into<String>) -> Self {
        self.payment_ref = Some(payment_ref.into());
        self
    }

    /// Attach a category suggestion
    pub fn with_suggestion(mut self, suggestion: CategorySuggestion) -> Self {
        self.suggested_category = Some(suggestion);
        self
    }

    /// Use a fixed ID (seed data)
    pub fn with_id(mut self, id: TransactionId) -> Self {
        self.id = id;
        self
    }

    /// Amount signed by direction: positive for income, negative for expenses
    pub fn signed_amount(&self) -> Money {
        if self.is_income {
            self.amount
        } else {
            -self.amount
        }
    }

    /// Amount with an explicit direction sign, e.g. "+$2,500.00" or "-$64.75"
    pub fn format_signed(&self, currency: Currency) -> String {
        let sign = if self.is_income { "+" } else { "-" };
        format!("{}{}", sign, self.amount.format_currency(currency))
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount);
        }

        if self.amount > Money::MAX_AMOUNT {
            return Err(TransactionValidationError::AmountTooLarge);
        }

        if self.is_income != self.category.is_income() {
            return Err(TransactionValidationError::IncomeCategoryMismatch);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.format_signed(Currency::Usd)
        )
    }
}

/// User input for a new expense, as collected by the add-expense form
///
/// Every required field is optional here so that validation can report all
/// missing fields at once.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub payment_method: Option<PaymentMethod>,
    /// Defaults to the submission date when absent
    pub date: Option<NaiveDate>,
    pub payment_ref: Option<String>,
}

impl ExpenseDraft {
    /// Required fields that are empty, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.amount.is_none() {
            missing.push("amount");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if self.payment_method.is_none() {
            missing.push("payment method");
        }
        missing
    }

    /// Turn the draft into a transaction dated `today` unless a date was given
    pub fn finalize(self, today: NaiveDate) -> FinboardResult<Transaction> {
        let missing = self.missing_fields();
        let (amount, category, payment_method) =
            match (self.amount, self.category, self.payment_method) {
                (Some(amount), Some(category), Some(payment_method)) if missing.is_empty() => {
                    (amount, category, payment_method)
                }
                _ => return Err(FinboardError::missing_fields(missing)),
            };

        if category.is_income() {
            return Err(FinboardError::Validation(
                "Expenses cannot use the Income category".into(),
            ));
        }

        let mut txn = Transaction::new(
            self.date.unwrap_or(today),
            self.description.trim(),
            category,
            amount,
            payment_method,
        );

        if let Some(payment_ref) = self.payment_ref {
            let payment_ref = payment_ref.trim();
            if !payment_ref.is_empty() {
                txn.payment_ref = Some(payment_ref.to_string());
            }
        }

        txn.validate()
            .map_err(|e| FinboardError::Validation(e.to_string()))?;

        Ok(txn)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NegativeAmount,
    AmountTooLarge,
    IncomeCategoryMismatch,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NegativeAmount => write!(f, "Amount cannot be negative"),
            Self::AmountTooLarge => {
                write!(f, "Amount cannot exceed {}", Money::MAX_AMOUNT)
            }
            Self::IncomeCategoryMismatch => {
                write!(f, "Only income transactions may use the Income category")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
