//! Payment methods

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinboardError;

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Cash,
    BankTransfer,
    MobilePayment,
    AutomaticPayment,
    Check,
    Other,
}

impl PaymentMethod {
    /// All payment methods in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::CreditCard,
            Self::DebitCard,
            Self::Cash,
            Self::BankTransfer,
            Self::MobilePayment,
            Self::AutomaticPayment,
            Self::Check,
            Self::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::Cash => "Cash",
            Self::BankTransfer => "Bank Transfer",
            Self::MobilePayment => "Mobile Payment",
            Self::AutomaticPayment => "Automatic Payment",
            Self::Check => "Check",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = FinboardError;

    /// Accepts the label ("Credit Card") or a dashed/underscored slug ("credit-card")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        Self::all()
            .iter()
            .copied()
            .find(|m| {
                m.label()
                    .chars()
                    .filter(|c| *c != ' ')
                    .collect::<String>()
                    .eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| {
                FinboardError::InvalidArgument(format!("Unknown payment method: {}", s))
            })
    }
}
