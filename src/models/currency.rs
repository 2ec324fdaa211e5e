//! Display currencies
//!
//! The dashboard never converts between currencies; the currency only picks
//! the symbol placed in front of an amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinboardError;

/// A currency the dashboard can display amounts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Inr,
}

impl Currency {
    /// All supported currencies, in settings-menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::Usd,
            Self::Eur,
            Self::Gbp,
            Self::Jpy,
            Self::Cad,
            Self::Inr,
        ]
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
            Self::Inr => "INR",
        }
    }

    /// Symbol as rendered by an en-US locale
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Cad => "CA$",
            Self::Inr => "₹",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
            Self::Gbp => "British Pound",
            Self::Jpy => "Japanese Yen",
            Self::Cad => "Canadian Dollar",
            Self::Inr => "Indian Rupee",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = FinboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| FinboardError::InvalidArgument(format!("Unknown currency: {}", s)))
    }
}
