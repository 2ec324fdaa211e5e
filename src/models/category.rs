//! Spending categories
//!
//! The category set is closed: every label, icon and menu position is an
//! exhaustive `match`, so adding a category is a compile error until each
//! mapping handles it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinboardError;

/// A transaction or budget category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Housing,
    Transportation,
    Entertainment,
    Utilities,
    Healthcare,
    Education,
    Shopping,
    Dining,
    Travel,
    Insurance,
    Subscriptions,
    Income,
    Other,
}

impl Category {
    /// All categories in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Housing,
            Self::Transportation,
            Self::Entertainment,
            Self::Utilities,
            Self::Healthcare,
            Self::Education,
            Self::Shopping,
            Self::Dining,
            Self::Travel,
            Self::Insurance,
            Self::Subscriptions,
            Self::Income,
            Self::Other,
        ]
    }

    /// Categories an expense may be filed under (everything but Income)
    pub fn expense_categories() -> impl Iterator<Item = Self> {
        Self::all().iter().copied().filter(|c| !c.is_income())
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Shopping => "Shopping",
            Self::Dining => "Dining",
            Self::Travel => "Travel",
            Self::Insurance => "Insurance",
            Self::Subscriptions => "Subscriptions",
            Self::Income => "Income",
            Self::Other => "Other",
        }
    }

    /// Icon shown next to the label
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Housing => "🏠",
            Self::Transportation => "🚗",
            Self::Entertainment => "🎬",
            Self::Utilities => "💡",
            Self::Healthcare => "🩺",
            Self::Education => "🎓",
            Self::Shopping => "🛍️",
            Self::Dining => "🍽️",
            Self::Travel => "✈️",
            Self::Insurance => "🛡️",
            Self::Subscriptions => "🔁",
            Self::Income => "💰",
            Self::Other => "📦",
        }
    }

    /// Check if this is the income category
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = FinboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| FinboardError::InvalidArgument(format!("Unknown category: {}", s)))
    }
}
