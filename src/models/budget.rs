//! Budget model
//!
//! A budget caps spending in one category. `remaining` is always derived
//! from `allocated - spent`; a negative remaining amount means the category
//! is overspent, which is a normal state rather than an error.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::BudgetId;
use super::money::Money;
use crate::error::FinboardResult;
use crate::services::aggregation::percentage_used;

/// A spending limit for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BudgetRecord")]
pub struct Budget {
    id: BudgetId,
    category: Category,
    allocated: Money,
    spent: Money,
}

/// Unchecked wire form used to validate budgets on deserialization
#[derive(Deserialize)]
struct BudgetRecord {
    id: BudgetId,
    category: Category,
    allocated: Money,
    spent: Money,
}

impl TryFrom<BudgetRecord> for Budget {
    type Error = BudgetValidationError;

    fn try_from(raw: BudgetRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.category, raw.allocated, raw.spent)?.with_id(raw.id))
    }
}

/// How close a budget is to its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetSeverity {
    OnTrack,
    Warning,
    Overspent,
}

impl fmt::Display for BudgetSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "On track"),
            Self::Warning => write!(f, "Warning"),
            Self::Overspent => write!(f, "Overspent"),
        }
    }
}

impl Budget {
    /// Create a budget; `allocated` must be positive and `spent` non-negative
    pub fn new(
        category: Category,
        allocated: Money,
        spent: Money,
    ) -> Result<Self, BudgetValidationError> {
        if !allocated.is_positive() {
            return Err(BudgetValidationError::NonPositiveAllocation);
        }
        if spent.is_negative() {
            return Err(BudgetValidationError::NegativeSpent);
        }

        Ok(Self {
            id: BudgetId::new(),
            category,
            allocated,
            spent,
        })
    }

    /// Use a fixed ID (seed data)
    pub fn with_id(mut self, id: BudgetId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> BudgetId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn allocated(&self) -> Money {
        self.allocated
    }

    pub fn spent(&self) -> Money {
        self.spent
    }

    /// Amount left to spend; negative when overspent
    pub fn remaining(&self) -> Money {
        self.allocated - self.spent
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining().is_negative()
    }

    /// Percentage of the allocation used, clamped to 100
    pub fn percentage_used(&self) -> FinboardResult<u8> {
        percentage_used(self.spent, self.allocated)
    }

    /// Severity given the warning threshold (percent of allocation)
    ///
    /// Uses the unclamped ratio: anything above 100% is overspent, anything
    /// above the threshold is a warning.
    pub fn severity(&self, warning_threshold: u8) -> BudgetSeverity {
        let spent = i128::from(self.spent.cents()) * 100;
        let allocated = i128::from(self.allocated.cents());

        if spent > allocated * 100 {
            BudgetSeverity::Overspent
        } else if spent > allocated * i128::from(warning_threshold) {
            BudgetSeverity::Warning
        } else {
            BudgetSeverity::OnTrack
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} of {}",
            self.category.icon(),
            self.category,
            self.spent,
            self.allocated
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAllocation,
    NegativeSpent,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAllocation => write!(f, "Allocated amount must be greater than zero"),
            Self::NegativeSpent => write!(f, "Spent amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(allocated: i64, spent: i64) -> Budget {
        Budget::new(
            Category::Food,
            Money::from_dollars_cents(allocated, 0),
            Money::from_dollars_cents(spent, 0),
        )
        .unwrap()
    }

    #[test]
    fn test_remaining_is_derived() {
        let b = budget(500, 320);
        assert_eq!(b.remaining(), b.allocated() - b.spent());
        assert_eq!(b.remaining(), Money::from_dollars_cents(180, 0));
        assert!(!b.is_overspent());
    }

    #[test]
    fn test_overspent_budget() {
        let b = budget(200, 210);
        assert_eq!(b.remaining(), Money::from_dollars_cents(-10, 0));
        assert!(b.is_overspent());
        assert_eq!(b.percentage_used().unwrap(), 100);
        assert_eq!(b.severity(75), BudgetSeverity::Overspent);
    }

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(budget(300, 250).severity(75), BudgetSeverity::Warning);
        assert_eq!(budget(400, 150).severity(75), BudgetSeverity::OnTrack);
        // Exactly at the threshold is still on track
        assert_eq!(budget(100, 75).severity(75), BudgetSeverity::OnTrack);
        // Exactly at the limit is a warning, not overspent
        assert_eq!(budget(100, 100).severity(75), BudgetSeverity::Warning);
    }

    #[test]
    fn test_rejects_invalid_amounts() {
        assert_eq!(
            Budget::new(Category::Food, Money::zero(), Money::zero()),
            Err(BudgetValidationError::NonPositiveAllocation)
        );
        assert_eq!(
            Budget::new(Category::Food, Money::from_cents(100), Money::from_cents(-1)),
            Err(BudgetValidationError::NegativeSpent)
        );
    }

    #[test]
    fn test_deserialization_enforces_invariants() {
        let b = budget(500, 320);
        let json = serde_json::to_string(&b).unwrap();
        let back: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);

        let zero = json.replace("\"allocated\":50000", "\"allocated\":0");
        assert!(serde_json::from_str::<Budget>(&zero).is_err());
    }
}
