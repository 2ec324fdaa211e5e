//! Aggregation engine
//!
//! Derives totals and usage percentages from budget records. Everything here
//! is computed on demand from the records; nothing is cached, so a value
//! handed out earlier is a snapshot that later mutations never touch.

use serde::Serialize;

use crate::error::{FinboardError, FinboardResult};
use crate::models::{Budget, Money};

/// Percentage of `allocated` consumed by `spent`, rounded half-up and
/// clamped to 100
///
/// Overspending is not visible here; check the sign of the remaining amount
/// instead. A zero or negative allocation, or negative spending, is a
/// domain error.
pub fn percentage_used(spent: Money, allocated: Money) -> FinboardResult<u8> {
    if allocated.is_zero() {
        return Err(FinboardError::Domain(
            "cannot compute usage of a zero allocation".into(),
        ));
    }
    if allocated.is_negative() || spent.is_negative() {
        return Err(FinboardError::Domain(format!(
            "usage is undefined for spent {} of allocated {}",
            spent, allocated
        )));
    }

    let spent = i128::from(spent.cents());
    let allocated = i128::from(allocated.cents());

    // floor(spent / allocated * 100 + 0.5) without floating point
    let rounded = (spent * 200 + allocated) / (allocated * 2);
    Ok(rounded.min(100) as u8)
}

/// Totals across a set of budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetTotals {
    pub total_allocated: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
    pub budget_count: usize,
}

impl BudgetTotals {
    /// Sum allocated, spent and remaining over the budgets
    pub fn from_budgets(budgets: &[Budget]) -> Self {
        Self {
            total_allocated: budgets.iter().map(Budget::allocated).sum(),
            total_spent: budgets.iter().map(Budget::spent).sum(),
            total_remaining: budgets.iter().map(Budget::remaining).sum(),
            budget_count: budgets.len(),
        }
    }

    /// Usage across all budgets; a domain error when there are no budgets
    pub fn percentage_used(&self) -> FinboardResult<u8> {
        percentage_used(self.total_spent, self.total_allocated)
    }

    pub fn is_overspent(&self) -> bool {
        self.total_remaining.is_negative()
    }
}
