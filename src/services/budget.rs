//! Budget service
//!
//! Read-only views over the session's budgets: per-budget rows with usage
//! and severity, totals, and the overspent subset.

use serde::Serialize;

use crate::error::FinboardResult;
use crate::models::{Budget, BudgetSeverity, Category, Money};
use crate::storage::RecordStore;

use super::aggregation::BudgetTotals;

/// One budget with its derived figures
#[derive(Debug, Clone, Serialize)]
pub struct BudgetSummary {
    pub budget: Budget,
    pub category: Category,
    pub remaining: Money,
    pub percentage_used: u8,
    pub severity: BudgetSeverity,
}

/// Everything the budget page shows
#[derive(Debug, Clone, Serialize)]
pub struct BudgetOverview {
    pub budgets: Vec<BudgetSummary>,
    pub totals: BudgetTotals,
    /// `None` when there are no budgets
    pub total_percentage_used: Option<u8>,
}

pub struct BudgetService<'a> {
    records: &'a RecordStore,
    warning_threshold: u8,
}

impl<'a> BudgetService<'a> {
    pub fn new(records: &'a RecordStore, warning_threshold: u8) -> Self {
        Self {
            records,
            warning_threshold,
        }
    }

    pub fn summarize(&self, budget: &Budget) -> FinboardResult<BudgetSummary> {
        Ok(BudgetSummary {
            budget: budget.clone(),
            category: budget.category(),
            remaining: budget.remaining(),
            percentage_used: budget.percentage_used()?,
            severity: budget.severity(self.warning_threshold),
        })
    }

    /// Every budget in display order
    pub fn summaries(&self) -> FinboardResult<Vec<BudgetSummary>> {
        self.records
            .budgets()
            .iter()
            .map(|b| self.summarize(b))
            .collect()
    }

    pub fn totals(&self) -> BudgetTotals {
        BudgetTotals::from_budgets(self.records.budgets())
    }

    pub fn overview(&self) -> FinboardResult<BudgetOverview> {
        let totals = self.totals();
        let total_percentage_used = if totals.budget_count == 0 {
            None
        } else {
            Some(totals.percentage_used()?)
        };

        Ok(BudgetOverview {
            budgets: self.summaries()?,
            totals,
            total_percentage_used,
        })
    }

    /// Budgets whose spending exceeds the allocation
    pub fn overspent(&self) -> FinboardResult<Vec<BudgetSummary>> {
        Ok(self
            .summaries()?
            .into_iter()
            .filter(|s| s.remaining.is_negative())
            .collect())
    }

    /// Budgets above the warning threshold but not yet overspent
    pub fn warnings(&self) -> FinboardResult<Vec<BudgetSummary>> {
        Ok(self
            .summaries()?
            .into_iter()
            .filter(|s| s.severity == BudgetSeverity::Warning)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_overview() {
        let records = RecordStore::seeded().unwrap();
        let service = BudgetService::new(&records, 75);
        let overview = service.overview().unwrap();

        assert_eq!(overview.budgets.len(), 5);
        assert_eq!(overview.totals.total_allocated, Money::from_dollars_cents(1650, 0));
        assert_eq!(overview.totals.total_spent, Money::from_dollars_cents(1160, 0));
        assert_eq!(overview.totals.total_remaining, Money::from_dollars_cents(490, 0));
        assert_eq!(overview.total_percentage_used, Some(70));

        let food = &overview.budgets[0];
        assert_eq!(food.percentage_used, 64);
        assert_eq!(food.severity, BudgetSeverity::OnTrack);
    }

    #[test]
    fn test_overspent_and_warnings() {
        let records = RecordStore::seeded().unwrap();
        let service = BudgetService::new(&records, 75);

        let overspent = service.overspent().unwrap();
        assert_eq!(overspent.len(), 1);
        assert_eq!(overspent[0].category, Category::Entertainment);
        assert_eq!(overspent[0].remaining, Money::from_dollars_cents(-10, 0));
        assert_eq!(overspent[0].percentage_used, 100);

        // Transportation 250/300 and Utilities 230/250
        let warnings = service.warnings().unwrap();
        let categories: Vec<_> = warnings.iter().map(|s| s.category).collect();
        assert_eq!(categories, vec![Category::Transportation, Category::Utilities]);
    }

    #[test]
    fn test_threshold_changes_severity() {
        let records = RecordStore::seeded().unwrap();
        let strict = BudgetService::new(&records, 50);
        assert_eq!(strict.warnings().unwrap().len(), 3);
    }

    #[test]
    fn test_empty_overview() {
        let records = RecordStore::new();
        let overview = BudgetService::new(&records, 75).overview().unwrap();
        assert!(overview.budgets.is_empty());
        assert_eq!(overview.total_percentage_used, None);
    }
}
