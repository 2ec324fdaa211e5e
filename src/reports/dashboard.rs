//! Dashboard summary
//!
//! Income, expenses, balance and budget figures for the landing page, plus
//! the most recent transactions and any pending category suggestions.

use serde::Serialize;

use crate::display::format::format_percentage;
use crate::error::FinboardResult;
use crate::models::{Currency, Money, Transaction, TransactionId};
use crate::services::{BudgetTotals, SuggestionTracker};
use crate::storage::RecordStore;

/// Greeting for the hour of day (0-23)
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning",
        12..=17 => "Good Afternoon",
        _ => "Good Evening",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentTransaction {
    pub transaction: Transaction,
    pub suggestion_pending: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub greeting: &'static str,
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses
    pub balance: Money,
    pub budget: BudgetTotals,
    pub recent: Vec<RecentTransaction>,
    pub pending_suggestions: Vec<TransactionId>,
    /// Observation about the most overspent budget, if any
    pub insight: Option<String>,
}

impl DashboardSummary {
    pub fn generate(
        records: &RecordStore,
        tracker: &SuggestionTracker,
        hour: u32,
        recent_count: usize,
    ) -> FinboardResult<Self> {
        let (total_income, total_expenses) =
            records
                .transactions()
                .iter()
                .fold((Money::zero(), Money::zero()), |(income, expenses), t| {
                    if t.is_income {
                        (income + t.amount, expenses)
                    } else {
                        (income, expenses + t.amount)
                    }
                });

        let recent = records
            .transactions()
            .iter()
            .take(recent_count)
            .map(|t| RecentTransaction {
                transaction: t.clone(),
                suggestion_pending: tracker.has_pending_suggestion(t),
            })
            .collect();

        let pending_suggestions = records
            .transactions()
            .iter()
            .filter(|t| tracker.has_pending_suggestion(t))
            .map(|t| t.id)
            .collect();

        Ok(Self {
            greeting: greeting_for_hour(hour),
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            budget: BudgetTotals::from_budgets(records.budgets()),
            recent,
            pending_suggestions,
            insight: overspending_insight(records)?,
        })
    }

    pub fn format_terminal(&self, currency: Currency) -> String {
        let mut output = format!("{}!\n\n", self.greeting);

        let stats = [
            ("Balance", self.balance),
            ("Total Income", self.total_income),
            ("Total Expenses", self.total_expenses),
            ("Budget Remaining", self.budget.total_remaining),
        ];
        for (label, amount) in stats {
            output.push_str(&format!(
                "{:<18} {:>14}\n",
                label,
                amount.format_currency(currency)
            ));
        }

        if let Some(insight) = &self.insight {
            output.push_str(&format!("\nInsight: {}\n", insight));
        }

        output.push_str("\nRecent Transactions\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for row in &self.recent {
            let txn = &row.transaction;
            let marker = if row.suggestion_pending { " *" } else { "" };
            output.push_str(&format!(
                "{} {:<22} {:<15} {:>14}{}\n",
                txn.date.format("%Y-%m-%d"),
                txn.description,
                txn.category.label(),
                txn.format_signed(currency),
                marker
            ));
        }

        if !self.pending_suggestions.is_empty() {
            output.push_str(&format!(
                "\n* {} category suggestion(s) pending. Run 'finboard suggestion list'.\n",
                self.pending_suggestions.len()
            ));
        }

        output
    }
}

/// Describe the budget furthest over its allocation
fn overspending_insight(records: &RecordStore) -> FinboardResult<Option<String>> {
    let worst = records
        .budgets()
        .iter()
        .filter(|b| b.is_overspent())
        .max_by(|a, b| {
            // Compare overspend ratios without floats: a_over/a_alloc vs b_over/b_alloc
            let lhs = i128::from(-a.remaining().cents()) * i128::from(b.allocated().cents());
            let rhs = i128::from(-b.remaining().cents()) * i128::from(a.allocated().cents());
            lhs.cmp(&rhs)
        });

    let Some(budget) = worst else {
        return Ok(None);
    };

    let over = budget.remaining().abs();
    let ratio = over.as_major() / budget.allocated().as_major();
    Ok(Some(format!(
        "You're overspending on {} by {} ({} over budget).",
        budget.category().label(),
        format_percentage(ratio)?,
        over
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::services::SuggestionService;
    use crate::storage::seed::seed_transaction_id;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good Morning");
        assert_eq!(greeting_for_hour(11), "Good Morning");
        assert_eq!(greeting_for_hour(12), "Good Afternoon");
        assert_eq!(greeting_for_hour(17), "Good Afternoon");
        assert_eq!(greeting_for_hour(18), "Good Evening");
        assert_eq!(greeting_for_hour(23), "Good Evening");
    }

    #[test]
    fn test_seed_summary() {
        let records = RecordStore::seeded().unwrap();
        let tracker = SuggestionTracker::new();
        let summary = DashboardSummary::generate(&records, &tracker, 9, 5).unwrap();

        assert_eq!(summary.total_income, Money::from_cents(500_000));
        assert_eq!(summary.total_expenses, Money::from_cents(296_940));
        assert_eq!(summary.balance, Money::from_cents(203_060));
        assert_eq!(summary.budget.total_remaining, Money::from_cents(49_000));
        assert_eq!(summary.recent.len(), 5);
        assert!(summary.recent[0].suggestion_pending);
        assert!(!summary.recent[1].suggestion_pending);
        assert_eq!(summary.pending_suggestions.len(), 3);
        assert_eq!(
            summary.insight.as_deref(),
            Some("You're overspending on Entertainment by 5% ($10.00 over budget).")
        );
    }

    #[test]
    fn test_accepted_suggestion_is_no_longer_pending() {
        let mut records = RecordStore::seeded().unwrap();
        let mut tracker = SuggestionTracker::new();
        let mut audit = AuditLogger::in_memory();
        SuggestionService::new(&mut records, &mut tracker, &mut audit)
            .accept_suggested(seed_transaction_id(1))
            .unwrap();

        let summary = DashboardSummary::generate(&records, &tracker, 20, 3).unwrap();
        assert!(!summary.recent[0].suggestion_pending);
        assert_eq!(summary.pending_suggestions.len(), 2);
        assert_eq!(summary.greeting, "Good Evening");
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_overflowing() {
        use crate::models::{Category, PaymentMethod};
        use crate::reports::{MonthlyTrend, SpendingReport};
        use chrono::NaiveDate;

        let day = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let huge = Money::from_cents(i64::MAX);
        let transactions = vec![
            Transaction::new(day, "Yacht", Category::Travel, huge, PaymentMethod::BankTransfer),
            Transaction::new(day, "Island", Category::Travel, huge, PaymentMethod::BankTransfer),
        ];
        let records = RecordStore::with_records(transactions, Vec::new());

        let summary =
            DashboardSummary::generate(&records, &SuggestionTracker::new(), 9, 5).unwrap();
        assert_eq!(summary.total_expenses, huge);
        assert_eq!(summary.balance, -huge);

        let report = SpendingReport::generate(&records, day, day);
        assert_eq!(report.total_spending, huge);

        let trend = MonthlyTrend::generate(&records);
        assert!(trend.format_terminal(Currency::Usd).contains(&"█".repeat(30)));
    }

    #[test]
    fn test_terminal_format() {
        let records = RecordStore::seeded().unwrap();
        let summary =
            DashboardSummary::generate(&records, &SuggestionTracker::new(), 14, 3).unwrap();
        let output = summary.format_terminal(Currency::Usd);

        assert!(output.starts_with("Good Afternoon!"));
        assert!(output.contains("+$2,500.00"));
        assert!(output.contains("-$64.75"));
        assert!(output.contains("3 category suggestion(s) pending"));
    }
}
