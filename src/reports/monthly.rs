//! Monthly spending trend

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Currency, Money};
use crate::storage::RecordStore;

use super::period::ReportMonth;

/// Columns taken by the longest bar
const BAR_WIDTH: i128 = 30;

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTotal {
    pub month: ReportMonth,
    pub total_spending: Money,
    pub transaction_count: usize,
}

/// Spending per calendar month, oldest first
///
/// Months between the first and last month with spending are included with
/// a zero total.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTrend {
    pub months: Vec<MonthlyTotal>,
    pub average_spending: Money,
}

impl MonthlyTrend {
    pub fn generate(records: &RecordStore) -> Self {
        let mut by_month: BTreeMap<ReportMonth, (Money, usize)> = BTreeMap::new();
        for txn in records.expenses() {
            let entry = by_month
                .entry(ReportMonth::of(txn.date))
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let mut months = Vec::new();
        if let (Some(&first), Some(&last)) = (by_month.keys().next(), by_month.keys().next_back()) {
            let mut month = first;
            while month <= last {
                let (total, count) = by_month.get(&month).copied().unwrap_or_default();
                months.push(MonthlyTotal {
                    month,
                    total_spending: total,
                    transaction_count: count,
                });
                month = month.next();
            }
        }

        let average_spending = average(months.iter().map(|m| m.total_spending));
        Self {
            months,
            average_spending,
        }
    }

    pub fn format_terminal(&self, currency: Currency) -> String {
        if self.months.is_empty() {
            return "No spending recorded.\n".to_string();
        }

        let max = self
            .months
            .iter()
            .map(|m| i128::from(m.total_spending.cents()))
            .max()
            .unwrap_or(0)
            .max(1);

        let mut output = String::from("Monthly Spending\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for m in &self.months {
            let width = (i128::from(m.total_spending.cents()) * BAR_WIDTH / max).max(0) as usize;
            output.push_str(&format!(
                "{:<15} {:>14}  {}\n",
                m.month.to_string(),
                m.total_spending.format_currency(currency),
                "█".repeat(width)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Average Monthly Spending: {}\n",
            self.average_spending.format_currency(currency)
        ));
        output
    }
}

/// Mean of the amounts rounded half-up to the cent; zero for no amounts
fn average(amounts: impl Iterator<Item = Money>) -> Money {
    let (sum, count) = amounts.fold((0i128, 0i128), |(sum, count), m| {
        (sum + i128::from(m.cents()), count + 1)
    });
    if count == 0 {
        return Money::zero();
    }
    let rounded = (sum * 2 + count).div_euclid(count * 2);
    Money::from_cents(rounded as i64)
}
