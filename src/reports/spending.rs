//! Spending Report
//!
//! Spending by category for a date range, with each category's share of the
//! total.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::display::format::format_share;
use crate::models::{Category, Currency, Money};
use crate::storage::RecordStore;

/// Spending in one category
#[derive(Debug, Clone, Serialize)]
pub struct SpendingByCategory {
    pub category: Category,
    pub total_spending: Money,
    pub transaction_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpendingReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Largest spending first
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_income: Money,
    /// Expenses counted in the report
    pub total_transactions: usize,
}

impl SpendingReport {
    /// Build the report over the inclusive range `start_date..=end_date`
    pub fn generate(records: &RecordStore, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let in_range = records
            .transactions()
            .iter()
            .filter(|t| t.date >= start_date && t.date <= end_date);

        let mut by_category: HashMap<Category, (Money, usize)> = HashMap::new();
        let mut total_spending = Money::zero();
        let mut total_income = Money::zero();
        let mut total_transactions = 0;

        for txn in in_range {
            if txn.is_income {
                total_income += txn.amount;
                continue;
            }
            let entry = by_category
                .entry(txn.category)
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
            total_spending += txn.amount;
            total_transactions += 1;
        }

        let mut categories: Vec<SpendingByCategory> = by_category
            .into_iter()
            .map(|(category, (total, count))| SpendingByCategory {
                category,
                total_spending: total,
                transaction_count: count,
                percentage: if total_spending.is_zero() {
                    0.0
                } else {
                    total.cents() as f64 / total_spending.cents() as f64 * 100.0
                },
            })
            .collect();

        categories.sort_by(|a, b| {
            b.total_spending
                .cmp(&a.total_spending)
                .then_with(|| a.category.label().cmp(b.category.label()))
        });

        Self {
            start_date,
            end_date,
            categories,
            total_spending,
            total_income,
            total_transactions,
        }
    }

    /// The `limit` categories with the most spending
    pub fn top_categories(&self, limit: usize) -> &[SpendingByCategory] {
        &self.categories[..limit.min(self.categories.len())]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: Currency) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Spending Report: {} to {}\n",
            self.start_date, self.end_date
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Spending: {}\n",
            self.total_spending.format_currency(currency)
        ));
        output.push_str(&format!(
            "Total Income:   {}\n\n",
            self.total_income.format_currency(currency)
        ));

        if self.categories.is_empty() {
            output.push_str("No spending in this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>14} {:>7} {:>8}\n",
            "Category", "Amount", "Count", "Share"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{} {:<17} {:>14} {:>7} {:>8}\n",
                row.category.icon(),
                row.category.label(),
                row.total_spending.format_currency(currency),
                row.transaction_count,
                format_share(row.total_spending, self.total_spending)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14} {:>7}\n",
            "TOTAL",
            self.total_spending.format_currency(currency),
            self.total_transactions
        ));

        output
    }
}
