//! Expense service
//!
//! Adding and listing expenses on top of the record store, with every new
//! expense written to the activity log.

use chrono::{Duration, NaiveDate};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::FinboardResult;
use crate::models::{Category, ExpenseDraft, Transaction};
use crate::storage::RecordStore;

/// Service for expense entry and listing
pub struct ExpenseService<'a> {
    records: &'a mut RecordStore,
    audit: &'a mut AuditLogger,
}

/// Options for filtering the expense list
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub category: Option<Category>,
    /// Inclusive date range
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// The seven days ending on `as_of`
    pub fn recent(self, as_of: NaiveDate) -> Self {
        self.date_range(as_of - Duration::days(6), as_of)
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        self.category.map_or(true, |c| txn.category == c)
            && self.start_date.map_or(true, |d| txn.date >= d)
            && self.end_date.map_or(true, |d| txn.date <= d)
    }
}

impl<'a> ExpenseService<'a> {
    pub fn new(records: &'a mut RecordStore, audit: &'a mut AuditLogger) -> Self {
        Self { records, audit }
    }

    /// Validate and record a new expense, dated `today` unless the draft
    /// carries a date
    ///
    /// The expense is stored only once its creation has been logged.
    pub fn add(&mut self, draft: ExpenseDraft, today: NaiveDate) -> FinboardResult<Transaction> {
        let txn = self.records.prepare_expense(draft, today)?;

        self.audit.log(AuditEntry::create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        ))?;

        Ok(self.records.insert_expense(txn).clone())
    }

    /// Expenses matching the filter, most recent first
    pub fn list(&self, filter: &ExpenseFilter) -> Vec<Transaction> {
        let matching = self.records.expenses().filter(|t| filter.matches(t));
        match filter.limit {
            Some(limit) => matching.take(limit).cloned().collect(),
            None => matching.cloned().collect(),
        }
    }
}
