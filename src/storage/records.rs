//! In-memory record store
//!
//! Holds the ledger (most recent first) and the budgets for one session.
//! Nothing here is written to disk; a new session starts from the seed data.

use chrono::NaiveDate;

use crate::error::{FinboardError, FinboardResult};
use crate::models::{Budget, BudgetId, Category, ExpenseDraft, Transaction, TransactionId};

use super::seed::{seed_budgets, seed_transactions};

/// Session-scoped collection of transactions and budgets
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Most recent first; new expenses are prepended
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
}

impl RecordStore {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the given records as-is
    pub fn with_records(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    /// A store loaded with the seed ledger and budgets
    pub fn seeded() -> FinboardResult<Self> {
        Ok(Self::with_records(seed_transactions()?, seed_budgets()?))
    }

    /// Validate a draft and prepend the resulting expense
    ///
    /// On failure the store is left untouched.
    pub fn add_expense(&mut self, draft: ExpenseDraft, today: NaiveDate) -> FinboardResult<&Transaction> {
        let txn = self.prepare_expense(draft, today)?;
        Ok(self.insert_expense(txn))
    }

    /// Validate a draft into an expense whose ID is not yet in the store,
    /// without storing it
    pub fn prepare_expense(&self, draft: ExpenseDraft, today: NaiveDate) -> FinboardResult<Transaction> {
        let mut txn = draft.finalize(today)?;

        while self.get(txn.id).is_some() {
            txn.id = TransactionId::new();
        }

        Ok(txn)
    }

    /// Prepend an expense returned by [`RecordStore::prepare_expense`]
    pub fn insert_expense(&mut self, txn: Transaction) -> &Transaction {
        self.transactions.insert(0, txn);
        &self.transactions[0]
    }

    /// Every transaction, most recent first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Expenses only, most recent first
    pub fn expenses(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|t| !t.is_income)
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Look up a transaction by full UUID or by its short form (`txn-1a2b3c4d`
    /// or `1a2b3c4d`)
    pub fn find(&self, identifier: &str) -> FinboardResult<&Transaction> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self
                .get(id)
                .ok_or_else(|| FinboardError::transaction_not_found(identifier));
        }

        let mut matches = self
            .transactions
            .iter()
            .filter(|t| t.id.matches_prefix(identifier));

        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn),
            (Some(_), Some(_)) => Err(FinboardError::InvalidArgument(format!(
                "'{}' matches more than one transaction",
                identifier
            ))),
            _ => Err(FinboardError::transaction_not_found(identifier)),
        }
    }

    pub fn get_budget(&self, id: BudgetId) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id() == id)
    }

    /// Look up a budget by ID or by category name
    pub fn find_budget(&self, identifier: &str) -> FinboardResult<&Budget> {
        if let Ok(id) = identifier.parse::<BudgetId>() {
            if let Some(budget) = self.get_budget(id) {
                return Ok(budget);
            }
        }

        if let Some(budget) = self.budgets.iter().find(|b| b.id().matches_prefix(identifier)) {
            return Ok(budget);
        }

        identifier
            .parse::<Category>()
            .ok()
            .and_then(|category| self.budgets.iter().find(|b| b.category() == category))
            .ok_or_else(|| FinboardError::budget_not_found(identifier))
    }

    /// Replace the effective category of a transaction, returning the record
    /// as it was before the change
    pub fn set_category(&mut self, id: TransactionId, category: Category) -> FinboardResult<Transaction> {
        let txn = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| FinboardError::transaction_not_found(id.to_string()))?;

        let before = txn.clone();
        txn.category = category;
        Ok(before)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
