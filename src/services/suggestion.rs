//! Category suggestion service
//!
//! A transaction with a suggested category is pending until the user accepts
//! the suggestion. Accepting replaces the effective category with the
//! suggested one; there is no way back and no way to reject.

use std::collections::HashMap;

use serde_json::json;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Category, CategorySuggestion, SuggestionState, Transaction, TransactionId};
use crate::storage::RecordStore;

/// Per-transaction acceptance state for the session
#[derive(Debug, Clone, Default)]
pub struct SuggestionTracker {
    states: HashMap<TransactionId, SuggestionState>,
}

impl SuggestionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state_of(&self, txn: &Transaction) -> SuggestionState {
        match txn.suggested_category {
            None => SuggestionState::NoSuggestion,
            Some(_) => self
                .states
                .get(&txn.id)
                .copied()
                .unwrap_or(SuggestionState::Pending),
        }
    }

    /// True when the transaction carries a suggestion that has not been
    /// accepted
    pub fn has_pending_suggestion(&self, txn: &Transaction) -> bool {
        self.state_of(txn).is_pending()
    }

    pub fn is_accepted(&self, id: TransactionId) -> bool {
        self.states.get(&id) == Some(&SuggestionState::Accepted)
    }

    fn mark_accepted(&mut self, id: TransactionId) {
        self.states.insert(id, SuggestionState::Accepted);
    }

    pub fn accepted_count(&self) -> usize {
        self.states.values().filter(|s| **s == SuggestionState::Accepted).count()
    }
}

/// A transaction waiting for its suggestion to be accepted
#[derive(Debug, Clone)]
pub struct PendingSuggestion {
    pub transaction: Transaction,
    pub suggestion: CategorySuggestion,
}

/// Service for listing and accepting suggestions
pub struct SuggestionService<'a> {
    records: &'a mut RecordStore,
    tracker: &'a mut SuggestionTracker,
    audit: &'a mut AuditLogger,
}

impl<'a> SuggestionService<'a> {
    pub fn new(
        records: &'a mut RecordStore,
        tracker: &'a mut SuggestionTracker,
        audit: &'a mut AuditLogger,
    ) -> Self {
        Self {
            records,
            tracker,
            audit,
        }
    }

    /// Pending suggestions, most recent transaction first
    pub fn pending(&self) -> Vec<PendingSuggestion> {
        self.records
            .transactions()
            .iter()
            .filter(|t| self.tracker.has_pending_suggestion(t))
            .filter_map(|t| {
                t.suggested_category.map(|suggestion| PendingSuggestion {
                    transaction: t.clone(),
                    suggestion,
                })
            })
            .collect()
    }

    /// Accept the suggestion on `id`, confirming it proposes `category`
    ///
    /// Returns the new effective category. Accepting an already accepted
    /// suggestion returns the same category and changes nothing.
    pub fn accept(&mut self, id: TransactionId, category: Category) -> FinboardResult<Category> {
        let suggested = self.suggestion_for(id)?;

        if category != suggested.category {
            return Err(FinboardError::Validation(format!(
                "Suggested category for {} is {}, not {}",
                id, suggested.category, category
            )));
        }

        if self.tracker.is_accepted(id) {
            return Ok(suggested.category);
        }

        let before = self
            .records
            .get(id)
            .ok_or_else(|| FinboardError::transaction_not_found(id.to_string()))?;

        let before_json = json!({ "category": before.category });
        let after_json = json!({ "category": suggested.category });
        self.audit.log(AuditEntry::update(
            EntityType::Transaction,
            id.to_string(),
            Some(before.description.clone()),
            &before_json,
            &after_json,
            generate_diff(&before_json, &after_json),
        ))?;

        // Only a logged acceptance changes the record
        self.records.set_category(id, suggested.category)?;
        self.tracker.mark_accepted(id);

        Ok(suggested.category)
    }

    /// Accept whatever category the suggestion proposes
    pub fn accept_suggested(&mut self, id: TransactionId) -> FinboardResult<Category> {
        let suggested = self.suggestion_for(id)?;
        self.accept(id, suggested.category)
    }

    fn suggestion_for(&self, id: TransactionId) -> FinboardResult<CategorySuggestion> {
        let txn = self
            .records
            .get(id)
            .ok_or_else(|| FinboardError::transaction_not_found(id.to_string()))?;

        txn.suggested_category.ok_or_else(|| {
            FinboardError::Domain(format!("Transaction {} has no category suggestion", id))
        })
    }
}
