//! JSON Export functionality
//!
//! The whole session (transactions and budgets) as one versioned document.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{FinboardError, FinboardResult};
use crate::models::{Budget, Transaction};
use crate::services::BudgetTotals;
use crate::storage::RecordStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full session export
#[derive(Debug, Clone, Serialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Version of finboard that produced the export
    pub app_version: String,
    /// Most recent first
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub expense_count: usize,
    pub budget_count: usize,
    pub budget_totals: BudgetTotals,
    pub earliest_transaction: Option<String>,
    pub latest_transaction: Option<String>,
}

impl FullExport {
    pub fn from_records(records: &RecordStore) -> Self {
        let transactions = records.transactions().to_vec();
        let budgets = records.budgets().to_vec();

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            expense_count: records.expenses().count(),
            budget_count: budgets.len(),
            budget_totals: BudgetTotals::from_budgets(&budgets),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            budgets,
            metadata,
        }
    }
}

/// Export the session to pretty-printed JSON
pub fn export_full_json<W: Write>(records: &RecordStore, mut writer: W) -> FinboardResult<()> {
    let export = FullExport::from_records(records);
    serde_json::to_writer_pretty(&mut writer, &export)
        .map_err(|e| FinboardError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinboardError::Export(e.to_string()))
}
