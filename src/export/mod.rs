//! Export module for Finboard
//!
//! - CSV: transactions or budgets (spreadsheet-compatible)
//! - JSON: the full session, machine-readable
//! - YAML: the full session, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{FinboardError, FinboardResult};
use crate::storage::RecordStore;

pub use self::csv::{export_budgets_csv, export_transactions_csv};
pub use self::json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = FinboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(FinboardError::InvalidArgument(format!(
                "Unknown export format: {} (expected csv, json or yaml)",
                s
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// What to export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    /// Every transaction, income included
    Transactions,
    Budgets,
    All,
}

impl FromStr for ExportTarget {
    type Err = FinboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expenses" | "transactions" => Ok(Self::Transactions),
            "budgets" => Ok(Self::Budgets),
            "all" => Ok(Self::All),
            _ => Err(FinboardError::InvalidArgument(format!(
                "Unknown export target: {} (expected expenses, budgets or all)",
                s
            ))),
        }
    }
}

/// Write `target` from `records` in `format`
///
/// CSV holds one table per file, so `all` is only available as JSON or YAML.
pub fn export<W: Write>(
    records: &RecordStore,
    target: ExportTarget,
    format: ExportFormat,
    mut writer: W,
) -> FinboardResult<()> {
    match (format, target) {
        (ExportFormat::Csv, ExportTarget::Transactions) => {
            export_transactions_csv(records.transactions(), writer)
        }
        (ExportFormat::Csv, ExportTarget::Budgets) => export_budgets_csv(records.budgets(), writer),
        (ExportFormat::Csv, ExportTarget::All) => Err(FinboardError::Export(
            "CSV exports one table at a time; export 'expenses' and 'budgets' separately, or use json/yaml".into(),
        )),
        (ExportFormat::Json, ExportTarget::All) => export_full_json(records, writer),
        (ExportFormat::Yaml, ExportTarget::All) => export_full_yaml(records, writer),
        (ExportFormat::Json, ExportTarget::Transactions) => {
            write_json(&mut writer, records.transactions())
        }
        (ExportFormat::Json, ExportTarget::Budgets) => write_json(&mut writer, records.budgets()),
        (ExportFormat::Yaml, ExportTarget::Transactions) => {
            serde_yaml::to_writer(writer, records.transactions())
                .map_err(|e| FinboardError::Export(e.to_string()))
        }
        (ExportFormat::Yaml, ExportTarget::Budgets) => serde_yaml::to_writer(writer, records.budgets())
            .map_err(|e| FinboardError::Export(e.to_string())),
    }
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(writer: &mut W, value: &T) -> FinboardResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| FinboardError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinboardError::Export(e.to_string()))
}
