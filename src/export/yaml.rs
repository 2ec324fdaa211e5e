//! YAML Export functionality
//!
//! Same document as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{FinboardError, FinboardResult};
use crate::export::json::FullExport;
use crate::storage::RecordStore;

/// Export the session to YAML, preceded by a comment header
pub fn export_full_yaml<W: Write>(records: &RecordStore, mut writer: W) -> FinboardResult<()> {
    let export = FullExport::from_records(records);
    let err = |e: std::io::Error| FinboardError::Export(e.to_string());

    writeln!(writer, "# Finboard Export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinboardError::Export(e.to_string()))
}
