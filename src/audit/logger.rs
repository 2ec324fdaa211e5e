//! Activity logger
//!
//! Entries are always kept in memory for the current session. When a log
//! path is configured they are also appended to a JSONL file, one entry per
//! line, flushed after every write.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{FinboardError, FinboardResult};

use super::entry::AuditEntry;

#[derive(Debug, Default)]
pub struct AuditLogger {
    entries: Vec<AuditEntry>,
    log_path: Option<PathBuf>,
}

impl AuditLogger {
    /// A logger that only keeps entries in memory
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// A logger that also appends to `log_path`
    pub fn with_file(log_path: PathBuf) -> Self {
        Self {
            entries: Vec::new(),
            log_path: Some(log_path),
        }
    }

    pub fn log(&mut self, entry: AuditEntry) -> FinboardResult<()> {
        if let Some(path) = &self.log_path {
            append_lines(path, std::slice::from_ref(&entry))?;
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Entries logged during this session, oldest first
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// The last `count` entries, oldest first
    ///
    /// Reads the log file when there is one so entries from earlier sessions
    /// are included.
    pub fn read_recent(&self, count: usize) -> FinboardResult<Vec<AuditEntry>> {
        let all = match &self.log_path {
            Some(path) => read_all(path)?,
            None => self.entries.clone(),
        };
        let start = all.len().saturating_sub(count);
        Ok(all[start..].to_vec())
    }

    pub fn path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }
}

fn append_lines(path: &Path, entries: &[AuditEntry]) -> FinboardResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FinboardError::Io(format!("Failed to open activity log: {}", e)))?;

    for entry in entries {
        let json = serde_json::to_string(entry)
            .map_err(|e| FinboardError::Json(format!("Failed to serialize entry: {}", e)))?;
        writeln!(file, "{}", json)
            .map_err(|e| FinboardError::Io(format!("Failed to write activity log: {}", e)))?;
    }

    file.flush()
        .map_err(|e| FinboardError::Io(format!("Failed to flush activity log: {}", e)))
}

fn read_all(path: &Path) -> FinboardResult<Vec<AuditEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| FinboardError::Io(format!("Failed to open activity log: {}", e)))?;

    let mut entries = Vec::new();
    for (line_num, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| {
            FinboardError::Io(format!("Failed to read activity log line {}: {}", line_num + 1, e))
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let entry = serde_json::from_str(&line).map_err(|e| {
            FinboardError::Json(format!(
                "Failed to parse activity entry at line {}: {}",
                line_num + 1,
                e
            ))
        })?;
        entries.push(entry);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn entry(id: usize) -> AuditEntry {
        AuditEntry::create(
            EntityType::Transaction,
            format!("txn-{}", id),
            None,
            &json!({"index": id}),
        )
    }

    #[test]
    fn test_in_memory_log() {
        let mut logger = AuditLogger::in_memory();
        logger.log(AuditEntry::login()).unwrap();
        logger.log(entry(1)).unwrap();

        assert_eq!(logger.entries().len(), 2);
        assert_eq!(logger.entries()[0].operation, Operation::Login);
        assert!(logger.path().is_none());
    }

    #[test]
    fn test_read_recent_keeps_order() {
        let mut logger = AuditLogger::in_memory();
        for i in 0..10 {
            logger.log(entry(i)).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let ids: Vec<_> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["txn-7", "txn-8", "txn-9"]);
    }

    #[test]
    fn test_file_log_survives_restart() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("activity.log");

        let mut logger = AuditLogger::with_file(path.clone());
        logger.log(entry(1)).unwrap();
        logger.log(AuditEntry::logout()).unwrap();

        let reopened = AuditLogger::with_file(path);
        assert!(reopened.entries().is_empty());
        let entries = reopened.read_recent(10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Logout);
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let temp = TempDir::new().unwrap();
        let logger = AuditLogger::with_file(temp.path().join("none.log"));
        assert!(logger.read_recent(5).unwrap().is_empty());
    }
}
