//! JSON file helpers
//!
//! The only files Finboard writes through these helpers are tiny key-value
//! documents, but they are still replaced atomically so an interrupted write
//! never leaves a half-written flag behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FinboardError;

/// Read JSON from a file, returning `T::default()` when the file is absent
pub fn read_json<T, P>(path: P) -> Result<T, FinboardError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| {
        FinboardError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        FinboardError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write JSON to `path` via a sibling temp file and a rename
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FinboardError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FinboardError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| FinboardError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| FinboardError::Storage(format!("Failed to serialize data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| FinboardError::Storage(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FinboardError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FinboardError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
