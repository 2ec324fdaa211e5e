//! Persisted authentication flag
//!
//! The only durable application state: a key-value document holding
//! `auth = "true" | "false"`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::FinboardResult;

use super::file_io::{read_json, write_json_atomic};

const AUTH_KEY: &str = "auth";

/// Reads and writes the login flag in `state.json`
#[derive(Debug, Clone)]
pub struct AuthFlagStore {
    path: PathBuf,
}

impl AuthFlagStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the flag, writing `"false"` first if the key has never been set
    pub fn initialize(&self) -> FinboardResult<bool> {
        let mut state = self.read_state()?;
        match state.get(AUTH_KEY) {
            Some(value) => Ok(value == "true"),
            None => {
                state.insert(AUTH_KEY.to_string(), "false".to_string());
                write_json_atomic(&self.path, &state)?;
                Ok(false)
            }
        }
    }

    pub fn set(&self, authenticated: bool) -> FinboardResult<()> {
        let mut state = self.read_state()?;
        state.insert(AUTH_KEY.to_string(), authenticated.to_string());
        write_json_atomic(&self.path, &state)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_state(&self) -> FinboardResult<BTreeMap<String, String>> {
        read_json(&self.path)
    }
}
