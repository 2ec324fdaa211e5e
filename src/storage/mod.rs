//! Storage layer for Finboard
//!
//! Records live in memory for the lifetime of a session. The only state that
//! reaches disk is the authentication flag, written atomically as JSON.

pub mod auth;
pub mod file_io;
pub mod records;
pub mod seed;

pub use auth::AuthFlagStore;
pub use file_io::{read_json, write_json_atomic};
pub use records::RecordStore;
