//! Activity log for Finboard
//!
//! Records expense creation, suggestion acceptance, settings changes and
//! login/logout as structured entries.
//!
//! - `AuditEntry`: one entry with timestamp, operation, entity and optional
//!   before/after snapshots.
//! - `AuditLogger`: keeps the session's entries and optionally appends them
//!   to a JSONL file.
//! - `generate_diff`: one-line summary of what changed between snapshots.
//!
//! # Example
//!
//! ```rust,ignore
//! use finboard::audit::{AuditEntry, AuditLogger, EntityType, generate_diff};
//!
//! let mut logger = AuditLogger::in_memory();
//! let diff = generate_diff(&before_json, &after_json);
//! logger.log(AuditEntry::update(
//!     EntityType::Transaction,
//!     "txn-00000001",
//!     Some("Grocery Store".to_string()),
//!     &before,
//!     &after,
//!     diff,
//! ))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
