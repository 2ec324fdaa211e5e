//! Activity entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Login,
    Logout,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Login => write!(f, "LOGIN"),
            Operation::Logout => write!(f, "LOGOUT"),
        }
    }
}

/// What it happened to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Budget,
    Session,
    Settings,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Budget => write!(f, "Budget"),
            EntityType::Session => write!(f, "Session"),
            EntityType::Settings => write!(f, "Settings"),
        }
    }
}

/// A single activity entry
///
/// Creates carry the new record in `after`; updates carry both sides plus a
/// one-line diff. Session entries carry neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When it happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Short ID of the affected record, or a fixed key for session/settings
    pub entity_id: String,

    /// Human-readable label, e.g. the transaction description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn blank(operation: Operation, entity_type: EntityType, entity_id: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name: None,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for a newly created record
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            entity_name,
            after: serde_json::to_value(entity).ok(),
            ..Self::blank(Operation::Create, entity_type, entity_id.into())
        }
    }

    /// Entry for a change to an existing record
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            entity_name,
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
            ..Self::blank(Operation::Update, entity_type, entity_id.into())
        }
    }

    pub fn login() -> Self {
        Self::blank(Operation::Login, EntityType::Session, "auth".into())
    }

    pub fn logout() -> Self {
        Self::blank(Operation::Logout, EntityType::Session, "auth".into())
    }

    /// One line per entry, with the diff on a continuation line
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_names() {
        assert_eq!(Operation::Login.to_string(), "LOGIN");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(EntityType::Budget.to_string(), "Budget");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Transaction,
            "txn-12345678",
            Some("Coffee".to_string()),
            &json!({"description": "Coffee", "amount": 450}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["amount"], 450);
    }

    #[test]
    fn test_update_entry() {
        let entry = AuditEntry::update(
            EntityType::Transaction,
            "txn-12345678",
            None,
            &json!({"category": "other"}),
            &json!({"category": "food"}),
            Some("category: \"other\" -> \"food\"".to_string()),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some() && entry.after.is_some());
    }

    #[test]
    fn test_session_entries_have_no_payload() {
        let entry = AuditEntry::logout();
        assert_eq!(entry.entity_type, EntityType::Session);
        assert!(entry.before.is_none() && entry.after.is_none());
        assert!(entry.format_human_readable().contains("LOGOUT Session auth"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let json = serde_json::to_string(&AuditEntry::login()).unwrap();
        assert!(json.contains("\"operation\":\"login\""));
        assert!(!json.contains("before"));

        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.operation, Operation::Login);
    }

    #[test]
    fn test_human_readable_includes_diff() {
        let entry = AuditEntry::update(
            EntityType::Settings,
            "notifications",
            None,
            &json!({"push": true}),
            &json!({"push": false}),
            Some("push: true -> false".to_string()),
        );
        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Settings notifications"));
        assert!(formatted.contains("Changes: push: true -> false"));
    }
}
