//! Typed record IDs
//!
//! Both ID types wrap a UUID and print a short form (`txn-1a2b3c4d`) that
//! the command line accepts back, alone or as a unique prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Hex digits shown after the prefix
const SHORT_LEN: usize = 8;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            /// A fresh random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse a full UUID, with or without the display prefix
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                let s = s.trim();
                Uuid::parse_str(s.strip_prefix($prefix).unwrap_or(s)).map(Self)
            }

            /// Whether the hyphenated UUID starts with `prefix`
            ///
            /// `prefix` may carry the display prefix. An empty prefix matches
            /// nothing.
            pub fn matches_prefix(&self, prefix: &str) -> bool {
                let prefix = prefix.trim();
                let prefix = prefix.strip_prefix($prefix).unwrap_or(prefix);
                !prefix.is_empty()
                    && self
                        .0
                        .hyphenated()
                        .to_string()
                        .starts_with(&prefix.to_ascii_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let simple = self.0.simple().to_string();
                write!(f, "{}{}", $prefix, &simple[..SHORT_LEN])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(BudgetId, "bud-");
