//! Configuration module for Finboard
//!
//! - Platform path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinboardPaths;
pub use settings::{NotificationKind, NotificationPreferences, Settings};
