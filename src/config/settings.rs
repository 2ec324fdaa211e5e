//! User settings for Finboard
//!
//! Display currency, date format, the budget warning threshold and
//! notification preferences. Missing keys fall back to defaults so older
//! config files keep loading.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::FinboardPaths;
use crate::error::FinboardError;
use crate::models::Currency;

/// Notification switches shown on the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    #[serde(default = "enabled")]
    pub email: bool,
    #[serde(default = "enabled")]
    pub push: bool,
    #[serde(default = "enabled")]
    pub weekly_report: bool,
    #[serde(default = "enabled")]
    pub budget_alerts: bool,
    #[serde(default)]
    pub new_features: bool,
}

fn enabled() -> bool {
    true
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            weekly_report: true,
            budget_alerts: true,
            new_features: false,
        }
    }
}

/// One notification switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Email,
    Push,
    WeeklyReport,
    BudgetAlerts,
    NewFeatures,
}

impl NotificationKind {
    pub fn all() -> &'static [NotificationKind] {
        &[
            Self::Email,
            Self::Push,
            Self::WeeklyReport,
            Self::BudgetAlerts,
            Self::NewFeatures,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Push => "push",
            Self::WeeklyReport => "weekly-report",
            Self::BudgetAlerts => "budget-alerts",
            Self::NewFeatures => "new-features",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for NotificationKind {
    type Err = FinboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.key() == normalized)
            .ok_or_else(|| {
                FinboardError::InvalidArgument(format!("Unknown notification preference: {}", s))
            })
    }
}

impl NotificationPreferences {
    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email,
            NotificationKind::Push => self.push,
            NotificationKind::WeeklyReport => self.weekly_report,
            NotificationKind::BudgetAlerts => self.budget_alerts,
            NotificationKind::NewFeatures => self.new_features,
        }
    }

    /// Flip one switch and return its new value
    pub fn toggle(&mut self, kind: NotificationKind) -> bool {
        let slot = match kind {
            NotificationKind::Email => &mut self.email,
            NotificationKind::Push => &mut self.push,
            NotificationKind::WeeklyReport => &mut self.weekly_report,
            NotificationKind::BudgetAlerts => &mut self.budget_alerts,
            NotificationKind::NewFeatures => &mut self.new_features,
        };
        *slot = !*slot;
        *slot
    }
}

/// User settings for Finboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency used to display amounts
    #[serde(default)]
    pub currency: Currency,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Budgets above this percentage of their allocation are flagged
    #[serde(default = "default_warning_threshold")]
    pub budget_warning_threshold: u8,

    /// Append activity entries to `activity.log`
    #[serde(default)]
    pub activity_log: bool,

    #[serde(default)]
    pub notifications: NotificationPreferences,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_warning_threshold() -> u8 {
    75
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
            date_format: default_date_format(),
            budget_warning_threshold: default_warning_threshold(),
            activity_log: false,
            notifications: NotificationPreferences::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults without writing them
    pub fn load_or_create(paths: &FinboardPaths) -> Result<Self, FinboardError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinboardError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinboardError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, paths: &FinboardPaths) -> Result<(), FinboardError> {
        self.validate()?;
        std::fs::create_dir_all(paths.base_dir())
            .map_err(|e| FinboardError::Io(format!("Failed to create config directory: {}", e)))?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinboardError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinboardError::Io(format!("Failed to write settings file: {}", e)))
    }

    fn validate(&self) -> Result<(), FinboardError> {
        if self.budget_warning_threshold > 100 {
            return Err(FinboardError::Config(format!(
                "budget_warning_threshold must be at most 100, got {}",
                self.budget_warning_threshold
            )));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(FinboardError::Config(format!(
                "date_format is not a valid strftime format: {}",
                self.date_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency, Currency::Usd);
        assert_eq!(settings.budget_warning_threshold, 75);
        assert!(!settings.activity_log);
        assert!(settings.notifications.email);
        assert!(!settings.notifications.new_features);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency = Currency::Eur;
        settings.activity_log = true;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency, Currency::Eur);
        assert!(loaded.activity_log);
    }

    #[test]
    fn test_invalid_date_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinboardError::Config(_)));
        assert!(err.to_string().contains("date_format"));

        let settings = Settings {
            date_format: "%d %B %Y".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();
        assert_eq!(Settings::load_or_create(&paths).unwrap().date_format, "%d %B %Y");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency": "GBP"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency, Currency::Gbp);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert!(loaded.notifications.weekly_report);
    }

    #[test]
    fn test_threshold_over_100_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"budget_warning_threshold": 150}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FinboardError::Config(_)));
    }

    #[test]
    fn test_toggle_notification() {
        let mut prefs = NotificationPreferences::default();
        assert!(!prefs.toggle(NotificationKind::Push));
        assert!(!prefs.get(NotificationKind::Push));
        assert!(prefs.toggle(NotificationKind::NewFeatures));
    }

    #[test]
    fn test_notification_kind_parsing() {
        assert_eq!(
            "weekly_report".parse::<NotificationKind>().unwrap(),
            NotificationKind::WeeklyReport
        );
        assert_eq!(
            "Budget-Alerts".parse::<NotificationKind>().unwrap(),
            NotificationKind::BudgetAlerts
        );
        assert!("sms".parse::<NotificationKind>().is_err());
    }
}
