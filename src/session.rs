//! The running dashboard session
//!
//! A `Session` owns everything a user works with between `start` and `end`:
//! the seeded records, suggestion states, the activity log and the settings
//! loaded for this run. Only the login flag outlives it.

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::{FinboardPaths, NotificationKind, Settings};
use crate::error::{FinboardError, FinboardResult};
use crate::reports::DashboardSummary;
use crate::services::{BudgetService, ExpenseService, SuggestionService, SuggestionTracker};
use crate::storage::{AuthFlagStore, RecordStore};

/// Number of transactions shown on the dashboard
pub const DASHBOARD_RECENT_COUNT: usize = 5;

pub struct Session {
    paths: FinboardPaths,
    settings: Settings,
    auth: AuthFlagStore,
    authenticated: bool,
    records: RecordStore,
    tracker: SuggestionTracker,
    audit: AuditLogger,
}

impl Session {
    /// Open a session: read (or initialize) the login flag and load seed data
    pub fn start(paths: FinboardPaths, settings: Settings) -> FinboardResult<Self> {
        let auth = AuthFlagStore::new(paths.state_file());
        let authenticated = auth.initialize()?;

        let audit = if settings.activity_log {
            AuditLogger::with_file(paths.activity_log())
        } else {
            AuditLogger::in_memory()
        };

        Ok(Self {
            paths,
            settings,
            auth,
            authenticated,
            records: RecordStore::seeded()?,
            tracker: SuggestionTracker::new(),
            audit,
        })
    }

    /// Close the session, returning what was logged during it
    ///
    /// Records and suggestion states are discarded.
    pub fn end(self) -> Vec<AuditEntry> {
        self.audit.entries().to_vec()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Set the login flag. Returns false if already logged in.
    pub fn login(&mut self) -> FinboardResult<bool> {
        if self.authenticated {
            return Ok(false);
        }
        self.audit.log(AuditEntry::login())?;
        self.auth.set(true)?;
        self.authenticated = true;
        Ok(true)
    }

    /// Clear the login flag. Returns false if already logged out.
    pub fn logout(&mut self) -> FinboardResult<bool> {
        if !self.authenticated {
            return Ok(false);
        }
        self.audit.log(AuditEntry::logout())?;
        self.auth.set(false)?;
        self.authenticated = false;
        Ok(true)
    }

    pub fn require_auth(&self) -> FinboardResult<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(FinboardError::NotAuthenticated)
        }
    }

    pub fn paths(&self) -> &FinboardPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn records(&self) -> FinboardResult<&RecordStore> {
        self.require_auth()?;
        Ok(&self.records)
    }

    pub fn tracker(&self) -> FinboardResult<&SuggestionTracker> {
        self.require_auth()?;
        Ok(&self.tracker)
    }

    pub fn audit(&self) -> FinboardResult<&AuditLogger> {
        self.require_auth()?;
        Ok(&self.audit)
    }

    pub fn expense_service(&mut self) -> FinboardResult<ExpenseService<'_>> {
        self.require_auth()?;
        Ok(ExpenseService::new(&mut self.records, &mut self.audit))
    }

    pub fn suggestion_service(&mut self) -> FinboardResult<SuggestionService<'_>> {
        self.require_auth()?;
        Ok(SuggestionService::new(
            &mut self.records,
            &mut self.tracker,
            &mut self.audit,
        ))
    }

    pub fn budget_service(&self) -> FinboardResult<BudgetService<'_>> {
        self.require_auth()?;
        Ok(BudgetService::new(
            &self.records,
            self.settings.budget_warning_threshold,
        ))
    }

    /// Build the dashboard for the given hour of day
    pub fn dashboard(&self, hour: u32) -> FinboardResult<DashboardSummary> {
        self.require_auth()?;
        DashboardSummary::generate(&self.records, &self.tracker, hour, DASHBOARD_RECENT_COUNT)
    }

    /// Flip one notification switch for this session and return its new value
    pub fn toggle_notification(&mut self, kind: NotificationKind) -> FinboardResult<bool> {
        self.require_auth()?;

        let before = self.settings.notifications;
        let mut after = before;
        let enabled = after.toggle(kind);

        let diff = generate_diff(
            &serde_json::to_value(before)?,
            &serde_json::to_value(after)?,
        );
        self.audit.log(AuditEntry::update(
            EntityType::Settings,
            "notifications",
            Some(kind.key().to_string()),
            &before,
            &after,
            diff,
        ))?;

        self.settings.notifications = after;
        Ok(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Category, ExpenseDraft, Money, PaymentMethod};
    use crate::storage::seed::seed_transaction_id;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn start(temp: &TempDir) -> Session {
        let paths = FinboardPaths::with_base_dir(temp.path().to_path_buf());
        Session::start(paths, Settings::default()).unwrap()
    }

    #[test]
    fn test_first_start_is_logged_out() {
        let temp = TempDir::new().unwrap();
        let session = start(&temp);

        assert!(!session.is_authenticated());
        assert!(temp.path().join("data").join("state.json").exists());
        assert!(matches!(
            session.records(),
            Err(FinboardError::NotAuthenticated)
        ));
        assert!(session.dashboard(9).is_err());
    }

    #[test]
    fn test_login_persists_across_sessions() {
        let temp = TempDir::new().unwrap();
        let mut session = start(&temp);
        assert!(session.login().unwrap());
        assert!(!session.login().unwrap());
        session.end();

        let mut reopened = start(&temp);
        assert!(reopened.is_authenticated());
        assert!(reopened.logout().unwrap());
        assert!(!start(&temp).is_authenticated());
    }

    #[test]
    fn test_mutations_are_session_scoped() {
        let temp = TempDir::new().unwrap();
        let mut session = start(&temp);
        session.login().unwrap();

        let draft = ExpenseDraft {
            description: "Coffee".into(),
            amount: Some(Money::from_cents(450)),
            category: Some(Category::Dining),
            payment_method: Some(PaymentMethod::CreditCard),
            ..Default::default()
        };
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        session.expense_service().unwrap().add(draft, today).unwrap();
        session
            .suggestion_service()
            .unwrap()
            .accept_suggested(seed_transaction_id(1))
            .unwrap();

        assert_eq!(session.records().unwrap().len(), 14);
        assert_eq!(session.tracker().unwrap().accepted_count(), 1);

        let entries = session.end();
        let operations: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(
            operations,
            vec![Operation::Login, Operation::Create, Operation::Update]
        );

        let reopened = start(&temp);
        assert_eq!(reopened.records().unwrap().len(), 13);
        assert_eq!(reopened.tracker().unwrap().accepted_count(), 0);
    }

    #[test]
    fn test_toggle_notification_is_logged() {
        let temp = TempDir::new().unwrap();
        let mut session = start(&temp);
        assert!(session.toggle_notification(NotificationKind::Push).is_err());

        session.login().unwrap();
        assert!(!session.toggle_notification(NotificationKind::Push).unwrap());
        assert!(session.toggle_notification(NotificationKind::NewFeatures).unwrap());

        let entries = session.audit().unwrap().entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].entity_type, EntityType::Settings);
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("push: true -> false")
        );
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn test_activity_log_file_when_enabled() {
        let temp = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp.path().to_path_buf());
        let settings = Settings {
            activity_log: true,
            ..Settings::default()
        };

        let mut session = Session::start(paths, settings).unwrap();
        session.login().unwrap();

        let contents = std::fs::read_to_string(temp.path().join("activity.log")).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("\"operation\":\"login\""));
    }

    #[test]
    fn test_failed_log_write_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp.path().to_path_buf());
        let settings = Settings {
            activity_log: true,
            ..Settings::default()
        };
        let mut session = Session::start(paths, settings).unwrap();

        // Appending to a directory fails
        std::fs::create_dir(temp.path().join("activity.log")).unwrap();
        assert!(session.login().is_err());
        assert!(!session.is_authenticated());
        assert!(!start(&temp).is_authenticated());

        std::fs::remove_dir(temp.path().join("activity.log")).unwrap();
        session.login().unwrap();
        std::fs::remove_file(temp.path().join("activity.log")).unwrap();
        std::fs::create_dir(temp.path().join("activity.log")).unwrap();

        assert!(session.toggle_notification(NotificationKind::Push).is_err());
        assert!(session.settings().notifications.push);
        assert!(session.logout().is_err());
        assert!(session.is_authenticated());
        assert!(start(&temp).is_authenticated());
    }

    #[test]
    fn test_budget_service_uses_threshold() {
        let temp = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp.path().to_path_buf());
        let settings = Settings {
            budget_warning_threshold: 90,
            ..Settings::default()
        };
        let mut session = Session::start(paths, settings).unwrap();
        session.login().unwrap();

        let warnings = session.budget_service().unwrap().warnings().unwrap();
        let categories: Vec<_> = warnings.iter().map(|s| s.category).collect();
        assert_eq!(categories, vec![Category::Utilities]);
    }
}
