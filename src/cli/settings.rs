//! Settings CLI commands
//!
//! Toggles last for the current session only; use `finboard shell` to keep
//! them across several commands.

use clap::Subcommand;

use crate::config::NotificationKind;
use crate::error::FinboardResult;
use crate::session::Session;

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show display and notification settings
    Show,

    /// Flip a notification preference
    Toggle {
        /// email, push, weekly-report, budget-alerts or new-features
        preference: NotificationKind,
    },
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

/// Handle a settings command
pub fn handle_settings_command(session: &mut Session, cmd: SettingsCommands) -> FinboardResult<()> {
    match cmd {
        SettingsCommands::Show => {
            session.require_auth()?;
            let settings = session.settings();

            println!("Settings");
            println!("========");
            println!(
                "  Currency:          {} ({})",
                settings.currency.code(),
                settings.currency.name()
            );
            println!("  Date format:       {}", settings.date_format);
            println!("  Budget warning at: {}%", settings.budget_warning_threshold);
            println!();
            println!("Notifications:");
            for kind in NotificationKind::all() {
                println!(
                    "  {:<16} {}",
                    kind.key(),
                    on_off(settings.notifications.get(*kind))
                );
            }
        }

        SettingsCommands::Toggle { preference } => {
            let enabled = session.toggle_notification(preference)?;
            println!("Notification '{}' turned {}.", preference, on_off(enabled));
        }
    }

    Ok(())
}
