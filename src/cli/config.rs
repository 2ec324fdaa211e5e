//! Configuration CLI commands

use clap::Subcommand;

use crate::config::{FinboardPaths, Settings};
use crate::error::FinboardResult;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config.json with default settings
    Init {
        /// Overwrite an existing config.json
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Show,
}

/// Handle a config command
pub fn handle_config_command(
    paths: &FinboardPaths,
    settings: &Settings,
    cmd: ConfigCommands,
) -> FinboardResult<()> {
    match cmd {
        ConfigCommands::Init { force } => {
            if paths.is_initialized() && !force {
                println!(
                    "Config already exists at {}. Use --force to overwrite it.",
                    paths.settings_file().display()
                );
                return Ok(());
            }

            paths.ensure_directories()?;
            Settings::default().save(paths)?;
            println!("Wrote default settings to {}", paths.settings_file().display());
        }

        ConfigCommands::Show => {
            println!("Finboard Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Login state:      {}", paths.state_file().display());
            println!("Activity log:     {}", paths.activity_log().display());
            println!();
            println!("Settings:");
            println!("  Currency:                 {}", settings.currency.code());
            println!("  Date format:              {}", settings.date_format);
            println!(
                "  Budget warning threshold: {}%",
                settings.budget_warning_threshold
            );
            println!("  Activity log enabled:     {}", settings.activity_log);
        }
    }

    Ok(())
}
