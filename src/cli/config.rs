//! Config command
//!
//! Prints the resolved paths and settings, or writes the default settings
//! file.

use crate::config::paths::{TrackerPaths, CONFIG_DIR_ENV};
use crate::config::settings::Settings;
use crate::error::TrackerResult;

/// Describe where configuration lives and what is in effect
pub fn format_config(paths: &TrackerPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Expense Tracker Configuration\n");
    output.push_str("=============================\n");
    output.push_str(&format!(
        "Config directory: {} (override with {})\n",
        paths.base_dir().display(),
        CONFIG_DIR_ENV
    ));
    output.push_str(&format!(
        "Settings file:    {}{}\n",
        paths.settings_file().display(),
        if paths.is_initialized() {
            ""
        } else {
            " (not written, using defaults)"
        }
    ));
    output.push_str(&format!("Log file:         {}\n", paths.log_file().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol:   {}\n", settings.currency_symbol));
    output.push_str(&format!(
        "  Default budget:    {}\n",
        settings
            .default_budget
            .format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "  Near-limit ratio:  {:.0}%\n",
        settings.near_limit_ratio * 100.0
    ));
    output.push_str(&format!("  Tick rate:         {} ms\n", settings.tick_rate_ms));
    output.push_str(&format!(
        "  Notifications:     {} s\n",
        settings.notification_secs
    ));
    output.push_str(&format!("  Log level:         {}\n", settings.log_level));
    output
}

/// Handle `expenses config [--init]`
///
/// `--init` never overwrites an existing settings file.
pub fn handle_config_command(
    paths: &TrackerPaths,
    settings: &Settings,
    init: bool,
) -> TrackerResult<()> {
    if init {
        if paths.is_initialized() {
            println!(
                "Settings file already exists at {}",
                paths.settings_file().display()
            );
        } else {
            Settings::default().save(paths)?;
            println!(
                "Wrote default settings to {}",
                paths.settings_file().display()
            );
        }
        return Ok(());
    }

    print!("{}", format_config(paths, settings));
    Ok(())
}
