//! User settings for the expense tracker
//!
//! Display and behaviour preferences. Expense data is never written here;
//! only the starting budget of each new session is configurable.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Money;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Budget every new session starts with
    #[serde(default)]
    pub default_budget: Money,

    /// Usage ratio above which the "nearing your limit" banner is shown
    #[serde(default = "default_near_limit_ratio")]
    pub near_limit_ratio: f64,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// How long toast notifications stay visible
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_near_limit_ratio() -> f64 {
    0.8
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notification_secs() -> u64 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_budget: Money::zero(),
            near_limit_ratio: default_near_limit_ratio(),
            tick_rate_ms: default_tick_rate_ms(),
            notification_secs: default_notification_secs(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the rest of the application cannot work with
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !(self.near_limit_ratio > 0.0 && self.near_limit_ratio <= 1.0) {
            return Err(TrackerError::Config(format!(
                "near_limit_ratio must be in (0, 1], got {}",
                self.near_limit_ratio
            )));
        }

        if self.default_budget.is_negative() {
            return Err(TrackerError::Config(
                "default_budget cannot be negative".into(),
            ));
        }

        if self.tick_rate_ms == 0 {
            return Err(TrackerError::Config("tick_rate_ms must be positive".into()));
        }

        Ok(())
    }
}
