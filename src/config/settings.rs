//! User settings for Voice Ledger
//!
//! Manages user preferences including the date format used to normalize
//! draft dates, the confirmation banner duration, the default log filter and
//! an optional category vocabulary override.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::CategoryVocabulary;
use crate::services::commit_gate::DATE_SEPARATOR;
use crate::storage::file_io::write_json_atomic;

/// User settings for Voice Ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How long the "transaction created" confirmation stays visible
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Replacement for the built-in category vocabulary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<CategoryVocabulary>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_notification_secs() -> u64 {
    2
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            notification_secs: default_notification_secs(),
            log_filter: default_log_filter(),
            vocabulary: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Check values that would otherwise break the form at runtime
    pub fn validate(&self) -> Result<(), LedgerError> {
        validate_date_format(&self.date_format)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// The category vocabulary in effect, validated for disjointness
    pub fn vocabulary(&self) -> Result<CategoryVocabulary, LedgerError> {
        match &self.vocabulary {
            Some(vocabulary) => {
                vocabulary
                    .validate()
                    .map_err(|e| LedgerError::Config(format!("Invalid vocabulary: {}", e)))?;
                Ok(vocabulary.clone())
            }
            None => Ok(CategoryVocabulary::default()),
        }
    }
}

/// A date format must parse as strftime and produce dates that pass the
/// commit check, i.e. contain the date separator
fn validate_date_format(format: &str) -> Result<(), LedgerError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(LedgerError::Config(format!(
            "Invalid date format '{}'",
            format
        )));
    }

    let mut sample = String::new();
    let rendered = NaiveDate::from_ymd_opt(2024, 1, 5)
        .map(|date| write!(sample, "{}", date.format(format)).is_ok())
        .unwrap_or(false);
    if !rendered {
        return Err(LedgerError::Config(format!(
            "Invalid date format '{}'",
            format
        )));
    }

    if !sample.contains(DATE_SEPARATOR) {
        return Err(LedgerError::Config(format!(
            "Date format '{}' must produce dates containing '{}'",
            format, DATE_SEPARATOR
        )));
    }

    Ok(())
}
