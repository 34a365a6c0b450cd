//! Planner configuration.
//!
//! # Responsibility
//! - Describe host-tunable planner behavior with serde-friendly defaults.
//! - Parse configuration documents supplied by the host as JSON.
//!
//! # Invariants
//! - Every field has a default, so `{}` is a valid document.
//! - `log_level` is validated on parse against the supported level set.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Form default for daily study minutes.
pub const DEFAULT_DAILY_STUDY_MINUTES: u32 = 60;

const SUPPORTED_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// First column of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Zero-based grid column of `weekday`.
    pub fn column_of(self, weekday: Weekday) -> u32 {
        match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        }
    }

    /// Short weekday headers in grid order.
    pub fn weekday_labels(self) -> [&'static str; 7] {
        match self {
            Self::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            Self::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }
}

/// Host-provided planner settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub week_start: WeekStart,

    /// Pre-filled value of the daily minutes field on a blank form.
    #[serde(default = "default_daily_study_minutes")]
    pub default_daily_study_minutes: u32,

    #[serde(default = "default_log_level_string")]
    pub log_level: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            default_daily_study_minutes: default_daily_study_minutes(),
            log_level: default_log_level_string(),
        }
    }
}

impl PlannerConfig {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    /// - `Parse` when the document is not valid JSON for this shape.
    /// - `UnsupportedLogLevel` when `log_level` is not a known level.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.log_level = normalize_log_level(&config.log_level)?.to_string();
        Ok(config)
    }
}

/// Configuration load errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    UnsupportedLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(details) => write!(f, "invalid planner config: {details}"),
            Self::UnsupportedLogLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Lowercases and validates a log level, accepting `warning` for `warn`.
pub fn normalize_log_level(level: &str) -> Result<&'static str, ConfigError> {
    let lowered = level.trim().to_ascii_lowercase();
    let candidate = if lowered == "warning" { "warn" } else { lowered.as_str() };
    SUPPORTED_LOG_LEVELS
        .iter()
        .copied()
        .find(|known| *known == candidate)
        .ok_or(ConfigError::UnsupportedLogLevel(lowered))
}

fn default_daily_study_minutes() -> u32 {
    DEFAULT_DAILY_STUDY_MINUTES
}

fn default_log_level_string() -> String {
    default_log_level().to_string()
}
