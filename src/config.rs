//! Serializable classifier configuration.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration for one classifier instance.
///
/// Values are consumed verbatim: serde validates shape only, and odd values
/// (an end before the start, an hour past 23) degrade to the documented
/// wrap/rollover behavior rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Use the custom start/end hours below instead of the full civil day.
    pub use_custom_session: bool,
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,

    /// IANA timezone whose civil calendar anchors the outer session window
    /// and the 5-minute mode's six-hour cadence.
    pub session_tz: Tz,

    /// Per named-session UTC overrides; unset fields use the defaults
    /// (Sydney 22:00-07:00, Asia 00:00-09:00, London 08:00-17:00,
    /// NY 13:00-22:00, all UTC).
    pub sydney: SessionOverride,
    pub asia: SessionOverride,
    pub london: SessionOverride,
    pub new_york: SessionOverride,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            use_custom_session: false,
            start_hour: 9,
            start_minute: 30,
            end_hour: 16,
            end_minute: 0,
            session_tz: chrono_tz::UTC,
            sydney: SessionOverride::default(),
            asia: SessionOverride::default(),
            london: SessionOverride::default(),
            new_york: SessionOverride::default(),
        }
    }
}

/// Optional UTC start/end override for one named session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOverride {
    pub start_hour: Option<u32>,
    pub start_minute: Option<u32>,
    pub end_hour: Option<u32>,
    pub end_minute: Option<u32>,
}

impl ClassifierConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_toml_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}
