//! Page configuration.
//!
//! Every field has a default matching the live site, so an empty JSON object
//! (or no configuration at all) gives a working page. [`SiteConfig::from_json`]
//! parses and validates in one step.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use chrono_tz::Tz;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::clock::ClockFormat;
use crate::consts::{CLOCK_TICK_MS, OWNER_CLOCK_ID, OWNER_TIMEZONE, VIEWER_CLOCK_ID};

/// Error returned by [`SiteConfig::from_json`] and [`ClockConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The text is not valid JSON or does not match the schema.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The owner's timezone is not a known IANA zone name.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    /// A clock target id is blank.
    #[error("clock target `{field}` must not be empty")]
    EmptyTarget { field: &'static str },
    /// The clock would never tick.
    #[error("clock tick interval must be positive")]
    ZeroTick,
}

/// Top-level page configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub clock: ClockConfig,
}

impl SiteConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or the first
    /// [`ClockConfig::validate`] failure.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.clock.validate()?;
        Ok(config)
    }

    /// Configuration for a page whose config block reads `text`.
    ///
    /// No block means defaults. A block that fails [`Self::from_json`] is
    /// logged and replaced by defaults, so the page always renders.
    #[must_use]
    pub fn from_page(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Self::default();
        };
        match Self::from_json(text) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring page config: {e}");
                Self::default()
            }
        }
    }
}

/// Clock pair configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Element id showing the visitor's local time.
    pub viewer_target: String,
    /// Element id showing the owner's time.
    pub owner_target: String,
    /// IANA zone of the owner's clock.
    pub owner_timezone: String,
    /// Refresh period in milliseconds.
    pub tick_ms: u32,
    pub format: ClockFormat,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            viewer_target: VIEWER_CLOCK_ID.to_owned(),
            owner_target: OWNER_CLOCK_ID.to_owned(),
            owner_timezone: OWNER_TIMEZONE.to_owned(),
            tick_ms: CLOCK_TICK_MS,
            format: ClockFormat::default(),
        }
    }
}

impl ClockConfig {
    /// Parsed owner zone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTimezone`] if `owner_timezone` is not an
    /// IANA zone name.
    pub fn owner_zone(&self) -> Result<Tz, ConfigError> {
        self.owner_timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::UnknownTimezone(self.owner_timezone.clone()))
    }

    /// Check targets, tick period, and zone, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTarget`] for a blank target id,
    /// [`ConfigError::ZeroTick`] for a zero period, or
    /// [`ConfigError::UnknownTimezone`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewer_target.trim().is_empty() {
            return Err(ConfigError::EmptyTarget { field: "viewer_target" });
        }
        if self.owner_target.trim().is_empty() {
            return Err(ConfigError::EmptyTarget { field: "owner_target" });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        self.owner_zone().map(|_| ())
    }
}
