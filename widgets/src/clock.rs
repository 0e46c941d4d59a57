//! Two live clocks: the visitor's local time and the page owner's time.
//!
//! [`ClockManager::tick`] reads the current instant once and renders it
//! twice, once in the host's local zone and once in the configured IANA zone.
//! Where the strings end up is injected through [`DisplayTarget`]; a missing
//! target is skipped without complaint. Scheduling the tick is left to the
//! host, which owns the timer.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::config::{ClockConfig, ConfigError};
use crate::consts::{FORMAT_12H, FORMAT_24H};

/// Anything that can show a line of text.
pub trait DisplayTarget {
    fn render(&self, text: &str);
}

impl<F: Fn(&str)> DisplayTarget for F {
    fn render(&self, text: &str) {
        self(text);
    }
}

/// Hour/minute/second rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockFormat {
    /// `09:05:07 PM` when true, `21:05:07` when false.
    pub hour12: bool,
}

impl Default for ClockFormat {
    fn default() -> Self {
        Self { hour12: true }
    }
}

impl ClockFormat {
    #[must_use]
    pub fn pattern(self) -> &'static str {
        if self.hour12 { FORMAT_12H } else { FORMAT_24H }
    }

    /// Render `instant` as wall-clock time in `zone`.
    #[must_use]
    pub fn format_in<Z>(self, instant: DateTime<Utc>, zone: &Z) -> String
    where
        Z: TimeZone,
        Z::Offset: Display,
    {
        instant.with_timezone(zone).format(self.pattern()).to_string()
    }
}

/// Both strings produced by one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    pub viewer: String,
    pub owner: String,
}

/// Formats the two clocks and pushes them to their display targets.
pub struct ClockManager {
    owner_zone: Tz,
    format: ClockFormat,
    viewer: Option<Box<dyn DisplayTarget>>,
    owner: Option<Box<dyn DisplayTarget>>,
}

impl ClockManager {
    /// Build from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTimezone`] if the owner's zone is unknown.
    pub fn new(
        config: &ClockConfig,
        viewer: Option<Box<dyn DisplayTarget>>,
        owner: Option<Box<dyn DisplayTarget>>,
    ) -> Result<Self, ConfigError> {
        Ok(Self { owner_zone: config.owner_zone()?, format: config.format, viewer, owner })
    }

    #[must_use]
    pub fn owner_zone(&self) -> Tz {
        self.owner_zone
    }

    /// Render the current instant to both targets.
    #[must_use]
    pub fn tick(&self) -> ClockReading {
        self.tick_at(Utc::now(), &Local)
    }

    /// Render `instant` to both targets, treating `local` as the viewer's zone.
    pub fn tick_at<L>(&self, instant: DateTime<Utc>, local: &L) -> ClockReading
    where
        L: TimeZone,
        L::Offset: Display,
    {
        let reading = ClockReading {
            viewer: self.format.format_in(instant, local),
            owner: self.format.format_in(instant, &self.owner_zone),
        };
        if let Some(target) = &self.viewer {
            target.render(&reading.viewer);
        }
        if let Some(target) = &self.owner {
            target.render(&reading.owner);
        }
        reading
    }
}
