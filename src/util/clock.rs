//! Clock timer.
//!
//! Ticks once immediately, then every `tick_ms` for the life of the page. The
//! interval is never cancelled.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use widgets::clock::{ClockManager, ClockReading, DisplayTarget};
use widgets::config::{ClockConfig, ConfigError};

#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;
#[cfg(feature = "csr")]
use leptos::prelude::*;

/// Build the clocks, tick once, then hand the repeating tick to `schedule`
/// together with its period in milliseconds.
///
/// Returns the first reading. On error nothing is rendered or scheduled.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownTimezone`] if the owner's zone is unknown.
pub fn run(
    config: &ClockConfig,
    viewer: Box<dyn DisplayTarget>,
    owner: Box<dyn DisplayTarget>,
    schedule: impl FnOnce(u32, Box<dyn FnMut()>),
) -> Result<ClockReading, ConfigError> {
    let clocks = ClockManager::new(config, Some(viewer), Some(owner))?;
    let first = clocks.tick();
    schedule(config.tick_ms, Box::new(move || drop(clocks.tick())));
    Ok(first)
}

/// Start both clocks, writing into the given signals.
///
/// An invalid owner timezone disables the clocks and logs an error; the rest
/// of the page is unaffected.
#[cfg(feature = "csr")]
pub fn start(config: &ClockConfig, viewer: RwSignal<String>, owner: RwSignal<String>) {
    let started = run(
        config,
        Box::new(move |text: &str| viewer.set(text.to_owned())),
        Box::new(move |text: &str| owner.set(text.to_owned())),
        |period, mut tick| Interval::new(period, move || tick()).forget(),
    );
    match started {
        Ok(first) => log::debug!(
            "clocks started: owner {} ({}), every {}ms",
            first.owner,
            config.owner_timezone,
            config.tick_ms
        ),
        Err(e) => log::error!("clocks disabled: {e}"),
    }
}
