//! Shared constants for the widgets crate.

// ── Modals ──────────────────────────────────────────────────────

/// Class carried by header buttons that must never start a drag.
pub const CONTROL_CLASS: &str = "control-btn";

/// Header cursor while the dialog can be picked up.
pub const CURSOR_MOVE: &str = "move";

/// Header cursor while a drag is in progress.
pub const CURSOR_GRABBING: &str = "grabbing";

// ── Clocks ──────────────────────────────────────────────────────

/// Element id of the visitor's clock.
pub const VIEWER_CLOCK_ID: &str = "user-clock";

/// Element id of the page owner's clock.
pub const OWNER_CLOCK_ID: &str = "my-clock";

/// IANA zone the owner's clock is pinned to.
pub const OWNER_TIMEZONE: &str = "America/Sao_Paulo";

/// Clock refresh period in milliseconds.
pub const CLOCK_TICK_MS: u32 = 1000;

/// `strftime` pattern for the 12-hour clock (`09:05:07 PM`).
pub const FORMAT_12H: &str = "%I:%M:%S %p";

/// `strftime` pattern for the 24-hour clock (`21:05:07`).
pub const FORMAT_24H: &str = "%H:%M:%S";
