//! Modal and clock logic for the personal homepage.
//!
//! This crate holds everything that does not need a browser: the geometry of
//! draggable dialogs, the single-open modal registry, and the two-timezone
//! clock formatter. The `homepage` front end measures DOM elements, forwards
//! pointer and key events here, and renders whatever state comes back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Points, sizes, layout snapshots and the [`geometry::Measure`] capability |
//! | [`modal`] | Per-dialog state machine: open, fullscreen, drag |
//! | [`registry`] | Ordered modal collection enforcing one open dialog |
//! | [`clock`] | Viewer/owner clock formatting and display targets |
//! | [`config`] | Page configuration parsed from JSON |
//! | [`consts`] | Shared constants (default ids, timezone, tick interval) |

pub mod clock;
pub mod config;
pub mod consts;
pub mod geometry;
pub mod modal;
pub mod registry;
