//! Reusable UI components.

pub mod clock_panel;
pub mod modal_window;
pub mod sections;
