//! Browser glue.
//!
//! These modules isolate `web_sys` access from components and state so the
//! rest of the crate compiles and tests on the host. Most items are
//! `#[cfg(feature = "csr")]`.

pub mod clock;
pub mod dom;
pub mod logging;
