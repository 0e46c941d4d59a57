//! Client-side state.
//!
//! The only shared state is the modal registry, held in one `RwSignal` and
//! provided through context. Clocks keep their own local signals.

pub mod modals;
