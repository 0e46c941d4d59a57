//! Route the `log` facade to the browser console.

/// Install the console logger. Debug builds log at `Debug`, release at `Info`.
#[cfg(feature = "csr")]
pub fn init() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        // A logger was already installed (hot reload); keep it.
        log::debug!("console logger already initialised");
    }
}
