//! Browser console logging.
//!
//! Thin wrappers over `web_sys::console`. Off `wasm32` these are no-ops so
//! host-side unit tests never reach a browser import.

use crate::config::LOG_PREFIX;

/// Log an informational message.
pub fn info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("[{}] {}", LOG_PREFIX, msg).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (LOG_PREFIX, msg);
}

/// Log a warning.
pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("[{}] {}", LOG_PREFIX, msg).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (LOG_PREFIX, msg);
}

/// Log an error.
pub fn error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("[{}] {}", LOG_PREFIX, msg).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (LOG_PREFIX, msg);
}
