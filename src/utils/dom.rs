//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Every helper degrades to a default value or `false` when the window is
//! unavailable.

use wasm_bindgen::JsValue;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Location
// =============================================================================

/// Current `location.pathname`, `/` if unavailable.
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Current `location.search`, including the leading '?'.
pub fn search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Current `location.hash`, including the leading '#'.
pub fn hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Current URL hash without the '#' prefix.
pub fn hash_path() -> String {
    hash().trim_start_matches('#').to_string()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Add a history entry for `url` without reloading.
///
/// Returns `false` if the browser rejected the update.
pub fn push_state(url: &str) -> bool {
    window()
        .and_then(|w| w.history().ok())
        .is_some_and(|h| h.push_state_with_url(&JsValue::NULL, "", Some(url)).is_ok())
}

/// Replace the current history entry with `url` without reloading.
///
/// Useful for redirects that shouldn't appear in back button history.
pub fn replace_state(url: &str) -> bool {
    window()
        .and_then(|w| w.history().ok())
        .is_some_and(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(url)).is_ok())
}

/// Traverse `delta` entries through session history.
pub fn history_go(delta: i32) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.go_with_delta(delta);
    }
}

/// Scroll the window back to the top, used after page changes.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Set `document.title`.
pub fn set_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
