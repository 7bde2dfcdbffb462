//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::core::router::HistoryMode;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the navigation bar and document title.
pub const APP_NAME: &str = "scape";

/// Prefix for console log lines.
pub const LOG_PREFIX: &str = "scape";

/// Id of the element the app mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Router Configuration
// =============================================================================

/// URL handling strategy.
///
/// `Web` needs the static host to serve `index.html` for every route path.
/// Switch to `Hash` for hosts that cannot rewrite.
pub const HISTORY_MODE: HistoryMode = HistoryMode::Web;

/// Deployment base path (`/` when served from the domain root).
pub const ROUTER_BASE: &str = "/";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
