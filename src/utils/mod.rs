//! Utility modules for browser access.
//!
//! Provides:
//! - [`dom`] - Window, location and history helpers
//! - [`log`] - Console logging, silent off the browser

pub mod dom;
pub mod log;
