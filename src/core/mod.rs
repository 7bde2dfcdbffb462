//! Core routing logic, independent of any rendering.
//!
//! This module provides:
//! - [`router`] - Route table, history backends and the navigation manager
//! - [`error`] - Configuration errors raised while building routes

pub mod error;
pub mod router;

pub use error::RouteError;
