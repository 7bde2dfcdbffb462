//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Page`] - Page identifiers bound to routes

mod page;

pub use page::Page;
