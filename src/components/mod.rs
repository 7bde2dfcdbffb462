//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`link`] - History-API navigation links
//! - [`nav`] - Navigation bar
//! - [`pages`] - One component per route, plus the not-found fallback
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod link;
pub mod nav;
pub mod pages;
pub mod router;

pub use router::AppRouter;
