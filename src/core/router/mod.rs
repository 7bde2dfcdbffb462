//! Client-side routing.
//!
//! - [`RouteTable`] - Validated, ordered `{path, component}` list
//! - [`NavigationManager`] - Current location plus history-driven navigation
//! - [`History`] - Backend seam ([`BrowserHistory`] in the app)
//! - [`Location`] - Path, raw query and raw fragment of a URL

mod history;
mod location;
mod navigation;
mod table;

#[cfg(test)]
pub use history::MemoryHistory;
pub use history::{BrowserHistory, History, HistoryMode};
pub use location::Location;
pub use navigation::NavigationManager;
pub use table::{Route, RouteTable};
