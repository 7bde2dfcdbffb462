//! Navigation manager.
//!
//! Owns the route table, the history backend and the current location.
//! The current location only changes through the methods here, either
//! because the app navigated or because [`NavigationManager::sync`] picked up
//! a browser back/forward.

use super::history::History;
use super::location::Location;
use super::table::{Route, RouteTable};

/// Tracks the current URL and selects the component bound to it.
#[derive(Clone, Debug)]
pub struct NavigationManager<C, H> {
    table: RouteTable<C>,
    history: H,
    current: Location,
}

impl<C, H: History> NavigationManager<C, H> {
    /// Create a manager seeded with the history backend's current location.
    pub fn new(table: RouteTable<C>, history: H) -> Self {
        let current = history.location();
        Self {
            table,
            history,
            current,
        }
    }

    #[inline]
    pub fn table(&self) -> &RouteTable<C> {
        &self.table
    }

    /// The active location.
    #[inline]
    pub fn current(&self) -> &Location {
        &self.current
    }

    /// Route matching the active location, `None` for unregistered paths.
    pub fn current_route(&self) -> Option<&Route<C>> {
        self.table.resolve(&self.current.path)
    }

    /// Component bound to the active location.
    pub fn current_component(&self) -> Option<&C> {
        self.current_route().map(|r| &r.component)
    }

    /// Look up a route without navigating.
    pub fn resolve(&self, path: &str) -> Option<&Route<C>> {
        self.table.resolve(path)
    }

    /// Navigate to `url`, adding a history entry.
    ///
    /// Returns `true` if the current location changed. `url` equal to the
    /// current location leaves history untouched. If the backend refuses the
    /// entry, the location is re-read from it instead.
    pub fn push(&mut self, url: &str) -> bool {
        let target = Location::parse(url);
        if target == self.current {
            return false;
        }
        if !self.history.push(&target) {
            return self.sync();
        }
        self.current = target;
        true
    }

    /// Navigate to `url`, replacing the current history entry.
    ///
    /// Returns `true` if the current location changed.
    pub fn replace(&mut self, url: &str) -> bool {
        let target = Location::parse(url);
        if !self.history.replace(&target) {
            return self.sync();
        }
        let changed = target != self.current;
        self.current = target;
        changed
    }

    /// Move through history and re-read the location.
    ///
    /// Browser traversal is asynchronous: the location read here may still be
    /// the old one, and the `popstate` handler calls [`Self::sync`] again.
    pub fn go(&mut self, delta: i32) {
        self.history.go(delta);
        self.sync();
    }

    pub fn back(&mut self) {
        self.go(-1);
    }

    pub fn forward(&mut self) {
        self.go(1);
    }

    /// Re-read the current location from the history backend.
    ///
    /// Returns `true` if the location changed.
    pub fn sync(&mut self) -> bool {
        let location = self.history.location();
        if location == self.current {
            return false;
        }
        self.current = location;
        true
    }

    /// URL for an anchor pointing at `url` under this history mode.
    pub fn href(&self, url: &str) -> String {
        self.history.href(&Location::parse(url))
    }

    /// Whether `path` is the active path (query and fragment ignored).
    pub fn is_active(&self, path: &str) -> bool {
        Location::parse(path).path == self.current.path
    }
}
