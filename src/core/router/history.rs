//! History backends for the navigation manager.
//!
//! - [`BrowserHistory`] - `window.history` in HTML5 (`/path`) or hash (`#/path`) mode
//! - [`MemoryHistory`] - In-memory entry stack for host-side tests

#[cfg(test)]
use std::cell::{Cell, RefCell};

use super::location::{normalize_base, strip_base, Location};
use crate::utils::{dom, log};

/// URL handling strategy for [`BrowserHistory`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(dead_code)]
pub enum HistoryMode {
    /// HTML5 history: real paths, needs a server that serves the app for every path
    #[default]
    Web,
    /// Fragment routing: `#/path`, works from any static host
    Hash,
}

/// Source and sink of the current location.
///
/// Methods take `&self`; backends that keep state use interior mutability.
pub trait History {
    /// Read the current location.
    fn location(&self) -> Location;
    /// Add a new entry and make it current.
    ///
    /// Returns `false` if the backend refused the entry; the current entry is
    /// then unchanged.
    fn push(&self, location: &Location) -> bool;
    /// Overwrite the current entry. Returns `false` if refused.
    fn replace(&self, location: &Location) -> bool;
    /// Move `delta` entries through history (negative is back).
    fn go(&self, delta: i32);
    /// Render the `href` attribute for a location.
    fn href(&self, location: &Location) -> String;
}

// ============================================================================
// BrowserHistory
// ============================================================================

/// `window.history` backed history.
///
/// Holds no browser handles, only configuration, so it is `Send + Sync` and
/// can live inside a Leptos signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserHistory {
    mode: HistoryMode,
    base: String,
}

impl BrowserHistory {
    /// Create a browser history for the given mode and deployment base.
    pub fn new(mode: HistoryMode, base: &str) -> Self {
        Self {
            mode,
            base: normalize_base(base),
        }
    }

    /// HTML5 history served from `base`.
    #[cfg(test)]
    pub fn web(base: &str) -> Self {
        Self::new(HistoryMode::Web, base)
    }

    fn update(&self, location: &Location, replace: bool) -> bool {
        let url = self.href(location);
        let ok = if replace {
            dom::replace_state(&url)
        } else {
            dom::push_state(&url)
        };
        if !ok {
            log::warn(&format!("history update rejected for {}", url));
        }
        ok
    }
}

impl History for BrowserHistory {
    fn location(&self) -> Location {
        match self.mode {
            HistoryMode::Web => {
                let pathname = dom::pathname();
                let path = strip_base(&pathname, &self.base);
                Location::parse(&format!("{}{}{}", path, dom::search(), dom::hash()))
            }
            HistoryMode::Hash => Location::parse(&dom::hash_path()),
        }
    }

    fn push(&self, location: &Location) -> bool {
        self.update(location, false)
    }

    fn replace(&self, location: &Location) -> bool {
        self.update(location, true)
    }

    fn go(&self, delta: i32) {
        dom::history_go(delta);
    }

    fn href(&self, location: &Location) -> String {
        match self.mode {
            HistoryMode::Web if self.base.is_empty() => location.to_url(),
            HistoryMode::Web if location.path == "/" => {
                // `/app` rather than `/app/` for the root
                let mut url = location.to_url();
                url.replace_range(..1, &self.base);
                url
            }
            HistoryMode::Web => format!("{}{}", self.base, location.to_url()),
            HistoryMode::Hash => format!("{}/#{}", self.base, location.to_url()),
        }
    }
}

// ============================================================================
// MemoryHistory
// ============================================================================

/// In-memory history stack.
///
/// Behaves like a browser tab: pushing drops forward entries, and `go`
/// stops at either end of the stack.
#[cfg(test)]
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Vec<Location>>,
    index: Cell<usize>,
}

#[cfg(test)]
impl MemoryHistory {
    /// Create a history whose only entry is `initial`.
    pub fn new(initial: &str) -> Self {
        Self {
            entries: RefCell::new(vec![Location::parse(initial)]),
            index: Cell::new(0),
        }
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Position of the current entry.
    pub fn index(&self) -> usize {
        self.index.get()
    }
}

#[cfg(test)]
impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
impl History for MemoryHistory {
    fn location(&self) -> Location {
        self.entries.borrow()[self.index.get()].clone()
    }

    fn push(&self, location: &Location) -> bool {
        let mut entries = self.entries.borrow_mut();
        let next = self.index.get() + 1;
        entries.truncate(next);
        entries.push(location.clone());
        self.index.set(next);
        true
    }

    fn replace(&self, location: &Location) -> bool {
        self.entries.borrow_mut()[self.index.get()] = location.clone();
        true
    }

    fn go(&self, delta: i32) {
        let last = self.len() as i64 - 1;
        let target = (self.index.get() as i64 + i64::from(delta)).clamp(0, last);
        self.index.set(target as usize);
    }

    fn href(&self, location: &Location) -> String {
        location.to_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_push_and_go() {
        let history = MemoryHistory::new("/");
        history.push(&Location::parse("/pfps"));
        history.push(&Location::parse("/upload"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.location().path, "/upload");

        history.go(-1);
        assert_eq!(history.location().path, "/pfps");
        history.go(-5);
        assert_eq!(history.location().path, "/");
        history.go(10);
        assert_eq!(history.location().path, "/upload");
    }

    #[test]
    fn test_memory_push_drops_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push(&Location::parse("/pfps"));
        history.push(&Location::parse("/upload"));
        history.go(-2);
        history.push(&Location::parse("/login"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.index(), 1);
        history.go(1);
        assert_eq!(history.location().path, "/login");
    }

    #[test]
    fn test_memory_replace() {
        let history = MemoryHistory::new("/login");
        history.replace(&Location::parse("/settings"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.location().path, "/settings");
    }

    #[test]
    fn test_browser_href_web() {
        let root = BrowserHistory::web("/");
        assert_eq!(root.href(&Location::parse("/login")), "/login");
        assert_eq!(root.href(&Location::parse("/")), "/");

        let nested = BrowserHistory::web("/app/");
        assert_eq!(nested.href(&Location::parse("/login?next=x")), "/app/login?next=x");
        assert_eq!(nested.href(&Location::parse("/")), "/app");
        assert_eq!(nested.href(&Location::parse("/?a=1")), "/app?a=1");
    }

    #[test]
    fn test_browser_href_hash() {
        let root = BrowserHistory::new(HistoryMode::Hash, "");
        assert_eq!(root.href(&Location::parse("/pfps")), "/#/pfps");

        let nested = BrowserHistory::new(HistoryMode::Hash, "app");
        assert_eq!(nested.href(&Location::parse("/pfps")), "/app/#/pfps");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_web_push_updates_location() {
        let history = BrowserHistory::web("/");
        assert!(history.push(&Location::parse("/settings?tab=profile")));

        let location = history.location();
        assert_eq!(location.path, "/settings");
        assert_eq!(location.query.as_deref(), Some("tab=profile"));

        assert!(history.replace(&Location::root()));
        assert_eq!(history.location().path, "/");
    }

    #[wasm_bindgen_test]
    fn test_hash_push_updates_location() {
        let history = BrowserHistory::new(HistoryMode::Hash, "/");
        assert!(history.push(&Location::parse("/myscape")));
        assert_eq!(history.location().path, "/myscape");
        history.replace(&Location::root());
    }
}
