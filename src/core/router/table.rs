//! Static route table.
//!
//! Routes are plain `{path, component}` records kept in declaration order.
//! The table is validated once when built and never changes afterwards.

use std::collections::HashSet;

use super::location::path_part;
use crate::core::error::RouteError;

// ============================================================================
// Route
// ============================================================================

/// Binding from a URL path to the component that renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<C> {
    /// Absolute path, matched by exact string equality
    pub path: String,
    /// Component reference rendered for this path
    pub component: C,
}

impl<C> Route<C> {
    pub fn new(path: impl Into<String>, component: C) -> Self {
        Self {
            path: path.into(),
            component,
        }
    }
}

// ============================================================================
// RouteTable
// ============================================================================

/// Ordered, immutable list of validated routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable<C> {
    routes: Vec<Route<C>>,
}

impl<C> RouteTable<C> {
    /// Build a table, rejecting empty, relative and duplicate paths, and paths
    /// carrying a query or fragment.
    pub fn new(routes: Vec<Route<C>>) -> Result<Self, RouteError> {
        let mut seen = HashSet::with_capacity(routes.len());
        for route in &routes {
            if route.path.is_empty() {
                return Err(RouteError::EmptyPath);
            }
            if !route.path.starts_with('/') {
                return Err(RouteError::NotAbsolute(route.path.clone()));
            }
            if path_part(&route.path) != route.path {
                return Err(RouteError::QueryOrFragment(route.path.clone()));
            }
            if !seen.insert(route.path.as_str()) {
                return Err(RouteError::DuplicatePath(route.path.clone()));
            }
        }
        Ok(Self { routes })
    }

    /// Find the route registered for `path`.
    ///
    /// Query and fragment are ignored; the remaining path must equal a
    /// registered path exactly, with no normalization, so `login` or an empty
    /// path match nothing. First match wins.
    pub fn resolve(&self, path: &str) -> Option<&Route<C>> {
        let path = path_part(path);
        self.routes.iter().find(|r| r.path == path)
    }

    /// Component bound to `path`, if any.
    pub fn component(&self, path: &str) -> Option<&C> {
        self.resolve(path).map(|r| &r.component)
    }

    /// Routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<C>> {
        self.routes.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.path.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
