//! Application route table.
//!
//! Declares every page path and builds the navigation manager the root
//! component is given. Add new pages here.

use crate::config::{HISTORY_MODE, ROUTER_BASE};
use crate::core::RouteError;
use crate::core::router::{BrowserHistory, History, NavigationManager, Route, RouteTable};
use crate::models::Page;

/// Path-to-page bindings, in declaration order.
pub const ROUTES: &[(&str, Page)] = &[
    ("/", Page::Home),
    ("/pfps", Page::Pfps),
    ("/upload", Page::Upload),
    ("/login", Page::Login),
    ("/settings", Page::Settings),
    ("/myscape", Page::MyScape),
];

/// Build the validated route table.
pub fn route_table() -> Result<RouteTable<Page>, RouteError> {
    RouteTable::new(
        ROUTES
            .iter()
            .map(|&(path, page)| Route::new(path, page))
            .collect(),
    )
}

/// Build a navigation manager over the route table with any history backend.
pub fn router_with<H: History>(history: H) -> Result<NavigationManager<Page, H>, RouteError> {
    Ok(NavigationManager::new(route_table()?, history))
}

/// Build the application's navigation manager on browser history.
pub fn router() -> Result<NavigationManager<Page, BrowserHistory>, RouteError> {
    router_with(BrowserHistory::new(HISTORY_MODE, ROUTER_BASE))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::core::router::MemoryHistory;

    #[test]
    fn test_every_path_resolves_to_its_page() {
        let table = route_table().unwrap();
        for &(path, page) in ROUTES {
            assert_eq!(table.component(path), Some(&page), "path {}", path);
        }
    }

    #[test]
    fn test_six_distinct_non_empty_paths() {
        let table = route_table().unwrap();
        assert_eq!(table.len(), 6);

        let paths: HashSet<_> = table.paths().collect();
        assert_eq!(paths.len(), 6);
        assert!(paths.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_login_and_root() {
        let table = route_table().unwrap();
        assert_eq!(table.component("/login"), Some(&Page::Login));
        assert_eq!(table.component("/"), Some(&Page::Home));
        assert_eq!(table.component("/pfps"), Some(&Page::Pfps));
        assert_eq!(table.component("/myscape"), Some(&Page::MyScape));
    }

    #[test]
    fn test_unregistered_path() {
        let table = route_table().unwrap();
        assert_eq!(table.resolve("/does-not-exist"), None);
    }

    #[test]
    fn test_building_twice_is_identical() {
        let first = route_table().unwrap();
        let second = route_table().unwrap();
        assert_eq!(first, second);
        for route in first.iter() {
            assert_eq!(second.component(&route.path), Some(&route.component));
        }
    }

    #[test]
    fn test_router_navigates_between_pages() {
        let mut nav = router_with(MemoryHistory::new("/")).unwrap();
        assert_eq!(nav.current_component(), Some(&Page::Home));

        nav.push("/upload");
        assert_eq!(nav.current_component(), Some(&Page::Upload));

        nav.push("/settings");
        nav.back();
        assert_eq!(nav.current_component(), Some(&Page::Upload));
    }

    #[test]
    fn test_router_starts_on_deep_link() {
        let nav = router_with(MemoryHistory::new("/myscape?tab=likes")).unwrap();
        assert_eq!(nav.current_component(), Some(&Page::MyScape));
    }
}
