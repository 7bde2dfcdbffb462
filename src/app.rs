//! Root application module.
//!
//! Contains the main App component and the AppContext that carries the
//! navigation manager to every component.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::router::{BrowserHistory, NavigationManager};
use crate::models::Page;
use crate::utils::dom;

/// Navigation manager used by the running application.
pub type AppNavigator = NavigationManager<Page, BrowserHistory>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`. The navigation manager inside is the
/// single source of truth for the current URL.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Route table, history backend and current location.
    pub nav: RwSignal<AppNavigator>,
}

impl AppContext {
    /// Wrap an already built navigation manager.
    pub fn new(navigator: AppNavigator) -> Self {
        Self {
            nav: RwSignal::new(navigator),
        }
    }

    /// Page bound to the current URL, `None` when no route matches.
    ///
    /// Tracked: re-runs the caller when the location changes.
    pub fn current_page(&self) -> Option<Page> {
        self.nav.with(|n| n.current_component().copied())
    }

    /// Current path, tracked.
    pub fn current_path(&self) -> String {
        self.nav.with(|n| n.current().path.clone())
    }

    /// Whether `path` is the current path, tracked.
    pub fn is_active(&self, path: &str) -> bool {
        self.nav.with(|n| n.is_active(path))
    }

    /// Anchor `href` for `url`.
    pub fn href(&self, url: &str) -> String {
        self.nav.with_untracked(|n| n.href(url))
    }

    /// Whether `url` matches a registered route.
    pub fn is_registered(&self, url: &str) -> bool {
        self.nav.with_untracked(|n| n.resolve(url).is_some())
    }

    /// Navigate to `url`, adding a history entry.
    pub fn navigate(&self, url: &str) {
        if self.nav.try_update(|n| n.push(url)).unwrap_or(false) {
            dom::scroll_to_top();
        }
    }

    /// Re-read the location after a browser back/forward.
    pub fn sync(&self) {
        self.nav.update(|n| {
            n.sync();
        });
    }

    pub fn back(&self) {
        self.nav.update(|n| n.back());
    }

    pub fn forward(&self) {
        self.nav.update(|n| n.forward());
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Receives the navigation manager built at startup
/// - Provides it to the tree through [`AppContext`]
/// - Wraps the router in an ErrorBoundary for graceful error handling
#[component]
pub fn App(navigator: AppNavigator) -> impl IntoView {
    let ctx = AppContext::new(navigator);
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #d64545; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #6b6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = dom::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            margin-top: 1.5rem;
                            padding: 0.6rem 1.6rem;
                            border: none;
                            border-radius: 4px;
                            background: #3b6fd8;
                            color: white;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
