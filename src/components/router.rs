//! Application router component.
//!
//! Renders the page bound to the current URL using HTML5 history.
//! Uses a native `popstate` listener instead of leptos_router.
//!
//! # Architecture
//!
//! - **The navigation manager is the source of truth**: the rendered page is
//!   derived from its current location
//! - **Navigation bar never re-renders on navigation**: only `<main>` swaps
//! - **Unmatched paths render [`NotFound`]**: no redirect is performed
//! - **popstate events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::nav::NavBar;
use crate::components::pages::{self, NotFound};
use crate::config::APP_NAME;
use crate::utils::{dom, log};

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// Route table (see [`crate::routes::ROUTES`]):
/// - `/` → Home
/// - `/pfps` → Picture gallery
/// - `/upload` → Upload
/// - `/login` → Login
/// - `/settings` → Settings
/// - `/myscape` → MyScape
/// - anything else → NotFound
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up popstate listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.sync();
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let page = Memo::new(move |_| ctx.current_page());

    // Keep the document title in step with the page
    Effect::new(move || {
        let path = ctx.current_path();
        match page.get() {
            Some(p) => dom::set_title(&p.title()),
            None => {
                log::warn(&format!("no route for {}", path));
                dom::set_title(&format!("Not found · {}", APP_NAME));
            }
        }
    });

    view! {
        <NavBar />
        <main class=css::content>
            {move || match page.get() {
                Some(p) => pages::render(p),
                None => view! { <NotFound /> }.into_any(),
            }}
        </main>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;
    use crate::app::App;
    use crate::routes;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Point the address bar at `url` and mount a fresh app into its own container.
    fn mount_app_at(url: &str) -> HtmlElement {
        assert!(dom::replace_state(url));
        let document = dom::window().and_then(|w| w.document()).unwrap();
        let container = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<HtmlElement>();
        document.body().unwrap().append_child(&container).unwrap();

        let navigator = routes::router().unwrap();
        mount_to(container.clone(), move || view! { <App navigator=navigator /> }).forget();
        container
    }

    fn heading(container: &HtmlElement) -> String {
        container
            .query_selector("main h1")
            .ok()
            .flatten()
            .and_then(|h| h.text_content())
            .unwrap_or_default()
    }

    fn anchor(container: &HtmlElement, selector: &str) -> HtmlElement {
        container
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .unchecked_into::<HtmlElement>()
    }

    async fn next_tick() {
        TimeoutFuture::new(0).await;
    }

    #[wasm_bindgen_test]
    async fn test_unmatched_path_renders_not_found_without_redirect() {
        let container = mount_app_at("/does-not-exist");
        next_tick().await;

        assert_eq!(heading(&container), "Page not found");
        assert_eq!(dom::pathname(), "/does-not-exist");

        anchor(&container, "main a[href=\"/\"]").click();
        next_tick().await;

        assert_eq!(dom::pathname(), "/");
        assert_eq!(heading(&container), "Welcome");
    }

    #[wasm_bindgen_test]
    async fn test_link_click_navigates_in_place() {
        let container = mount_app_at("/");
        next_tick().await;
        assert_eq!(heading(&container), "Welcome");

        // Links without a class prop render no class attribute
        assert!(!anchor(&container, "main a[href=\"/pfps\"]").has_attribute("class"));

        let login = anchor(&container, "nav a[href=\"/login\"]");
        login.click();
        next_tick().await;

        assert_eq!(dom::pathname(), "/login");
        assert_eq!(heading(&container), "Login");
        assert_eq!(login.get_attribute("aria-current").as_deref(), Some("page"));

        assert!(dom::replace_state("/"));
    }
}
