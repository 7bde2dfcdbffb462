//! Navigation bar component.
//!
//! Shows back/forward buttons, the app name and one link per registered
//! route, in route table order.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::link::Link;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

/// Top navigation bar.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 640px) | Icon and label per link |
/// | Mobile (<= 640px) | Icons only |
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // The table never changes after startup, so read it once
    let links = ctx.nav.with_untracked(|n| {
        n.table()
            .iter()
            .map(|r| (r.path.clone(), r.component))
            .collect::<Vec<_>>()
    });

    view! {
        <header class=css::bar>
            <div class=css::history>
                <button class=css::iconButton title="Back" on:click=move |_| ctx.back()>
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                <button class=css::iconButton title="Forward" on:click=move |_| ctx.forward()>
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>

            <span class=css::brand>{APP_NAME}</span>

            <nav class=css::links>
                {links
                    .into_iter()
                    .map(|(path, page)| view! {
                        <Link to=path class=css::link title=page.label()>
                            <Icon icon=ic::page_icon(page) />
                            <span class=css::label>{page.label()}</span>
                        </Link>
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
