//! Fallback page for paths with no registered route.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{css, PageFrame};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::link::Link;

#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let path = move || ctx.current_path();

    view! {
        <PageFrame title="Page not found">
            <p class=css::muted>
                <Icon icon=ic::NOT_FOUND />
                " Nothing lives at "
                <code>{path}</code>
            </p>
            <p><Link to="/">"Back to home"</Link></p>
        </PageFrame>
    }
}
