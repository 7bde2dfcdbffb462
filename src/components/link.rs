//! In-app navigation link.

use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::utils::log;

/// Anchor that navigates through the history API instead of reloading.
///
/// Modified clicks (ctrl, meta, shift, alt, middle button) fall through to the
/// browser so "open in new tab" keeps working. The active link gets
/// `aria-current="page"`.
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional)] class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    if !ctx.is_registered(&to) {
        log::warn(&format!("link points at unregistered path {}", to));
    }

    let href = ctx.href(&to);
    let target = to.clone();
    let on_click = move |e: ev::MouseEvent| {
        if e.default_prevented()
            || e.button() != 0
            || e.ctrl_key()
            || e.meta_key()
            || e.shift_key()
            || e.alt_key()
        {
            return;
        }
        e.prevent_default();
        ctx.navigate(&target);
    };
    let aria_current = move || ctx.is_active(&to).then_some("page");

    view! {
        <a href=href class=class title=title aria-current=aria_current on:click=on_click>
            {children()}
        </a>
    }
}
