use leptos::prelude::*;

use super::PageFrame;
use crate::components::link::Link;

/// The signed-in user's own page.
#[component]
pub fn MyScapePage() -> impl IntoView {
    view! {
        <PageFrame title="MyScape">
            <p>"Your pictures and profile."</p>
            <p><Link to="/settings">"Edit settings"</Link></p>
        </PageFrame>
    }
}
