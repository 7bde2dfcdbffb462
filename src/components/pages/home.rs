use leptos::prelude::*;

use super::PageFrame;
use crate::components::link::Link;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame title="Welcome">
            <p>"Share profile pictures and browse what others have posted."</p>
            <p>
                <Link to="/pfps">"Browse pictures"</Link>
                " or "
                <Link to="/upload">"upload your own"</Link>
                "."
            </p>
        </PageFrame>
    }
}
