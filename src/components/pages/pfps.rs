use leptos::prelude::*;

use super::PageFrame;

/// Picture gallery listing.
#[component]
pub fn PfpsPage() -> impl IntoView {
    view! {
        <PageFrame title="Pfps">
            <p>"No pictures yet."</p>
        </PageFrame>
    }
}
