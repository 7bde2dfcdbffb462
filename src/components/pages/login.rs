use leptos::prelude::*;

use super::PageFrame;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <PageFrame title="Login">
            <p>"Sign in to upload pictures and edit your page."</p>
        </PageFrame>
    }
}
