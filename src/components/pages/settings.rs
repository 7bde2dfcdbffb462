use leptos::prelude::*;

use super::PageFrame;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <PageFrame title="Settings">
            <p>"Account and display preferences."</p>
        </PageFrame>
    }
}
