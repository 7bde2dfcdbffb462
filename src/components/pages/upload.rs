use leptos::prelude::*;

use super::PageFrame;
use crate::components::link::Link;

#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <PageFrame title="Upload">
            <p>"Pick an image to add to the gallery."</p>
            <p><Link to="/login">"Sign in"</Link>" to upload."</p>
        </PageFrame>
    }
}
