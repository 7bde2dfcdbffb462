//! Page components for the application.
//!
//! Each page is a Leptos component bound to one [`Page`] in the route table.
//! Page bodies are placeholders owned by their feature modules.

mod home;
mod login;
mod myscape;
mod not_found;
mod pfps;
mod settings;
mod upload;

use leptos::prelude::*;

use crate::models::Page;

pub use home::HomePage;
pub use login::LoginPage;
pub use myscape::MyScapePage;
pub use not_found::NotFound;
pub use pfps::PfpsPage;
pub use settings::SettingsPage;
pub use upload::UploadPage;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Render the component bound to `page`.
pub fn render(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Pfps => view! { <PfpsPage /> }.into_any(),
        Page::Upload => view! { <UploadPage /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
        Page::MyScape => view! { <MyScapePage /> }.into_any(),
    }
}

/// Shared page frame: heading plus body.
#[component]
fn PageFrame(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::title>{title}</h1>
            <div class=css::body>{children()}</div>
        </section>
    }
}
