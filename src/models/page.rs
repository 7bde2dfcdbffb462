//! Page identifiers used as route components.

/// Top-level pages of the application.
///
/// Each variant is rendered by exactly one component in
/// [`components::pages`](crate::components::pages).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page
    Home,
    /// Picture gallery listing
    Pfps,
    /// Picture upload form
    Upload,
    /// Sign in
    Login,
    /// Account settings
    Settings,
    /// The signed-in user's own page
    MyScape,
}

impl Page {
    /// Short label for navigation links.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Pfps => "Pfps",
            Self::Upload => "Upload",
            Self::Login => "Login",
            Self::Settings => "Settings",
            Self::MyScape => "MyScape",
        }
    }

    /// Document title shown while the page is active.
    pub fn title(self) -> String {
        match self {
            Self::Home => crate::config::APP_NAME.to_string(),
            page => format!("{} · {}", page.label(), crate::config::APP_NAME),
        }
    }
}
