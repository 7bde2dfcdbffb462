//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::Page;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuHouse as Home,
        LuImages as Gallery, LuLogIn as Login, LuSearch as NotFound, LuSettings as Settings,
        LuUpload as Upload, LuUser as User,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowInRight as Login, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsGear as Settings, BsHouseFill as Home,
        BsImages as Gallery, BsPerson as User, BsSearch as NotFound, BsUpload as Upload,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(HOME, Home);
themed_icon!(GALLERY, Gallery);
themed_icon!(UPLOAD, Upload);
themed_icon!(LOGIN, Login);
themed_icon!(SETTINGS, Settings);
themed_icon!(USER, User);
themed_icon!(NOT_FOUND, NotFound);

/// Icon shown next to a page's navigation link.
pub fn page_icon(page: Page) -> Icon {
    match page {
        Page::Home => HOME,
        Page::Pfps => GALLERY,
        Page::Upload => UPLOAD,
        Page::Login => LOGIN,
        Page::Settings => SETTINGS,
        Page::MyScape => USER,
    }
}
