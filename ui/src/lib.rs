//! Shared UI crate for TMediaN. The navigation chrome and everything it
//! depends on live here; platform shells only wire services and routes.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Responsive top bar (components/navigation_bar.rs)
    pub mod navigation_bar;
    pub use navigation_bar::NavbarServices;
    pub use navigation_bar::NavigationBar;

    pub mod icons;
    pub mod user_menu;
}

use dioxus::prelude::*;

/// Shared theme stylesheet (the desktop shell embeds the same file).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
