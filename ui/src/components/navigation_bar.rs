use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::user_menu::{UserMenu, UserMenuEntry};
use crate::core::config::NavbarConfig;
use crate::core::layout::{render_state, ClusterPlacement, MenuState};
use crate::core::navigation::{Navigate, ROOT_PATH};
use crate::core::store::NavStore;
use crate::core::theme::ThemeMode;
use crate::core::viewport::{use_viewport_class, ViewportObserver};
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Everything the navbar talks to, injected by the platform shell.
///
/// ```ignore
/// let services = use_hook(|| NavbarServices {
///     store: Rc::new(store),
///     navigator: Rc::new(RouterNavigate(navigator())),
///     viewport: Rc::new(FixedViewport(ViewportClass::Wide)),
/// });
/// rsx! { NavigationBar { services } }
/// ```
///
/// Equality is identity of the three handles, so build the bundle once per
/// shell (e.g. in `use_hook`) to keep the navbar from re-rendering needlessly.
#[derive(Clone)]
pub struct NavbarServices {
    pub store: Rc<dyn NavStore>,
    pub navigator: Rc<dyn Navigate>,
    pub viewport: Rc<dyn ViewportObserver>,
}

impl PartialEq for NavbarServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
            && Rc::ptr_eq(&self.navigator, &other.navigator)
            && Rc::ptr_eq(&self.viewport, &other.viewport)
    }
}

impl NavbarServices {
    pub fn go_home(&self) {
        debug!("navbar: brand clicked");
        self.navigator.navigate_to(ROOT_PATH);
    }

    pub fn toggle_theme(&self) {
        self.store.dispatch_theme_toggle();
    }

    pub fn select_user_entry(&self, entry: UserMenuEntry) {
        match entry {
            UserMenuEntry::Logout => self.store.dispatch_logout(),
            UserMenuEntry::DisplayName => {}
        }
    }
}

/// `initial_menu` seeds the mobile menu on mount (closed by default); after
/// that the menu state belongs to this instance.
#[component]
pub fn NavigationBar(
    services: NavbarServices,
    #[props(default)] config: NavbarConfig,
    #[props(default)] initial_menu: MenuState,
) -> Element {
    i18n::init();

    let viewport = use_viewport_class(services.viewport.clone());
    let mut menu = use_signal(|| initial_menu);

    let theme_mode = services.store.theme_mode();
    let full_name = services.store.auth_state().display_name();
    let layout = render_state(viewport(), menu().is_open());
    let palette_vars = theme_mode.palette().css_variables();
    let viewport_attr = if layout.viewport.is_wide() { "wide" } else { "narrow" };

    debug!(?layout, ?theme_mode, "navbar: render");

    let home = services.clone();
    let toolbar = (layout.cluster == Some(ClusterPlacement::Toolbar))
        .then(|| icon_cluster(&services, ClusterPlacement::Toolbar, theme_mode, &full_name));
    let overlay_cluster = (layout.cluster == Some(ClusterPlacement::Overlay))
        .then(|| icon_cluster(&services, ClusterPlacement::Overlay, theme_mode, &full_name));

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            style: "{palette_vars}",
            "data-theme": theme_mode.as_str(),
            "data-viewport": viewport_attr,

            div { class: "navbar__start",
                span {
                    class: "navbar__brand",
                    role: "link",
                    title: t!("nav-brand-title"),
                    onclick: move |_| home.go_home(),
                    "{config.brand}"
                }
                if layout.search_box {
                    div { class: "navbar__search",
                        input {
                            class: "navbar__search-input",
                            r#type: "search",
                            placeholder: t!("nav-search-placeholder"),
                        }
                        button {
                            class: "icon-button",
                            r#type: "button",
                            aria_label: t!("nav-search-button"),
                            Icon { glyph: Glyph::Search }
                        }
                    }
                }
            }

            if let Some(toolbar) = toolbar {
                {toolbar}
            }

            if layout.hamburger {
                button {
                    class: "icon-button navbar__hamburger",
                    r#type: "button",
                    aria_label: t!("nav-open-menu"),
                    aria_expanded: "{layout.overlay}",
                    onclick: move |_| menu.write().toggle(viewport()),
                    Icon { glyph: Glyph::Menu }
                }
            }

            if layout.overlay {
                aside { class: "navbar__overlay",
                    div { class: "navbar__overlay-header",
                        button {
                            class: "icon-button",
                            r#type: "button",
                            aria_label: t!("nav-close-menu"),
                            onclick: move |_| menu.write().close(),
                            Icon { glyph: Glyph::Close }
                        }
                    }
                    if let Some(cluster) = overlay_cluster {
                        {cluster}
                    }
                }
            }
        }
    }
}

/// Theme toggle, the three static indicators and the user menu.
fn icon_cluster(
    services: &NavbarServices,
    placement: ClusterPlacement,
    theme_mode: ThemeMode,
    full_name: &str,
) -> Element {
    let class = match placement {
        ClusterPlacement::Toolbar => "navbar__cluster navbar__cluster--toolbar",
        ClusterPlacement::Overlay => "navbar__cluster navbar__cluster--overlay",
    };
    let toggle = services.clone();
    let account = services.clone();

    rsx! {
        div { class: "{class}",
            button {
                class: "icon-button navbar__theme-toggle",
                r#type: "button",
                aria_label: t!("nav-theme-toggle"),
                onclick: move |_| toggle.toggle_theme(),
                Icon { glyph: Glyph::from(theme_mode.glyph()) }
            }
            span { class: "navbar__indicator", title: t!("nav-messages"),
                Icon { glyph: Glyph::Message }
            }
            span { class: "navbar__indicator", title: t!("nav-notifications"),
                Icon { glyph: Glyph::Notifications }
            }
            span { class: "navbar__indicator", title: t!("nav-help"),
                Icon { glyph: Glyph::Help }
            }
            UserMenu {
                full_name: full_name.to_string(),
                on_select: move |entry: UserMenuEntry| account.select_user_entry(entry),
            }
        }
    }
}
