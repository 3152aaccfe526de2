use std::rc::Rc;

use dioxus::logger::tracing::{warn, Level};
use dioxus::prelude::*;

use ui::components::{NavbarServices, NavigationBar};
use ui::core::config::NavbarConfig;
use ui::core::layout::ViewportClass;
use ui::core::navigation::Navigate;
use ui::core::session::CurrentUser;
use ui::core::store::{use_app_store, AppStore};
use ui::core::viewport::{FixedViewport, ViewportObserver};
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

/// Router-backed navigation for the shared navbar.
struct RouterNavigate(Navigator);

impl Navigate for RouterNavigate {
    fn navigate_to(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                self.0.push(route);
            }
            Err(err) => warn!("navigation: no route for {path} ({err})"),
        }
    }
}

fn main() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

// TODO: hydrate from the auth API session once the login flow is ported.
fn signed_in_user() -> Option<CurrentUser> {
    Some(CurrentUser::new("Ada", "Lovelace"))
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let store = use_app_store(signed_in_user);
    use_context_provider(|| store);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Browser viewport: a live `matchMedia` query when available.
fn browser_viewport(breakpoint_px: f64) -> Rc<dyn ViewportObserver> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(observer) = ui::core::viewport::MediaQueryViewport::new(breakpoint_px) {
            return Rc::new(observer);
        }
    }
    warn!(breakpoint_px, "viewport: matchMedia unavailable; assuming a wide layout");
    Rc::new(FixedViewport(ViewportClass::Wide))
}

/// Web layout route: the shared navbar above the routed page.
#[component]
fn WebShell() -> Element {
    let store = use_context::<AppStore>();
    let nav = navigator();
    let config = use_hook(NavbarConfig::bundled);
    let breakpoint_px = config.breakpoint_px;
    let services = use_hook(move || NavbarServices {
        store: Rc::new(store),
        navigator: Rc::new(RouterNavigate(nav)),
        viewport: browser_viewport(breakpoint_px),
    });

    rsx! {
        NavigationBar { services, config }
        Outlet::<Route> {}
    }
}
