#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;
use std::rc::Rc;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{warn, Level};
use dioxus::prelude::*;

use ui::components::{NavbarServices, NavigationBar};
use ui::core::config::NavbarConfig;
use ui::core::navigation::Navigate;
use ui::core::session::CurrentUser;
use ui::core::store::{use_app_store, AppStore};
use ui::core::viewport::ViewportObserver;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css), embedded so packaged builds need no asset dir.

fn init_logging() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialized: {err}");
    }
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("TMediaN – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

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

// TODO: hydrate from the auth API session once the login flow is ported.
fn signed_in_user() -> Option<CurrentUser> {
    Some(CurrentUser::new("Ada", "Lovelace"))
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let store = use_app_store(signed_in_user);
    use_context_provider(|| store);

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Viewport fed by the window's logical width, updated on every resize.
#[cfg(feature = "desktop")]
fn use_window_viewport(breakpoint_px: f64) -> Rc<dyn ViewportObserver> {
    use dioxus::desktop::tao::event::{Event, WindowEvent};
    use ui::core::viewport::ViewportChannel;

    let window = dioxus::desktop::use_window();
    let channel = use_hook(|| {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        ViewportChannel::new(size.width, breakpoint_px)
    });

    let feed = channel.clone();
    dioxus::desktop::use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            window_id,
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            if *window_id == window.id() {
                feed.set_width(size.to_logical::<f64>(window.scale_factor()).width);
            }
        }
    });

    Rc::new(channel)
}

#[cfg(not(feature = "desktop"))]
fn use_window_viewport(_breakpoint_px: f64) -> Rc<dyn ViewportObserver> {
    use ui::core::layout::ViewportClass;
    use ui::core::viewport::FixedViewport;

    Rc::new(FixedViewport(ViewportClass::Wide))
}

/// Desktop layout route: the shared navbar above the routed page.
#[component]
fn DesktopShell() -> Element {
    let store = use_context::<AppStore>();
    let nav = navigator();
    let config = use_hook(NavbarConfig::bundled);
    let viewport = use_window_viewport(config.breakpoint_px);
    let services = use_hook(move || NavbarServices {
        store: Rc::new(store),
        navigator: Rc::new(RouterNavigate(nav)),
        viewport,
    });

    rsx! {
        NavigationBar { services, config }
        Outlet::<Route> {}
    }
}
