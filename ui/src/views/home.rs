use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::store::{AppStore, NavStore};

/// Root route. Greets the signed-in user when the shell provides an [`AppStore`].
#[component]
pub fn Home() -> Element {
    let store: Option<AppStore> = try_use_context::<AppStore>();
    let auth = store.map(|s| s.auth_state()).unwrap_or_default();

    debug!(signed_in = auth.current_user.is_some(), "home: render");

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            if auth.current_user.is_some() {
                p { class: "page-home__greeting",
                    {crate::t!("home-signed-in", name = auth.display_name())}
                }
            } else {
                p { class: "page-home__greeting", {crate::t!("home-signed-out")} }
            }
        }
    }
}
